//! Rendering and hit-testing of composite controls

use crate::composite::{CompositeSignals, PartRef, Shell, Slot};
use crate::position::EdgePadding;
use ratatui::{
    layout::{Margin, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Border style from the composite's signals
///
/// Error outranks the focus ring; the ring only shows for the control.
pub fn border_style(signals: CompositeSignals) -> Style {
    if signals.disabled {
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::DIM)
    } else if signals.error_present {
        let style = Style::default().fg(Color::Red);
        if signals.ring {
            style.add_modifier(Modifier::BOLD)
        } else {
            style
        }
    } else if signals.ring {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

/// Screen area of every part inside the composite's border, in order
///
/// Slots take their content width plus edge padding; the control gets
/// whatever is left.
pub fn part_areas(shell: &Shell, area: Rect) -> Vec<(PartRef, Rect)> {
    let inner = area.inner(Margin::new(1, 1));
    let slot_width = shell
        .slots()
        .iter()
        .map(Slot::width)
        .fold(0u16, u16::saturating_add);
    let control_width = inner.width.saturating_sub(slot_width);

    let mut x = inner.x;
    let mut areas = Vec::with_capacity(shell.parts().len());
    for part in shell.parts() {
        let width = match part {
            PartRef::Control => control_width,
            PartRef::Slot(index) => shell.slot(*index).map(Slot::width).unwrap_or(0),
        };
        let width = width.min(inner.right().saturating_sub(x));
        areas.push((*part, Rect::new(x, inner.y, width, inner.height)));
        x = x.saturating_add(width);
    }
    areas
}

/// Part under `position`; the border counts as the control
pub fn part_at(shell: &Shell, area: Rect, position: Position) -> Option<PartRef> {
    if !area.contains(position) {
        return None;
    }
    let part = part_areas(shell, area)
        .into_iter()
        .find(|(_, rect)| rect.contains(position))
        .map(|(part, _)| part);
    Some(part.unwrap_or(PartRef::Control))
}

fn padded(area: Rect, padding: EdgePadding) -> Rect {
    Rect {
        x: area.x.saturating_add(padding.left),
        width: area.width.saturating_sub(padding.horizontal()),
        ..area
    }
}

/// Draw the border, the slots and the given control line
pub fn render_composite(
    frame: &mut Frame,
    area: Rect,
    shell: &Shell,
    signals: CompositeSignals,
    control: Line<'_>,
    focused: Option<PartRef>,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style(signals));
    frame.render_widget(block, area);

    let base = if signals.disabled {
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::DIM)
    } else {
        Style::default()
    };

    for (part, rect) in part_areas(shell, area) {
        match part {
            PartRef::Control => {
                let rect = padded(rect, shell.control_position().padding());
                frame.render_widget(Paragraph::new(control.clone()).style(base), rect);
            }
            PartRef::Slot(index) => {
                let Some(slot) = shell.slot(index) else {
                    continue;
                };
                let style = if focused == Some(part) {
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD | Modifier::REVERSED)
                } else if slot.is_interactive() {
                    base.fg(Color::Yellow)
                } else {
                    base.fg(Color::Gray)
                };
                let rect = padded(rect, slot.padding());
                frame.render_widget(Paragraph::new(Span::styled(slot.content(), style)), rect);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::composite::{SlotProps, TextInput};
    use crate::field::{Field, FieldProps};

    fn phone_input(field: &Field) -> TextInput {
        TextInput::builder(field.scope())
            .slot(SlotProps::text("+1"))
            .control(Default::default())
            .slot(SlotProps::button("x"))
            .build()
            .unwrap()
    }

    mod styling {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_error_outranks_ring() {
            let signals = CompositeSignals {
                error_present: true,
                ring: true,
                ..Default::default()
            };
            assert_eq!(border_style(signals).fg, Some(Color::Red));
        }

        #[test]
        fn test_ring_is_cyan() {
            let signals = CompositeSignals {
                ring: true,
                ..Default::default()
            };
            assert_eq!(border_style(signals).fg, Some(Color::Cyan));
            assert_eq!(border_style(CompositeSignals::default()).fg, Some(Color::DarkGray));
        }
    }

    mod hit_testing {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_parts_laid_out_in_order() {
            let field = Field::declare(FieldProps::new());
            let input = phone_input(&field);
            let areas = part_areas(input.shell(), Rect::new(0, 0, 30, 3));

            // "+1" first: left padding only; "x" last: right padding only
            assert_eq!(
                areas,
                vec![
                    (PartRef::Slot(0), Rect::new(1, 1, 3, 1)),
                    (PartRef::Control, Rect::new(4, 1, 23, 1)),
                    (PartRef::Slot(1), Rect::new(27, 1, 2, 1)),
                ]
            );
        }

        #[test]
        fn test_part_at() {
            let field = Field::declare(FieldProps::new());
            let input = phone_input(&field);
            let area = Rect::new(0, 0, 30, 3);
            let shell = input.shell();

            assert_eq!(part_at(shell, area, Position::new(2, 1)), Some(PartRef::Slot(0)));
            assert_eq!(part_at(shell, area, Position::new(10, 1)), Some(PartRef::Control));
            assert_eq!(part_at(shell, area, Position::new(28, 1)), Some(PartRef::Slot(1)));
            assert_eq!(part_at(shell, area, Position::new(10, 0)), Some(PartRef::Control));
            assert_eq!(part_at(shell, area, Position::new(40, 1)), None);
        }

        #[test]
        fn test_narrow_area_clips_parts() {
            let field = Field::declare(FieldProps::new());
            let input = phone_input(&field);
            let areas = part_areas(input.shell(), Rect::new(0, 0, 4, 3));
            let total: u16 = areas.iter().map(|(_, rect)| rect.width).sum();
            assert_eq!(total, 2);
        }
    }
}
