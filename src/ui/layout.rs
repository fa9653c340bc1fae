//! Form layout (title, field rows, submit button, status bar)

use super::components::BUTTON_HEIGHT;
use crate::app::App;
use crate::platform::help_line;
use ratatui::{
    layout::{Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Number of field rows in the demo form
pub const ROW_COUNT: usize = 4;

/// Width of the centered form column
pub const FORM_WIDTH: u16 = 60;

const LABEL_HEIGHT: u16 = 1;
const CONTROL_HEIGHT: u16 = 3;
const MESSAGE_HEIGHT: u16 = 1;

/// Areas of one labelled field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RowAreas {
    pub label: Rect,
    pub control: Rect,
    /// Description or error line
    pub message: Rect,
}

/// Every area of the form screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FormAreas {
    pub title: Rect,
    pub rows: [RowAreas; ROW_COUNT],
    pub submit: Rect,
    pub status: Rect,
}

/// Split the screen into form areas
///
/// Deterministic for a given viewport so mouse handling can recompute it.
pub fn form_layout(area: Rect) -> FormAreas {
    // Reserve bottom line for status bar
    let screen = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);

    let column = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(FORM_WIDTH)])
        .flex(Flex::Center)
        .split(screen[0])[0];

    let mut constraints = vec![Constraint::Length(1), Constraint::Length(1)];
    for _ in 0..ROW_COUNT {
        constraints.extend([
            Constraint::Length(LABEL_HEIGHT),
            Constraint::Length(CONTROL_HEIGHT),
            Constraint::Length(MESSAGE_HEIGHT),
        ]);
    }
    constraints.push(Constraint::Length(BUTTON_HEIGHT));
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(column);

    let mut rows = [RowAreas::default(); ROW_COUNT];
    for (idx, row) in rows.iter_mut().enumerate() {
        let base = 2 + idx * 3;
        *row = RowAreas {
            label: chunks[base],
            control: chunks[base + 1],
            message: chunks[base + 2],
        };
    }

    FormAreas {
        title: chunks[0],
        rows,
        submit: Rect {
            width: chunks[2 + ROW_COUNT * 3].width.min(16),
            ..chunks[2 + ROW_COUNT * 3]
        },
        status: screen[1],
    }
}

/// Where the floating option list goes for a trigger
///
/// Below the trigger when it fits (or when there is more room below),
/// otherwise above it. Height covers every option plus the border.
pub fn list_area(trigger: Rect, count: usize, viewport: Rect) -> Rect {
    let wanted = u16::try_from(count).unwrap_or(u16::MAX).saturating_add(2);
    let below = viewport.bottom().saturating_sub(trigger.bottom());
    let above = trigger.y.saturating_sub(viewport.y);

    if wanted <= below || below >= above {
        Rect::new(trigger.x, trigger.bottom(), trigger.width, wanted.min(below))
    } else {
        let height = wanted.min(above);
        Rect::new(trigger.x, trigger.y - height, trigger.width, height)
    }
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::styled(
        format!(" {} ", help_line()),
        Style::default().fg(Color::Gray),
    )];

    if let Some(msg) = &app.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);
}
