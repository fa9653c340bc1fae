//! Drawing of the demo form rows

use super::components::{
    render_button, render_composite, render_label, render_message, render_option_list,
};
use super::layout::{list_area, FormAreas, RowAreas};
use crate::app::{App, FormRow, Target};
use crate::composite::{PartRef, Select, TextInput};
use crate::dropdown::{Dropdown, DropdownState};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub fn draw_form(frame: &mut Frame, areas: &FormAreas, app: &App) {
    let title = Paragraph::new(Line::from(Span::styled(
        "Checkout",
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(title, areas.title);

    let focused = app.focused();
    let part_for = |target: Target| {
        focused
            .filter(|stop| stop.target == target)
            .map(|stop| stop.part)
    };

    let [email, phone, country, plan] = areas.rows;

    draw_chrome(frame, email, &app.email);
    draw_text_input(frame, email.control, &app.email.control, part_for(Target::Email));

    draw_chrome(frame, phone, &app.phone);
    draw_text_input(frame, phone.control, &app.phone.control, part_for(Target::Phone));

    draw_chrome(frame, country, &app.country);
    draw_select(frame, country.control, &app.country.control, part_for(Target::Country));

    draw_chrome(frame, plan, &app.plan);
    draw_dropdown(frame, plan.control, &app.plan.control, part_for(Target::Plan));

    render_button(
        frame,
        areas.submit,
        "Submit",
        part_for(Target::Submit).is_some(),
        true,
    );
}

/// Floating layers, drawn after everything else
///
/// Also records where the dropdown was drawn so outside pointers can be
/// told apart from clicks on it.
pub fn draw_overlays(frame: &mut Frame, areas: &FormAreas, app: &App) {
    let trigger = areas.rows[3].control;
    let dropdown = &app.plan.control;

    let list = dropdown.visible_options().map(|options| {
        let area = list_area(trigger, options.len(), frame.area());
        render_option_list(frame, area, options, dropdown.value());
        area
    });
    dropdown.record_layout(trigger, list);
}

fn draw_chrome<C>(frame: &mut Frame, areas: RowAreas, row: &FormRow<C>) {
    if let Ok(label) = row.label.resolve() {
        render_label(frame, areas.label, &label);
    }
    let description = row.description.resolve().ok().flatten();
    let error = row.error.resolve().ok().flatten();
    render_message(frame, areas.message, description.as_ref(), error.as_ref());
}

fn draw_text_input(frame: &mut Frame, area: Rect, input: &TextInput, focused: Option<PartRef>) {
    let signals = input.signals().unwrap_or_default();
    let line = text_input_line(input, focused == Some(PartRef::Control));
    render_composite(frame, area, input.shell(), signals, line, focused);
}

fn draw_select(frame: &mut Frame, area: Rect, select: &Select, focused: Option<PartRef>) {
    let signals = select.signals().unwrap_or_default();
    let mut spans = vec![Span::raw(select.selected_text().to_string())];
    if focused == Some(PartRef::Control) {
        spans.push(Span::styled("  ←/→", Style::default().fg(Color::DarkGray)));
    }
    render_composite(frame, area, select.shell(), signals, Line::from(spans), focused);
}

fn draw_dropdown(frame: &mut Frame, area: Rect, dropdown: &Dropdown, focused: Option<PartRef>) {
    let signals = dropdown.signals().unwrap_or_default();
    let chevron = match dropdown.state() {
        DropdownState::Closed => "▾",
        DropdownState::Open => "▴",
    };
    let line = Line::from(vec![
        Span::raw(dropdown.displayed_text().to_string()),
        Span::raw(" "),
        Span::styled(chevron, Style::default().fg(Color::Cyan)),
    ]);
    render_composite(frame, area, dropdown.shell(), signals, line, focused);
}

/// Value (or placeholder) with the cursor while focused
pub fn text_input_line(input: &TextInput, focused: bool) -> Line<'static> {
    let value = input.display_value();
    let mut spans = if value.is_empty() && !focused {
        let placeholder = input.placeholder().unwrap_or("(empty)").to_string();
        vec![Span::styled(
            placeholder,
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )]
    } else {
        vec![Span::raw(value)]
    };

    if focused {
        spans.push(Span::styled("▌", Style::default().fg(Color::Cyan)));
    }
    Line::from(spans)
}
