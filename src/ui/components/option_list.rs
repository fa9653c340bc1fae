//! Floating option list of an open dropdown

use crate::options::OptionList;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Draw the list over whatever is below it
///
/// Row `i` inside the border shows option `i`; `selected` is the current value.
pub fn render_option_list(
    frame: &mut Frame,
    area: Rect,
    options: &OptionList,
    selected: Option<&str>,
) {
    // Clear the area behind the list
    frame.render_widget(Clear, area);

    let lines: Vec<Line> = options
        .iter()
        .map(|option| {
            let is_selected = selected == Some(option.effective_value());
            let marker = if is_selected { "✓ " } else { "  " };
            let style = if is_selected {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default()
            };
            Line::from(vec![
                Span::styled(marker, Style::default().fg(Color::Cyan)),
                Span::styled(option.text().to_string(), style),
            ])
        })
        .collect();

    let list = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .style(Style::default().bg(Color::Black)),
        )
        .style(Style::default().bg(Color::Black));

    frame.render_widget(list, area);
}
