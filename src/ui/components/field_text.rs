//! Label and message lines around a field

use crate::field::{DescriptionView, ErrorMessageView, LabelView};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub fn label_line(view: &LabelView) -> Line<'static> {
    let style = if view.disabled {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };

    let mut spans = vec![Span::styled(view.text.clone(), style)];
    if view.required_indicator {
        spans.push(Span::styled(" *", Style::default().fg(Color::Red)));
    }
    Line::from(spans)
}

/// The error replaces the description while present
pub fn message_line(
    description: Option<&DescriptionView>,
    error: Option<&ErrorMessageView>,
) -> Option<Line<'static>> {
    if let Some(error) = error {
        return Some(Line::from(Span::styled(
            error.text.clone(),
            Style::default().fg(Color::Red),
        )));
    }
    description.map(|description| {
        Line::from(Span::styled(
            description.text.clone(),
            Style::default().fg(Color::DarkGray),
        ))
    })
}

pub fn render_label(frame: &mut Frame, area: Rect, view: &LabelView) {
    frame.render_widget(Paragraph::new(label_line(view)), area);
}

pub fn render_message(
    frame: &mut Frame,
    area: Rect,
    description: Option<&DescriptionView>,
    error: Option<&ErrorMessageView>,
) {
    if let Some(line) = message_line(description, error) {
        frame.render_widget(Paragraph::new(line), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_indicator_span() {
        let view = LabelView {
            html_for: "email".to_string(),
            text: "Email".to_string(),
            required_indicator: true,
            disabled: false,
        };
        let line = label_line(&view);
        assert_eq!(line.spans.len(), 2);
        assert_eq!(line.spans[1].content, " *");
    }

    #[test]
    fn test_error_replaces_description() {
        let description = DescriptionView {
            id: "email-description".to_string(),
            text: "help".to_string(),
        };
        let error = ErrorMessageView {
            id: "email-error".to_string(),
            text: "bad".to_string(),
        };

        let line = message_line(Some(&description), Some(&error)).unwrap();
        assert_eq!(line.spans[0].content, "bad");

        let line = message_line(Some(&description), None).unwrap();
        assert_eq!(line.spans[0].content, "help");

        assert!(message_line(None, None).is_none());
    }
}
