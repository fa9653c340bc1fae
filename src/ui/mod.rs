//! UI module for rendering the form

pub mod components;
mod form;
mod layout;

pub use components::{part_areas, part_at};
pub use form::text_input_line;
pub use layout::{form_layout, list_area, FormAreas, RowAreas, FORM_WIDTH, ROW_COUNT};

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let areas = form_layout(frame.area());

    form::draw_form(frame, &areas, app);
    form::draw_overlays(frame, &areas, app);

    layout::draw_status_bar(frame, areas.status, app);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FormsConfig;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{backend::TestBackend, buffer::Buffer, layout::Rect, Terminal};

    const WIDTH: u16 = 80;
    const HEIGHT: u16 = 30;

    fn app() -> App {
        let mut app = App::new(FormsConfig::default()).unwrap();
        app.set_viewport(Rect::new(0, 0, WIDTH, HEIGHT));
        app
    }

    fn render(app: &App) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(WIDTH, HEIGHT)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        terminal.backend().buffer().clone()
    }

    fn row_text(buffer: &Buffer, y: u16) -> String {
        (0..buffer.area.width)
            .map(|x| buffer[(x, y)].symbol())
            .collect()
    }

    fn screen_text(buffer: &Buffer) -> String {
        (0..buffer.area.height)
            .map(|y| row_text(buffer, y))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    mod form_rendering {
        use super::*;

        #[test]
        fn test_renders_every_field() {
            let app = app();
            let text = screen_text(&render(&app));
            for expected in ["Checkout", "Email", "Phone", "Country", "Plan", "Submit"] {
                assert!(text.contains(expected), "missing {expected}");
            }
            assert!(text.contains("+1"));
            assert!(text.contains("United States"));
            assert!(text.contains("100 ▾"));
        }

        #[test]
        fn test_required_indicator_hidden_by_default() {
            let app = app();
            let buffer = render(&app);
            let areas = form_layout(buffer.area);
            assert!(!row_text(&buffer, areas.rows[0].label.y).contains('*'));
        }

        #[test]
        fn test_required_indicator_from_config() {
            let config = FormsConfig {
                hide_required_indicator: Some(false),
                ..Default::default()
            };
            let app = App::new(config).unwrap();
            let buffer = render(&app);
            let areas = form_layout(buffer.area);
            assert!(row_text(&buffer, areas.rows[0].label.y).contains("Email *"));
        }

        #[test]
        fn test_ring_follows_focused_control() {
            let app = app();
            let buffer = render(&app);
            let areas = form_layout(buffer.area);
            let email = areas.rows[0].control;
            let phone = areas.rows[1].control;
            assert_eq!(buffer[(email.x, email.y)].fg, ratatui::style::Color::Cyan);
            assert_eq!(buffer[(phone.x, phone.y)].fg, ratatui::style::Color::DarkGray);
        }

        #[test]
        fn test_error_message_replaces_description() {
            let mut app = app();
            let buffer = render(&app);
            let areas = form_layout(buffer.area);
            assert!(row_text(&buffer, areas.rows[0].message.y).contains("receipt"));

            app.handle_key(key(KeyCode::Tab)).unwrap();
            let buffer = render(&app);
            let message = row_text(&buffer, areas.rows[0].message.y);
            assert!(message.contains("Email is required"));
            let email = areas.rows[0].control;
            assert_eq!(buffer[(email.x, email.y)].fg, ratatui::style::Color::Red);
        }

        #[test]
        fn test_status_bar_shows_help() {
            let app = app();
            let buffer = render(&app);
            assert!(row_text(&buffer, HEIGHT - 1).contains("Tab/Shift+Tab"));
        }
    }

    mod dropdown_overlay {
        use super::*;

        #[test]
        fn test_open_list_is_drawn_and_recorded() {
            let mut app = app();
            assert!(app.plan.control.list_area().is_none());
            app.plan.control.activate().unwrap();

            let buffer = render(&app);
            let areas = form_layout(buffer.area);
            let trigger = areas.rows[3].control;
            let list = app.plan.control.list_area().unwrap();
            assert_eq!(list, list_area(trigger, 3, buffer.area));
            assert!(screen_text(&buffer).contains("100 ▴"));
            assert!(row_text(&buffer, list.y + 1).contains("✓ 100"));
            assert!(row_text(&buffer, list.y + 3).contains("300"));
        }

        #[test]
        fn test_closed_list_clears_recorded_area() {
            let mut app = app();
            app.plan.control.activate().unwrap();
            render(&app);
            app.plan.control.activate().unwrap();
            render(&app);
            assert!(app.plan.control.list_area().is_none());
            assert_eq!(
                app.plan.control.trigger_area(),
                Some(form_layout(Rect::new(0, 0, WIDTH, HEIGHT)).rows[3].control)
            );
        }
    }
}
