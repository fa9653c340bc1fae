//! Demo form state and event routing

use crate::composite::{
    InputKind, PartRef, Select, SelectControlProps, Shell, SlotProps,
    TextControlProps, TextInput,
};
use crate::config::FormsConfig;
use crate::dropdown::{Dropdown, DropdownControlProps, DropdownHit};
use crate::events::{PointerBus, PointerEvent};
use crate::field::{Description, ErrorMessage, Field, FieldProps, Label};
use crate::options::OptionItem;
use crate::phone::format_phone;
use crate::platform::SUBMIT_MODIFIER;
use crate::ui::{self, FormAreas};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};
use serde::Serialize;

/// A field with its label, description, error message and control
pub struct FormRow<C> {
    pub field: Field,
    pub label: Label,
    pub description: Description,
    pub error: ErrorMessage,
    pub control: C,
}

impl<C> FormRow<C> {
    fn new(field: Field, label: &str, hide_required_indicator: bool, control: C) -> Self {
        Self {
            label: Label::new(field.scope(), label).hide_required_indicator(hide_required_indicator),
            description: Description::new(field.scope()),
            error: ErrorMessage::new(field.scope()),
            field,
            control,
        }
    }
}

/// Which form element a focus stop belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Email,
    Phone,
    Country,
    Plan,
    Submit,
}

/// Field rows in layout order
const ROW_TARGETS: [Target; 4] = [Target::Email, Target::Phone, Target::Country, Target::Plan];

/// One Tab stop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusStop {
    pub target: Target,
    pub part: PartRef,
}

/// Values handed over on submit
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Submission {
    pub email: String,
    pub phone: String,
    pub country: Option<String>,
    pub plan: Option<String>,
}

/// Receives each submission that passed validation
#[cfg_attr(test, mockall::automock)]
pub trait SubmitListener {
    fn submitted(&mut self, submission: &Submission);
}

impl<F: FnMut(&Submission)> SubmitListener for F {
    fn submitted(&mut self, submission: &Submission) {
        self(submission)
    }
}

/// Error text for an email value, if it is not acceptable
pub fn validate_email(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        return Some("Email is required".to_string());
    }
    match value.split_once('@') {
        Some((local, domain))
            if !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.') =>
        {
            None
        }
        _ => Some("Enter a valid email address".to_string()),
    }
}

/// Main application struct
pub struct App {
    pub config: FormsConfig,
    /// Document-level pointer-down channel
    pub bus: PointerBus,
    pub email: FormRow<TextInput>,
    pub phone: FormRow<TextInput>,
    pub country: FormRow<Select>,
    pub plan: FormRow<Dropdown>,
    /// Feedback shown in the status bar
    pub status_message: Option<String>,
    stops: Vec<FocusStop>,
    focus: usize,
    viewport: Rect,
    on_submit: Option<Box<dyn SubmitListener>>,
    quit: bool,
}

impl App {
    /// Build the demo form
    pub fn new(config: FormsConfig) -> Result<Self> {
        let hide = config.hide_required_indicator();
        let policy = config.disabled_policy();
        let duplicates = config.duplicate_options();
        let bus = PointerBus::new();

        let email_field = Field::declare(
            FieldProps::new()
                .id("email")
                .name("email")
                .required(true)
                .description("We'll only use this to send the receipt."),
        );
        let email_input = TextInput::builder(email_field.scope())
            .control(
                TextControlProps::new()
                    .kind(InputKind::Email)
                    .placeholder("you@example.com"),
            )
            .disabled_policy(policy)
            .build()?;

        let phone_field = Field::declare(
            FieldProps::new()
                .id("phone")
                .name("phone")
                .description("US numbers only"),
        );
        let phone_input = TextInput::builder(phone_field.scope())
            .slot(SlotProps::text("+1"))
            .control(
                TextControlProps::new()
                    .kind(InputKind::Tel)
                    .placeholder("555-123-4567"),
            )
            .slot(SlotProps::button("✕"))
            .transform(format_phone)
            .on_change(|value: &str| tracing::debug!(value, "phone changed"))
            .disabled_policy(policy)
            .build()?;

        let country_field = Field::declare(FieldProps::new().id("country").name("country"));
        let country_select = Select::builder(country_field.scope())
            .control(SelectControlProps::new())
            .slot(SlotProps::text("⇅"))
            .options([
                OptionItem::new("United States").with_value("us"),
                OptionItem::new("Canada").with_value("ca"),
                OptionItem::new("Mexico").with_value("mx"),
            ])
            .duplicates(duplicates)
            .on_change(|value: &str| tracing::info!(value, "country changed"))
            .disabled_policy(policy)
            .build()?;

        let plan_field = Field::declare(
            FieldProps::new()
                .id("plan")
                .name("plan")
                .description("Monthly price in USD"),
        );
        let plan_dropdown = Dropdown::builder(plan_field.scope(), &bus)
            .slot(SlotProps::text("$"))
            .control(DropdownControlProps::new())
            .options(["100", "200", "300"].map(OptionItem::new))
            .duplicates(duplicates)
            .on_change(|value: &str| tracing::info!(value, "plan changed"))
            .disabled_policy(policy)
            .build()?;

        let mut app = Self {
            email: FormRow::new(email_field, "Email", hide, email_input),
            phone: FormRow::new(phone_field, "Phone", hide, phone_input),
            country: FormRow::new(country_field, "Country", hide, country_select),
            plan: FormRow::new(plan_field, "Plan", hide, plan_dropdown),
            config,
            bus,
            status_message: None,
            stops: Vec::new(),
            focus: 0,
            viewport: Rect::default(),
            on_submit: None,
            quit: false,
        };
        app.stops = app.focus_stops();
        if let Some(stop) = app.focused() {
            app.focus_part(stop);
        }
        Ok(app)
    }

    /// Receive every accepted submission
    pub fn with_submit_listener(mut self, listener: impl SubmitListener + 'static) -> Self {
        self.on_submit = Some(Box::new(listener));
        self
    }

    /// Screen size used for mouse hit-testing
    pub fn set_viewport(&mut self, viewport: Rect) {
        self.viewport = viewport;
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn focused(&self) -> Option<FocusStop> {
        self.stops.get(self.focus).copied()
    }

    pub fn stops(&self) -> &[FocusStop] {
        &self.stops
    }

    fn shell_for(&self, target: Target) -> Option<&Shell> {
        match target {
            Target::Email => Some(self.email.control.shell()),
            Target::Phone => Some(self.phone.control.shell()),
            Target::Country => Some(self.country.control.shell()),
            Target::Plan => Some(self.plan.control.shell()),
            Target::Submit => None,
        }
    }

    fn focus_stops(&self) -> Vec<FocusStop> {
        let mut stops = Vec::new();
        for target in ROW_TARGETS {
            if let Some(shell) = self.shell_for(target) {
                stops.extend(
                    shell
                        .focusable_parts()
                        .into_iter()
                        .map(|part| FocusStop { target, part }),
                );
            }
        }
        stops.push(FocusStop {
            target: Target::Submit,
            part: PartRef::Control,
        });
        stops
    }

    fn focus_part(&self, stop: FocusStop) {
        if let Some(shell) = self.shell_for(stop.target) {
            shell.focus(stop.part);
        }
    }

    fn move_focus(&mut self, index: usize) -> Result<()> {
        if index == self.focus || index >= self.stops.len() {
            return Ok(());
        }

        if let Some(previous) = self.focused() {
            if let Some(shell) = self.shell_for(previous.target) {
                shell.blur(previous.part);
            }
            match previous {
                FocusStop {
                    target: Target::Email,
                    part: PartRef::Control,
                } => {
                    self.validate_email_field();
                }
                FocusStop {
                    target: Target::Plan,
                    ..
                } if self.plan.control.is_open() => {
                    self.plan.control.activate()?;
                }
                _ => {}
            }
        }

        self.focus = index;
        if let Some(stop) = self.focused() {
            tracing::debug!(?stop, "focus moved");
            self.focus_part(stop);
        }
        Ok(())
    }

    pub fn focus_next(&mut self) -> Result<()> {
        if self.stops.is_empty() {
            return Ok(());
        }
        self.move_focus((self.focus + 1) % self.stops.len())
    }

    pub fn focus_prev(&mut self) -> Result<()> {
        if self.stops.is_empty() {
            return Ok(());
        }
        self.move_focus((self.focus + self.stops.len() - 1) % self.stops.len())
    }

    /// Focus `part` of `target`; decorative slots focus the control
    fn focus_target(&mut self, target: Target, part: PartRef) -> Result<()> {
        let index = self
            .stops
            .iter()
            .position(|stop| stop.target == target && stop.part == part)
            .or_else(|| {
                self.stops
                    .iter()
                    .position(|stop| stop.target == target && stop.part == PartRef::Control)
            });
        match index {
            Some(index) => self.move_focus(index),
            None => Ok(()),
        }
    }

    /// Validate the email and show the result on its field
    fn validate_email_field(&self) -> bool {
        let error = validate_email(self.email.control.value());
        let valid = error.is_none();
        self.email.field.set_error(error);
        valid
    }

    /// Handle keyboard input
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if key.code == KeyCode::Char('s')
            && key
                .modifiers
                .intersects(SUBMIT_MODIFIER | KeyModifiers::CONTROL)
        {
            self.submit()?;
            return Ok(());
        }

        match key.code {
            KeyCode::Esc => self.quit = true,
            KeyCode::Tab => self.focus_next()?,
            KeyCode::BackTab => self.focus_prev()?,
            _ => self.handle_focused_key(key)?,
        }
        Ok(())
    }

    fn handle_focused_key(&mut self, key: KeyEvent) -> Result<()> {
        let Some(stop) = self.focused() else {
            return Ok(());
        };
        let activate = matches!(key.code, KeyCode::Enter | KeyCode::Char(' '));

        match (stop.target, stop.part) {
            (Target::Email, PartRef::Control) => {
                let changed = edit_text(&mut self.email.control, key)?;
                // once flagged, re-check on every edit so the error clears
                if changed && self.email.field.descriptor().has_error() {
                    self.validate_email_field();
                }
            }
            (Target::Phone, PartRef::Control) => {
                edit_text(&mut self.phone.control, key)?;
            }
            (Target::Phone, PartRef::Slot(_)) if activate => {
                self.phone.control.clear()?;
            }
            (Target::Country, _) => match key.code {
                KeyCode::Left => {
                    self.country.control.select_prev()?;
                }
                KeyCode::Right | KeyCode::Enter | KeyCode::Char(' ') => {
                    self.country.control.select_next()?;
                }
                _ => {}
            },
            (Target::Submit, _) if activate => {
                self.submit()?;
            }
            _ => {}
        }
        Ok(())
    }

    /// Handle mouse input
    ///
    /// Every pointer-down is published on the bus before it is routed, so an
    /// open dropdown closes when the click lands elsewhere.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> Result<()> {
        if !matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left)) {
            return Ok(());
        }
        let position = Position::new(mouse.column, mouse.row);
        self.bus.publish(PointerEvent::down(mouse.column, mouse.row));

        // the open list floats above the rows below it
        if self
            .plan
            .control
            .list_area()
            .is_some_and(|area| area.contains(position))
        {
            self.focus_target(Target::Plan, PartRef::Control)?;
            if let DropdownHit::Selected(value) = self.plan.control.pointer_down(position)? {
                tracing::debug!(value, "plan picked with pointer");
            }
            return Ok(());
        }

        let areas = ui::form_layout(self.viewport);
        let Some((target, part)) = self.hit_test(&areas, position) else {
            return Ok(());
        };
        self.focus_target(target, part)?;

        match (target, part) {
            (Target::Phone, PartRef::Slot(index))
                if self
                    .phone
                    .control
                    .shell()
                    .slot(index)
                    .is_some_and(|slot| slot.is_interactive()) =>
            {
                self.phone.control.clear()?;
            }
            (Target::Country, _) => {
                self.country.control.select_next()?;
            }
            (Target::Plan, _) => {
                self.plan.control.pointer_down(position)?;
            }
            (Target::Submit, _) => {
                self.submit()?;
            }
            _ => {}
        }
        Ok(())
    }

    fn hit_test(&self, areas: &FormAreas, position: Position) -> Option<(Target, PartRef)> {
        if areas.submit.contains(position) {
            return Some((Target::Submit, PartRef::Control));
        }
        ROW_TARGETS
            .into_iter()
            .zip(areas.rows)
            .find_map(|(target, row)| {
                let shell = self.shell_for(target)?;
                ui::part_at(shell, row.control, position).map(|part| (target, part))
            })
    }

    /// Validate and collect the form values
    ///
    /// Returns `None` when validation fails; errors are shown on the fields.
    pub fn submit(&mut self) -> Result<Option<Submission>> {
        if !self.validate_email_field() {
            tracing::info!("submission blocked by validation");
            self.status_message = Some("Please fix the highlighted fields".to_string());
            return Ok(None);
        }

        let submission = Submission {
            email: self.email.control.value().trim().to_string(),
            phone: self.phone.control.value().to_string(),
            country: self.country.control.value().map(str::to_string),
            plan: self.plan.control.value().map(str::to_string),
        };
        let payload = serde_json::to_string(&submission)?;
        tracing::info!(%payload, "form submitted");

        if let Some(listener) = self.on_submit.as_mut() {
            listener.submitted(&submission);
        }
        self.status_message = Some(format!("Submitted {payload}"));
        Ok(Some(submission))
    }
}

/// Apply an editing key to a text input; returns whether the value changed
fn edit_text(input: &mut TextInput, key: KeyEvent) -> crate::error::Result<bool> {
    match key.code {
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => input.insert_char(c),
        KeyCode::Backspace => input.backspace(),
        KeyCode::Delete => input.clear(),
        _ => Ok(false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dropdown::DropdownState;
    use ratatui::{backend::TestBackend, Terminal};

    const VIEWPORT: Rect = Rect {
        x: 0,
        y: 0,
        width: 80,
        height: 30,
    };

    fn app() -> App {
        let mut app = App::new(FormsConfig::default()).unwrap();
        app.set_viewport(VIEWPORT);
        app
    }

    fn render(app: &App) {
        let mut terminal = Terminal::new(TestBackend::new(VIEWPORT.width, VIEWPORT.height)).unwrap();
        terminal.draw(|frame| ui::draw(frame, app)).unwrap();
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(key(KeyCode::Char(c))).unwrap();
        }
    }

    fn click(app: &mut App, column: u16, row: u16) {
        app.handle_mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
        .unwrap();
    }

    fn focus(app: &mut App, target: Target) {
        while app.focused().map(|stop| stop.target) != Some(target) {
            app.handle_key(key(KeyCode::Tab)).unwrap();
        }
    }

    mod validation {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_validate_email() {
            assert_eq!(validate_email(""), Some("Email is required".to_string()));
            assert_eq!(validate_email("  "), Some("Email is required".to_string()));
            assert!(validate_email("user@example.com").is_none());
            for bad in ["user", "@example.com", "user@example", "user@.com", "user@com."] {
                assert_eq!(
                    validate_email(bad),
                    Some("Enter a valid email address".to_string()),
                    "{bad}"
                );
            }
        }
    }

    mod focus_order {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_stops_cover_controls_and_interactive_slots() {
            let app = app();
            let stops: Vec<(Target, PartRef)> = app
                .stops()
                .iter()
                .map(|stop| (stop.target, stop.part))
                .collect();
            assert_eq!(
                stops,
                vec![
                    (Target::Email, PartRef::Control),
                    (Target::Phone, PartRef::Control),
                    (Target::Phone, PartRef::Slot(1)),
                    (Target::Country, PartRef::Control),
                    (Target::Plan, PartRef::Control),
                    (Target::Submit, PartRef::Control),
                ]
            );
        }

        #[test]
        fn test_starts_on_email_with_ring() {
            let app = app();
            assert_eq!(app.focused().map(|stop| stop.target), Some(Target::Email));
            assert!(app.email.control.signals().unwrap().ring);
        }

        #[test]
        fn test_tab_wraps_and_back_tab_returns() {
            let mut app = app();
            for _ in 0..app.stops().len() {
                app.handle_key(key(KeyCode::Tab)).unwrap();
            }
            assert_eq!(app.focused().map(|stop| stop.target), Some(Target::Email));

            app.handle_key(key(KeyCode::BackTab)).unwrap();
            assert_eq!(app.focused().map(|stop| stop.target), Some(Target::Submit));
        }

        #[test]
        fn test_slot_focus_hides_ring() {
            let mut app = app();
            app.handle_key(key(KeyCode::Tab)).unwrap();
            assert!(app.phone.control.signals().unwrap().ring);
            assert!(!app.email.control.signals().unwrap().ring);

            app.handle_key(key(KeyCode::Tab)).unwrap();
            let signals = app.phone.control.signals().unwrap();
            assert!(!signals.ring);
            assert_eq!(signals.focused_part, Some(crate::focus::FocusPart::Slot));
        }
    }

    mod editing {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_blur_validates_email() {
            let mut app = app();
            app.handle_key(key(KeyCode::Tab)).unwrap();
            let descriptor = app.email.field.descriptor();
            assert_eq!(descriptor.error(), Some("Email is required"));
            assert!(app.email.control.binding().unwrap().aria_invalid);
        }

        #[test]
        fn test_error_clears_while_typing() {
            let mut app = app();
            app.handle_key(key(KeyCode::Tab)).unwrap();
            app.handle_key(key(KeyCode::BackTab)).unwrap();
            type_text(&mut app, "a@b.co");
            assert!(!app.email.field.descriptor().has_error());
        }

        #[test]
        fn test_phone_is_formatted_while_typing() {
            let mut app = app();
            focus(&mut app, Target::Phone);
            type_text(&mut app, "5551234567");
            assert_eq!(app.phone.control.value(), "555-123-4567");

            app.handle_key(key(KeyCode::Tab)).unwrap();
            app.handle_key(key(KeyCode::Enter)).unwrap();
            assert_eq!(app.phone.control.value(), "");
        }

        #[test]
        fn test_country_cycles_with_arrows() {
            let mut app = app();
            focus(&mut app, Target::Country);
            app.handle_key(key(KeyCode::Right)).unwrap();
            assert_eq!(app.country.control.value(), Some("ca"));
            app.handle_key(key(KeyCode::Left)).unwrap();
            app.handle_key(key(KeyCode::Left)).unwrap();
            assert_eq!(app.country.control.value(), Some("mx"));
        }

        #[test]
        fn test_control_shortcuts_do_not_type() {
            let mut app = app();
            app.handle_key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::CONTROL))
                .unwrap();
            assert_eq!(app.email.control.value(), "");
        }
    }

    mod plan_dropdown {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_keys_do_not_drive_the_list() {
            let mut app = app();
            focus(&mut app, Target::Plan);
            for code in [KeyCode::Enter, KeyCode::Char(' '), KeyCode::Down, KeyCode::Up] {
                app.handle_key(key(code)).unwrap();
            }
            assert_eq!(app.plan.control.state(), DropdownState::Closed);
            assert_eq!(app.plan.control.value(), Some("100"));
        }

        #[test]
        fn test_escape_quits() {
            let mut app = app();
            focus(&mut app, Target::Plan);
            app.handle_key(key(KeyCode::Esc)).unwrap();
            assert!(app.should_quit());
        }

        #[test]
        fn test_tab_away_closes() {
            let mut app = app();
            focus(&mut app, Target::Plan);
            app.plan.control.activate().unwrap();
            assert!(app.plan.control.is_open());
            app.handle_key(key(KeyCode::Tab)).unwrap();
            assert!(!app.plan.control.is_open());
        }

        #[test]
        fn test_pointer_open_and_pick() {
            let mut app = app();
            render(&app);
            let trigger = ui::form_layout(VIEWPORT).rows[3].control;

            click(&mut app, trigger.x + 10, trigger.y + 1);
            assert!(app.plan.control.is_open());
            assert_eq!(app.focused().map(|stop| stop.target), Some(Target::Plan));

            render(&app);
            let list = app.plan.control.list_area().unwrap();
            // third option row, inside the list border
            click(&mut app, list.x + 3, list.y + 3);

            assert!(!app.plan.control.is_open());
            assert_eq!(app.plan.control.value(), Some("300"));
        }

        #[test]
        fn test_pointer_outside_dismisses() {
            let mut app = app();
            render(&app);
            let trigger = ui::form_layout(VIEWPORT).rows[3].control;
            click(&mut app, trigger.x + 10, trigger.y + 1);
            render(&app);

            click(&mut app, 0, 0);
            assert!(!app.plan.control.is_open());
            assert_eq!(app.plan.control.value(), Some("100"));
        }

        #[test]
        fn test_pointer_on_trigger_closes_open_list() {
            let mut app = app();
            render(&app);
            let trigger = ui::form_layout(VIEWPORT).rows[3].control;
            click(&mut app, trigger.x + 10, trigger.y + 1);
            render(&app);
            click(&mut app, trigger.x + 10, trigger.y + 1);
            assert!(!app.plan.control.is_open());
        }
    }

    mod pointer {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_click_focuses_part() {
            let mut app = app();
            let phone = ui::form_layout(VIEWPORT).rows[1].control;
            let parts = ui::part_areas(app.phone.control.shell(), phone);

            let (_, clear) = parts[2];
            click(&mut app, clear.x, clear.y);
            assert_eq!(
                app.focused(),
                Some(FocusStop {
                    target: Target::Phone,
                    part: PartRef::Slot(1),
                })
            );

            // the "+1" prefix is decorative; focus lands on the control
            let (_, prefix) = parts[0];
            click(&mut app, prefix.x, prefix.y);
            assert_eq!(
                app.focused(),
                Some(FocusStop {
                    target: Target::Phone,
                    part: PartRef::Control,
                })
            );
        }

        #[test]
        fn test_click_cycles_country() {
            let mut app = app();
            let country = ui::form_layout(VIEWPORT).rows[2].control;
            click(&mut app, country.x + 5, country.y + 1);
            assert_eq!(app.country.control.value(), Some("ca"));
        }

        #[test]
        fn test_non_left_clicks_are_ignored() {
            let mut app = app();
            let country = ui::form_layout(VIEWPORT).rows[2].control;
            app.handle_mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Right),
                column: country.x + 5,
                row: country.y + 1,
                modifiers: KeyModifiers::NONE,
            })
            .unwrap();
            assert_eq!(app.country.control.value(), Some("us"));
        }
    }

    mod submission {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_invalid_submission_is_blocked() {
            let mut listener = MockSubmitListener::new();
            listener.expect_submitted().never();
            let mut app = app().with_submit_listener(listener);

            app.handle_key(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL))
                .unwrap();
            assert_eq!(
                app.status_message.as_deref(),
                Some("Please fix the highlighted fields")
            );
            assert!(app.email.field.descriptor().has_error());
        }

        #[test]
        fn test_valid_submission_is_handed_over_once() {
            let mut listener = MockSubmitListener::new();
            listener
                .expect_submitted()
                .withf(|submission| {
                    submission.email == "a@b.co"
                        && submission.phone == "555-0"
                        && submission.plan.as_deref() == Some("100")
                })
                .times(1)
                .return_const(());
            let mut app = app().with_submit_listener(listener);

            type_text(&mut app, "a@b.co");
            focus(&mut app, Target::Phone);
            type_text(&mut app, "5550");

            let submission = app.submit().unwrap().unwrap();
            assert_eq!(
                submission,
                Submission {
                    email: "a@b.co".to_string(),
                    phone: "555-0".to_string(),
                    country: Some("us".to_string()),
                    plan: Some("100".to_string()),
                }
            );
            assert!(app.status_message.unwrap().starts_with("Submitted"));
        }
    }
}
