//! Label, description and error message sub-components

use super::context::FieldScope;
use crate::error::Result;

/// Resolved label, ready to render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelView {
    /// Id of the control this label points at
    pub html_for: String,
    pub text: String,
    pub required_indicator: bool,
    pub disabled: bool,
}

/// Field label
#[derive(Debug, Clone)]
pub struct Label {
    scope: FieldScope,
    text: String,
    hide_required_indicator: bool,
}

impl Label {
    /// The required indicator is hidden unless explicitly enabled
    pub fn new(scope: FieldScope, text: impl Into<String>) -> Self {
        Self {
            scope,
            text: text.into(),
            hide_required_indicator: true,
        }
    }

    pub fn hide_required_indicator(mut self, hide: bool) -> Self {
        self.hide_required_indicator = hide;
        self
    }

    pub fn resolve(&self) -> Result<LabelView> {
        let descriptor = self.scope.read()?;
        Ok(LabelView {
            html_for: descriptor.id().to_string(),
            text: self.text.clone(),
            required_indicator: descriptor.required() && !self.hide_required_indicator,
            disabled: descriptor.disabled(),
        })
    }
}

/// Resolved description text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescriptionView {
    pub id: String,
    pub text: String,
}

/// Help text under a field; falls back to the field's own description
#[derive(Debug, Clone)]
pub struct Description {
    scope: FieldScope,
    text: Option<String>,
}

impl Description {
    pub fn new(scope: FieldScope) -> Self {
        Self { scope, text: None }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// `None` when there is nothing to show
    pub fn resolve(&self) -> Result<Option<DescriptionView>> {
        let descriptor = self.scope.read()?;
        let text = self
            .text
            .as_deref()
            .filter(|t| !t.is_empty())
            .or(descriptor.description());

        Ok(text.map(|text| DescriptionView {
            id: descriptor.description_id(),
            text: text.to_string(),
        }))
    }
}

/// Resolved error message; announced politely by assistive tech
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorMessageView {
    pub id: String,
    pub text: String,
}

/// Error text under a field; falls back to the field's current error
#[derive(Debug, Clone)]
pub struct ErrorMessage {
    scope: FieldScope,
    text: Option<String>,
}

impl ErrorMessage {
    pub fn new(scope: FieldScope) -> Self {
        Self { scope, text: None }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn resolve(&self) -> Result<Option<ErrorMessageView>> {
        let descriptor = self.scope.read()?;
        let text = self
            .text
            .as_deref()
            .filter(|t| !t.is_empty())
            .or(descriptor.error());

        Ok(text.map(|text| ErrorMessageView {
            id: descriptor.error_id(),
            text: text.to_string(),
        }))
    }
}
