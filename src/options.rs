//! Option lists shared by Select and Dropdown

use crate::error::{FieldError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One selectable option
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionItem {
    value: Option<String>,
    text: String,
}

impl OptionItem {
    /// Option whose value is its display text
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            value: None,
            text: text.into(),
        }
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Display text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Value used for selection and equality
    pub fn effective_value(&self) -> &str {
        self.value.as_deref().unwrap_or(&self.text)
    }
}

/// What to do when two options share an effective value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    /// Accept; selection and display resolve to the first matching option
    #[default]
    FirstMatch,
    /// Fail construction with [`FieldError::DuplicateOptionValue`]
    Reject,
}

/// Validated, ordered options
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionList {
    items: Vec<OptionItem>,
}

impl OptionList {
    pub fn new(items: Vec<OptionItem>, policy: DuplicatePolicy) -> Result<Self> {
        let mut seen = HashSet::new();

        for (index, item) in items.iter().enumerate() {
            if item.value.is_none() && item.text.is_empty() {
                return Err(FieldError::InvalidOptionValue { index });
            }

            let value = item.effective_value();
            if !seen.insert(value) {
                match policy {
                    DuplicatePolicy::Reject => {
                        return Err(FieldError::DuplicateOptionValue {
                            value: value.to_string(),
                        });
                    }
                    DuplicatePolicy::FirstMatch => {
                        tracing::warn!(value, index, "duplicate option value");
                    }
                }
            }
        }

        Ok(Self { items })
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&OptionItem> {
        self.items.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &OptionItem> {
        self.items.iter()
    }

    /// Effective value of the first option
    pub fn first_value(&self) -> Option<&str> {
        self.items.first().map(OptionItem::effective_value)
    }

    /// Index of the first option carrying `value`
    pub fn position(&self, value: &str) -> Option<usize> {
        self.items
            .iter()
            .position(|item| item.effective_value() == value)
    }

    pub fn contains(&self, value: &str) -> bool {
        self.position(value).is_some()
    }

    /// Display text of the first option carrying `value`
    pub fn text_for(&self, value: &str) -> Option<&str> {
        self.position(value).map(|index| self.items[index].text())
    }
}
