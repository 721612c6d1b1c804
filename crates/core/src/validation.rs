//! Pure checks over the draft. Errors here are values shown next to the
//! offending input; they block submission but are never propagated as `Err`.

use std::collections::HashSet;

use thiserror::Error;

use crate::choices::{MAX_CHOICE_LEN, MAX_CHOICES, canonical_choices, choice_len};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationLimits {
    pub max_choices: usize,
    pub max_choice_len: usize,
}

impl Default for ValidationLimits {
    fn default() -> Self {
        Self {
            max_choices: MAX_CHOICES,
            max_choice_len: MAX_CHOICE_LEN,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LabelError {
    #[error("Label is required")]
    Required,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChoicesError {
    #[error("Cannot have more than {max} choices")]
    TooMany { max: usize },

    #[error("Duplicate choices are not allowed")]
    Duplicates,

    #[error("At least one choice must be filled")]
    Empty,

    #[error("Single choice maximum length: {max}. You have {count} longer choice/s.")]
    TooLong { max: usize, count: usize },
}

/// Result of checking the choices text: the first failing rule, plus every
/// entry over the length limit so an editor can highlight them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChoicesReport {
    pub error: Option<ChoicesError>,
    pub flagged: Vec<String>,
}

impl ChoicesReport {
    pub fn is_clean(&self) -> bool {
        self.error.is_none()
    }
}

pub fn validate_label(label: &str) -> Option<LabelError> {
    if label.is_empty() {
        Some(LabelError::Required)
    } else {
        None
    }
}

pub fn validate_choices(text: &str) -> ChoicesReport {
    validate_choices_with(text, &ValidationLimits::default())
}

/// Rules apply in a fixed precedence: count, duplicates, emptiness, length.
pub fn validate_choices_with(text: &str, limits: &ValidationLimits) -> ChoicesReport {
    let choices = canonical_choices(text);
    let unique: HashSet<&str> = choices.iter().map(String::as_str).collect();
    let flagged: Vec<String> = choices
        .iter()
        .filter(|choice| choice_len(choice) > limits.max_choice_len)
        .cloned()
        .collect();

    let error = if choices.len() > limits.max_choices {
        Some(ChoicesError::TooMany {
            max: limits.max_choices,
        })
    } else if unique.len() != choices.len() {
        Some(ChoicesError::Duplicates)
    } else if unique.is_empty() {
        Some(ChoicesError::Empty)
    } else if !flagged.is_empty() {
        Some(ChoicesError::TooLong {
            max: limits.max_choice_len,
            count: flagged.len(),
        })
    } else {
        None
    };

    ChoicesReport { error, flagged }
}
