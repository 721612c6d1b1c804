//! Keeps the default value inside the choices list.
//!
//! When the user picks a default that is not one of their choices, it is
//! inserted as a synthetic first line and `default_auto_added` is set so that
//! exactly that line can be taken out again later.

use tracing::debug;

use crate::choices::{canonical_choices, split_first_line, strip_first_line};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconciled {
    pub choices_text: String,
    pub default_auto_added: bool,
}

pub fn reconcile_default_value(
    default_value: &str,
    choices_text: &str,
    default_auto_added: bool,
) -> Reconciled {
    // Choices are compared trimmed, so the default is too.
    let default_value = default_value.trim();
    let unchanged = |auto_added: bool| Reconciled {
        choices_text: choices_text.to_string(),
        default_auto_added: auto_added,
    };

    if default_value.is_empty() {
        if !default_auto_added {
            return unchanged(false);
        }
        debug!("default cleared, removing synthetic choice");
        return Reconciled {
            choices_text: strip_first_line(choices_text),
            default_auto_added: false,
        };
    }

    let present = canonical_choices(choices_text)
        .iter()
        .any(|choice| choice == default_value);

    if !present {
        let base = if default_auto_added {
            strip_first_line(choices_text)
        } else {
            choices_text.to_string()
        };
        debug!(default_value, "inserting default as first choice");
        return Reconciled {
            choices_text: format!("{default_value}\n{base}"),
            default_auto_added: true,
        };
    }

    if !default_auto_added {
        return unchanged(false);
    }

    // The synthetic head may itself be the only match; it stays until the
    // default changes.
    let (head, rest) = split_first_line(choices_text);
    let typed_elsewhere = canonical_choices(rest)
        .iter()
        .any(|choice| choice == default_value);
    if head == default_value && !typed_elsewhere {
        return unchanged(true);
    }

    debug!(default_value, "default now typed by user, dropping synthetic copy");
    Reconciled {
        choices_text: rest.to_string(),
        default_auto_added: false,
    }
}
