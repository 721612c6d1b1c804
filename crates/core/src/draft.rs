use crate::choices::{canonical_choices, choices_text};
use crate::definition::{ChoiceOrder, FieldDefinition, FieldType};
use crate::reconcile::{Reconciled, reconcile_default_value};

/// In-progress edit state of a field definition.
///
/// Choices are held as the raw text the user types; the canonical sequence
/// is always derived from it, never stored alongside.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDraft {
    pub label: String,
    pub field_type: FieldType,
    pub is_required: bool,
    pub default_value: String,
    pub choices_text: String,
    pub order: ChoiceOrder,
    /// Whether the first line of `choices_text` was inserted for the default.
    pub default_auto_added: bool,
}

impl Default for FieldDraft {
    fn default() -> Self {
        Self::from_definition(&FieldDefinition::default())
    }
}

impl FieldDraft {
    pub fn from_definition(def: &FieldDefinition) -> Self {
        Self {
            label: def.label.clone(),
            field_type: def.field_type,
            is_required: def.is_required,
            default_value: def.default_value.clone(),
            choices_text: choices_text(&def.choices),
            order: def.order,
            default_auto_added: false,
        }
    }

    pub fn to_definition(&self) -> FieldDefinition {
        FieldDefinition {
            label: self.label.clone(),
            field_type: self.field_type,
            is_required: self.is_required,
            default_value: self.default_value.clone(),
            choices: self.choices(),
            order: self.order,
        }
    }

    pub fn choices(&self) -> Vec<String> {
        canonical_choices(&self.choices_text)
    }

    /// Trims the default, then keeps it among the choices.
    pub fn reconcile_default(&mut self) {
        self.default_value = self.default_value.trim().to_string();
        let Reconciled {
            choices_text,
            default_auto_added,
        } = reconcile_default_value(
            &self.default_value,
            &self.choices_text,
            self.default_auto_added,
        );
        self.choices_text = choices_text;
        self.default_auto_added = default_auto_added;
    }

    /// True when the default is empty or one of the canonical choices.
    pub fn default_in_choices(&self) -> bool {
        self.default_value.is_empty() || self.choices().contains(&self.default_value)
    }
}
