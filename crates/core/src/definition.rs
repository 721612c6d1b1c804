use serde::{Deserialize, Serialize};

use crate::CoreError;

/// Kind of form field being configured. Only multi-select exists today.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldType {
    #[default]
    #[serde(rename = "multi-select")]
    MultiSelect,
}

impl FieldType {
    pub const ALL: &'static [FieldType] = &[FieldType::MultiSelect];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MultiSelect => "multi-select",
        }
    }

    pub fn parse(s: &str) -> Result<Self, CoreError> {
        match s {
            "multi-select" => Ok(Self::MultiSelect),
            _ => Err(CoreError::UnknownFieldType(s.to_string())),
        }
    }

    /// Label shown in option pickers, e.g. "Multi-select".
    pub fn display_name(&self) -> String {
        capitalize_first(self.as_str())
    }
}

/// Presentation order of choices. Carried through as-is; nothing sorts on it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChoiceOrder {
    #[default]
    #[serde(rename = "alphabetical")]
    Alphabetical,
}

impl ChoiceOrder {
    pub const ALL: &'static [ChoiceOrder] = &[ChoiceOrder::Alphabetical];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Alphabetical => "alphabetical",
        }
    }

    pub fn parse(s: &str) -> Result<Self, CoreError> {
        match s {
            "alphabetical" => Ok(Self::Alphabetical),
            _ => Err(CoreError::UnknownOrder(s.to_string())),
        }
    }

    pub fn display_name(&self) -> String {
        capitalize_first(self.as_str())
    }
}

fn capitalize_first(input: &str) -> String {
    let mut chars = input.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// The record that is persisted locally and handed to the submission service.
///
/// `choices` is always the canonical sequence (trimmed, blanks dropped), never
/// the raw editor text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDefinition {
    pub label: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    pub is_required: bool,
    pub default_value: String,
    pub choices: Vec<String>,
    pub order: ChoiceOrder,
}

impl Default for FieldDefinition {
    fn default() -> Self {
        Self {
            label: String::new(),
            field_type: FieldType::MultiSelect,
            is_required: true,
            default_value: String::new(),
            choices: Vec::new(),
            order: ChoiceOrder::Alphabetical,
        }
    }
}

impl FieldDefinition {
    pub fn to_json(&self) -> Result<String, CoreError> {
        serde_json::to_string(self).map_err(|e| CoreError::Serialization(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        serde_json::from_str(json).map_err(|e| CoreError::Serialization(e.to_string()))
    }
}
