//! Persistence of the in-progress draft as a `FieldDefinition`-shaped JSON
//! document under a single key.

use field_builder_core::{ChoiceOrder, FieldDefinition, FieldDraft, FieldType};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::StorageError;
use crate::traits::KeyValueStore;

/// Loose view of a stored snapshot: every key may be absent or `null`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct StoredDefinition {
    label: Option<String>,
    #[serde(rename = "type")]
    field_type: Option<String>,
    is_required: Option<bool>,
    default_value: Option<String>,
    choices: Option<Vec<String>>,
    order: Option<String>,
}

pub fn save_draft<S: KeyValueStore + ?Sized>(
    store: &mut S,
    key: &str,
    draft: &FieldDraft,
) -> Result<(), StorageError> {
    let json = draft.to_definition().to_json()?;
    store.set(key, &json)?;
    debug!(key, bytes = json.len(), "draft snapshot saved");
    Ok(())
}

/// Returns `None` when nothing is stored under `key`.
pub fn load_draft<S: KeyValueStore + ?Sized>(
    store: &S,
    key: &str,
) -> Result<Option<FieldDraft>, StorageError> {
    let Some(json) = store.get(key)? else {
        return Ok(None);
    };
    let def = parse_snapshot(&json)?;
    debug!(key, choices = def.choices.len(), "draft snapshot loaded");
    Ok(Some(FieldDraft::from_definition(&def)))
}

pub fn clear_draft<S: KeyValueStore + ?Sized>(store: &mut S, key: &str) -> Result<(), StorageError> {
    store.remove(key)?;
    debug!(key, "draft snapshot cleared");
    Ok(())
}

/// Parse a stored snapshot, filling defaults for missing, `null` or empty
/// values. An explicit `isRequired: false` is kept.
pub fn parse_snapshot(json: &str) -> Result<FieldDefinition, StorageError> {
    let stored: StoredDefinition =
        serde_json::from_str(json).map_err(|e| StorageError::Serialization(e.to_string()))?;
    let defaults = FieldDefinition::default();

    let field_type = match non_empty(stored.field_type) {
        None => defaults.field_type,
        Some(raw) => FieldType::parse(&raw).unwrap_or_else(|e| {
            warn!(%e, "falling back to default field type");
            defaults.field_type
        }),
    };
    let order = match non_empty(stored.order) {
        None => defaults.order,
        Some(raw) => ChoiceOrder::parse(&raw).unwrap_or_else(|e| {
            warn!(%e, "falling back to default choice order");
            defaults.order
        }),
    };

    Ok(FieldDefinition {
        label: stored.label.unwrap_or(defaults.label),
        field_type,
        is_required: stored.is_required.unwrap_or(defaults.is_required),
        default_value: stored.default_value.unwrap_or(defaults.default_value),
        choices: stored.choices.unwrap_or(defaults.choices),
        order,
    })
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}
