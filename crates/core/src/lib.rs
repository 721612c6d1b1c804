pub mod choices;
pub mod definition;
pub mod draft;
pub mod error;
pub mod ids;
pub mod reconcile;
pub mod validation;

pub use definition::{ChoiceOrder, FieldDefinition, FieldType};
pub use draft::FieldDraft;
pub use error::CoreError;
pub use ids::*;
pub use reconcile::{Reconciled, reconcile_default_value};
pub use validation::{
    ChoicesError, ChoicesReport, LabelError, ValidationLimits, validate_choices,
    validate_choices_with, validate_label,
};
