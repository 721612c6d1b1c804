use field_builder_core::{ChoicesError, FieldDefinition, LabelError, SubmissionId};
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("something went wrong: {0}")]
    Transport(String),

    #[error("endpoint rejected the field definition ({status}): {body}")]
    Rejected { status: u16, body: String },
}

/// Hands a validated definition to the remote form generator.
///
/// One call per submission; the builder never retries.
pub trait Submitter {
    fn submit(
        &mut self,
        endpoint: &str,
        definition: &FieldDefinition,
    ) -> Result<Value, SubmitError>;
}

impl<F> Submitter for F
where
    F: FnMut(&str, &FieldDefinition) -> Result<Value, SubmitError>,
{
    fn submit(
        &mut self,
        endpoint: &str,
        definition: &FieldDefinition,
    ) -> Result<Value, SubmitError> {
        self(endpoint, definition)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Validation failed; the submitter was not called.
    Invalid {
        label_error: Option<LabelError>,
        choices_error: Option<ChoicesError>,
    },
    Accepted {
        id: SubmissionId,
        definition: FieldDefinition,
        response: Value,
    },
    Failed {
        id: SubmissionId,
        error: SubmitError,
    },
}

impl SubmitOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }
}
