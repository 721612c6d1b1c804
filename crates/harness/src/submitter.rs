use field_builder_core::FieldDefinition;
use field_builder_engine::{SubmitError, Submitter};
use serde_json::{Value, json};

/// Accepts everything and keeps what it was sent.
pub struct RecordingSubmitter {
    pub sent: Vec<(String, FieldDefinition)>,
    pub response: Value,
}

impl Default for RecordingSubmitter {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingSubmitter {
    pub fn new() -> Self {
        Self {
            sent: Vec::new(),
            response: json!({ "status": "created" }),
        }
    }

    pub fn last(&self) -> Option<&FieldDefinition> {
        self.sent.last().map(|(_, def)| def)
    }
}

impl Submitter for RecordingSubmitter {
    fn submit(
        &mut self,
        endpoint: &str,
        definition: &FieldDefinition,
    ) -> Result<Value, SubmitError> {
        self.sent.push((endpoint.to_string(), definition.clone()));
        Ok(self.response.clone())
    }
}

/// Fails every attempt with a fixed error.
pub struct FailingSubmitter {
    pub attempts: usize,
    pub error: SubmitError,
}

impl FailingSubmitter {
    pub fn new(error: SubmitError) -> Self {
        Self { attempts: 0, error }
    }
}

impl Submitter for FailingSubmitter {
    fn submit(&mut self, _endpoint: &str, _definition: &FieldDefinition) -> Result<Value, SubmitError> {
        self.attempts += 1;
        Err(self.error.clone())
    }
}
