pub mod button;
pub mod config;
pub mod error;
pub mod submit;

pub use button::{ButtonAction, ButtonEvent, ButtonProps, ButtonStyle};
pub use config::BuilderConfig;
pub use error::EngineError;
pub use submit::{SubmitError, SubmitOutcome, Submitter};

use field_builder_core::{
    ChoiceOrder, ChoicesError, FieldDraft, FieldType, LabelError, SubmissionId,
    ValidationLimits, validate_choices_with, validate_label,
};
use field_builder_storage::{KeyValueStore, StorageError, clear_draft, load_draft, save_draft};
use tracing::{debug, error, info, warn};

/// What a button click led to.
#[derive(Debug, Clone, PartialEq)]
pub enum ButtonResult {
    Submitted(SubmitOutcome),
    Cleared,
}

/// Editor for a single field definition.
///
/// Owns the draft, the current validation errors and the in-flight flag.
/// Every mutation is written through to the store so an interrupted edit can
/// be resumed with [`FieldBuilder::open`].
pub struct FieldBuilder<S: KeyValueStore, T: Submitter> {
    config: BuilderConfig,
    limits: ValidationLimits,
    store: S,
    submitter: T,
    draft: FieldDraft,
    label_error: Option<LabelError>,
    choices_error: Option<ChoicesError>,
    flagged_choices: Vec<String>,
    submitting: bool,
}

impl<S: KeyValueStore, T: Submitter> FieldBuilder<S, T> {
    /// Restore the draft saved under the configured key, or start from the
    /// default definition. An unreadable snapshot is discarded with a warning.
    pub fn open(config: BuilderConfig, store: S, submitter: T) -> Result<Self, EngineError> {
        let draft = match load_draft(&store, &config.storage_key) {
            Ok(Some(draft)) => draft,
            Ok(None) => FieldDraft::default(),
            Err(StorageError::Serialization(e)) => {
                warn!(key = %config.storage_key, %e, "discarding unreadable draft snapshot");
                FieldDraft::default()
            }
            Err(e) => return Err(e.into()),
        };

        let mut builder = Self {
            limits: config.limits(),
            config,
            store,
            submitter,
            draft,
            label_error: None,
            choices_error: None,
            flagged_choices: Vec::new(),
            submitting: false,
        };
        if !builder.draft.choices_text.is_empty() {
            builder.validate_choices()?;
        }
        Ok(builder)
    }

    pub fn config(&self) -> &BuilderConfig {
        &self.config
    }

    pub fn draft(&self) -> &FieldDraft {
        &self.draft
    }

    pub fn label_error(&self) -> Option<&LabelError> {
        self.label_error.as_ref()
    }

    pub fn choices_error(&self) -> Option<&ChoicesError> {
        self.choices_error.as_ref()
    }

    /// Choices over the length limit, for highlighting.
    pub fn flagged_choices(&self) -> &[String] {
        &self.flagged_choices
    }

    /// True only while [`FieldBuilder::submit`] is running. Submission is a
    /// single synchronous call, so callers holding the builder between calls
    /// always observe `false`; the flag is not a lock.
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn submitter(&self) -> &T {
        &self.submitter
    }

    pub fn into_parts(self) -> (S, T) {
        (self.store, self.submitter)
    }

    pub fn set_label(&mut self, label: impl Into<String>) -> Result<(), EngineError> {
        self.draft.label = label.into();
        self.validate_label()
    }

    /// Replace the raw choices text. The default value is not reconciled
    /// here; a default the user deletes from the text is restored on submit.
    pub fn set_choices(&mut self, text: impl Into<String>) -> Result<(), EngineError> {
        self.draft.choices_text = text.into();
        self.validate_choices()
    }

    /// Surrounding whitespace is dropped so the default can match a choice
    /// verbatim.
    pub fn set_default_value(&mut self, value: impl Into<String>) -> Result<(), EngineError> {
        self.draft.default_value = value.into().trim().to_string();
        self.validate_default_value()?;
        self.validate_choices()
    }

    pub fn set_required(&mut self, required: bool) -> Result<(), EngineError> {
        self.draft.is_required = required;
        self.persist()
    }

    pub fn set_field_type(&mut self, field_type: FieldType) -> Result<(), EngineError> {
        self.draft.field_type = field_type;
        self.persist()
    }

    pub fn set_order(&mut self, order: ChoiceOrder) -> Result<(), EngineError> {
        self.draft.order = order;
        self.persist()
    }

    pub fn validate_label(&mut self) -> Result<(), EngineError> {
        self.label_error = validate_label(&self.draft.label);
        self.persist()
    }

    /// Recompute the choices error and flagged entries, then snapshot. The
    /// snapshot is taken even when the text did not change.
    pub fn validate_choices(&mut self) -> Result<(), EngineError> {
        let report = validate_choices_with(&self.draft.choices_text, &self.limits);
        self.choices_error = report.error;
        self.flagged_choices = report.flagged;
        self.persist()
    }

    pub fn validate_default_value(&mut self) -> Result<(), EngineError> {
        self.draft.reconcile_default();
        self.persist()
    }

    /// Validate and hand the definition to the submitter.
    ///
    /// Validation failures and submitter failures are reported through the
    /// returned outcome; `Err` means the store could not be written.
    pub fn submit(&mut self) -> Result<SubmitOutcome, EngineError> {
        self.submitting = true;
        let outcome = self.submit_inner();
        self.submitting = false;
        outcome
    }

    fn submit_inner(&mut self) -> Result<SubmitOutcome, EngineError> {
        self.validate_label()?;
        self.validate_choices()?;
        if self.label_error.is_some() || self.choices_error.is_some() {
            return Ok(self.invalid_outcome());
        }

        let id = SubmissionId::new();
        let mut choices = self.draft.choices();

        // A snapshot written elsewhere may still carry a padded default.
        let default_value = self.draft.default_value.trim().to_string();
        self.draft.default_value = default_value.clone();

        if !default_value.is_empty() && !choices.contains(&default_value) {
            error!(%id, %default_value, "default value was not included in the choices");
            info!(%id, "adding the default value to the choices");
            choices.push(default_value.clone());
            self.draft.choices_text = format!("{default_value}\n{}", self.draft.choices_text);

            // The healed list must obey the same limits as a typed one.
            self.validate_choices()?;
            if self.choices_error.is_some() {
                return Ok(self.invalid_outcome());
            }
        }

        self.persist()?;

        let mut definition = self.draft.to_definition();
        definition.choices = choices;

        match self.submitter.submit(&self.config.endpoint, &definition) {
            Ok(response) => {
                info!(%id, endpoint = %self.config.endpoint, "field definition submitted");
                debug!(%id, %response, ?definition, "submission response");
                Ok(SubmitOutcome::Accepted {
                    id,
                    definition,
                    response,
                })
            }
            Err(e) => {
                warn!(%id, endpoint = %self.config.endpoint, %e, "field definition submission failed");
                Ok(SubmitOutcome::Failed { id, error: e })
            }
        }
    }

    fn invalid_outcome(&self) -> SubmitOutcome {
        debug!(
            label_error = ?self.label_error,
            choices_error = ?self.choices_error,
            "submission blocked by validation"
        );
        SubmitOutcome::Invalid {
            label_error: self.label_error.clone(),
            choices_error: self.choices_error.clone(),
        }
    }

    /// Back to the default definition with no errors, and forget the stored
    /// snapshot. Nothing is revalidated.
    pub fn clear_form(&mut self) -> Result<(), EngineError> {
        self.draft = FieldDraft::default();
        self.label_error = None;
        self.choices_error = None;
        self.flagged_choices.clear();
        clear_draft(&mut self.store, &self.config.storage_key)?;
        Ok(())
    }

    pub fn save_button(&self) -> ButtonProps {
        ButtonProps::new("Save changes").loading(self.submitting)
    }

    pub fn cancel_button(&self) -> ButtonProps {
        ButtonProps::new("Cancel").color("btn-danger")
    }

    pub fn handle_event(&mut self, event: ButtonEvent) -> Result<ButtonResult, EngineError> {
        match event {
            ButtonEvent::Clicked(ButtonAction::Save) => Ok(ButtonResult::Submitted(self.submit()?)),
            ButtonEvent::Clicked(ButtonAction::Cancel) => {
                self.clear_form()?;
                Ok(ButtonResult::Cleared)
            }
        }
    }

    fn persist(&mut self) -> Result<(), EngineError> {
        save_draft(&mut self.store, &self.config.storage_key, &self.draft)?;
        Ok(())
    }
}
