use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::draft::{Address, CompanyInfo, RegistrationDraft, SubmissionPayload};
use super::error::{FlowError, SubmissionError};
use super::store::{DocumentId, DocumentStore};
use super::validate::{validate_address, validate_company};
use crate::core::{ValidationError, ValidationErrorKind};

/// Collection written to when none is configured.
pub const DEFAULT_COLLECTION: &str = "cadastros";

/// Stage of the registration wizard. Ordered; no skipping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegistrationStep {
    CompanyInfo,
    Address,
    Confirmation,
    /// Terminal: the payload was written. A new registration needs a new flow.
    Submitted,
}

impl RegistrationStep {
    /// Stable snake_case name, as used in serialized state.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::CompanyInfo => "company_info",
            Self::Address => "address",
            Self::Confirmation => "confirmation",
            Self::Submitted => "submitted",
        }
    }

    /// Whether no further transition is possible.
    pub fn is_terminal(self) -> bool {
        self == Self::Submitted
    }
}

impl fmt::Display for RegistrationStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Settings for a [`RegistrationFlow`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowConfig {
    collection: String,
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            collection: DEFAULT_COLLECTION.to_string(),
        }
    }
}

impl FlowConfig {
    /// Default settings (collection "cadastros").
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the collection the confirmed payload is written to (default: "cadastros").
    pub fn with_collection(mut self, collection: impl Into<String>) -> Self {
        self.collection = collection.into();
        self
    }

    /// Collection the confirmed payload is written to.
    pub fn collection(&self) -> &str {
        &self.collection
    }
}

/// Controller for one registration session.
///
/// Holds the current step and the accumulated [`RegistrationDraft`].
/// Forward transitions only happen when the step's data validates;
/// backward transitions never discard entered fields. Every transition
/// takes `&mut self`, so a session cannot be advanced from two places at
/// once.
#[derive(Debug, Clone)]
pub struct RegistrationFlow {
    config: FlowConfig,
    step: RegistrationStep,
    draft: RegistrationDraft,
}

impl Default for RegistrationFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl RegistrationFlow {
    /// Start a session at the company step with an empty draft.
    pub fn new() -> Self {
        Self::with_config(FlowConfig::default())
    }

    /// Start a session at the company step with the given settings.
    pub fn with_config(config: FlowConfig) -> Self {
        Self {
            config,
            step: RegistrationStep::CompanyInfo,
            draft: RegistrationDraft::default(),
        }
    }

    /// Rebuild a session from a saved draft.
    ///
    /// The draft must contain everything the target step depends on, and
    /// a submitted session cannot be resumed. Every step completed before
    /// `step` is validated again, exactly as if it had just been submitted.
    pub fn resume(
        config: FlowConfig,
        mut draft: RegistrationDraft,
        step: RegistrationStep,
    ) -> Result<Self, FlowError> {
        let consistent = match step {
            RegistrationStep::CompanyInfo => true,
            RegistrationStep::Address => draft.company.is_some(),
            RegistrationStep::Confirmation => draft.company.is_some() && draft.address.is_some(),
            RegistrationStep::Submitted => false,
        };
        if !consistent {
            return Err(FlowError::InvalidTransition {
                step,
                action: "resume",
            });
        }

        let mut errors = Vec::new();
        if step > RegistrationStep::CompanyInfo {
            if let Some(company) = draft.company.as_mut() {
                *company = company.normalized();
                errors.extend(validate_company(company));
            }
        }
        if step > RegistrationStep::Address {
            if let Some(address) = draft.address.as_mut() {
                *address = address.normalized();
                errors.extend(validate_address(address));
            }
        }
        if !errors.is_empty() {
            warn!(step = %step, errors = errors.len(), "saved draft rejected");
            return Err(FlowError::Validation(errors));
        }

        debug!(step = %step, "session resumed");
        Ok(Self {
            config,
            step,
            draft,
        })
    }

    /// The step the session is currently on.
    pub fn step(&self) -> RegistrationStep {
        self.step
    }

    /// Data entered so far; use it to pre-populate a re-entered step.
    pub fn draft(&self) -> &RegistrationDraft {
        &self.draft
    }

    /// Settings this session was started with.
    pub fn config(&self) -> &FlowConfig {
        &self.config
    }

    /// Preview of what will be written, once both data steps are complete.
    pub fn payload(&self) -> Option<SubmissionPayload> {
        SubmissionPayload::from_draft(&self.draft)
    }

    fn expect_step(&self, expected: RegistrationStep, action: &'static str) -> Result<(), FlowError> {
        if self.step == expected {
            Ok(())
        } else {
            Err(FlowError::InvalidTransition {
                step: self.step,
                action,
            })
        }
    }

    /// Company step → address step.
    pub fn submit_company(&mut self, company: CompanyInfo) -> Result<RegistrationStep, FlowError> {
        self.expect_step(RegistrationStep::CompanyInfo, "submit company data")?;

        let company = company.normalized();
        let errors = validate_company(&company);
        if !errors.is_empty() {
            warn!(step = %self.step, errors = errors.len(), "company data rejected");
            return Err(FlowError::Validation(errors));
        }

        self.draft = std::mem::take(&mut self.draft).with_company(company);
        self.step = RegistrationStep::Address;
        debug!(step = %self.step, "company data accepted");
        Ok(self.step)
    }

    /// Address step → confirmation step.
    pub fn submit_address(&mut self, address: Address) -> Result<RegistrationStep, FlowError> {
        self.expect_step(RegistrationStep::Address, "submit address")?;

        let address = address.normalized();
        let errors = validate_address(&address);
        if !errors.is_empty() {
            warn!(step = %self.step, errors = errors.len(), "address rejected");
            return Err(FlowError::Validation(errors));
        }

        self.draft = std::mem::take(&mut self.draft).with_address(address);
        self.step = RegistrationStep::Confirmation;
        debug!(step = %self.step, "address accepted");
        Ok(self.step)
    }

    /// Go back one step, keeping every entered field.
    ///
    /// Leaving the confirmation step withdraws the terms acceptance; it has
    /// to be given again on return.
    pub fn back(&mut self) -> Result<RegistrationStep, FlowError> {
        self.step = match self.step {
            RegistrationStep::Address => RegistrationStep::CompanyInfo,
            RegistrationStep::Confirmation => {
                self.draft.terms_accepted = false;
                RegistrationStep::Address
            }
            step => {
                return Err(FlowError::InvalidTransition {
                    step,
                    action: "go back",
                });
            }
        };
        debug!(step = %self.step, "moved back");
        Ok(self.step)
    }

    /// Record the terms-and-conditions checkbox.
    pub fn accept_terms(&mut self, accepted: bool) -> Result<(), FlowError> {
        self.expect_step(RegistrationStep::Confirmation, "accept terms")?;
        self.draft.terms_accepted = accepted;
        Ok(())
    }

    /// Confirmation step → submitted.
    ///
    /// Writes the payload to `store` as one document. On success the draft
    /// is cleared and the flow becomes terminal. On failure the flow stays
    /// at confirmation with the draft intact, so the call can be retried.
    pub async fn submit<S: DocumentStore>(&mut self, store: &S) -> Result<DocumentId, FlowError> {
        self.expect_step(RegistrationStep::Confirmation, "submit")?;

        if !self.draft.terms_accepted {
            return Err(FlowError::Validation(vec![ValidationError::new(
                "aceite",
                ValidationErrorKind::TermsNotAccepted,
                "terms and conditions must be accepted",
            )]));
        }

        let payload = SubmissionPayload::from_draft(&self.draft).ok_or(
            FlowError::InvalidTransition {
                step: self.step,
                action: "submit an incomplete draft",
            },
        )?;
        let document = payload
            .to_document()
            .map_err(|e| SubmissionError::Encode(e.to_string()))?;

        match store.create(&self.config.collection, document).await {
            Ok(id) => {
                info!(collection = %self.config.collection, id = %id, "registration submitted");
                self.step = RegistrationStep::Submitted;
                self.draft = RegistrationDraft::default();
                Ok(id)
            }
            Err(e) => {
                warn!(collection = %self.config.collection, error = %e, "registration submit failed");
                Err(SubmissionError::Store(e).into())
            }
        }
    }
}
