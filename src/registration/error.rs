use thiserror::Error;

use super::flow::RegistrationStep;
use super::store::StoreError;
use crate::core::{ValidationError, ValidationErrorKind};

/// Errors returned by [`RegistrationFlow`](super::RegistrationFlow) transitions.
///
/// None of these are fatal: the flow stays on its current step and the
/// caller may correct the input or retry.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FlowError {
    /// The step's data failed local validation. Every failing field is listed.
    #[error("validation failed: {}", join(.0))]
    Validation(Vec<ValidationError>),

    /// The requested action is not available from the current step.
    #[error("cannot {action} from step {step}")]
    InvalidTransition {
        step: RegistrationStep,
        action: &'static str,
    },

    /// The final write to the document store failed; retry is possible.
    #[error(transparent)]
    Submission(#[from] SubmissionError),
}

impl FlowError {
    /// The validation errors carried by this error, if any.
    pub fn validation_errors(&self) -> &[ValidationError] {
        match self {
            Self::Validation(errors) => errors,
            _ => &[],
        }
    }

    /// Whether any validation error has the given kind.
    pub fn has_kind(&self, kind: ValidationErrorKind) -> bool {
        self.validation_errors().iter().any(|e| e.kind == kind)
    }
}

/// Failure of the confirmed submission write.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SubmissionError {
    #[error("submission failed: {0}")]
    Store(#[from] StoreError),

    #[error("submission payload could not be encoded: {0}")]
    Encode(String),
}

fn join(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
