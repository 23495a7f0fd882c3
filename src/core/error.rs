use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a CPF or CNPJ string was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum TaxIdError {
    /// Digit count after stripping separators is not 11 (CPF) or 14 (CNPJ).
    #[error("expected {expected} digits, got {found}")]
    WrongLength { expected: usize, found: usize },

    /// Every digit is the same (e.g. "00000000000").
    #[error("all digits are identical")]
    RepeatedDigits,

    /// The trailing check digits do not match the computed ones.
    #[error("check digits do not match")]
    CheckDigitMismatch,
}

/// Category of a field-level validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum ValidationErrorKind {
    InvalidCpf,
    InvalidCnpj,
    InvalidEmail,
    InvalidPostalCode,
    InvalidState,
    InvalidNumber,
    MissingField,
    TermsNotAccepted,
}

/// A single validation error with field name and message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Name of the offending form field (the backend key, e.g. "cnpj", "cep", "numero").
    pub field: String,
    /// Failure category, for callers that branch on it.
    pub kind: ValidationErrorKind,
    /// Human-readable error description.
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl ValidationError {
    pub fn new(
        field: impl Into<String>,
        kind: ValidationErrorKind,
        message: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            kind,
            message: message.into(),
        }
    }

    /// Shorthand for a required field left blank.
    pub fn missing(field: impl Into<String>) -> Self {
        Self::new(
            field,
            ValidationErrorKind::MissingField,
            "field is required",
        )
    }
}
