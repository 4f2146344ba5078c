//! Error types for fleet validation and parsing.

use thiserror::Error;

/// Errors returned while constructing fleet values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FleetDomainError {
    /// An identifier was blank or contained whitespace.
    #[error("invalid jet identifier '{0}'")]
    InvalidJetId(String),

    /// The tail number was blank or contained whitespace.
    #[error("invalid tail number '{0}'")]
    InvalidTailNumber(String),

    /// One or more required form fields were blank.
    #[error("required fields missing: {}", .0.join(", "))]
    RequiredFieldsMissing(Vec<&'static str>),
}

/// Error returned while parsing jet statuses.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown jet status: {0}")]
pub struct ParseJetStatusError(pub String);
