use thiserror::Error;

use crate::domain::order::PackSize;

/// Failures in core calculations. Degenerate inputs (zero order value,
/// zero budget, exhausted budget) are not errors; they resolve to
/// well-defined zero results in the engine.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("no price for requested pack size `{size}`")]
    MissingPrice { size: PackSize },
    #[error("invalid price table: {0}")]
    InvalidPriceTable(String),
    #[error("domain invariant violation: {0}")]
    InvariantViolation(String),
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error("configuration failure: {0}")]
    Configuration(String),
    #[error("i/o failure: {0}")]
    Io(String),
}

impl ApplicationError {
    /// Message safe to surface to an operator without internal detail.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Domain(_) => "The order could not be processed. Check inputs and try again.",
            Self::Configuration(_) => "The configuration is invalid. Run `offerly config`.",
            Self::Io(_) => "A file could not be read or written.",
        }
    }
}
