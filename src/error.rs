//! Error types shared across the rate engine
//!
//! Two failure classes cover the core: malformed rate text and values
//! outside the valid domain. A third variant covers non-finite numbers
//! supplied where an amount was required.

use thiserror::Error;

/// Specialized Result type for rate engine operations
pub type Result<T> = std::result::Result<T, RateError>;

/// Errors raised by the rate engine
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RateError {
    /// Rate text matched neither the nominal nor the effective grammar
    #[error("unrecognized rate format: {input:?} (expected e.g. \"24% NA/MV\" or \"6% TV\")")]
    Format {
        /// The offending input, trimmed
        input: String,
    },

    /// Value present but outside the valid domain
    #[error("{message}")]
    Validation {
        /// Description of the violated constraint
        message: String,
    },

    /// Non-finite number where an amount or rate value was required
    #[error("{message}")]
    Argument {
        /// Description of the expected argument
        message: String,
    },
}

impl RateError {
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        RateError::Validation {
            message: message.into(),
        }
    }

    pub(crate) fn argument(message: impl Into<String>) -> Self {
        RateError::Argument {
            message: message.into(),
        }
    }
}
