//! Application layer errors.
//!
//! These represent failures while driving a render, not defects in the
//! template text. Template text defects are `TemplateError` from
//! `crate::domain` and surface before any output.

use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while rendering against a console.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// A placeholder addressed past the end of the bound argument list.
    ///
    /// Raised when the placeholder is reached, in pattern order. Output
    /// written for earlier segments has already hit the stream (streaming
    /// output is not transactional), but the failing placeholder performs no
    /// console mutation.
    #[error("placeholder index {index} out of range: {available} argument(s) bound")]
    ArgumentOutOfRange { index: usize, available: usize },

    /// The console port failed (stream closed, terminal gone, ...).
    ///
    /// Propagated to the caller with no retry and no suppression.
    #[error("console failure: {reason}")]
    ConsoleFailure { reason: String },

    /// An adapter's interior lock was poisoned.
    #[error("console state lock poisoned")]
    LockPoisoned,
}

impl RenderError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ArgumentOutOfRange { index, available } => vec![
                format!(
                    "The template references argument {} but only {} were bound",
                    index, available
                ),
                "Bind more arguments or fix the placeholder index".into(),
            ],
            Self::ConsoleFailure { .. } => vec![
                "The terminal or stream rejected the operation".into(),
                "Check that stdout/stderr are still open".into(),
            ],
            Self::LockPoisoned => vec![
                "A previous panic left the console adapter unusable".into(),
                "Recreate the console".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ArgumentOutOfRange { .. } => ErrorCategory::Arguments,
            Self::ConsoleFailure { .. } => ErrorCategory::Console,
            Self::LockPoisoned => ErrorCategory::Internal,
        }
    }
}

impl From<std::io::Error> for RenderError {
    fn from(e: std::io::Error) -> Self {
        Self::ConsoleFailure {
            reason: e.to_string(),
        }
    }
}
