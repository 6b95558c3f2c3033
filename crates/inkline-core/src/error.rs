//! Unified error handling for Inkline Core.
//!
//! This module provides a unified error type that wraps domain and
//! application errors, with a category and user-actionable suggestions.

use thiserror::Error;

use crate::application::error::RenderError;
use crate::domain::error::TemplateError;

/// Root error type for Inkline Core operations.
///
/// This enum wraps all possible errors that can occur when rendering,
/// providing a unified interface for error handling.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InklineError {
    /// Errors in the template text itself (raised at scan time).
    #[error("Template error: {0}")]
    Template(#[from] TemplateError),

    /// Errors while driving a render against the console.
    #[error("Render error: {0}")]
    Render(#[from] RenderError),
}

impl InklineError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Template(e) => e.suggestions(),
            Self::Render(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Template(e) => e.category(),
            Self::Render(e) => e.category(),
        }
    }
}

/// Error categories for caller-side display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Malformed template text.
    Syntax,
    /// A placeholder and its bound arguments disagree.
    Arguments,
    /// The terminal or stream failed.
    Console,
    /// Unexpected internal state (bugs).
    Internal,
}

/// Convenient result type alias.
pub type InklineResult<T> = Result<T, InklineError>;
