//! Domain errors: everything that can be wrong with a template itself.
//!
//! All variants are raised at scan time, before a single byte reaches the
//! console: a malformed template must never produce partial output.

use thiserror::Error;

use crate::error::ErrorCategory;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (templates are often retried after an edit)
/// - Categorizable (for caller-side display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// A `{` was opened but the pattern ended before the matching `}`.
    #[error("unterminated placeholder starting at byte {position}")]
    UnterminatedPlaceholder { position: usize },

    /// A lone `}` outside any placeholder. Literal braces must be doubled.
    #[error("unmatched '}}' at byte {position}; write '}}}}' for a literal brace")]
    UnmatchedBrace { position: usize },

    /// `{}` or `{:fmt}`: a placeholder with no argument index.
    #[error("placeholder at byte {position} has no argument index")]
    MissingIndex { position: usize },

    /// The index digits could not be parsed into a position.
    #[error("invalid argument index '{token}' at byte {position}")]
    InvalidIndex { token: String, position: usize },

    /// Something other than `:` or `}` followed the index digits.
    #[error("unexpected character '{found}' in placeholder at byte {position}")]
    UnexpectedChar { found: char, position: usize },

    /// A color name failed to parse (surfaces from `Color::from_str`).
    #[error("unknown color name: {name}")]
    UnknownColor { name: String },
}

impl TemplateError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::UnterminatedPlaceholder { position } => vec![
                format!("The '{{' at byte {} is never closed", position),
                "Close the placeholder with '}' or escape the brace as '{{'".into(),
            ],
            Self::UnmatchedBrace { .. } => {
                vec!["Escape literal braces by doubling them: '{{' and '}}'".into()]
            }
            Self::MissingIndex { .. } => vec![
                "Placeholders are positional: write '{0}', '{1}', ...".into(),
                "An empty '{}' is not a valid placeholder".into(),
            ],
            Self::InvalidIndex { token, .. } => vec![format!(
                "'{}' is not a usable argument position; use a small decimal index",
                token
            )],
            Self::UnexpectedChar { .. } => vec![
                "After the index, only ':format' or the closing '}' may follow".into(),
            ],
            Self::UnknownColor { name } => vec![
                format!("No palette entry is named '{}'", name),
                "Valid names are the sixteen console colors, e.g. 'red', 'dark-cyan'".into(),
            ],
        }
    }

    /// Error category for caller-side display styling.
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::Syntax
    }
}
