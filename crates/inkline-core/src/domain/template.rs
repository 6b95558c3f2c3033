//! Template aggregate and placeholder scanner.
//!
//! A [`Template`] pairs a literal pattern with an ordered list of bound
//! argument [`Value`]s. The pattern grammar is positional:
//!
//! ```text
//! placeholder  = "{" digits [":" format-chars] "}"
//! digits       = decimal argument index into the bound list
//! format-chars = any characters except "}"
//! escapes      = "{{" for a literal "{", "}}" for a literal "}"
//! ```
//!
//! Escapes are recognized only outside placeholder braces. An argument may
//! be referenced by any number of placeholders, in any order; side effects
//! are applied strictly in pattern order, never declaration order.
//!
//! Scanning is a complete pre-pass: [`scan`] either yields every segment of
//! the pattern or fails, so a malformed template is rejected before any
//! output is produced.

use crate::domain::error::TemplateError;
use crate::domain::value::Value;

/// An immutable pattern plus its bound arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    pattern: String,
    args: Vec<Value>,
}

impl Template {
    /// Pair a pattern with its arguments.
    ///
    /// No validation happens here; construction is infallible so templates
    /// can be built anywhere and passed around freely. Call
    /// [`Template::validate`] to pre-flight, or let the renderer surface
    /// errors at render time.
    pub fn new(pattern: impl Into<String>, args: Vec<Value>) -> Self {
        Self {
            pattern: pattern.into(),
            args,
        }
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn args(&self) -> &[Value] {
        &self.args
    }

    /// Scan the pattern and check every placeholder index against the bound
    /// argument count.
    ///
    /// # Errors
    ///
    /// Any [`TemplateError`] the scanner raises, or
    /// [`TemplateError::InvalidIndex`] when a placeholder addresses past the
    /// end of the argument list.
    pub fn validate(&self) -> Result<(), TemplateError> {
        for segment in scan(&self.pattern)? {
            if let Segment::Placeholder { index, .. } = segment {
                if index >= self.args.len() {
                    return Err(TemplateError::InvalidIndex {
                        token: index.to_string(),
                        position: 0,
                    });
                }
            }
        }
        Ok(())
    }
}

/// The explicit entry point for a write: either verbatim text or a template
/// to interpolate.
///
/// The split makes the caller's intent unmistakable: `Raw` is written
/// byte-for-byte with no scanning and no brace unescaping, while `Template`
/// goes through the full placeholder pipeline.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Verbatim text, written as-is.
    Raw(String),

    /// A pattern with bound arguments, interpolated by the renderer.
    Template(Template),
}

impl From<&str> for Message {
    fn from(s: &str) -> Self {
        Self::Raw(s.to_string())
    }
}

impl From<String> for Message {
    fn from(s: String) -> Self {
        Self::Raw(s)
    }
}

impl From<Template> for Message {
    fn from(t: Template) -> Self {
        Self::Template(t)
    }
}

/// One ordered piece of a scanned pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Literal text with `{{`/`}}` already unescaped.
    Literal(String),

    /// A placeholder reference, in pattern order.
    Placeholder {
        index: usize,
        format: Option<String>,
    },
}

/// Scan a pattern into ordered segments.
///
/// Fails on the first malformed construct; nothing is partially usable on
/// error. Empty literal runs are skipped, so two adjacent placeholders
/// produce no intervening `Literal`.
pub fn scan(pattern: &str) -> Result<Vec<Segment>, TemplateError> {
    let mut segments = Vec::new();
    let mut literal = String::new();
    let mut chars = pattern.char_indices().peekable();

    while let Some((position, c)) = chars.next() {
        match c {
            '{' => {
                // Doubled brace: literal '{'.
                if matches!(chars.peek(), Some((_, '{'))) {
                    chars.next();
                    literal.push('{');
                    continue;
                }
                if !literal.is_empty() {
                    segments.push(Segment::Literal(std::mem::take(&mut literal)));
                }
                segments.push(scan_placeholder(position, &mut chars)?);
            }
            '}' => {
                // Only '}}' is legal outside a placeholder.
                if matches!(chars.peek(), Some((_, '}'))) {
                    chars.next();
                    literal.push('}');
                } else {
                    return Err(TemplateError::UnmatchedBrace { position });
                }
            }
            other => literal.push(other),
        }
    }

    if !literal.is_empty() {
        segments.push(Segment::Literal(literal));
    }
    Ok(segments)
}

/// Parse one placeholder body; the opening `{` at `open` is already consumed.
fn scan_placeholder(
    open: usize,
    chars: &mut std::iter::Peekable<std::str::CharIndices<'_>>,
) -> Result<Segment, TemplateError> {
    let mut digits = String::new();
    while let Some((_, c)) = chars.peek() {
        if c.is_ascii_digit() {
            digits.push(*c);
            chars.next();
        } else {
            break;
        }
    }

    match chars.next() {
        Some((_, '}')) => {
            if digits.is_empty() {
                return Err(TemplateError::MissingIndex { position: open });
            }
            let index = parse_index(&digits, open)?;
            Ok(Segment::Placeholder {
                index,
                format: None,
            })
        }
        Some((_, ':')) => {
            if digits.is_empty() {
                return Err(TemplateError::MissingIndex { position: open });
            }
            let index = parse_index(&digits, open)?;
            let mut format = String::new();
            for (_, c) in chars.by_ref() {
                if c == '}' {
                    return Ok(Segment::Placeholder {
                        index,
                        format: Some(format),
                    });
                }
                format.push(c);
            }
            Err(TemplateError::UnterminatedPlaceholder { position: open })
        }
        Some((position, found)) => Err(TemplateError::UnexpectedChar { found, position }),
        None => Err(TemplateError::UnterminatedPlaceholder { position: open }),
    }
}

fn parse_index(digits: &str, position: usize) -> Result<usize, TemplateError> {
    digits
        .parse::<usize>()
        .map_err(|_| TemplateError::InvalidIndex {
            token: digits.to_string(),
            position,
        })
}
