//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the rendering core needs from the outside
//! world. The `inkline-adapters` crate provides implementations.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::Color;
use crate::error::InklineResult;

/// Which standard stream a write targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StreamKind {
    Stdout,
    Stderr,
}

impl StreamKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Stdout => "stdout",
            Self::Stderr => "stderr",
        }
    }
}

impl fmt::Display for StreamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Port for the terminal's color and I/O capabilities.
///
/// Implemented by:
/// - `inkline_adapters::console::AnsiConsole` (production)
/// - `inkline_adapters::console::MemoryConsole` (testing)
///
/// ## Design Notes
///
/// - The live terminal color is process-wide mutable state with no owner
///   lock; passing the port explicitly keeps that shared-mutation contract
///   visible in every signature instead of hiding it behind a global.
/// - Getters report the colors the console currently considers active.
///   ANSI terminals cannot be queried, so real adapters track what they
///   were last told (see the adapter crate).
/// - Methods take `&self`; adapters use interior mutability so a single
///   console can be shared by a scope and a renderer in the same call
///   stack. Nothing here is thread-safe by contract; concurrent callers
///   racing on set/restore are explicitly unsupported.
#[cfg_attr(test, mockall::automock)]
pub trait Console: Send + Sync {
    /// The currently active foreground color.
    fn foreground(&self) -> Color;

    /// Change the active foreground color.
    fn set_foreground(&self, color: Color) -> InklineResult<()>;

    /// The currently active background color.
    fn background(&self) -> Color;

    /// Change the active background color.
    fn set_background(&self, color: Color) -> InklineResult<()>;

    /// Revert both channels to the platform defaults.
    fn reset_colors(&self) -> InklineResult<()>;

    /// Write text to the given stream, unbuffered.
    fn write(&self, stream: StreamKind, text: &str) -> InklineResult<()>;

    /// Read one line from standard input, without the trailing newline.
    ///
    /// Returns an empty string at end of input.
    fn read_line(&self) -> InklineResult<String>;
}

impl<C: Console + ?Sized> Console for &C {
    fn foreground(&self) -> Color {
        (**self).foreground()
    }

    fn set_foreground(&self, color: Color) -> InklineResult<()> {
        (**self).set_foreground(color)
    }

    fn background(&self) -> Color {
        (**self).background()
    }

    fn set_background(&self, color: Color) -> InklineResult<()> {
        (**self).set_background(color)
    }

    fn reset_colors(&self) -> InklineResult<()> {
        (**self).reset_colors()
    }

    fn write(&self, stream: StreamKind, text: &str) -> InklineResult<()> {
        (**self).write(stream, text)
    }

    fn read_line(&self) -> InklineResult<String> {
        (**self).read_line()
    }
}
