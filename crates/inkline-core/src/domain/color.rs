//! Domain value object: the console color palette.
//!
//! # Design
//!
//! `Color` is a pure value type: `Copy`, equality-by-value, no identity.
//! It holds NO terminal knowledge. How a color is realised on a concrete
//! terminal (ANSI SGR codes, state tracking) lives entirely in the adapter
//! crate. This file's only job is to define the palette, its string
//! representations, and the `FromStr` parser.

use crate::domain::error::TemplateError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the sixteen classic console colors.
///
/// The palette follows the traditional console split: eight "dark" colors
/// plus their bright counterparts, with `Gray` as the conventional default
/// foreground and `Black` as the conventional default background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Color {
    Black,
    DarkBlue,
    DarkGreen,
    DarkCyan,
    DarkRed,
    DarkMagenta,
    DarkYellow,
    Gray,
    DarkGray,
    Blue,
    Green,
    Cyan,
    Red,
    Magenta,
    Yellow,
    White,
}

impl Color {
    /// The conventional startup foreground on a fresh terminal.
    pub const DEFAULT_FOREGROUND: Color = Color::Gray;

    /// The conventional startup background on a fresh terminal.
    pub const DEFAULT_BACKGROUND: Color = Color::Black;

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::DarkBlue => "dark-blue",
            Self::DarkGreen => "dark-green",
            Self::DarkCyan => "dark-cyan",
            Self::DarkRed => "dark-red",
            Self::DarkMagenta => "dark-magenta",
            Self::DarkYellow => "dark-yellow",
            Self::Gray => "gray",
            Self::DarkGray => "dark-gray",
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Cyan => "cyan",
            Self::Red => "red",
            Self::Magenta => "magenta",
            Self::Yellow => "yellow",
            Self::White => "white",
        }
    }

    /// Whether this is one of the eight bright palette entries.
    ///
    /// Adapters use this to pick between the normal and high-intensity
    /// halves of the terminal palette.
    pub const fn is_bright(&self) -> bool {
        matches!(
            self,
            Self::DarkGray
                | Self::Blue
                | Self::Green
                | Self::Cyan
                | Self::Red
                | Self::Magenta
                | Self::Yellow
                | Self::White
        )
    }

    /// All palette entries, in declaration order.
    pub const ALL: [Color; 16] = [
        Self::Black,
        Self::DarkBlue,
        Self::DarkGreen,
        Self::DarkCyan,
        Self::DarkRed,
        Self::DarkMagenta,
        Self::DarkYellow,
        Self::Gray,
        Self::DarkGray,
        Self::Blue,
        Self::Green,
        Self::Cyan,
        Self::Red,
        Self::Magenta,
        Self::Yellow,
        Self::White,
    ];
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Color {
    type Err = TemplateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "black" => Ok(Self::Black),
            "dark-blue" | "darkblue" => Ok(Self::DarkBlue),
            "dark-green" | "darkgreen" => Ok(Self::DarkGreen),
            "dark-cyan" | "darkcyan" => Ok(Self::DarkCyan),
            "dark-red" | "darkred" => Ok(Self::DarkRed),
            "dark-magenta" | "darkmagenta" => Ok(Self::DarkMagenta),
            "dark-yellow" | "darkyellow" => Ok(Self::DarkYellow),
            "gray" | "grey" => Ok(Self::Gray),
            "dark-gray" | "darkgray" | "dark-grey" | "darkgrey" => Ok(Self::DarkGray),
            "blue" => Ok(Self::Blue),
            "green" => Ok(Self::Green),
            "cyan" => Ok(Self::Cyan),
            "red" => Ok(Self::Red),
            "magenta" => Ok(Self::Magenta),
            "yellow" => Ok(Self::Yellow),
            "white" => Ok(Self::White),
            other => Err(TemplateError::UnknownColor {
                name: other.to_string(),
            }),
        }
    }
}
