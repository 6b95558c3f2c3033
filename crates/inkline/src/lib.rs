//! # Inkline
//!
//! Colorized terminal output where the color changes live *inside* the text
//! template instead of being interleaved with print statements.
//!
//! A template carries positional placeholders (`{0}`, `{1:bg}`, ...). A
//! placeholder bound to a [`Color`] changes the terminal's foreground (or,
//! with the `bg`/`background` tag, its background) at exactly that point in
//! the text; the restore markers ([`Value::RestoreColor`],
//! [`Value::RestoreBackground`]) pop back to whatever was active before.
//! Nesting works, because each context keeps a LIFO history per channel.
//!
//! ## One-shot
//!
//! ```rust,no_run
//! use inkline::{AnsiConsole, Color, Value, template};
//!
//! # fn main() -> inkline::InklineResult<()> {
//! let console = AnsiConsole::new();
//!
//! // "error:" in red, the file name in cyan, everything else untouched.
//! inkline::write_line(
//!     &console,
//!     template!(
//!         "{0}error:{1} cannot open {2}{3}{4}",
//!         Color::Red,
//!         Value::RestoreColor,
//!         Color::Cyan,
//!         "data.csv",
//!         Value::RestoreColor,
//!     ),
//! )?;
//!
//! // Whole line in yellow, previous colors restored afterwards.
//! inkline::write_line_colored(&console, Color::Yellow, None, "deprecated flag")?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Chained
//!
//! ```rust,no_run
//! use inkline::{AnsiConsole, Color, FluentConsole};
//!
//! # fn main() -> inkline::InklineResult<()> {
//! let mut console = FluentConsole::new(AnsiConsole::new());
//! console
//!     .set_color(Color::Green)?
//!     .write("ok")?
//!     .restore_previous_color()?
//!     .write_line(" all 12 checks passed")?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Testing
//!
//! The whole pipeline runs against the [`Console`] port; swap in
//! [`MemoryConsole`] to assert on output and color changes without a
//! terminal.
//!
//! ## Limits
//!
//! The live terminal color is process-wide mutable state. Nothing here
//! locks it: concurrent writers racing on set/restore will interleave
//! incorrectly, and that is out of contract. Serialize externally.

mod facade;
mod fluent;
mod macros;

pub use facade::{
    ewrite, ewrite_colored, ewrite_line, ewrite_line_colored, read_line, with_background_color,
    with_color, with_colors, write, write_colored, write_line, write_line_colored,
};
pub use fluent::FluentConsole;

// Core model, re-exported so most users need only this crate.
pub use inkline_core::{
    application::{Console, StreamKind, services::ColorScope},
    domain::{Color, ColorHistory, Message, Template, Value},
    error::{ErrorCategory, InklineError, InklineResult},
};

// Adapters.
pub use inkline_adapters::{AnsiConsole, ColorChoice, ConsoleEvent, MemoryConsole};
