//! One-shot convenience surface.
//!
//! Pure delegation: every function builds the collaborators (a fresh
//! [`ColorHistory`], optionally a [`ColorScope`]) and hands the message to
//! the single [`TemplateRenderer`]. No parsing or dispatch logic lives here.
//!
//! Two families:
//!
//! - **Plain** (`write`, `write_line`, `ewrite`, `ewrite_line`): inline
//!   directives only. Color changes made by the template persist after the
//!   call; there is no wrapping scope.
//! - **Colored** (`*_colored`): an explicit foreground (and optional
//!   background) is applied for the duration of the single call and the
//!   previous colors are restored afterwards, on success and on error.

use inkline_core::{
    application::{Console, StreamKind, services::{ColorScope, TemplateRenderer}},
    domain::{Color, ColorHistory, Message},
    error::InklineResult,
};

/// Write to stdout. Inline directives only; no auto-restore.
pub fn write(console: &dyn Console, message: impl Into<Message>) -> InklineResult<()> {
    inner_write(console, StreamKind::Stdout, &message.into())
}

/// Write to stdout followed by a newline. Inline directives only.
pub fn write_line(console: &dyn Console, message: impl Into<Message>) -> InklineResult<()> {
    inner_write(console, StreamKind::Stdout, &message.into())?;
    console.write(StreamKind::Stdout, "\n")
}

/// Write to stderr. Inline directives only; no auto-restore.
pub fn ewrite(console: &dyn Console, message: impl Into<Message>) -> InklineResult<()> {
    inner_write(console, StreamKind::Stderr, &message.into())
}

/// Write to stderr followed by a newline. Inline directives only.
pub fn ewrite_line(console: &dyn Console, message: impl Into<Message>) -> InklineResult<()> {
    inner_write(console, StreamKind::Stderr, &message.into())?;
    console.write(StreamKind::Stderr, "\n")
}

/// Write to stdout under a temporary foreground (and optional background),
/// restoring the previous colors after this one call.
pub fn write_colored(
    console: &dyn Console,
    foreground: Color,
    background: Option<Color>,
    message: impl Into<Message>,
) -> InklineResult<()> {
    inner_write_scoped(
        console,
        StreamKind::Stdout,
        foreground,
        background,
        &message.into(),
    )
}

/// [`write_colored`] followed by a newline (written after the restore, in
/// the caller's colors).
pub fn write_line_colored(
    console: &dyn Console,
    foreground: Color,
    background: Option<Color>,
    message: impl Into<Message>,
) -> InklineResult<()> {
    inner_write_scoped(
        console,
        StreamKind::Stdout,
        foreground,
        background,
        &message.into(),
    )?;
    console.write(StreamKind::Stdout, "\n")
}

/// Write to stderr under a temporary foreground (and optional background).
pub fn ewrite_colored(
    console: &dyn Console,
    foreground: Color,
    background: Option<Color>,
    message: impl Into<Message>,
) -> InklineResult<()> {
    inner_write_scoped(
        console,
        StreamKind::Stderr,
        foreground,
        background,
        &message.into(),
    )
}

/// [`ewrite_colored`] followed by a newline.
pub fn ewrite_line_colored(
    console: &dyn Console,
    foreground: Color,
    background: Option<Color>,
    message: impl Into<Message>,
) -> InklineResult<()> {
    inner_write_scoped(
        console,
        StreamKind::Stderr,
        foreground,
        background,
        &message.into(),
    )?;
    console.write(StreamKind::Stderr, "\n")
}

/// Open a scope that applies a foreground now and restores the previous
/// colors when released (or dropped).
pub fn with_color(console: &dyn Console, foreground: Color) -> InklineResult<ColorScope<'_>> {
    ColorScope::open(console, Some(foreground), None)
}

/// Open a scope applying both a foreground and a background.
pub fn with_colors(
    console: &dyn Console,
    foreground: Color,
    background: Color,
) -> InklineResult<ColorScope<'_>> {
    ColorScope::open(console, Some(foreground), Some(background))
}

/// Open a scope applying only a background.
pub fn with_background_color(
    console: &dyn Console,
    background: Color,
) -> InklineResult<ColorScope<'_>> {
    ColorScope::open(console, None, Some(background))
}

/// Read one line from standard input.
pub fn read_line(console: &dyn Console) -> InklineResult<String> {
    console.read_line()
}

fn inner_write(
    console: &dyn Console,
    stream: StreamKind,
    message: &Message,
) -> InklineResult<()> {
    let mut history = ColorHistory::new();
    TemplateRenderer::new(console, &mut history).render(stream, message)
}

fn inner_write_scoped(
    console: &dyn Console,
    stream: StreamKind,
    foreground: Color,
    background: Option<Color>,
    message: &Message,
) -> InklineResult<()> {
    let scope = ColorScope::open(console, Some(foreground), background)?;
    match inner_write(console, stream, message) {
        Ok(()) => scope.release(),
        // Drop restores best-effort; the render error wins.
        Err(e) => Err(e),
    }
}
