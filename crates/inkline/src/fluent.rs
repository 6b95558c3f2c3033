//! Chainable rendering session with persistent color state.
//!
//! Unlike the one-shot facade, a [`FluentConsole`] does not wrap each call
//! in a [`ColorScope`]: color changes persist from one chained call to the
//! next until the caller restores or resets explicitly. The session owns
//! one [`ColorHistory`], so an inline set in one call can be undone by a
//! restore directive three calls later.

use inkline_core::{
    application::{Console, StreamKind, services::{ColorScope, TemplateRenderer}},
    domain::{Color, ColorHistory, Message, Template, Value},
    error::InklineResult,
};

/// A fluent session over an owned console.
///
/// Every write returns `Result<&mut Self>` so chains propagate errors with
/// `?` while staying chainable:
///
/// ```rust,no_run
/// # use inkline::{AnsiConsole, Color, FluentConsole};
/// # fn demo() -> inkline::InklineResult<()> {
/// let mut console = FluentConsole::new(AnsiConsole::new());
/// console
///     .set_color(Color::Yellow)?
///     .write("warning: ")?
///     .restore_previous_color()?
///     .write_line("low disk space")?;
/// # Ok(())
/// # }
/// ```
pub struct FluentConsole<C: Console> {
    console: C,
    history: ColorHistory,
}

impl<C: Console> FluentConsole<C> {
    /// Start a session. The history begins empty.
    pub fn new(console: C) -> Self {
        Self {
            console,
            history: ColorHistory::new(),
        }
    }

    /// The underlying console.
    pub fn console(&self) -> &C {
        &self.console
    }

    /// End the session and take the console back.
    pub fn into_inner(self) -> C {
        self.console
    }

    // ── chainable writes (persistent colors) ──────────────────────────────

    /// Write to stdout. Color changes persist after the call.
    pub fn write(&mut self, message: impl Into<Message>) -> InklineResult<&mut Self> {
        self.render(StreamKind::Stdout, &message.into())?;
        Ok(self)
    }

    /// Write to stdout followed by a newline.
    pub fn write_line(&mut self, message: impl Into<Message>) -> InklineResult<&mut Self> {
        self.render(StreamKind::Stdout, &message.into())?;
        self.console.write(StreamKind::Stdout, "\n")?;
        Ok(self)
    }

    /// Write to stderr. Color changes persist after the call.
    pub fn ewrite(&mut self, message: impl Into<Message>) -> InklineResult<&mut Self> {
        self.render(StreamKind::Stderr, &message.into())?;
        Ok(self)
    }

    /// Write to stderr followed by a newline.
    pub fn ewrite_line(&mut self, message: impl Into<Message>) -> InklineResult<&mut Self> {
        self.render(StreamKind::Stderr, &message.into())?;
        self.console.write(StreamKind::Stderr, "\n")?;
        Ok(self)
    }

    // ── one-off colored writes (auto-restore, own transient history) ──────

    /// Write to stdout under a temporary foreground (and optional
    /// background); previous colors come back after this call. The
    /// session's own history is untouched.
    pub fn write_colored(
        &mut self,
        foreground: Color,
        background: Option<Color>,
        message: impl Into<Message>,
    ) -> InklineResult<&mut Self> {
        self.render_scoped(StreamKind::Stdout, foreground, background, &message.into())?;
        Ok(self)
    }

    /// [`write_colored`](Self::write_colored) followed by a newline.
    pub fn write_line_colored(
        &mut self,
        foreground: Color,
        background: Option<Color>,
        message: impl Into<Message>,
    ) -> InklineResult<&mut Self> {
        self.render_scoped(StreamKind::Stdout, foreground, background, &message.into())?;
        self.console.write(StreamKind::Stdout, "\n")?;
        Ok(self)
    }

    /// Colored write to stderr with auto-restore.
    pub fn ewrite_colored(
        &mut self,
        foreground: Color,
        background: Option<Color>,
        message: impl Into<Message>,
    ) -> InklineResult<&mut Self> {
        self.render_scoped(StreamKind::Stderr, foreground, background, &message.into())?;
        Ok(self)
    }

    /// Colored write to stderr with auto-restore, then a newline.
    pub fn ewrite_line_colored(
        &mut self,
        foreground: Color,
        background: Option<Color>,
        message: impl Into<Message>,
    ) -> InklineResult<&mut Self> {
        self.render_scoped(StreamKind::Stderr, foreground, background, &message.into())?;
        self.console.write(StreamKind::Stderr, "\n")?;
        Ok(self)
    }

    // ── color sugar (routed through the renderer) ─────────────────────────
    //
    // These synthesize one-placeholder templates so that the push/pop
    // bookkeeping stays centralized in the renderer and the sugar cannot
    // drift out of sync with inline directives.

    /// Change the foreground. Undo with
    /// [`restore_previous_color`](Self::restore_previous_color).
    pub fn set_color(&mut self, foreground: Color) -> InklineResult<&mut Self> {
        self.render(
            StreamKind::Stdout,
            &Message::Template(Template::new("{0}", vec![Value::Color(foreground)])),
        )?;
        Ok(self)
    }

    /// Restore the foreground most recently changed by
    /// [`set_color`](Self::set_color) or an inline directive.
    pub fn restore_previous_color(&mut self) -> InklineResult<&mut Self> {
        self.render(
            StreamKind::Stdout,
            &Message::Template(Template::new("{0}", vec![Value::RestoreColor])),
        )?;
        Ok(self)
    }

    /// Change the background. Undo with
    /// [`restore_previous_background_color`](Self::restore_previous_background_color).
    pub fn set_background_color(&mut self, background: Color) -> InklineResult<&mut Self> {
        self.render(
            StreamKind::Stdout,
            &Message::Template(Template::new("{0:bg}", vec![Value::Color(background)])),
        )?;
        Ok(self)
    }

    /// Restore the background most recently changed by
    /// [`set_background_color`](Self::set_background_color) or an inline
    /// directive.
    pub fn restore_previous_background_color(&mut self) -> InklineResult<&mut Self> {
        self.render(
            StreamKind::Stdout,
            &Message::Template(Template::new("{0}", vec![Value::RestoreBackground])),
        )?;
        Ok(self)
    }

    /// Revert both channels to the platform defaults (defers to the port).
    pub fn reset_color(&mut self) -> InklineResult<&mut Self> {
        self.console.reset_colors()?;
        Ok(self)
    }

    // ── passthroughs ──────────────────────────────────────────────────────

    /// Read one line from standard input.
    pub fn read_line(&self) -> InklineResult<String> {
        self.console.read_line()
    }

    /// Open a manual scope over the session's console.
    pub fn with_color(&self, foreground: Color) -> InklineResult<ColorScope<'_>> {
        ColorScope::open(&self.console, Some(foreground), None)
    }

    /// Open a manual scope applying both channels.
    pub fn with_colors(
        &self,
        foreground: Color,
        background: Color,
    ) -> InklineResult<ColorScope<'_>> {
        ColorScope::open(&self.console, Some(foreground), Some(background))
    }

    /// Open a manual scope applying only the background.
    pub fn with_background_color(&self, background: Color) -> InklineResult<ColorScope<'_>> {
        ColorScope::open(&self.console, None, Some(background))
    }

    // ── internals ─────────────────────────────────────────────────────────

    fn render(&mut self, stream: StreamKind, message: &Message) -> InklineResult<()> {
        TemplateRenderer::new(&self.console, &mut self.history).render(stream, message)
    }

    fn render_scoped(
        &mut self,
        stream: StreamKind,
        foreground: Color,
        background: Option<Color>,
        message: &Message,
    ) -> InklineResult<()> {
        let scope = ColorScope::open(&self.console, Some(foreground), background)?;
        // A transient history: inline restores inside a colored one-off see
        // only the sets from the same call, never the session's stacks.
        let mut history = ColorHistory::new();
        match TemplateRenderer::new(&self.console, &mut history).render(stream, message) {
            Ok(()) => scope.release(),
            Err(e) => Err(e),
        }
    }
}
