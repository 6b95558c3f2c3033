//! In-memory console adapter for testing.

use std::{
    collections::VecDeque,
    sync::{Arc, RwLock},
};

use inkline_core::{
    application::{Console, StreamKind, error::RenderError},
    domain::Color,
    error::InklineResult,
};

/// One recorded port interaction, in call order.
///
/// The journal lets tests assert *ordering* (e.g. that a color change
/// happened between two writes), which the flat output buffers cannot show.
#[derive(Debug, Clone, PartialEq)]
pub enum ConsoleEvent {
    SetForeground(Color),
    SetBackground(Color),
    Reset,
    Write { stream: StreamKind, text: String },
}

/// In-memory console for testing.
#[derive(Debug, Clone, Default)]
pub struct MemoryConsole {
    inner: Arc<RwLock<MemoryConsoleInner>>,
}

#[derive(Debug)]
struct MemoryConsoleInner {
    foreground: Color,
    background: Color,
    stdout: String,
    stderr: String,
    input: VecDeque<String>,
    events: Vec<ConsoleEvent>,
}

impl Default for MemoryConsoleInner {
    fn default() -> Self {
        Self {
            foreground: Color::DEFAULT_FOREGROUND,
            background: Color::DEFAULT_BACKGROUND,
            stdout: String::new(),
            stderr: String::new(),
            input: VecDeque::new(),
            events: Vec::new(),
        }
    }
}

impl MemoryConsole {
    /// Create a new console in the default gray-on-black state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written to stdout so far (testing helper).
    pub fn output(&self) -> String {
        self.inner.read().map(|i| i.stdout.clone()).unwrap_or_default()
    }

    /// Everything written to stderr so far.
    pub fn error_output(&self) -> String {
        self.inner.read().map(|i| i.stderr.clone()).unwrap_or_default()
    }

    /// The ordered journal of every port interaction.
    pub fn events(&self) -> Vec<ConsoleEvent> {
        self.inner.read().map(|i| i.events.clone()).unwrap_or_default()
    }

    /// Queue a line for a later `read_line` call.
    pub fn push_input(&self, line: impl Into<String>) {
        if let Ok(mut inner) = self.inner.write() {
            inner.input.push_back(line.into());
        }
    }

    /// Reset buffers, journal, input and colors to the initial state.
    pub fn clear(&self) {
        if let Ok(mut inner) = self.inner.write() {
            *inner = MemoryConsoleInner::default();
        }
    }

    fn write_lock(&self) -> InklineResult<std::sync::RwLockWriteGuard<'_, MemoryConsoleInner>> {
        self.inner.write().map_err(|_| RenderError::LockPoisoned.into())
    }
}

impl Console for MemoryConsole {
    fn foreground(&self) -> Color {
        self.inner
            .read()
            .map(|i| i.foreground)
            .unwrap_or(Color::DEFAULT_FOREGROUND)
    }

    fn set_foreground(&self, color: Color) -> InklineResult<()> {
        let mut inner = self.write_lock()?;
        inner.foreground = color;
        inner.events.push(ConsoleEvent::SetForeground(color));
        Ok(())
    }

    fn background(&self) -> Color {
        self.inner
            .read()
            .map(|i| i.background)
            .unwrap_or(Color::DEFAULT_BACKGROUND)
    }

    fn set_background(&self, color: Color) -> InklineResult<()> {
        let mut inner = self.write_lock()?;
        inner.background = color;
        inner.events.push(ConsoleEvent::SetBackground(color));
        Ok(())
    }

    fn reset_colors(&self) -> InklineResult<()> {
        let mut inner = self.write_lock()?;
        inner.foreground = Color::DEFAULT_FOREGROUND;
        inner.background = Color::DEFAULT_BACKGROUND;
        inner.events.push(ConsoleEvent::Reset);
        Ok(())
    }

    fn write(&self, stream: StreamKind, text: &str) -> InklineResult<()> {
        let mut inner = self.write_lock()?;
        match stream {
            StreamKind::Stdout => inner.stdout.push_str(text),
            StreamKind::Stderr => inner.stderr.push_str(text),
        }
        inner.events.push(ConsoleEvent::Write {
            stream,
            text: text.to_string(),
        });
        Ok(())
    }

    fn read_line(&self) -> InklineResult<String> {
        let mut inner = self.write_lock()?;
        Ok(inner.input.pop_front().unwrap_or_default())
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
