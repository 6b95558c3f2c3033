//! ANSI terminal adapter.
//!
//! Implements the [`Console`] port against a real terminal using SGR escape
//! sequences. ANSI terminals cannot report their current colors, so the
//! adapter tracks what it was last told, starting from the conventional
//! gray-on-black startup state.
//!
//! Every write is flushed immediately; this library never buffers, so
//! stdout/stderr interleaving stays ordered on a shared terminal.

use std::env;
use std::io::{self, IsTerminal, Write};
use std::str::FromStr;
use std::sync::Mutex;

use tracing::debug;

use inkline_core::{
    application::{Console, StreamKind, error::RenderError},
    domain::Color,
    error::InklineResult,
};

/// Color preferences of an end user.
///
/// `Auto` tries to do the right thing based on the environment: colors are
/// disabled when `NO_COLOR` is set, when `TERM=dumb`, or when neither
/// stdout nor stderr is attached to a terminal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ColorChoice {
    /// Emit colors whenever the environment allows it.
    #[default]
    Auto,
    /// Always emit ANSI color codes, terminal or not.
    Always,
    /// Never emit colors. Color state is still tracked so scopes and
    /// histories behave identically.
    Never,
}

impl FromStr for ColorChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "always" => Ok(Self::Always),
            "never" => Ok(Self::Never),
            other => Err(format!(
                "unrecognized color choice '{other}': valid choices are: always, never, auto"
            )),
        }
    }
}

impl ColorChoice {
    fn should_attempt_color(self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => env_allows_color(),
        }
    }
}

fn env_allows_color() -> bool {
    match env::var_os("TERM") {
        // No TERM at all is a weird environment that probably doesn't
        // support colors.
        None => return false,
        Some(k) => {
            if k == "dumb" {
                return false;
            }
        }
    }
    if env::var_os("NO_COLOR").is_some() {
        return false;
    }
    io::stdout().is_terminal() || io::stderr().is_terminal()
}

/// Tracked color state plus what has been announced to the terminal.
#[derive(Debug, Clone, Copy)]
struct ColorState {
    foreground: Color,
    background: Color,
}

impl Default for ColorState {
    fn default() -> Self {
        Self {
            foreground: Color::DEFAULT_FOREGROUND,
            background: Color::DEFAULT_BACKGROUND,
        }
    }
}

/// [`Console`] implementation for a live ANSI terminal.
#[derive(Debug)]
pub struct AnsiConsole {
    enabled: bool,
    /// SGR sequences go to the stream attached to a terminal; text goes to
    /// whichever stream the caller asked for.
    color_stream: StreamKind,
    state: Mutex<ColorState>,
}

impl AnsiConsole {
    /// Build with [`ColorChoice::Auto`].
    pub fn new() -> Self {
        Self::with_choice(ColorChoice::Auto)
    }

    /// Build with an explicit color preference.
    pub fn with_choice(choice: ColorChoice) -> Self {
        let color_stream = if !io::stdout().is_terminal() && io::stderr().is_terminal() {
            StreamKind::Stderr
        } else {
            StreamKind::Stdout
        };
        let enabled = choice.should_attempt_color();
        debug!(enabled, color_stream = %color_stream, "ansi console initialised");
        Self {
            enabled,
            color_stream,
            state: Mutex::new(ColorState::default()),
        }
    }

    /// Whether this console will actually emit escape sequences.
    pub fn colors_enabled(&self) -> bool {
        self.enabled
    }

    fn emit(&self, sequence: &str) -> InklineResult<()> {
        raw_write(self.color_stream, sequence)
    }

    fn lock_state(&self) -> InklineResult<std::sync::MutexGuard<'_, ColorState>> {
        self.state.lock().map_err(|_| RenderError::LockPoisoned.into())
    }
}

impl Default for AnsiConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl Console for AnsiConsole {
    fn foreground(&self) -> Color {
        self.state
            .lock()
            .map(|s| s.foreground)
            .unwrap_or(Color::DEFAULT_FOREGROUND)
    }

    fn set_foreground(&self, color: Color) -> InklineResult<()> {
        self.lock_state()?.foreground = color;
        if self.enabled {
            self.emit(&sgr(foreground_code(color)))?;
        }
        Ok(())
    }

    fn background(&self) -> Color {
        self.state
            .lock()
            .map(|s| s.background)
            .unwrap_or(Color::DEFAULT_BACKGROUND)
    }

    fn set_background(&self, color: Color) -> InklineResult<()> {
        self.lock_state()?.background = color;
        if self.enabled {
            self.emit(&sgr(background_code(color)))?;
        }
        Ok(())
    }

    fn reset_colors(&self) -> InklineResult<()> {
        *self.lock_state()? = ColorState::default();
        if self.enabled {
            self.emit("\x1B[0m")?;
        }
        Ok(())
    }

    fn write(&self, stream: StreamKind, text: &str) -> InklineResult<()> {
        raw_write(stream, text)
    }

    fn read_line(&self) -> InklineResult<String> {
        let mut line = String::new();
        io::stdin()
            .read_line(&mut line)
            .map_err(RenderError::from)?;
        // Strip the trailing newline; EOF leaves the empty string as-is.
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(line)
    }
}

/// Write and flush in one go; the port contract forbids buffering.
fn raw_write(stream: StreamKind, text: &str) -> InklineResult<()> {
    let result = match stream {
        StreamKind::Stdout => {
            let mut out = io::stdout().lock();
            out.write_all(text.as_bytes()).and_then(|()| out.flush())
        }
        StreamKind::Stderr => {
            let mut err = io::stderr().lock();
            err.write_all(text.as_bytes()).and_then(|()| err.flush())
        }
    };
    result.map_err(|e| RenderError::from(e).into())
}

fn sgr(code: u8) -> String {
    format!("\x1B[{code}m")
}

/// SGR parameter for a foreground color: 30–37 for the dark half,
/// 90–97 for the bright half.
fn foreground_code(color: Color) -> u8 {
    let base = if color.is_bright() { 90 } else { 30 };
    base + color_offset(color)
}

/// SGR parameter for a background color: foreground code + 10.
fn background_code(color: Color) -> u8 {
    foreground_code(color) + 10
}

/// Position within an eight-color half: black, red, green, yellow, blue,
/// magenta, cyan, white.
fn color_offset(color: Color) -> u8 {
    match color {
        Color::Black | Color::DarkGray => 0,
        Color::DarkRed | Color::Red => 1,
        Color::DarkGreen | Color::Green => 2,
        Color::DarkYellow | Color::Yellow => 3,
        Color::DarkBlue | Color::Blue => 4,
        Color::DarkMagenta | Color::Magenta => 5,
        Color::DarkCyan | Color::Cyan => 6,
        Color::Gray | Color::White => 7,
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
