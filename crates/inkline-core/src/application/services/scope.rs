//! Color scope - save-now/restore-later bounding of color changes.
//!
//! A scope snapshots the console's foreground *and* background at open
//! (always both, so release restores a consistent pair), optionally applies
//! new colors, and writes the exact snapshot back when released, no matter
//! what happened in between. It is independent of, and sits outside, the
//! [`ColorHistory`](crate::domain::ColorHistory) mechanism, which handles
//! *inline* restores requested by directive markers during a render.

use tracing::warn;

use crate::{
    application::ports::Console,
    domain::Color,
    error::InklineResult,
};

/// A releasable handle bounding color changes to a lexical region.
///
/// Release happens on every exit path: call [`release`](Self::release) for
/// the error-propagating path, or let the guard drop. `Drop` restores
/// best-effort and logs a warning if the console refuses. Nesting is legal;
/// an inner scope restores to whatever the outer scope had set.
#[must_use = "dropping the scope immediately restores the colors it just set"]
pub struct ColorScope<'a> {
    console: &'a dyn Console,
    saved_foreground: Color,
    saved_background: Color,
    released: bool,
}

impl<'a> ColorScope<'a> {
    /// Snapshot the current colors, then apply any replacements.
    pub fn open(
        console: &'a dyn Console,
        new_foreground: Option<Color>,
        new_background: Option<Color>,
    ) -> InklineResult<Self> {
        let scope = Self {
            console,
            saved_foreground: console.foreground(),
            saved_background: console.background(),
            released: false,
        };
        if let Some(color) = new_foreground {
            scope.console.set_foreground(color)?;
        }
        if let Some(color) = new_background {
            scope.console.set_background(color)?;
        }
        Ok(scope)
    }

    /// Restore the snapshot and consume the scope.
    ///
    /// Safe to call exactly once by construction: the scope is gone
    /// afterwards, and `Drop` will not restore a second time.
    pub fn release(mut self) -> InklineResult<()> {
        self.released = true;
        self.restore()
    }

    /// The colors release will restore.
    pub fn saved_colors(&self) -> (Color, Color) {
        (self.saved_foreground, self.saved_background)
    }

    fn restore(&self) -> InklineResult<()> {
        self.console.set_foreground(self.saved_foreground)?;
        self.console.set_background(self.saved_background)?;
        Ok(())
    }
}

impl Drop for ColorScope<'_> {
    fn drop(&mut self) {
        if self.released {
            return;
        }
        if let Err(e) = self.restore() {
            warn!(error = %e, "color scope restore failed on drop");
        }
    }
}

/// Run a closure under temporary colors, restoring on every exit path.
///
/// The closure-based twin of [`ColorScope::open`]: restoration is
/// guaranteed whether `f` succeeds or fails, and a restore failure after a
/// successful body is reported to the caller.
pub fn with_colors<T>(
    console: &dyn Console,
    new_foreground: Option<Color>,
    new_background: Option<Color>,
    f: impl FnOnce() -> InklineResult<T>,
) -> InklineResult<T> {
    let scope = ColorScope::open(console, new_foreground, new_background)?;
    match f() {
        Ok(value) => {
            scope.release()?;
            Ok(value)
        }
        Err(e) => {
            // Drop restores best-effort; the body's error wins.
            drop(scope);
            Err(e)
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
