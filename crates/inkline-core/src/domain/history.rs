//! Per-context history of superseded colors.
//!
//! Two independent LIFO stacks, one per color channel. An inline `Color`
//! directive pushes the color it replaces; the matching restore marker pops
//! it. The channels never interact: restoring a background cannot observe or
//! disturb the foreground stack.
//!
//! Ownership: exactly one rendering context (a one-shot facade call or a
//! fluent session) owns a history. One-shot calls start from an empty
//! history every time; a session keeps its history across calls until it is
//! explicitly reset.

use crate::domain::color::Color;

/// Stacks of previously-active colors, one per channel.
#[derive(Debug, Clone, Default)]
pub struct ColorHistory {
    foreground: Vec<Color>,
    background: Vec<Color>,
}

impl ColorHistory {
    /// Start with both stacks empty.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a foreground color superseded by an inline directive.
    pub fn push_foreground(&mut self, color: Color) {
        self.foreground.push(color);
    }

    /// Take back the most recently superseded foreground, if any.
    ///
    /// `None` means the stack was empty; by contract that is a no-op for
    /// the caller, never an error.
    pub fn pop_foreground(&mut self) -> Option<Color> {
        self.foreground.pop()
    }

    /// Record a background color superseded by an inline directive.
    pub fn push_background(&mut self, color: Color) {
        self.background.push(color);
    }

    /// Take back the most recently superseded background, if any.
    pub fn pop_background(&mut self) -> Option<Color> {
        self.background.pop()
    }

    /// Drop everything on both stacks.
    pub fn clear(&mut self) {
        self.foreground.clear();
        self.background.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.foreground.is_empty() && self.background.is_empty()
    }

    /// Number of foreground colors awaiting restore.
    pub fn foreground_depth(&self) -> usize {
        self.foreground.len()
    }

    /// Number of background colors awaiting restore.
    pub fn background_depth(&self) -> usize {
        self.background.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pop_is_lifo_per_channel() {
        let mut history = ColorHistory::new();
        history.push_foreground(Color::Red);
        history.push_foreground(Color::Blue);
        assert_eq!(history.pop_foreground(), Some(Color::Blue));
        assert_eq!(history.pop_foreground(), Some(Color::Red));
        assert_eq!(history.pop_foreground(), None);
    }

    #[test]
    fn channels_are_independent() {
        let mut history = ColorHistory::new();
        history.push_foreground(Color::Red);
        assert_eq!(history.pop_background(), None);
        assert_eq!(history.foreground_depth(), 1);
        history.push_background(Color::White);
        assert_eq!(history.pop_foreground(), Some(Color::Red));
        assert_eq!(history.pop_background(), Some(Color::White));
    }

    #[test]
    fn pop_on_empty_is_none_not_panic() {
        let mut history = ColorHistory::new();
        assert_eq!(history.pop_foreground(), None);
        assert_eq!(history.pop_background(), None);
    }

    #[test]
    fn clear_empties_both_stacks() {
        let mut history = ColorHistory::new();
        history.push_foreground(Color::Red);
        history.push_background(Color::Blue);
        history.clear();
        assert!(history.is_empty());
    }
}
