//! Plain text screen implementation.
//!
//! Provides a no-op implementation of the Screen trait for terminals
//! that do not support ANSI escape sequences.

use super::{Color, Screen};

/// Plain text screen implementation (no ANSI support).
///
/// All methods return empty strings, so styled output degrades to the bare
/// text.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainScreen;

impl PlainScreen {
    /// Create a new plain screen.
    pub fn new() -> Self {
        Self
    }
}

impl Screen for PlainScreen {
    fn fg(&self, _color: Color) -> String {
        String::new()
    }

    fn bold(&self) -> String {
        String::new()
    }

    fn dim(&self) -> String {
        String::new()
    }

    fn italic(&self) -> String {
        String::new()
    }

    fn underline(&self) -> String {
        String::new()
    }

    fn reverse(&self) -> String {
        String::new()
    }

    fn strikethrough(&self) -> String {
        String::new()
    }

    fn reset(&self) -> String {
        String::new()
    }

    fn is_ansi_enabled(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_screen_is_silent() {
        let screen = PlainScreen::new();
        assert!(!screen.is_ansi_enabled());
        assert!(screen.fg(Color::Blue).is_empty());
        assert!(screen.bold().is_empty());
        assert!(screen.italic().is_empty());
        assert!(screen.strikethrough().is_empty());
        assert!(screen.reset().is_empty());
    }

    #[test]
    fn test_plain_text_helpers() {
        let screen = PlainScreen::new();
        assert_eq!(screen.color_text("hi", Color::Magenta), "hi");
        assert_eq!(screen.dim_text("hi"), "hi");
    }
}
