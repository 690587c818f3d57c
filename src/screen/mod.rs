//! Screen display module.
//!
//! Provides ANSI escape sequences for terminal styling, a plain text fallback,
//! and the presenter that turns chat messages into terminal output.

mod ansi;
mod plain;
mod presenter;

pub use ansi::AnsiScreen;
pub use plain::PlainScreen;
pub use presenter::{format_blocks, format_message, format_suggestions};

/// Foreground colors used by the presenter, with their ANSI color codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    /// Code blocks and inline code.
    Yellow = 3,
    /// Links and the bot badge.
    Blue = 4,
    /// Bot names.
    Magenta = 5,
    /// User names and embed bars.
    Cyan = 6,
}

impl Color {
    /// Get the ANSI color code for foreground.
    pub fn fg_code(self) -> u8 {
        30 + self as u8
    }
}

/// Screen output trait for terminal styling.
///
/// Every method returns the control sequence to write before the styled
/// text. `PlainScreen` returns empty strings throughout.
pub trait Screen: Send + Sync {
    /// Set foreground (text) color.
    fn fg(&self, color: Color) -> String;

    /// Enable bold text.
    fn bold(&self) -> String;

    /// Enable dim (faint) text.
    fn dim(&self) -> String;

    /// Enable italic text.
    fn italic(&self) -> String;

    /// Enable underlined text.
    fn underline(&self) -> String;

    /// Enable reversed (inverse) colors.
    fn reverse(&self) -> String;

    /// Enable struck-through text.
    fn strikethrough(&self) -> String;

    /// Reset all text attributes to default.
    fn reset(&self) -> String;

    /// Format text with a foreground color.
    fn color_text(&self, text: &str, color: Color) -> String {
        format!("{}{}{}", self.fg(color), text, self.reset())
    }

    /// Format text as bold.
    fn bold_text(&self, text: &str) -> String {
        format!("{}{}{}", self.bold(), text, self.reset())
    }

    /// Format text as dim.
    fn dim_text(&self, text: &str) -> String {
        format!("{}{}{}", self.dim(), text, self.reset())
    }

    /// Check if ANSI escape sequences are enabled.
    fn is_ansi_enabled(&self) -> bool;
}

/// Create a screen instance based on ANSI support.
///
/// # Example
///
/// ```
/// use tagchat::screen::{create_screen, Color};
///
/// let screen = create_screen(true);
/// assert!(screen.is_ansi_enabled());
/// assert!(!screen.fg(Color::Cyan).is_empty());
///
/// let plain = create_screen(false);
/// assert!(!plain.is_ansi_enabled());
/// assert!(plain.fg(Color::Cyan).is_empty());
/// ```
pub fn create_screen(ansi_enabled: bool) -> Box<dyn Screen> {
    if ansi_enabled {
        Box::new(AnsiScreen)
    } else {
        Box::new(PlainScreen)
    }
}
