//! Terminal capability detection and color helpers

use owo_colors::{OwoColorize, colors::css};

/// Detects whether colored output should be enabled
pub fn supports_color() -> bool {
    supports_color::on(supports_color::Stream::Stdout).is_some()
}

/// Extension trait for colorizing output
///
/// Colors are applied unconditionally. The shell decides once, at startup,
/// whether its stream should carry color at all, and skips these calls when
/// it should not. That keeps scripted sessions byte-stable.
pub trait Colorize {
    /// Color as success (green)
    fn success(&self) -> String;
    /// Color as warning (amber)
    fn warning(&self) -> String;
    /// Dim the text
    fn dim(&self) -> String;
}

impl Colorize for str {
    fn success(&self) -> String {
        self.fg::<css::Green>().to_string()
    }

    fn warning(&self) -> String {
        self.fg::<css::Orange>().to_string()
    }

    fn dim(&self) -> String {
        self.dimmed().to_string()
    }
}
