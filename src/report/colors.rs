//! ANSI color codes for console report output.
//!
//! The palette respects the NO_COLOR environment variable. The file sink
//! never styles anything; it renders with [`Colors::no_color`].

use std::env;

use crate::diagnostics::record::Origin;

/// ANSI color codes for report rendering.
pub struct Colors {
    pub red: &'static str,
    pub cyan: &'static str,
    pub green: &'static str,
    pub yellow: &'static str,
    pub reset: &'static str,
}

impl Colors {
    /// Get colors based on NO_COLOR environment variable
    pub fn new() -> Self {
        if env::var("NO_COLOR").is_ok() {
            Self::no_color()
        } else {
            Self::with_color()
        }
    }

    /// Get colored output (default)
    pub fn with_color() -> Self {
        Self {
            red: "\u{1b}[31m",
            cyan: "\u{1b}[36m",
            green: "\u{1b}[32m",
            yellow: "\u{1b}[33m",
            reset: "\u{1b}[0m",
        }
    }

    /// Get no-color output (when NO_COLOR is set)
    pub fn no_color() -> Self {
        Self {
            red: "",
            cyan: "",
            green: "",
            yellow: "",
            reset: "",
        }
    }

    /// Highlight for an origin tag in the error report. Lexer records stand
    /// out; every other origin keeps the default color.
    pub fn origin_color(&self, origin: Origin) -> &'static str {
        match origin {
            Origin::Lexer => self.cyan,
            Origin::FileIo | Origin::Compiler | Origin::Parser | Origin::CodeGenerator => "",
        }
    }
}

impl Default for Colors {
    fn default() -> Self {
        Self::new()
    }
}
