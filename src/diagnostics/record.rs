//! Diagnostic records: one reported problem with its origin and category.

use std::fmt;

use serde::Serialize;

/// Pipeline stage that raised a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Origin {
    /// Source file loading.
    FileIo,
    /// Driver / top-level compiler logic.
    Compiler,
    Lexer,
    Parser,
    CodeGenerator,
}

impl Origin {
    /// Returns the tag printed inside `[..]` in error reports.
    ///
    /// The mapping is exhaustive on purpose: adding a stage without a tag
    /// must not compile.
    pub fn as_str(&self) -> &'static str {
        match self {
            Origin::FileIo => "FileIO",
            Origin::Compiler => "Compiler",
            Origin::Lexer => "Lexer",
            Origin::Parser => "Parser",
            Origin::CodeGenerator => "CodeGenerator",
        }
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Nature of a reported failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Category {
    SyntaxError,
    SemanticError,
    /// Problems in driver logic (bad options, unreadable input, ...).
    DriverError,
    BuildError,
    /// Informational records that carry no failure class.
    None,
}

impl Category {
    /// Returns the tag printed before the message in error reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::SyntaxError => "SyntaxError",
            Category::SemanticError => "SemanticError",
            Category::DriverError => "DriverError",
            Category::BuildError => "BuildError",
            Category::None => "None",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One reported problem. Immutable after construction.
///
/// `line == 0 && position == 0` is the sentinel for "no source location";
/// the error report drops the location clause for such records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    message: String,
    line: usize,
    position: usize,
    origin: Origin,
    category: Category,
}

impl Diagnostic {
    pub fn new(
        message: impl Into<String>,
        line: usize,
        position: usize,
        origin: Origin,
        category: Category,
    ) -> Self {
        Self {
            message: message.into(),
            line,
            position,
            origin,
            category,
        }
    }

    /// A stage-local syntax error at a known source location.
    pub fn syntax_error(
        message: impl Into<String>,
        line: usize,
        position: usize,
        origin: Origin,
    ) -> Self {
        Self::new(message, line, position, origin, Category::SyntaxError)
    }

    /// A driver-level error with no source location (line/position 0).
    pub fn general_error(message: impl Into<String>, origin: Origin) -> Self {
        Self::new(message, 0, 0, origin, Category::DriverError)
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Line as report text; `"0"` means no source location.
    pub fn line(&self) -> String {
        self.line.to_string()
    }

    /// Position as report text.
    pub fn position(&self) -> String {
        self.position.to_string()
    }

    pub fn origin(&self) -> Origin {
        self.origin
    }

    pub fn category(&self) -> Category {
        self.category
    }
}
