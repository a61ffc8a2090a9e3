use serde::Serialize;

/// One lexical token as the lexer hands it over.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub line: usize,
    pub position: usize,
    /// Numeric lexical category assigned by the lexer.
    pub code: u32,
    pub lexeme: String,
}

impl Token {
    pub fn new(code: u32, lexeme: impl Into<String>, line: usize, position: usize) -> Self {
        Self {
            line,
            position,
            code,
            lexeme: lexeme.into(),
        }
    }
}
