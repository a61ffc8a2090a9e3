use std::collections::HashMap;

use super::token::Token;

/// Lexeme to code table built by the lexer.
///
/// Keys are unique lexeme spellings. Iteration order carries no meaning;
/// the debug dumps print entries in whatever order the store yields them.
#[derive(Debug, Clone)]
pub struct SymbolTable {
    store: HashMap<String, u32>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self {
            store: HashMap::new(),
        }
    }

    /// Inserts a lexeme under its code, replacing any previous entry.
    pub fn insert(&mut self, lexeme: impl Into<String>, code: u32) {
        self.store.insert(lexeme.into(), code);
    }

    pub fn get(&self, lexeme: &str) -> Option<u32> {
        self.store.get(lexeme).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.store.iter().map(|(lexeme, code)| (lexeme.as_str(), *code))
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Everything the lexer hands over after its pass: the token stream plus
/// the three lexeme tables the debug dumps read.
#[derive(Debug, Clone, Default)]
pub struct LexerData {
    pub tokens: Vec<Token>,
    pub identifiers: SymbolTable,
    pub constants: SymbolTable,
    pub keywords: SymbolTable,
}

impl LexerData {
    pub fn new() -> Self {
        Self::default()
    }
}
