//! Data the pipeline stages exchange: tokens and lexeme tables.
//!
//! The stages themselves (lexer, parser, code generator) live outside this
//! crate; these are the handoff types their interfaces are written against.

pub mod lexer_data;
pub mod token;

pub use lexer_data::{LexerData, SymbolTable};
pub use token::Token;
