//! The lexical analysis stage of the Zirco compiler.
pub mod error;
pub mod lexer;
pub mod source_map;
pub mod span;

pub use lexer::{lex, LexResult};
