//! Functionality for converting a source code string into a [`Token`](tokens::Token) stream.
mod char_ext;
mod cursor;
mod error;
mod lexer;

pub mod tokens;

pub use error::{Issue, IssueKind, NumberLiteralKind};
pub use lexer::*;
