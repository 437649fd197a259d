//! Tokens, as produced by the lexer.
use std::fmt::{self, Display};

use crate::span::Interval;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// The exact source text the token was built from.
    pub raw: String,
    pub interval: Interval,
}
impl Token {
    /// The decoded value carried by names and strings.
    pub fn value(&self) -> Option<&str> {
        match &self.kind {
            TokenKind::Name(value) | TokenKind::String(value) => Some(value),
            TokenKind::Number | TokenKind::Operator(_) | TokenKind::Other => None,
        }
    }
}
impl Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?} ", self.interval)?;
        match &self.kind {
            TokenKind::Name(value) => write!(f, "Name {value:?}"),
            TokenKind::Number => write!(f, "Number {:?}", self.raw),
            TokenKind::String(value) => write!(f, "String {value:?}"),
            TokenKind::Operator(op) => write!(f, "Operator {op}"),
            TokenKind::Other => write!(f, "Other {:?}", self.raw),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TokenKind {
    /// An identifier or keyword. Keywords are told apart by the parser.
    Name(String),
    /// A number literal. Its value is left for later stages to parse.
    Number,
    /// A string literal. The value excludes the quotes and keeps escapes as written.
    String(String),
    Operator(Operator),
    /// Any other single character.
    Other,
}

/// An operator or piece of punctuation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Operator {
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Equals,
    Exclamation,
    LessThan,
    GreaterThan,
    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,
    LeftBracket,
    RightBracket,
    Comma,
    Semicolon,
    Colon,
    Dot,
    EqualsEquals,
    ExclamationEquals,
    GreaterThanEquals,
    LessThanEquals,
    PlusEquals,
    MinusEquals,
    StarEquals,
    SlashEquals,
    PlusPlus,
    MinusMinus,
    PipePipe,
    AmpersandAmpersand,
    LessThanLessThan,
    GreaterThanGreaterThan,
    StarStar,
    Arrow,
}

impl Operator {
    /// Matches a two-character operator.
    pub fn from_pair(first: char, second: char) -> Option<Self> {
        Some(match (first, second) {
            ('=', '=') => Self::EqualsEquals,
            ('!', '=') => Self::ExclamationEquals,
            ('>', '=') => Self::GreaterThanEquals,
            ('<', '=') => Self::LessThanEquals,
            ('+', '=') => Self::PlusEquals,
            ('-', '=') => Self::MinusEquals,
            ('*', '=') => Self::StarEquals,
            ('/', '=') => Self::SlashEquals,
            ('+', '+') => Self::PlusPlus,
            ('-', '-') => Self::MinusMinus,
            ('|', '|') => Self::PipePipe,
            ('&', '&') => Self::AmpersandAmpersand,
            ('<', '<') => Self::LessThanLessThan,
            ('>', '>') => Self::GreaterThanGreaterThan,
            ('*', '*') => Self::StarStar,
            ('-', '>') => Self::Arrow,
            _ => return None,
        })
    }

    /// Matches a single-character operator.
    pub fn from_char(ch: char) -> Option<Self> {
        Some(match ch {
            '+' => Self::Plus,
            '-' => Self::Minus,
            '*' => Self::Star,
            '/' => Self::Slash,
            '%' => Self::Percent,
            '=' => Self::Equals,
            '!' => Self::Exclamation,
            '<' => Self::LessThan,
            '>' => Self::GreaterThan,
            '(' => Self::LeftParen,
            ')' => Self::RightParen,
            '{' => Self::LeftBrace,
            '}' => Self::RightBrace,
            '[' => Self::LeftBracket,
            ']' => Self::RightBracket,
            ',' => Self::Comma,
            ';' => Self::Semicolon,
            ':' => Self::Colon,
            '.' => Self::Dot,
            _ => return None,
        })
    }

    pub fn lexeme(&self) -> &'static str {
        match self {
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Star => "*",
            Self::Slash => "/",
            Self::Percent => "%",
            Self::Equals => "=",
            Self::Exclamation => "!",
            Self::LessThan => "<",
            Self::GreaterThan => ">",
            Self::LeftParen => "(",
            Self::RightParen => ")",
            Self::LeftBrace => "{",
            Self::RightBrace => "}",
            Self::LeftBracket => "[",
            Self::RightBracket => "]",
            Self::Comma => ",",
            Self::Semicolon => ";",
            Self::Colon => ":",
            Self::Dot => ".",
            Self::EqualsEquals => "==",
            Self::ExclamationEquals => "!=",
            Self::GreaterThanEquals => ">=",
            Self::LessThanEquals => "<=",
            Self::PlusEquals => "+=",
            Self::MinusEquals => "-=",
            Self::StarEquals => "*=",
            Self::SlashEquals => "/=",
            Self::PlusPlus => "++",
            Self::MinusMinus => "--",
            Self::PipePipe => "||",
            Self::AmpersandAmpersand => "&&",
            Self::LessThanLessThan => "<<",
            Self::GreaterThanGreaterThan => ">>",
            Self::StarStar => "**",
            Self::Arrow => "->",
        }
    }
}

impl Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.lexeme())
    }
}
