//! Issues reported while lexing.
use std::fmt::{self, Display, Formatter};

use thiserror::Error;

use crate::{error::PositionalError, span::Interval};

/// The kind of number literal an issue was found in.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum NumberLiteralKind {
    Hexadecimal,
    Binary,
    Decimal,
}
impl NumberLiteralKind {
    /// Whether `ch` is a digit in this kind of literal.
    pub fn is_digit(&self, ch: char) -> bool {
        match self {
            Self::Hexadecimal => ch.is_ascii_hexdigit(),
            Self::Binary => ch == '0' || ch == '1',
            Self::Decimal => ch.is_ascii_digit(),
        }
    }

    fn title(&self) -> &'static str {
        match self {
            Self::Hexadecimal => "Hexadecimal",
            Self::Binary => "Binary",
            Self::Decimal => "Decimal",
        }
    }
}
impl Display for NumberLiteralKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Hexadecimal => "hexadecimal",
            Self::Binary => "binary",
            Self::Decimal => "decimal",
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum IssueKind {
    /// End of input was reached before the closing quote, possibly right after a backslash.
    #[error("Unclosed string")]
    UnclosedString,
    #[error("Number literal has multiple ({count}) decimal points")]
    NumberMultipleDecimalPoints { count: usize },
    #[error("{} literal has a floating prefix with no value after it", .literal.title())]
    NumberPrefixWithNoValue { literal: NumberLiteralKind },
    #[error("Invalid character \"{character}\" in {literal} literal")]
    NumberInvalidCharacter {
        literal: NumberLiteralKind,
        character: char,
    },
    #[error("Unclosed block comment")]
    UnclosedBlockComment,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub struct Issue {
    pub interval: Interval,
    pub kind: IssueKind,
}

impl Issue {
    pub fn new(interval: Interval, kind: IssueKind) -> Self {
        Self { interval, kind }
    }
}

impl Display for Issue {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_fmt(format_args!("{}", self.kind))
    }
}

impl PositionalError for Issue {
    fn interval(&self) -> Interval {
        self.interval
    }

    fn describe(&self) -> String {
        self.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_derived_from_the_payload() {
        let issue = |kind| Issue::new(Interval::single(0), kind).describe();

        assert_eq!(issue(IssueKind::UnclosedString), "Unclosed string");
        assert_eq!(
            issue(IssueKind::NumberMultipleDecimalPoints { count: 3 }),
            "Number literal has multiple (3) decimal points"
        );
        assert_eq!(
            issue(IssueKind::NumberPrefixWithNoValue {
                literal: NumberLiteralKind::Hexadecimal
            }),
            "Hexadecimal literal has a floating prefix with no value after it"
        );
        assert_eq!(
            issue(IssueKind::NumberInvalidCharacter {
                literal: NumberLiteralKind::Binary,
                character: '2'
            }),
            "Invalid character \"2\" in binary literal"
        );
    }

    #[test]
    fn digits_depend_on_the_literal_kind() {
        assert!(NumberLiteralKind::Hexadecimal.is_digit('f'));
        assert!(!NumberLiteralKind::Hexadecimal.is_digit('g'));
        assert!(NumberLiteralKind::Binary.is_digit('1'));
        assert!(!NumberLiteralKind::Binary.is_digit('2'));
        assert!(!NumberLiteralKind::Decimal.is_digit('a'));
    }

    #[test]
    fn issue_points_at_its_interval() {
        let issue = Issue::new(Interval::new(2, 4), IssueKind::UnclosedBlockComment);

        assert_eq!(issue.interval(), Interval::new(2, 4));
    }
}
