//! Converts a source string into a token stream, collecting every issue on the way.
use log::{debug, trace};

use crate::span::Interval;

use super::{char_ext::*, cursor::*, error::*, tokens::*};

/// The outcome of a lexing pass: either every token, or every issue found.
pub type LexResult = Result<Vec<Token>, Vec<Issue>>;

/// What a single classifier produced. Comments and whitespace produce nothing.
type Classified = Result<Option<Token>, Issue>;

struct Lexer {
    cursor: Cursor,
    tokens: Vec<Token>,
    issues: Vec<Issue>,
}

/// Lexes `source` in a single pass.
///
/// Lexing continues after an issue, so all issues in the input are reported
/// together. Any issue means no tokens are returned.
pub fn lex(source: &str) -> LexResult {
    Lexer::new(source).run()
}

impl Lexer {
    fn new(source: &str) -> Self {
        Self {
            cursor: Cursor::new(source),
            tokens: vec![],
            issues: vec![],
        }
    }

    /// Finishes the lexer and consumes it, producing either the tokens it read
    /// or the issues it encountered.
    fn run(mut self) -> LexResult {
        while !self.cursor.at_end() {
            let position = self.cursor.position();
            self.step();
            assert!(
                self.cursor.position() > position,
                "Lexer failed to advance past position {position}"
            );
        }

        debug!(
            "Lexed {} characters into {} tokens with {} issues",
            self.cursor.position(),
            self.tokens.len(),
            self.issues.len()
        );

        if !self.issues.is_empty() {
            Err(self.issues)
        } else {
            Ok(self.tokens)
        }
    }

    /// Classifies whatever starts at the cursor, recording the token or issue it produces.
    fn step(&mut self) {
        let Some(current) = self.cursor.current() else {
            return;
        };

        let classified = match (current, self.cursor.peek()) {
            (ch, _) if ch.is_lexer_whitespace() => {
                self.cursor.consume();
                Ok(None)
            }
            ('"', _) => self.string_literal().map(Some),
            ('0', Some('x')) => self
                .radix_number_literal(NumberLiteralKind::Hexadecimal)
                .map(Some),
            ('0', Some('b')) => self.radix_number_literal(NumberLiteralKind::Binary).map(Some),
            (ch, _) if ch.is_ascii_digit() => self.decimal_number_literal().map(Some),
            ('/', Some('/')) => {
                self.line_comment();
                Ok(None)
            }
            ('/', Some('*')) => self.block_comment().map(|()| None),
            (ch, _) if ch.is_name_start() => Ok(Some(self.name())),
            _ => Ok(Some(self.operator_or_other())),
        };

        self.record(classified);
    }

    fn record(&mut self, classified: Classified) {
        match classified {
            Ok(Some(token)) => self.tokens.push(token),
            Ok(None) => {}
            Err(issue) => {
                trace!("Issue at {:?}: {}", issue.interval, issue);
                self.issues.push(issue);
                self.recover();
            }
        }
    }

    /// Panic mode: skips ahead to the next token boundary, leaving the boundary
    /// itself for the next classifier.
    fn recover(&mut self) {
        let start = self.cursor.position();
        let skipped = self.cursor.consume_while(|ch| !ch.is_token_boundary());
        if !skipped.is_empty() {
            trace!("Skipped {:?} at {} while recovering", skipped, start);
        }
    }

    /// Reads a string literal starting at the opening quote.
    fn string_literal(&mut self) -> Result<Token, Issue> {
        let start = self.cursor.position();
        self.cursor.consume();

        let mut value = String::new();
        loop {
            match self.cursor.consume() {
                None => return Err(self.issue_since(start, IssueKind::UnclosedString)),
                Some('"') => break,
                Some('\\') => {
                    value.push('\\');
                    // The escaped character never terminates the string.
                    match self.cursor.consume() {
                        Some(escaped) => value.push(escaped),
                        None => return Err(self.issue_since(start, IssueKind::UnclosedString)),
                    }
                }
                Some(ch) => value.push(ch),
            }
        }

        Ok(self.token_since(start, TokenKind::String(value)))
    }

    /// Reads a `0x` or `0b` prefixed literal. Every alphanumeric character after
    /// the prefix belongs to the literal and must be a digit of its radix.
    fn radix_number_literal(&mut self, literal: NumberLiteralKind) -> Result<Token, Issue> {
        let start = self.cursor.position();
        self.cursor.consume_many(2);

        if !self
            .cursor
            .current()
            .is_some_and(|ch| ch.is_ascii_alphanumeric())
        {
            return Err(Issue::new(
                Interval::new(start, start + 1),
                IssueKind::NumberPrefixWithNoValue { literal },
            ));
        }

        while let Some(ch) = self.cursor.current() {
            if ch == '_' || literal.is_digit(ch) {
                self.cursor.consume();
            } else if ch.is_ascii_alphanumeric() {
                return Err(self.invalid_character(literal, ch));
            } else {
                break;
            }
        }

        Ok(self.token_since(start, TokenKind::Number))
    }

    /// Reads an unprefixed literal: digits and underscores with an optional decimal point.
    fn decimal_number_literal(&mut self) -> Result<Token, Issue> {
        let start = self.cursor.position();
        let mut decimal_points = 0;

        while let Some(ch) = self.cursor.current().filter(CharExt::is_decimal_run) {
            match ch {
                '.' => decimal_points += 1,
                '_' => {}
                ch if ch.is_ascii_digit() => {}
                ch => return Err(self.invalid_character(NumberLiteralKind::Decimal, ch)),
            }
            self.cursor.consume();
        }

        if decimal_points > 1 {
            return Err(self.issue_since(
                start,
                IssueKind::NumberMultipleDecimalPoints {
                    count: decimal_points,
                },
            ));
        }

        Ok(self.token_since(start, TokenKind::Number))
    }

    /// Skips a `//` comment up to the end of the line.
    fn line_comment(&mut self) {
        self.cursor.consume_while(CharExt::is_not_newline);
    }

    /// Skips a `/*` comment, which may contain nested block comments.
    fn block_comment(&mut self) -> Result<(), Issue> {
        let start = self.cursor.position();
        self.cursor.consume_many(2);

        let mut depth = 1usize;
        loop {
            match (self.cursor.current(), self.cursor.peek()) {
                (None, _) => return Err(self.issue_since(start, IssueKind::UnclosedBlockComment)),
                (Some('/'), Some('*')) => {
                    self.cursor.consume_many(2);
                    depth += 1;
                }
                (Some('*'), Some('/')) => {
                    self.cursor.consume_many(2);
                    depth -= 1;
                    if depth == 0 {
                        return Ok(());
                    }
                }
                _ => {
                    self.cursor.consume();
                }
            }
        }
    }

    fn name(&mut self) -> Token {
        let start = self.cursor.position();
        let name = self.cursor.consume_while(CharExt::is_name_continue);
        self.token_since(start, TokenKind::Name(name))
    }

    /// Reads an operator, preferring two-character operators over single-character ones.
    /// Anything unrecognised becomes a single-character [`TokenKind::Other`].
    fn operator_or_other(&mut self) -> Token {
        let start = self.cursor.position();

        let pair = self
            .cursor
            .current()
            .zip(self.cursor.peek())
            .and_then(|(first, second)| Operator::from_pair(first, second));

        let kind = if let Some(op) = pair {
            self.cursor.consume_many(2);
            TokenKind::Operator(op)
        } else {
            match self.cursor.consume().and_then(Operator::from_char) {
                Some(op) => TokenKind::Operator(op),
                None => TokenKind::Other,
            }
        };

        self.token_since(start, kind)
    }

    /// Consumes the invalid character and reports it at its own position.
    fn invalid_character(&mut self, literal: NumberLiteralKind, character: char) -> Issue {
        let position = self.cursor.position();
        self.cursor.consume();
        Issue::new(
            Interval::single(position),
            IssueKind::NumberInvalidCharacter { literal, character },
        )
    }

    /// Constructs an issue covering everything from `start` to the last consumed character.
    fn issue_since(&self, start: usize, kind: IssueKind) -> Issue {
        Issue::new(self.interval_since(start), kind)
    }

    /// Constructs a token covering everything from `start` to the last consumed character.
    fn token_since(&self, start: usize, kind: TokenKind) -> Token {
        Token {
            kind,
            raw: self.cursor.since(start),
            interval: self.interval_since(start),
        }
    }

    fn interval_since(&self, start: usize) -> Interval {
        Interval::new(start, self.cursor.position().max(start + 1) - 1)
    }
}
