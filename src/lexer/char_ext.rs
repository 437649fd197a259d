//! Character classes used by the lexer.
pub trait CharExt {
    /// ASCII whitespace, including vertical tab.
    fn is_lexer_whitespace(&self) -> bool;

    /// Anything but `\n`, which alone ends a line comment.
    fn is_not_newline(&self) -> bool;

    fn is_name_start(&self) -> bool;

    fn is_name_continue(&self) -> bool;

    /// Characters that may appear inside an unprefixed number literal run.
    /// Letters are part of the run so that they can be reported as invalid.
    fn is_decimal_run(&self) -> bool;

    /// Characters panic mode stops at: whitespace, quotes, and single-character operators.
    fn is_token_boundary(&self) -> bool;
}
impl CharExt for char {
    fn is_lexer_whitespace(&self) -> bool {
        self.is_ascii_whitespace() || *self == '\x0B'
    }

    fn is_not_newline(&self) -> bool {
        *self != '\n'
    }

    fn is_name_start(&self) -> bool {
        self.is_ascii_alphabetic() || *self == '_'
    }

    fn is_name_continue(&self) -> bool {
        self.is_ascii_alphanumeric() || *self == '_'
    }

    fn is_decimal_run(&self) -> bool {
        self.is_ascii_alphanumeric() || *self == '.' || *self == '_'
    }

    fn is_token_boundary(&self) -> bool {
        self.is_lexer_whitespace() || *self == '"' || SINGLE_CHAR_OPERATORS.contains(*self)
    }
}

const SINGLE_CHAR_OPERATORS: &str = "+-*/%=!<>(){}[],;:.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertical_tab_is_whitespace() {
        assert!('\x0B'.is_lexer_whitespace());
        assert!(!'\u{A0}'.is_lexer_whitespace());
    }

    #[test]
    fn only_line_feed_is_a_newline() {
        assert!(!'\n'.is_not_newline());
        assert!('\r'.is_not_newline());
    }

    #[test]
    fn names_may_not_start_with_a_digit() {
        assert!('_'.is_name_start());
        assert!(!'1'.is_name_start());
        assert!('1'.is_name_continue());
    }

    #[test]
    fn boundaries_include_operators_and_quotes() {
        for ch in "+-*/%=!<>(){}[],;:.\" \t\n".chars() {
            assert!(ch.is_token_boundary(), "{ch:?} should be a boundary");
        }
        for ch in "a0_$&|\\".chars() {
            assert!(!ch.is_token_boundary(), "{ch:?} should not be a boundary");
        }
    }
}
