//! Contains the [`Interval`] type, which describes source code positions.
use std::fmt::{self, Debug};

/// A span of source code, given as inclusive character offsets.
///
/// Offsets count Unicode scalar values, not bytes, so an interval can be used
/// to index the character sequence the lexer operated on.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Interval {
    start: usize,
    end: usize,
}
impl Interval {
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "Interval start {start} is past its end {end}");
        Self { start, end }
    }

    /// An interval covering exactly one character.
    pub fn single(offset: usize) -> Self {
        Self::new(offset, offset)
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    /// Number of characters covered by the interval.
    pub fn len(&self) -> usize {
        self.end - self.start + 1
    }

    /// Collects the characters of `target` covered by this interval.
    pub fn lookup(&self, target: &str) -> String {
        target.chars().skip(self.start).take(self.len()).collect()
    }
}

impl Debug for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_character_interval_has_length_one() {
        let interval = Interval::single(4);

        assert_eq!(interval.start(), 4);
        assert_eq!(interval.end(), 4);
        assert_eq!(interval.len(), 1);
    }

    #[test]
    fn lookup_counts_characters_not_bytes() {
        let interval = Interval::new(1, 2);

        assert_eq!(interval.lookup("äöü"), "öü");
    }

    #[test]
    fn debug_shows_inclusive_range() {
        assert_eq!(format!("{:?}", Interval::new(0, 3)), "0..=3");
    }
}
