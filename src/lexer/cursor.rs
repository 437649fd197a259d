/// A forward-only read position over the characters of a source string.
///
/// Lookahead is done with [`Cursor::peek`], which never consumes, so the
/// position only ever moves forward. Reading past the end yields [`None`].
pub struct Cursor {
    chars: Vec<char>,
    position: usize,
}

impl Cursor {
    /// Constructs a new [`Cursor`] for the given source string,
    /// starting at position `0`.
    pub fn new(source: &str) -> Self {
        Self {
            chars: source.chars().collect(),
            position: 0,
        }
    }

    /// Returns the character at the read position.
    pub fn current(&self) -> Option<char> {
        self.chars.get(self.position).copied()
    }

    /// Returns the character after the read position without consuming anything.
    pub fn peek(&self) -> Option<char> {
        self.chars.get(self.position + 1).copied()
    }

    /// Returns the current character and advances past it.
    /// At end of input, returns [`None`] and stays put.
    pub fn consume(&mut self) -> Option<char> {
        let current = self.current();
        if current.is_some() {
            self.position += 1;
        }
        current
    }

    /// Consumes `count` characters, stopping early at end of input.
    pub fn consume_many(&mut self, count: usize) {
        for _ in 0..count {
            self.consume();
        }
    }

    /// Consumes characters while `P(char)` evaluates to `true`.
    /// Returns a [`String`] containing the consumed characters.
    pub fn consume_while<P>(&mut self, mut predicate: P) -> String
    where
        P: FnMut(&char) -> bool,
    {
        let mut matches = String::new();
        while let Some(ch) = self.current() {
            if !predicate(&ch) {
                break;
            }
            matches.push(ch);
            self.position += 1;
        }
        matches
    }

    pub fn at_end(&self) -> bool {
        self.position >= self.chars.len()
    }

    /// The character offset of the read position.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Collects the characters from `start` up to, but not including, the read position.
    pub fn since(&self, start: usize) -> String {
        self.chars[start.min(self.position)..self.position]
            .iter()
            .collect()
    }
}
