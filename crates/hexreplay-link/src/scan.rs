//! Character scanner for the link grammar.
//!
//! The grammar is regular and ASCII-only; the scanner exposes just enough
//! to write the decoder as explicit recursive descent, so the policy of
//! halting at the first bad token is an ordinary control-flow branch.

/// Cursor over an ASCII input slice
pub(crate) struct Scanner<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    pub(crate) fn new(input: &'a str) -> Scanner<'a> {
        Scanner { input, pos: 0 }
    }

    pub(crate) fn is_done(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// Next byte without consuming it
    pub(crate) fn peek(&self) -> Option<u8> {
        self.input.as_bytes().get(self.pos).copied()
    }

    /// Consume one byte
    pub(crate) fn bump(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.pos += 1;
        Some(b)
    }

    /// Consume `b` if it is next
    pub(crate) fn eat(&mut self, b: u8) -> bool {
        if self.peek() == Some(b) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Longest prefix of bytes satisfying `pred` (possibly empty)
    pub(crate) fn take_while(&mut self, pred: impl Fn(u8) -> bool) -> &'a str {
        let start = self.pos;
        while self.peek().is_some_and(&pred) {
            self.pos += 1;
        }
        &self.input[start..self.pos]
    }

    /// Decimal number token `[1-9][0-9]*`, or `None` without consuming
    pub(crate) fn number(&mut self) -> Option<u32> {
        match self.peek() {
            Some(b'1'..=b'9') => {}
            _ => return None,
        }
        self.take_while(|b| b.is_ascii_digit()).parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scanner_basic() {
        let mut s = Scanner::new("ab12");
        assert_eq!(s.peek(), Some(b'a'));
        assert!(s.eat(b'a'));
        assert!(!s.eat(b'a'));
        assert_eq!(s.take_while(|b| b.is_ascii_lowercase()), "b");
        assert_eq!(s.number(), Some(12));
        assert!(s.is_done());
    }

    #[test]
    fn test_number_rejects_leading_zero() {
        let mut s = Scanner::new("012");
        assert_eq!(s.number(), None);
        assert_eq!(s.peek(), Some(b'0'));
    }
}
