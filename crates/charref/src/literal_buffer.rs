//! Fixed-capacity storage for the raw characters of a reference in flight.
//!
//! The [`LiteralBuffer`] keeps every character the matcher has accepted since
//! the last reset, so that a reference which turns out to be invalid can be
//! emitted verbatim. Only ASCII is ever accepted by the matcher, so the
//! buffer stores bytes and hands its contents back as a `&str`.

/// Capacity of the buffer. A reference may hold at most `CAPACITY - 1`
/// characters; the character that would fill the last slot is rejected.
pub(crate) const CAPACITY: usize = 32;

#[derive(Debug, Clone, Copy)]
pub(crate) struct LiteralBuffer {
    bytes: [u8; CAPACITY],
    len: u8,
}

impl LiteralBuffer {
    pub fn new() -> Self {
        Self {
            bytes: [0; CAPACITY],
            len: 0,
        }
    }

    pub fn clear(&mut self) {
        self.len = 0;
    }

    pub fn len(&self) -> usize {
        usize::from(self.len)
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether one more character would reach the length bound.
    pub fn is_full(&self) -> bool {
        self.len() + 1 >= CAPACITY
    }

    /// Appends `c`. Callers check [`is_full`](Self::is_full) and ASCII first.
    pub fn push(&mut self, c: char) {
        debug_assert!(c.is_ascii() && !self.is_full());
        self.bytes[self.len()] = c as u8;
        self.len += 1;
    }

    pub fn as_str(&self) -> &str {
        self.str_from(0)
    }

    /// The buffered characters from position `start` onwards.
    pub fn str_from(&self, start: usize) -> &str {
        let bytes = self.bytes.get(start..self.len()).unwrap_or_default();
        // Only ASCII is pushed, so this never falls back.
        core::str::from_utf8(bytes).unwrap_or_default()
    }
}

// Bytes past `len` are stale and do not take part in comparisons.
impl PartialEq for LiteralBuffer {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for LiteralBuffer {}

impl Default for LiteralBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::{CAPACITY, LiteralBuffer};

    #[test]
    fn push_and_read_back() {
        let mut buf = LiteralBuffer::new();
        for ch in "#x41".chars() {
            buf.push(ch);
        }
        assert_eq!(buf.as_str(), "#x41");
        assert_eq!(buf.str_from(2), "41");
        assert_eq!(buf.len(), 4);
    }

    #[test]
    fn full_one_before_capacity() {
        let mut buf = LiteralBuffer::new();
        let mut pushed = 0;
        while !buf.is_full() {
            buf.push('a');
            pushed += 1;
        }
        assert_eq!(pushed, CAPACITY - 1);
        assert_eq!(buf.as_str().len(), CAPACITY - 1);
    }

    #[test]
    fn clear_discards_contents() {
        let mut buf = LiteralBuffer::new();
        buf.push('a');
        buf.clear();
        assert!(buf.is_empty());
        assert_eq!(buf.as_str(), "");
        assert_eq!(buf, LiteralBuffer::new());
    }

    #[test]
    fn out_of_range_start_is_empty() {
        let buf = LiteralBuffer::new();
        assert_eq!(buf.str_from(5), "");
    }
}
