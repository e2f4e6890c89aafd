//! The incremental character reference matcher.
//!
//! A [`ReferenceMatcher`] is fed the characters that follow an `&`, one at a
//! time, and answers whether each one still extends a possible reference. The
//! first character picks the mode: `#` starts a numeric reference, anything
//! else a named one. Once a character is rejected the caller stops feeding
//! and asks for the [`value`](ReferenceMatcher::value).
//!
//! The matcher never consumes `;`. Whether a terminating semicolon belongs to
//! the reference is left to the caller.
//!
//! ```rust
//! use charref::{Decoded, ReferenceMatcher};
//!
//! let mut matcher = ReferenceMatcher::new();
//! assert!(matcher.feed('#'));
//! assert!(matcher.feed('x'));
//! assert!(matcher.feed('2'));
//! assert!(matcher.feed('6'));
//! assert!(matcher.feed('0'));
//! assert!(matcher.feed('3'));
//! assert!(!matcher.feed(';'));
//! assert_eq!(matcher.value(), Decoded::Numeric('\u{2603}'));
//! ```

use crate::{
    decoded::Decoded,
    error::ReferenceError,
    literal_buffer::LiteralBuffer,
    named::{self, NodeId},
    numeric::{self, NumericAccumulator, Resolution},
    options::MatcherOptions,
};

/// Which kind of reference the matcher has committed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// No character has been accepted since the last reset.
    Unset,
    /// The first character was a letter that starts a reference name.
    Named,
    /// The first character was `#`.
    Numeric,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Unset,
    Named(NamedCursor),
    Numeric(NumericAccumulator),
}

/// Position in the named-reference trie.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct NamedCursor {
    node: NodeId,
    /// Last legacy reference passed on the way to `node`, with the number of
    /// characters it spans.
    shorter: Option<(NodeId, u8)>,
}

impl NamedCursor {
    fn advance(&mut self, next: NodeId, consumed: usize) {
        if named::is_legacy(self.node) {
            if let Ok(consumed) = u8::try_from(consumed) {
                self.shorter = Some((self.node, consumed));
            }
        }
        self.node = next;
    }
}

/// Incremental decoder for a single character reference.
///
/// One matcher is meant to be created once and reused: call
/// [`reset`](Self::reset) before each new reference. The matcher holds a
/// fixed-size buffer and never allocates.
#[derive(Debug, Clone)]
pub struct ReferenceMatcher {
    options: MatcherOptions,
    literal: LiteralBuffer,
    state: State,
}

impl Default for ReferenceMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl ReferenceMatcher {
    /// Creates a matcher with default options.
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(MatcherOptions::default())
    }

    /// Creates a matcher with the given options.
    #[must_use]
    pub fn with_options(options: MatcherOptions) -> Self {
        Self {
            options,
            literal: LiteralBuffer::new(),
            state: State::Unset,
        }
    }

    /// The options this matcher was created with.
    #[must_use]
    pub fn options(&self) -> MatcherOptions {
        self.options
    }

    /// Forgets everything fed since the last reset.
    ///
    /// Safe to call at any point, including in the middle of a reference.
    pub fn reset(&mut self) {
        self.literal.clear();
        self.state = State::Unset;
    }

    /// Offers the next character of the reference.
    ///
    /// Returns `true` if `c` extends a reference that may still be valid and
    /// has been recorded. Returns `false` otherwise, leaving the matcher
    /// exactly as it was; the caller should stop feeding and is responsible
    /// for `c` itself.
    ///
    /// `;` is always rejected, and so is any character that would bring the
    /// reference to 32 characters.
    pub fn feed(&mut self, c: char) -> bool {
        if c == ';' || !c.is_ascii() || self.literal.is_full() {
            return false;
        }
        let byte = c as u8;

        match self.state {
            State::Unset if c == '#' => {
                self.state = State::Numeric(NumericAccumulator::new());
            }
            State::Unset => {
                let Some(node) = named::step(named::ROOT, byte) else {
                    return false;
                };
                self.state = State::Named(NamedCursor {
                    node,
                    shorter: None,
                });
            }
            State::Named(ref mut cursor) => {
                let Some(next) = named::step(cursor.node, byte) else {
                    return false;
                };
                cursor.advance(next, self.literal.len());
            }
            State::Numeric(ref mut acc) => {
                if acc.feed(c) == numeric::Step::Reject {
                    return false;
                }
            }
        }

        self.literal.push(c);
        true
    }

    /// The decoded text for everything fed so far.
    ///
    /// Meant to be called once feeding has stopped. Input that does not form
    /// a valid reference comes back as [`Decoded::Literal`].
    #[must_use]
    pub fn value(&self) -> Decoded<'_> {
        match self.state {
            State::Unset => Decoded::Literal(self.literal.as_str()),
            State::Named(cursor) => {
                if let Some(replacement) = named::replacement(cursor.node) {
                    return Decoded::Named(replacement);
                }
                if self.options.fall_back_to_shorter_match {
                    if let Some((replacement, consumed)) = self.shorter_match() {
                        return Decoded::Prefix {
                            replacement,
                            rest: self.literal.str_from(consumed),
                        };
                    }
                }
                Decoded::Literal(self.literal.as_str())
            }
            State::Numeric(acc) => {
                if !acc.has_digits() {
                    return Decoded::Literal(self.literal.as_str());
                }
                match numeric::resolve(acc.value()) {
                    Resolution::Char(ch) | Resolution::Substitute(ch, _) => Decoded::Numeric(ch),
                    Resolution::Literal(_) => Decoded::Literal(self.literal.as_str()),
                }
            }
        }
    }

    /// The parse error that [`value`](Self::value) recovers from, if any.
    ///
    /// A missing semicolon is only reported for a shorter-match fallback; for
    /// every other reference the matcher cannot know what follows it.
    #[must_use]
    pub fn parse_error(&self) -> Option<ReferenceError> {
        match self.state {
            State::Unset => None,
            State::Named(cursor) => {
                if named::replacement(cursor.node).is_some() {
                    None
                } else if self.options.fall_back_to_shorter_match && cursor.shorter.is_some() {
                    Some(ReferenceError::MissingSemicolon)
                } else {
                    Some(ReferenceError::UnknownNamedReference)
                }
            }
            State::Numeric(acc) => {
                if !acc.has_digits() {
                    return Some(ReferenceError::AbsenceOfDigits);
                }
                match numeric::resolve(acc.value()) {
                    Resolution::Char(_) => None,
                    Resolution::Substitute(_, error) | Resolution::Literal(error) => Some(error),
                }
            }
        }
    }

    /// The mode chosen by the first accepted character.
    #[must_use]
    pub fn mode(&self) -> Mode {
        match self.state {
            State::Unset => Mode::Unset,
            State::Named(_) => Mode::Named,
            State::Numeric(_) => Mode::Numeric,
        }
    }

    /// The characters accepted since the last reset.
    #[must_use]
    pub fn literal(&self) -> &str {
        self.literal.as_str()
    }

    /// Number of characters accepted since the last reset.
    #[must_use]
    pub fn len(&self) -> usize {
        self.literal.len()
    }

    /// Whether no character has been accepted since the last reset.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.literal.is_empty()
    }

    /// Whether the characters fed so far spell a complete named reference.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        match self.state {
            State::Named(cursor) => named::replacement(cursor.node).is_some(),
            _ => false,
        }
    }

    /// Whether the complete named reference fed so far is one of the legacy
    /// names that are valid without a trailing `;`.
    #[must_use]
    pub fn allows_missing_semicolon(&self) -> bool {
        match self.state {
            State::Named(cursor) => named::is_legacy(cursor.node),
            _ => false,
        }
    }

    /// The last legacy named reference passed before the current position,
    /// with the number of characters it spans.
    ///
    /// Tracked regardless of [`MatcherOptions::fall_back_to_shorter_match`].
    #[must_use]
    pub fn shorter_match(&self) -> Option<(&'static str, usize)> {
        let State::Named(NamedCursor {
            shorter: Some((node, consumed)),
            ..
        }) = self.state
        else {
            return None;
        };
        named::replacement(node).map(|replacement| (replacement, usize::from(consumed)))
    }
}

#[cfg(test)]
mod tests {
    use alloc::format;

    use super::*;

    fn feed_all(matcher: &mut ReferenceMatcher, input: &str) -> usize {
        input.chars().take_while(|c| matcher.feed(*c)).count()
    }

    #[test]
    fn named_reference_stops_at_semicolon() {
        let mut matcher = ReferenceMatcher::new();
        assert_eq!(feed_all(&mut matcher, "amp;"), 3);
        assert_eq!(matcher.mode(), Mode::Named);
        assert_eq!(matcher.value(), Decoded::Named("&"));
        assert_eq!(matcher.parse_error(), None);
    }

    #[test]
    fn unknown_name_is_literal() {
        let mut matcher = ReferenceMatcher::new();
        assert_eq!(feed_all(&mut matcher, "zzzzz"), 1);
        assert_eq!(matcher.value(), Decoded::Literal("z"));

        matcher.reset();
        assert_eq!(feed_all(&mut matcher, "ampx"), 3);
        assert_eq!(matcher.value(), Decoded::Named("&"));
    }

    #[test]
    fn first_character_rejected_leaves_mode_unset() {
        let mut matcher = ReferenceMatcher::new();
        assert!(!matcher.feed('1'));
        assert!(!matcher.feed(' '));
        assert!(!matcher.feed('é'));
        assert_eq!(matcher.mode(), Mode::Unset);
        assert_eq!(matcher.value(), Decoded::Literal(""));
        assert!(matcher.is_empty());
    }

    #[test]
    fn no_backtracking_by_default() {
        let mut matcher = ReferenceMatcher::new();
        assert_eq!(feed_all(&mut matcher, "notit;"), 4);
        assert_eq!(matcher.literal(), "noti");
        assert_eq!(matcher.value(), Decoded::Literal("noti"));
        assert_eq!(matcher.parse_error(), Some(ReferenceError::UnknownNamedReference));
        assert_eq!(matcher.shorter_match(), Some(("\u{AC}", 3)));
    }

    #[test]
    fn fallback_to_shorter_match() {
        let mut matcher = ReferenceMatcher::with_options(MatcherOptions {
            fall_back_to_shorter_match: true,
        });
        assert_eq!(feed_all(&mut matcher, "notit;"), 4);
        assert_eq!(
            matcher.value(),
            Decoded::Prefix {
                replacement: "\u{AC}",
                rest: "i"
            }
        );
        assert_eq!(matcher.parse_error(), Some(ReferenceError::MissingSemicolon));

        matcher.reset();
        assert_eq!(feed_all(&mut matcher, "notin;"), 5);
        assert_eq!(matcher.value(), Decoded::Named("\u{2209}"));
    }

    #[test]
    fn numeric_zero_digits_is_literal() {
        let mut matcher = ReferenceMatcher::new();
        assert_eq!(feed_all(&mut matcher, "#;"), 1);
        assert_eq!(matcher.value(), Decoded::Literal("#"));
        assert_eq!(matcher.parse_error(), Some(ReferenceError::AbsenceOfDigits));

        matcher.reset();
        assert_eq!(feed_all(&mut matcher, "#X;"), 2);
        assert_eq!(matcher.value(), Decoded::Literal("#X"));
    }

    #[test]
    fn numeric_noncharacter_is_literal() {
        let mut matcher = ReferenceMatcher::new();
        assert_eq!(feed_all(&mut matcher, "#xFFFE;"), 6);
        assert_eq!(matcher.value(), Decoded::Literal("#xFFFE"));
        assert_eq!(matcher.parse_error(), Some(ReferenceError::Noncharacter(0xFFFE)));
    }

    #[test]
    fn numeric_surrogate_is_substituted() {
        let mut matcher = ReferenceMatcher::new();
        feed_all(&mut matcher, "#xD800;");
        assert_eq!(matcher.value(), Decoded::Numeric('\u{FFFD}'));
        assert_eq!(matcher.parse_error(), Some(ReferenceError::Surrogate(0xD800)));
    }

    #[test]
    fn hash_after_first_character_is_rejected() {
        let mut matcher = ReferenceMatcher::new();
        assert!(matcher.feed('#'));
        assert!(!matcher.feed('#'));
        assert!(matcher.feed('9'));
        assert!(!matcher.feed('#'));
        assert_eq!(matcher.value(), Decoded::Numeric('\t'));
    }

    #[test]
    fn length_bound_rejects_the_32nd_character() {
        let mut matcher = ReferenceMatcher::new();
        let digits = format!("#{}65", "0".repeat(40));
        assert_eq!(feed_all(&mut matcher, &digits), 31);
        assert_eq!(matcher.len(), 31);
        assert!(!matcher.feed('0'));
        assert_eq!(matcher.value(), Decoded::Numeric('\u{FFFD}'));
        assert_eq!(matcher.parse_error(), Some(ReferenceError::NullCharacter));
    }

    #[test]
    fn longest_name_is_accepted() {
        let mut matcher = ReferenceMatcher::new();
        let name = "CounterClockwiseContourIntegral";
        assert_eq!(feed_all(&mut matcher, name), 31);
        assert_eq!(matcher.value(), Decoded::Named("\u{2233}"));
    }

    #[test]
    fn rejection_leaves_state_untouched() {
        let mut matcher = ReferenceMatcher::new();
        feed_all(&mut matcher, "#x1F6");
        let before = matcher.clone();
        assert!(!matcher.feed('g'));
        assert_eq!(matcher.state, before.state);
        assert_eq!(matcher.literal, before.literal);
    }

    #[test]
    fn reset_mid_reference() {
        let mut matcher = ReferenceMatcher::new();
        feed_all(&mut matcher, "#x4");
        matcher.reset();
        assert_eq!(matcher.mode(), Mode::Unset);
        assert_eq!(feed_all(&mut matcher, "lt"), 2);
        assert_eq!(matcher.value(), Decoded::Named("<"));
        assert!(matcher.allows_missing_semicolon());
    }
}
