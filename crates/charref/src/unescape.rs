//! Decoding every character reference in a string.
//!
//! The [`Unescaper`] drives a [`ReferenceMatcher`] the way an HTML tokenizer
//! does: on each `&` it resets the matcher, feeds it until a character is
//! rejected, and then decides how much of the input the reference consumed.
//! That decision covers what the matcher leaves to its caller:
//!
//! - a `;` directly after a complete reference is consumed with it;
//! - numeric digits the matcher refuses past its overflow guard or length
//!   bound still belong to the reference;
//! - a named reference that is not valid without its `;` falls back to the
//!   longest shorter name that is (`&notit;` decodes to `¬it;`);
//! - inside attribute values a semicolon-less name followed by `=` or an
//!   ASCII alphanumeric is left alone;
//! - everything that is not a reference is copied through unchanged.

use alloc::{borrow::Cow, string::String};

use bstr::ByteSlice;
use log::{debug, trace};

use crate::{
    decoded::Decoded,
    error::ReferenceError,
    matcher::{Mode, ReferenceMatcher},
    numeric::{Resolution, resolve},
    options::UnescapeOptions,
};

/// Decodes all character references in text content.
///
/// ```rust
/// assert_eq!(charref::unescape("fish &amp; chips"), "fish & chips");
/// assert_eq!(charref::unescape("&#x2603;&#9731;"), "\u{2603}\u{2603}");
/// assert_eq!(charref::unescape("&notit;"), "\u{AC}it;");
/// assert_eq!(charref::unescape("AT&T"), "AT&T");
/// ```
#[must_use]
pub fn unescape(input: &str) -> Cow<'_, str> {
    Unescaper::new().unescape(input)
}

/// Decodes all character references in an attribute value.
///
/// ```rust
/// assert_eq!(
///     charref::unescape_attribute("?a=1&copy=2&lt;3"),
///     "?a=1&copy=2<3"
/// );
/// ```
#[must_use]
pub fn unescape_attribute(input: &str) -> Cow<'_, str> {
    Unescaper::with_options(UnescapeOptions { in_attribute: true }).unescape(input)
}

/// Reusable string-level decoder built on a single [`ReferenceMatcher`].
#[derive(Debug, Clone, Default)]
pub struct Unescaper {
    matcher: ReferenceMatcher,
    options: UnescapeOptions,
}

impl Unescaper {
    /// Creates an unescaper for text content.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an unescaper with the given options.
    #[must_use]
    pub fn with_options(options: UnescapeOptions) -> Self {
        Self {
            matcher: ReferenceMatcher::new(),
            options,
        }
    }

    /// Decodes all character references in `input`.
    ///
    /// Returns the input unchanged and borrowed when it contains no `&`.
    pub fn unescape<'a>(&mut self, input: &'a str) -> Cow<'a, str> {
        self.unescape_with(input, |_, _| {})
    }

    /// Decodes all character references in `input`, passing every parse
    /// error and the byte offset of its `&` to `on_error`.
    pub fn unescape_with<'a, F>(&mut self, input: &'a str, mut on_error: F) -> Cow<'a, str>
    where
        F: FnMut(ReferenceError, usize),
    {
        let Some(mut amp) = input.as_bytes().find_byte(b'&') else {
            return Cow::Borrowed(input);
        };

        let mut out = String::with_capacity(input.len());
        let mut copied = 0;
        let mut references = 0usize;
        loop {
            out.push_str(&input[copied..amp]);
            let consumed = self.decode_one(&input[amp + 1..], amp, &mut out, &mut on_error);
            references += 1;
            copied = amp + 1 + consumed;

            match input.as_bytes()[copied..].find_byte(b'&') {
                Some(next) => amp = copied + next,
                None => break,
            }
        }
        out.push_str(&input[copied..]);

        trace!(
            "unescaped {references} references: {} bytes in, {} bytes out",
            input.len(),
            out.len()
        );
        Cow::Owned(out)
    }

    /// Decodes the reference that starts right after the `&` at byte
    /// `offset`, appending its text to `out`. Returns how many bytes of
    /// `rest` belong to the reference.
    fn decode_one<F>(
        &mut self,
        rest: &str,
        offset: usize,
        out: &mut String,
        on_error: &mut F,
    ) -> usize
    where
        F: FnMut(ReferenceError, usize),
    {
        let mut report = |error: ReferenceError| {
            debug!("character reference at byte {offset}: {error}");
            on_error(error, offset);
        };

        let in_attribute = self.options.in_attribute;
        let matcher = &mut self.matcher;
        matcher.reset();
        let next = rest.chars().find(|c| !matcher.feed(*c));
        // Accepted characters are ASCII, so characters and bytes agree.
        let accepted = matcher.len();
        let terminated = next == Some(';');

        match matcher.mode() {
            Mode::Unset => {
                out.push('&');
                0
            }
            Mode::Numeric => {
                if let Some((code, end)) = overlong_numeric(rest, accepted) {
                    return emit_overlong(code, end, rest, out, &mut report);
                }
                if let Some(error) = matcher.parse_error() {
                    report(error);
                }
                let Decoded::Numeric(ch) = matcher.value() else {
                    out.push('&');
                    return 0;
                };
                if !terminated {
                    report(ReferenceError::MissingSemicolon);
                }
                out.push(ch);
                accepted + usize::from(terminated)
            }
            Mode::Named => {
                if let Decoded::Named(replacement) = matcher.value() {
                    if terminated {
                        out.push_str(replacement);
                        return accepted + 1;
                    }
                    if matcher.allows_missing_semicolon() {
                        let legacy = LegacyMatch {
                            replacement,
                            consumed: accepted,
                            following: next,
                        };
                        return legacy.emit(in_attribute, out, &mut report);
                    }
                }
                if let Some((replacement, consumed)) = matcher.shorter_match() {
                    let legacy = LegacyMatch {
                        replacement,
                        consumed,
                        following: rest[consumed..].chars().next(),
                    };
                    return legacy.emit(in_attribute, out, &mut report);
                }
                // Only a run of alphanumerics closed by `;` looked like a name.
                let tail = rest[accepted..].as_bytes();
                let run = tail.iter().take_while(|b| b.is_ascii_alphanumeric()).count();
                if tail.get(run) == Some(&b';') {
                    report(ReferenceError::UnknownNamedReference);
                }
                out.push('&');
                0
            }
        }
    }
}

/// Finds a numeric reference whose digits go on past what the matcher took,
/// because of its overflow guard or its length bound. Returns the code point,
/// capped just above the Unicode range, and where the digit run ends in `rest`.
fn overlong_numeric(rest: &str, accepted: usize) -> Option<(u32, usize)> {
    let bytes = rest.as_bytes();
    let (radix, start) = match bytes.get(1) {
        Some(b'x' | b'X') => (16, 2),
        _ => (10, 1),
    };
    let digit = |b: u8| char::from(b).to_digit(radix);
    if accepted <= start || bytes.get(accepted).copied().and_then(digit).is_none() {
        return None;
    }
    let mut code = 0u32;
    let mut end = start;
    while let Some(value) = bytes.get(end).copied().and_then(digit) {
        code = code
            .saturating_mul(radix)
            .saturating_add(value)
            .min(OUT_OF_RANGE);
        end += 1;
    }
    Some((code, end))
}

/// First code point past the Unicode range.
const OUT_OF_RANGE: u32 = 0x11_0000;

fn emit_overlong(
    code: u32,
    end: usize,
    rest: &str,
    out: &mut String,
    mut report: impl FnMut(ReferenceError),
) -> usize {
    let ch = match resolve(code) {
        Resolution::Char(ch) => ch,
        Resolution::Substitute(ch, error) => {
            report(error);
            ch
        }
        Resolution::Literal(error) => {
            report(error);
            out.push('&');
            return 0;
        }
    };
    let terminated = rest.as_bytes().get(end) == Some(&b';');
    if !terminated {
        report(ReferenceError::MissingSemicolon);
    }
    out.push(ch);
    end + usize::from(terminated)
}

/// A named reference that is valid without `;` and was not followed by one.
struct LegacyMatch {
    replacement: &'static str,
    consumed: usize,
    following: Option<char>,
}

impl LegacyMatch {
    fn emit(
        self,
        in_attribute: bool,
        out: &mut String,
        mut report: impl FnMut(ReferenceError),
    ) -> usize {
        let continues_value = self
            .following
            .is_some_and(|c| c == '=' || c.is_ascii_alphanumeric());
        if in_attribute && continues_value {
            out.push('&');
            return 0;
        }
        report(ReferenceError::MissingSemicolon);
        out.push_str(self.replacement);
        self.consumed
    }
}
