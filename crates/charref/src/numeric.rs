//! Numeric character references: digit accumulation and finalization.
//!
//! [`NumericAccumulator`] folds digits into a code point as they arrive,
//! refusing any digit that would push the value past `i32::MAX`. Once feeding
//! stops, [`resolve`] applies the HTML replacement rules to the accumulated
//! value.

use crate::error::ReferenceError;

/// Largest value the accumulator will hold (`i32::MAX`).
const MAX_ACCUMULATED: u32 = 0x7FFF_FFFF;

/// U+FFFD REPLACEMENT CHARACTER.
pub const REPLACEMENT_CHARACTER: char = '\u{FFFD}';

/// Windows-1252 code points for `0x80..=0x9F`. `None` marks the five bytes
/// that have no mapping (`0x81`, `0x8D`, `0x8F`, `0x90`, `0x9D`).
const WINDOWS_1252: [Option<char>; 32] = [
    Some('\u{20AC}'), // 0x80 EURO SIGN
    None,             // 0x81
    Some('\u{201A}'), // 0x82 SINGLE LOW-9 QUOTATION MARK
    Some('\u{0192}'), // 0x83 LATIN SMALL LETTER F WITH HOOK
    Some('\u{201E}'), // 0x84 DOUBLE LOW-9 QUOTATION MARK
    Some('\u{2026}'), // 0x85 HORIZONTAL ELLIPSIS
    Some('\u{2020}'), // 0x86 DAGGER
    Some('\u{2021}'), // 0x87 DOUBLE DAGGER
    Some('\u{02C6}'), // 0x88 MODIFIER LETTER CIRCUMFLEX ACCENT
    Some('\u{2030}'), // 0x89 PER MILLE SIGN
    Some('\u{0160}'), // 0x8A LATIN CAPITAL LETTER S WITH CARON
    Some('\u{2039}'), // 0x8B SINGLE LEFT-POINTING ANGLE QUOTATION MARK
    Some('\u{0152}'), // 0x8C LATIN CAPITAL LIGATURE OE
    None,             // 0x8D
    Some('\u{017D}'), // 0x8E LATIN CAPITAL LETTER Z WITH CARON
    None,             // 0x8F
    None,             // 0x90
    Some('\u{2018}'), // 0x91 LEFT SINGLE QUOTATION MARK
    Some('\u{2019}'), // 0x92 RIGHT SINGLE QUOTATION MARK
    Some('\u{201C}'), // 0x93 LEFT DOUBLE QUOTATION MARK
    Some('\u{201D}'), // 0x94 RIGHT DOUBLE QUOTATION MARK
    Some('\u{2022}'), // 0x95 BULLET
    Some('\u{2013}'), // 0x96 EN DASH
    Some('\u{2014}'), // 0x97 EM DASH
    Some('\u{02DC}'), // 0x98 SMALL TILDE
    Some('\u{2122}'), // 0x99 TRADE MARK SIGN
    Some('\u{0161}'), // 0x9A LATIN SMALL LETTER S WITH CARON
    Some('\u{203A}'), // 0x9B SINGLE RIGHT-POINTING ANGLE QUOTATION MARK
    Some('\u{0153}'), // 0x9C LATIN SMALL LIGATURE OE
    None,             // 0x9D
    Some('\u{017E}'), // 0x9E LATIN SMALL LETTER Z WITH CARON
    Some('\u{0178}'), // 0x9F LATIN CAPITAL LETTER Y WITH DIAERESIS
];

/// Maps a byte in `0x80..=0x9F` to its Windows-1252 character.
#[must_use]
pub fn windows_1252(code: u32) -> Option<char> {
    let index = usize::try_from(code.checked_sub(0x80)?).ok()?;
    WINDOWS_1252.get(index).copied().flatten()
}

/// `U+FDD0..=U+FDEF` and the last two code points of every plane.
#[must_use]
pub fn is_noncharacter(code: u32) -> bool {
    (0xFDD0..=0xFDEF).contains(&code) || (code <= 0x10_FFFF && code & 0xFFFE == 0xFFFE)
}

fn is_literal_control(code: u32) -> bool {
    matches!(code, 0x01..=0x08 | 0x0D..=0x1F | 0x7F..=0x9F)
}

/// What a finished numeric reference turns into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// The code point decodes to this character without complaint.
    Char(char),
    /// A parse error, recovered by emitting the character anyway. Covers
    /// U+FFFD substitution and the Windows-1252 remap.
    Substitute(char, ReferenceError),
    /// A parse error, recovered by emitting the reference text unchanged.
    Literal(ReferenceError),
}

/// Applies the HTML numeric reference rules to an accumulated code point.
///
/// ```rust
/// use charref::numeric::{resolve, Resolution};
///
/// assert_eq!(resolve(0x41), Resolution::Char('A'));
/// assert!(matches!(resolve(0x80), Resolution::Substitute('\u{20AC}', _)));
/// assert!(matches!(resolve(0xFFFE), Resolution::Literal(_)));
/// ```
#[must_use]
pub fn resolve(code: u32) -> Resolution {
    if code == 0 {
        return Resolution::Substitute(REPLACEMENT_CHARACTER, ReferenceError::NullCharacter);
    }
    if (0x80..=0x9F).contains(&code) {
        return match windows_1252(code) {
            Some(ch) => Resolution::Substitute(ch, ReferenceError::ControlCharacter(code)),
            None => Resolution::Literal(ReferenceError::ControlCharacter(code)),
        };
    }
    if is_noncharacter(code) {
        return Resolution::Literal(ReferenceError::Noncharacter(code));
    }
    if (0xD800..=0xDFFF).contains(&code) {
        return Resolution::Substitute(REPLACEMENT_CHARACTER, ReferenceError::Surrogate(code));
    }
    if code > 0x10_FFFF {
        return Resolution::Substitute(
            REPLACEMENT_CHARACTER,
            ReferenceError::OutsideUnicodeRange(code),
        );
    }
    if is_literal_control(code) {
        return Resolution::Literal(ReferenceError::ControlCharacter(code));
    }
    match char::from_u32(code) {
        Some(ch) => Resolution::Char(ch),
        None => Resolution::Substitute(
            REPLACEMENT_CHARACTER,
            ReferenceError::OutsideUnicodeRange(code),
        ),
    }
}

/// Running state of a numeric reference after its `#`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct NumericAccumulator {
    /// 0 until the character after `#` has been examined, then 10 or 16.
    base: u32,
    value: u32,
    digits: u8,
}

/// What the accumulator did with a character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Step {
    /// `x` or `X` right after `#`.
    HexMarker,
    /// A digit was folded into the value.
    Digit,
    Reject,
}

impl NumericAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Convert a single ASCII digit into its weight.
    #[inline]
    fn digit_value(c: char) -> Option<u32> {
        match c {
            '0'..='9' => Some((c as u32) - ('0' as u32)),
            'a'..='f' => Some((c as u32) - ('a' as u32) + 10),
            'A'..='F' => Some((c as u32) - ('A' as u32) + 10),
            _ => None,
        }
    }

    /// Offers `c` to the accumulator. On [`Step::Reject`] nothing changes.
    pub fn feed(&mut self, c: char) -> Step {
        if self.base == 0 && matches!(c, 'x' | 'X') {
            self.base = 16;
            return Step::HexMarker;
        }
        let base = if self.base == 0 { 10 } else { self.base };

        let Some(weight) = Self::digit_value(c).filter(|w| *w < base) else {
            return Step::Reject;
        };
        let Some(value) = self
            .value
            .checked_mul(base)
            .and_then(|v| v.checked_add(weight))
            .filter(|v| *v <= MAX_ACCUMULATED)
        else {
            return Step::Reject;
        };

        self.base = base;
        self.value = value;
        self.digits = self.digits.saturating_add(1);
        Step::Digit
    }

    pub fn has_digits(&self) -> bool {
        self.digits > 0
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    #[cfg(test)]
    pub fn base(&self) -> u32 {
        self.base
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn accumulate(digits: &str) -> (NumericAccumulator, usize) {
        let mut acc = NumericAccumulator::new();
        let accepted = digits
            .chars()
            .take_while(|c| acc.feed(*c) != Step::Reject)
            .count();
        (acc, accepted)
    }

    #[test]
    fn decimal_digits() {
        let (acc, accepted) = accumulate("169");
        assert_eq!(accepted, 3);
        assert_eq!(acc.base(), 10);
        assert_eq!(acc.value(), 169);
    }

    #[test]
    fn hex_marker_then_mixed_case() {
        let (acc, accepted) = accumulate("x2Fa3");
        assert_eq!(accepted, 5);
        assert_eq!(acc.base(), 16);
        assert_eq!(acc.value(), 0x2FA3);
    }

    #[test]
    fn hex_letters_rejected_in_decimal() {
        let (acc, accepted) = accumulate("12a");
        assert_eq!(accepted, 2);
        assert_eq!(acc.value(), 12);
    }

    #[test]
    fn rejected_first_character_leaves_base_undetermined() {
        let mut acc = NumericAccumulator::new();
        assert_eq!(acc.feed(';'), Step::Reject);
        assert_eq!(acc.base(), 0);
        assert!(!acc.has_digits());
        assert_eq!(acc.feed('x'), Step::HexMarker);
    }

    #[test]
    fn second_hex_marker_is_rejected() {
        let (acc, accepted) = accumulate("xx");
        assert_eq!(accepted, 1);
        assert!(!acc.has_digits());
    }

    #[test]
    fn overflow_is_rejected_without_change() {
        let (acc, accepted) = accumulate("2147483647");
        assert_eq!(accepted, 10);
        assert_eq!(acc.value(), 2_147_483_647);

        let mut acc = acc;
        assert_eq!(acc.feed('0'), Step::Reject);
        assert_eq!(acc.value(), 2_147_483_647);

        let (acc, accepted) = accumulate("2147483648");
        assert_eq!(accepted, 9);
        assert_eq!(acc.value(), 214_748_364);

        let (acc, accepted) = accumulate("x7FFFFFFF0");
        assert_eq!(accepted, 9);
        assert_eq!(acc.value(), 0x7FFF_FFFF);
    }

    #[test]
    fn leading_zeros_accumulate() {
        let (acc, accepted) = accumulate("0000000000000000065");
        assert_eq!(accepted, 19);
        assert_eq!(acc.value(), 65);
    }

    #[rstest]
    #[case(0x41, Resolution::Char('A'))]
    #[case(0x09, Resolution::Char('\t'))]
    #[case(0x0A, Resolution::Char('\n'))]
    #[case(0x0C, Resolution::Char('\u{C}'))]
    #[case(0xA9, Resolution::Char('\u{A9}'))]
    #[case(0x2603, Resolution::Char('\u{2603}'))]
    #[case(0x1F600, Resolution::Char('\u{1F600}'))]
    #[case(0x10_FFFD, Resolution::Char('\u{10FFFD}'))]
    #[case(0, Resolution::Substitute('\u{FFFD}', ReferenceError::NullCharacter))]
    #[case(0x80, Resolution::Substitute('\u{20AC}', ReferenceError::ControlCharacter(0x80)))]
    #[case(0x9F, Resolution::Substitute('\u{178}', ReferenceError::ControlCharacter(0x9F)))]
    #[case(0x81, Resolution::Literal(ReferenceError::ControlCharacter(0x81)))]
    #[case(0x9D, Resolution::Literal(ReferenceError::ControlCharacter(0x9D)))]
    #[case(0x01, Resolution::Literal(ReferenceError::ControlCharacter(0x01)))]
    #[case(0x0D, Resolution::Literal(ReferenceError::ControlCharacter(0x0D)))]
    #[case(0x1F, Resolution::Literal(ReferenceError::ControlCharacter(0x1F)))]
    #[case(0x7F, Resolution::Literal(ReferenceError::ControlCharacter(0x7F)))]
    #[case(0xFDD0, Resolution::Literal(ReferenceError::Noncharacter(0xFDD0)))]
    #[case(0xFDEF, Resolution::Literal(ReferenceError::Noncharacter(0xFDEF)))]
    #[case(0xFFFE, Resolution::Literal(ReferenceError::Noncharacter(0xFFFE)))]
    #[case(0x10_FFFF, Resolution::Literal(ReferenceError::Noncharacter(0x10_FFFF)))]
    #[case(0x3_FFFF, Resolution::Literal(ReferenceError::Noncharacter(0x3_FFFF)))]
    #[case(0xD800, Resolution::Substitute('\u{FFFD}', ReferenceError::Surrogate(0xD800)))]
    #[case(0xDFFF, Resolution::Substitute('\u{FFFD}', ReferenceError::Surrogate(0xDFFF)))]
    #[case(
        0x11_0000,
        Resolution::Substitute('\u{FFFD}', ReferenceError::OutsideUnicodeRange(0x11_0000))
    )]
    #[case(
        0x7FFF_FFFF,
        Resolution::Substitute('\u{FFFD}', ReferenceError::OutsideUnicodeRange(0x7FFF_FFFF))
    )]
    fn resolution_rules(#[case] code: u32, #[case] expected: Resolution) {
        assert_eq!(resolve(code), expected);
    }

    #[test]
    fn remap_table_has_27_entries() {
        let mapped = (0x80..=0x9F).filter(|c| windows_1252(*c).is_some()).count();
        assert_eq!(mapped, 27);
        assert_eq!(windows_1252(0x7F), None);
        assert_eq!(windows_1252(0xA0), None);
    }

    #[test]
    fn noncharacters_exclude_out_of_range() {
        assert!(is_noncharacter(0x10_FFFE));
        assert!(!is_noncharacter(0x11_FFFE));
        assert!(!is_noncharacter(0xFFFD));
    }
}
