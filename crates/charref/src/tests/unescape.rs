use alloc::{borrow::Cow, format, string::String, vec::Vec};

use quickcheck::QuickCheck;
use rstest::rstest;

use super::utils::quickcheck_tests;
use crate::{
    ReferenceError, UnescapeOptions, Unescaper,
    numeric::{Resolution, resolve},
    unescape, unescape_attribute,
};

#[rstest]
#[case::plain("no references here", "no references here")]
#[case::amp("fish &amp; chips", "fish & chips")]
#[case::adjacent("&lt;&gt;&quot;&apos;", "<>\"'")]
#[case::legacy_without_semicolon("&copy 2025", "\u{A9} 2025")]
#[case::legacy_at_end("&amp", "&")]
#[case::semicolon_required("&hellip done", "&hellip done")]
#[case::fallback("I'm &notit; I tell you", "I'm \u{AC}it; I tell you")]
#[case::fallback_at_end("&notin", "\u{AC}in")]
#[case::full_name("&notin;", "\u{2209}")]
#[case::unknown("&zzzz;", "&zzzz;")]
#[case::bare_ampersand("a & b", "a & b")]
#[case::trailing_ampersand("a &", "a &")]
#[case::double_ampersand("&&amp;", "&&")]
#[case::numeric("&#65;&#x42;&#X43;", "ABC")]
#[case::numeric_without_semicolon("&#65B", "AB")]
#[case::numeric_no_digits("&#;&#x;", "&#;&#x;")]
#[case::noncharacter("&#xFFFE;", "&#xFFFE;")]
#[case::decimal_overflow("&#99999999999;x", "\u{FFFD}x")]
#[case::overflow_past_accumulator("&#21474836470;", "\u{FFFD}")]
#[case::overflow_without_semicolon("&#99999999999 x", "\u{FFFD} x")]
#[case::zero_padded_hex("&#x0000000000000000000000000000000041;x", "Ax")]
#[case::zero_padded_decimal("&#000000000000000000000000000000000065;", "A")]
#[case::zero_padded_noncharacter(
    "&#x00000000000000000000000000000FFFF;",
    "&#x00000000000000000000000000000FFFF;"
)]
#[case::null("&#0;", "\u{FFFD}")]
#[case::windows_1252("&#150;", "\u{2013}")]
#[case::two_characters("&NotEqualTilde;", "\u{2242}\u{338}")]
#[case::astral("&Afr;", "\u{1D504}")]
#[case::non_ascii_after("&ampé", "&é")]
#[case::multibyte_text("€ &euro; €", "€ € €")]
fn unescape_text(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(unescape(input), expected);
}

#[rstest]
#[case::query("?a=1&copy=2", "?a=1&copy=2")]
#[case::alphanumeric_follows("&notit", "&notit")]
#[case::terminated("&copy;=2", "\u{A9}=2")]
#[case::space_follows("&copy 2", "\u{A9} 2")]
#[case::at_end("x&amp", "x&")]
#[case::numeric("&#38;b", "&b")]
fn unescape_attribute_value(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(unescape_attribute(input), expected);
}

#[test]
fn input_without_ampersand_is_borrowed() {
    assert!(matches!(unescape("plain text"), Cow::Borrowed("plain text")));
    assert!(matches!(unescape("&amp;"), Cow::Owned(_)));
}

#[test]
fn errors_are_reported_with_offsets() {
    let mut errors = Vec::new();
    let mut unescaper = Unescaper::new();
    let out = unescaper.unescape_with("&#0;x&copy &#xD800;&bogus;&#;", |error, offset| {
        errors.push((error, offset));
    });
    assert_eq!(out, "\u{FFFD}x\u{A9} \u{FFFD}&bogus;&#;");
    assert_eq!(
        errors,
        [
            (ReferenceError::NullCharacter, 0),
            (ReferenceError::MissingSemicolon, 5),
            (ReferenceError::Surrogate(0xD800), 11),
            (ReferenceError::UnknownNamedReference, 19),
            (ReferenceError::AbsenceOfDigits, 26),
        ]
    );
}

#[test]
fn overlong_numeric_errors() {
    let mut errors = Vec::new();
    let input = "&#99999999999;&#x000000000000000000000000000000041";
    let out = Unescaper::new().unescape_with(input, |error, offset| {
        errors.push((error, offset));
    });
    assert_eq!(out, "\u{FFFD}A");
    assert_eq!(
        errors,
        [
            (ReferenceError::OutsideUnicodeRange(0x11_0000), 0),
            (ReferenceError::MissingSemicolon, 14),
        ]
    );
}

#[test]
fn unescaper_is_reusable() {
    let mut unescaper = Unescaper::with_options(UnescapeOptions { in_attribute: true });
    assert_eq!(unescaper.unescape("&lt;a&gt"), "<a>");
    assert_eq!(unescaper.unescape("&amp=1"), "&amp=1");
    assert_eq!(unescaper.unescape("none"), "none");
}

/// Escapes `&` and every non-ASCII character that a numeric reference can
/// reproduce.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if c == '&' {
            out.push_str("&amp;");
        } else if !c.is_ascii() && resolve(c as u32) == Resolution::Char(c) {
            out.push_str(&format!("&#x{:X};", c as u32));
        } else {
            out.push(c);
        }
    }
    out
}

/// Property: unescaping the escaped form of any string gives the string back.
#[test]
fn escape_roundtrip_quickcheck() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(text: String) -> bool {
        unescape(&escape(&text)) == text
    }

    QuickCheck::new()
        .tests(quickcheck_tests())
        .quickcheck(prop as fn(String) -> bool);
}

/// Property: arbitrary input never panics and only ever shrinks or keeps the
/// text when it has no `&`.
#[test]
fn arbitrary_input_quickcheck() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(text: String, in_attribute: bool) -> bool {
        let mut unescaper = Unescaper::with_options(UnescapeOptions { in_attribute });
        let out = unescaper.unescape(&text);
        text.contains('&') || out == text
    }

    QuickCheck::new()
        .tests(quickcheck_tests())
        .quickcheck(prop as fn(String, bool) -> bool);
}
