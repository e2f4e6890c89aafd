use alloc::{format, string::String};

use quickcheck::QuickCheck;
use rstest::rstest;

use super::utils::quickcheck_tests;
use crate::{
    Decoded, ReferenceMatcher,
    numeric::{Resolution, resolve},
};

fn decode(matcher: &mut ReferenceMatcher, reference: &str) -> (usize, String) {
    matcher.reset();
    let accepted = reference.chars().take_while(|c| matcher.feed(*c)).count();
    (accepted, format!("{}", matcher.value()))
}

/// Property: decimal and hexadecimal spellings of an ordinary code point
/// decode to the character itself, and both stop at the `;`.
#[test]
fn decimal_and_hex_agree_quickcheck() {
    fn prop(code: u32) -> bool {
        let code = code % 0x11_0000;
        let Resolution::Char(expected) = resolve(code) else {
            return true;
        };
        let mut matcher = ReferenceMatcher::new();

        let decimal = format!("#{code};");
        let (accepted, text) = decode(&mut matcher, &decimal);
        if accepted != decimal.len() - 1 || matcher.value() != Decoded::Numeric(expected) {
            return false;
        }
        let mut expected_text = String::new();
        expected_text.push(expected);
        if text != expected_text {
            return false;
        }

        let hex = format!("#x{code:x};");
        let (accepted, text) = decode(&mut matcher, &hex);
        accepted == hex.len() - 1 && text == expected_text
    }

    QuickCheck::new()
        .tests(quickcheck_tests())
        .quickcheck(prop as fn(u32) -> bool);
}

/// Property: code points that decode to themselves survive any number of
/// leading zeros up to the length bound.
#[test]
fn leading_zeros_quickcheck() {
    fn prop(code: u32, zeros: u8) -> bool {
        let code = code % 0x11_0000;
        let Resolution::Char(expected) = resolve(code) else {
            return true;
        };
        let hex = format!("{code:X}");
        let zeros = usize::from(zeros) % (crate::MAX_REFERENCE_LEN - 2 - hex.len());
        let reference = format!("#X{}{hex}", "0".repeat(zeros));

        let mut matcher = ReferenceMatcher::new();
        let (accepted, _) = decode(&mut matcher, &reference);
        accepted == reference.len() && matcher.value() == Decoded::Numeric(expected)
    }

    QuickCheck::new()
        .tests(quickcheck_tests())
        .quickcheck(prop as fn(u32, u8) -> bool);
}

#[rstest]
#[case::null("#0;", "\u{FFFD}")]
#[case::euro("#128;", "\u{20AC}")]
#[case::euro_hex("#x80;", "\u{20AC}")]
#[case::unmapped_c1("#x81;", "#x81")]
#[case::surrogate("#xD800;", "\u{FFFD}")]
#[case::noncharacter("#xFFFE;", "#xFFFE")]
#[case::noncharacter_decimal("#65535;", "#65535")]
#[case::too_large("#x110000;", "\u{FFFD}")]
#[case::largest_accepted("#2147483647;", "\u{FFFD}")]
#[case::carriage_return("#13;", "#13")]
#[case::no_digits("#;", "#")]
#[case::no_hex_digits("#x;", "#x")]
#[case::snowman("#x2603;", "\u{2603}")]
#[case::copyright("#169;", "\u{A9}")]
#[case::astral("#x1D504;", "\u{1D504}")]
fn numeric_reference(#[case] reference: &str, #[case] expected: &str) {
    let mut matcher = ReferenceMatcher::new();
    let (accepted, text) = decode(&mut matcher, reference);
    assert_eq!(accepted, reference.len() - 1);
    assert_eq!(text, expected);
}

#[test]
fn overflowing_digit_is_rejected() {
    let mut matcher = ReferenceMatcher::new();
    let (accepted, text) = decode(&mut matcher, "#21474836470");
    assert_eq!(accepted, 11);
    assert_eq!(text, "\u{FFFD}");

    let (accepted, _) = decode(&mut matcher, "#2147483648");
    assert_eq!(accepted, 10);
    assert_eq!(matcher.literal(), "#214748364");
    assert_eq!(matcher.value(), Decoded::Numeric('\u{FFFD}'));
}
