#![no_main]

use arbitrary::Arbitrary;
use charref::{
    Decoded, MAX_REFERENCE_LEN, MatcherOptions, ReferenceMatcher, UnescapeOptions, Unescaper,
};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    fall_back_to_shorter_match: bool,
    in_attribute: bool,
    /// Characters fed before a reset, to catch state leaking across references.
    warm_up: String,
    text: String,
}

fn matcher(input: &Input) {
    let mut matcher = ReferenceMatcher::with_options(MatcherOptions {
        fall_back_to_shorter_match: input.fall_back_to_shorter_match,
    });
    for c in input.warm_up.chars() {
        if !matcher.feed(c) {
            break;
        }
    }
    matcher.reset();

    let mut accepted = String::new();
    for c in input.text.chars() {
        let before = matcher.len();
        if !matcher.feed(c) {
            assert_eq!(matcher.len(), before, "rejection changed the matcher");
            break;
        }
        accepted.push(c);
    }

    assert!(matcher.len() <= MAX_REFERENCE_LEN);
    assert_eq!(matcher.literal(), accepted);
    match matcher.value() {
        Decoded::Literal(text) => assert_eq!(text, accepted),
        Decoded::Prefix { rest, .. } => assert!(accepted.ends_with(rest)),
        Decoded::Named(text) => assert!(!text.is_empty()),
        Decoded::Numeric(_) => assert!(accepted.starts_with('#')),
    }
}

fn unescape(input: &Input) {
    let mut unescaper = Unescaper::with_options(UnescapeOptions {
        in_attribute: input.in_attribute,
    });
    let out = unescaper.unescape(&input.text);
    if !input.text.contains('&') {
        assert_eq!(out, input.text);
    }
}

fuzz_target!(|input: Input| {
    matcher(&input);
    unescape(&input);
});
