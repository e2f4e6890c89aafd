use alloc::{format, string::String};

use quickcheck::QuickCheck;

use super::utils::quickcheck_tests;
use crate::{MAX_REFERENCE_LEN, MatcherOptions, ReferenceMatcher};

/// Everything observable about a matcher, rendered for comparison.
fn observe(matcher: &ReferenceMatcher) -> String {
    format!(
        "{:?}|{}|{:?}|{:?}|{}|{:?}",
        matcher.mode(),
        matcher.literal(),
        matcher.value(),
        matcher.parse_error(),
        matcher.is_terminal(),
        matcher.shorter_match(),
    )
}

fn feed(matcher: &mut ReferenceMatcher, input: &str) -> usize {
    input.chars().take_while(|c| matcher.feed(*c)).count()
}

/// Property: a matcher that has been reset, whatever it saw before, behaves
/// exactly like a freshly constructed one.
#[test]
fn reset_is_fresh_quickcheck() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(before: String, input: String, fallback: bool) -> bool {
        let options = MatcherOptions {
            fall_back_to_shorter_match: fallback,
        };
        let mut reused = ReferenceMatcher::with_options(options);
        feed(&mut reused, &before);
        reused.reset();
        let mut fresh = ReferenceMatcher::with_options(options);

        let accepted = feed(&mut reused, &input);
        accepted == feed(&mut fresh, &input) && observe(&reused) == observe(&fresh)
    }

    QuickCheck::new()
        .tests(quickcheck_tests())
        .quickcheck(prop as fn(String, String, bool) -> bool);
}

/// Property: a rejected character changes nothing, and the length bound
/// always holds.
#[test]
fn rejection_is_side_effect_free_quickcheck() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(input: String, extra: char) -> bool {
        let mut matcher = ReferenceMatcher::new();
        feed(&mut matcher, &input);
        if matcher.len() > MAX_REFERENCE_LEN {
            return false;
        }
        let before = observe(&matcher);
        let len = matcher.len();
        if matcher.feed(extra) {
            return matcher.len() == len + 1;
        }
        observe(&matcher) == before
    }

    QuickCheck::new()
        .tests(quickcheck_tests())
        .quickcheck(prop as fn(String, char) -> bool);
}

#[test]
fn unknown_letters_are_returned_verbatim() {
    let mut matcher = ReferenceMatcher::new();
    assert_eq!(feed(&mut matcher, "zzzzz"), 1);
    assert_eq!(format!("{}", matcher.value()), "z");

    matcher.reset();
    assert_eq!(feed(&mut matcher, "Aacutf"), 5);
    assert_eq!(format!("{}", matcher.value()), "Aacut");
}

#[test]
fn long_run_is_cut_at_the_bound() {
    let mut matcher = ReferenceMatcher::new();
    let digits = format!("#{}", "0".repeat(40));
    let accepted = feed(&mut matcher, &digits);
    assert!(accepted < 32);
    assert_eq!(accepted, MAX_REFERENCE_LEN);
}
