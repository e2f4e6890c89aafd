use core::fmt;

/// The text a finished character reference stands for.
///
/// Returned by [`ReferenceMatcher::value`](crate::ReferenceMatcher::value).
/// [`Decoded::Literal`] is the recovery for a reference that is not valid:
/// the characters fed to the matcher are emitted unchanged (without the `&`
/// that introduced them, which the matcher never sees).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decoded<'a> {
    /// Replacement text of a named reference: one character, or two for a
    /// handful of names such as `&NotEqualTilde;`.
    Named(&'static str),
    /// The character a numeric reference decodes to, after substitution.
    Numeric(char),
    /// The raw characters that were fed, for input that is not a reference.
    Literal(&'a str),
    /// A shorter named reference found along the way, followed by the
    /// characters that were fed after it.
    Prefix {
        /// Replacement text of the shorter reference.
        replacement: &'static str,
        /// Characters fed after the shorter reference, emitted unchanged.
        rest: &'a str,
    },
}

impl Decoded<'_> {
    /// Whether any replacement took place.
    #[must_use]
    pub fn is_replacement(&self) -> bool {
        !matches!(self, Decoded::Literal(_))
    }
}

impl fmt::Display for Decoded<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Decoded::Named(text) => f.write_str(text),
            Decoded::Literal(text) => f.write_str(text),
            Decoded::Numeric(ch) => fmt::Write::write_char(f, *ch),
            Decoded::Prefix { replacement, rest } => {
                f.write_str(replacement)?;
                f.write_str(rest)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::Decoded;

    #[test]
    fn display_concatenates_prefix() {
        let decoded = Decoded::Prefix {
            replacement: "\u{AC}",
            rest: "it",
        };
        assert_eq!(decoded.to_string(), "\u{AC}it");
        assert!(decoded.is_replacement());
    }

    #[test]
    fn literal_is_not_a_replacement() {
        assert!(!Decoded::Literal("zzz").is_replacement());
        assert_eq!(Decoded::Numeric('\u{1F600}').to_string(), "\u{1F600}");
    }
}
