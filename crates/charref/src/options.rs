/// Configuration for a [`ReferenceMatcher`](crate::ReferenceMatcher).
///
/// # Default
///
/// All options default to `false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatcherOptions {
    /// Whether `value()` may fall back to a shorter named reference.
    ///
    /// The matcher follows a single path through the named-reference trie
    /// and, by default, only looks at the state it stopped in. Feeding
    /// `noti` passes through the complete reference `not` on its way towards
    /// `notin`, but since `noti` is not itself a reference the result is the
    /// literal text `noti`.
    ///
    /// When `true`, the matcher remembers the last reference along its path
    /// that is valid without a semicolon and `value()` yields that
    /// replacement followed by the remaining characters (`¬i`).
    ///
    /// # Default
    ///
    /// `false`
    pub fall_back_to_shorter_match: bool,
}

/// Configuration for an [`Unescaper`](crate::Unescaper).
///
/// # Default
///
/// All options default to `false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnescapeOptions {
    /// Whether the text is an attribute value.
    ///
    /// Inside attribute values, a named reference without its semicolon that
    /// is directly followed by `=` or an ASCII alphanumeric is left as is.
    /// This keeps query strings such as `?a=1&copy=2` intact.
    ///
    /// # Default
    ///
    /// `false`
    pub in_attribute: bool,
}
