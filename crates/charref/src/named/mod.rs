//! The HTML5 named character reference dictionary, compiled into a trie.
//!
//! Every name from the WHATWG list is stored without its trailing `;`. A node
//! whose path spells a complete name is *terminal* and carries an index into
//! [`REPLACEMENTS`]. Names that the HTML standard also accepts without the
//! semicolon (`&amp`, `&not`, `&copy`, ...) are marked *legacy*. Terminal
//! nodes may still have children: `not` is terminal and continues to `notin`.
//!
//! Nodes are numbered breadth-first, so the children of a node occupy a
//! contiguous run of node ids and their edge labels a contiguous run of
//! [`LABELS`]. A transition is a binary search over that run.

mod table;

use table::{LABELS, NODES, REPLACEMENTS};

/// Index of a node in the named-reference trie.
pub(crate) type NodeId = u16;

/// The trie root, reached before any character has been consumed.
pub(crate) const ROOT: NodeId = 0;

const NO_REPLACEMENT: u16 = u16::MAX;

#[derive(Debug, Clone, Copy)]
pub(crate) struct Node {
    first_child: u16,
    child_count: u8,
    legacy: bool,
    replacement: u16,
}

impl Node {
    pub(crate) const fn branch(first_child: u16, child_count: u8) -> Self {
        Self {
            first_child,
            child_count,
            legacy: false,
            replacement: NO_REPLACEMENT,
        }
    }

    pub(crate) const fn named(first_child: u16, child_count: u8, replacement: u16) -> Self {
        Self {
            first_child,
            child_count,
            legacy: false,
            replacement,
        }
    }

    pub(crate) const fn legacy(first_child: u16, child_count: u8, replacement: u16) -> Self {
        Self {
            first_child,
            child_count,
            legacy: true,
            replacement,
        }
    }
}

/// Follows the edge labelled `byte` out of `node`.
#[inline]
pub(crate) fn step(node: NodeId, byte: u8) -> Option<NodeId> {
    let Node {
        first_child,
        child_count,
        ..
    } = NODES[usize::from(node)];
    let start = usize::from(first_child);
    let labels = &LABELS[start..start + usize::from(child_count)];
    let offset = u16::try_from(labels.binary_search(&byte).ok()?).ok()?;
    Some(first_child + offset)
}

/// The replacement text for `node` if it ends a complete name.
#[inline]
pub(crate) fn replacement(node: NodeId) -> Option<&'static str> {
    let replacement = NODES[usize::from(node)].replacement;
    (replacement != NO_REPLACEMENT).then(|| REPLACEMENTS[usize::from(replacement)])
}

/// Whether the name ending at `node` is also valid without a trailing `;`.
#[inline]
pub(crate) fn is_legacy(node: NodeId) -> bool {
    NODES[usize::from(node)].legacy
}

/// Looks up a complete reference name, without the leading `&`.
///
/// A trailing `;` is optional for the legacy names that the HTML standard
/// accepts without one and required for every other name.
///
/// ```rust
/// assert_eq!(charref::named::lookup("amp;"), Some("&"));
/// assert_eq!(charref::named::lookup("amp"), Some("&"));
/// assert_eq!(charref::named::lookup("notin;"), Some("\u{2209}"));
/// assert_eq!(charref::named::lookup("notin"), None);
/// ```
#[must_use]
pub fn lookup(name: &str) -> Option<&'static str> {
    let (stem, terminated) = match name.strip_suffix(';') {
        Some(stem) => (stem, true),
        None => (name, false),
    };
    if stem.is_empty() {
        return None;
    }
    let node = stem.bytes().try_fold(ROOT, step)?;
    if terminated || is_legacy(node) {
        replacement(node)
    } else {
        None
    }
}

/// Number of distinct names (counting `amp` and `amp;` once) in the trie.
#[must_use]
pub fn name_count() -> usize {
    NODES.iter().filter(|node| node.replacement != NO_REPLACEMENT).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn walk(name: &str) -> Option<NodeId> {
        name.bytes().try_fold(ROOT, step)
    }

    #[test]
    fn root_has_every_ascii_letter() {
        for byte in (b'A'..=b'Z').chain(b'a'..=b'z') {
            assert!(step(ROOT, byte).is_some(), "no names start with {}", byte as char);
        }
        assert_eq!(step(ROOT, b'0'), None);
        assert_eq!(step(ROOT, b';'), None);
    }

    #[test]
    fn terminal_node_can_continue() {
        let not = walk("not").unwrap();
        assert_eq!(replacement(not), Some("\u{AC}"));
        assert!(is_legacy(not));

        let notin = walk("notin").unwrap();
        assert_eq!(replacement(notin), Some("\u{2209}"));
        assert!(!is_legacy(notin));

        let noti = walk("noti").unwrap();
        assert_eq!(replacement(noti), None);
    }

    #[test]
    fn two_character_replacements() {
        assert_eq!(lookup("NotEqualTilde;"), Some("\u{2242}\u{338}"));
        assert_eq!(lookup("fjlig;"), Some("fj"));
        assert_eq!(lookup("Afr;"), Some("\u{1D504}"));
    }

    #[test]
    fn longest_name_fits() {
        assert_eq!(lookup("CounterClockwiseContourIntegral;"), Some("\u{2233}"));
    }

    #[test]
    fn lookup_requires_semicolon_unless_legacy() {
        assert_eq!(lookup("lt"), Some("<"));
        assert_eq!(lookup("hellip"), None);
        assert_eq!(lookup("hellip;"), Some("\u{2026}"));
        assert_eq!(lookup(";"), None);
        assert_eq!(lookup(""), None);
        assert_eq!(lookup("AMP;"), Some("&"));
        assert_eq!(lookup("aMp;"), None);
    }

    #[test]
    fn counts_distinct_names() {
        assert_eq!(name_count(), 2125);
    }
}
