//! Every entry of the WHATWG `entities.json` list, checked against the trie.

use alloc::{collections::BTreeMap, string::String, vec::Vec};

use serde::Deserialize;

use crate::{Decoded, ReferenceMatcher, named, unescape};

#[derive(Debug, Deserialize)]
struct Entity {
    codepoints: Vec<u32>,
    characters: String,
}

fn entities() -> BTreeMap<String, Entity> {
    serde_json::from_str(include_str!("../../data/entities.json")).expect("entities.json parses")
}

fn named_value(matcher: &ReferenceMatcher) -> Option<&'static str> {
    match matcher.value() {
        Decoded::Named(replacement) => Some(replacement),
        _ => None,
    }
}

fn feed_name(matcher: &mut ReferenceMatcher, name: &str) -> usize {
    matcher.reset();
    name.chars().take_while(|c| matcher.feed(*c)).count()
}

#[test]
fn list_is_complete() {
    let entities = entities();
    assert_eq!(entities.len(), 2231);
    let terminated = entities.keys().filter(|k| k.ends_with(';')).count();
    assert_eq!(terminated, 2125);
    assert_eq!(entities.len() - terminated, 106);
    assert_eq!(named::name_count(), terminated);
}

#[test]
fn codepoints_agree_with_characters() {
    for (name, entity) in entities() {
        let from_codepoints: String = entity
            .codepoints
            .iter()
            .map(|cp| char::from_u32(*cp).expect("scalar value"))
            .collect();
        assert_eq!(from_codepoints, entity.characters, "{name}");
    }
}

#[test]
fn every_terminated_name_decodes_and_rejects_semicolon() {
    let mut matcher = ReferenceMatcher::new();
    for (key, entity) in entities() {
        let Some(name) = key.strip_prefix('&').and_then(|k| k.strip_suffix(';')) else {
            continue;
        };
        assert_eq!(feed_name(&mut matcher, name), name.len(), "{key}");
        assert!(!matcher.feed(';'), "{key}");
        assert_eq!(named_value(&matcher), Some(entity.characters.as_str()), "{key}");
        assert_eq!(matcher.parse_error(), None, "{key}");
    }
}

#[test]
fn every_legacy_name_decodes_without_semicolon() {
    let mut matcher = ReferenceMatcher::new();
    for (key, entity) in entities() {
        if key.ends_with(';') {
            continue;
        }
        let name = &key[1..];
        assert_eq!(feed_name(&mut matcher, name), name.len(), "{key}");
        assert!(matcher.allows_missing_semicolon(), "{key}");
        assert_eq!(named_value(&matcher), Some(entity.characters.as_str()), "{key}");
    }
}

#[test]
fn only_legacy_names_allow_missing_semicolon() {
    let entities = entities();
    let mut matcher = ReferenceMatcher::new();
    for key in entities.keys().filter(|k| k.ends_with(';')) {
        let name = &key[1..key.len() - 1];
        feed_name(&mut matcher, name);
        let legacy = entities.contains_key(&key[..key.len() - 1]);
        assert_eq!(matcher.allows_missing_semicolon(), legacy, "{key}");
    }
}

#[test]
fn lookup_and_unescape_agree_with_list() {
    for (key, entity) in entities() {
        let name = &key[1..];
        assert_eq!(named::lookup(name), Some(entity.characters.as_str()), "{key}");
        if key.ends_with(';') {
            assert_eq!(unescape(&key), entity.characters, "{key}");
        }
    }
}
