//! Regenerates `crates/charref/src/named/table.rs` from a WHATWG
//! `entities.json` file and writes it to standard output.
//!
//! ```text
//! cargo run -p charref-tablegen -- crates/charref/data/entities.json > crates/charref/src/named/table.rs
//! ```

use std::{
    collections::{BTreeMap, VecDeque},
    fmt::Write as _,
    fs,
    io::{self, Write as _},
    path::PathBuf,
    process::ExitCode,
};

use serde::Deserialize;
use thiserror::Error;

const LINE_WIDTH: usize = 100;
const INDENT: &str = "    ";
const LABELS_PER_LINE: usize = 96;

#[derive(Debug, Deserialize)]
struct Entity {
    characters: String,
}

#[derive(Debug, Error)]
enum TableError {
    #[error("usage: charref-tablegen <entities.json>")]
    Usage,
    #[error("reading {path}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("parsing entities: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("entity {0:?} does not start with `&`")]
    MissingAmpersand(String),
    #[error("`{0}` and `{0};` have different replacements")]
    Conflict(String),
    #[error("trie has {0} nodes, more than a u16 can index")]
    TooManyNodes(usize),
    #[error("a trie node has {0} children, more than a u8 can count")]
    TooManyChildren(usize),
    #[error("writing table: {0}")]
    Write(#[from] io::Error),
}

/// A reference name without its `;`.
struct Name {
    replacement: String,
    /// Also listed without the trailing `;`.
    legacy: bool,
}

#[derive(Default)]
struct TrieNode {
    label: u8,
    children: BTreeMap<u8, usize>,
    name: Option<usize>,
}

fn collect_names(entities: BTreeMap<String, Entity>) -> Result<Vec<(String, Name)>, TableError> {
    let mut names: BTreeMap<String, Name> = BTreeMap::new();
    for (key, entity) in entities {
        let name = key
            .strip_prefix('&')
            .ok_or_else(|| TableError::MissingAmpersand(key.clone()))?;
        let (stem, legacy) = match name.strip_suffix(';') {
            Some(stem) => (stem, false),
            None => (name, true),
        };
        let entry = names.entry(stem.to_owned()).or_insert_with(|| Name {
            replacement: entity.characters.clone(),
            legacy: false,
        });
        if entry.replacement != entity.characters {
            return Err(TableError::Conflict(stem.to_owned()));
        }
        entry.legacy |= legacy;
    }
    Ok(names.into_iter().collect())
}

fn build_trie(names: &[(String, Name)]) -> Vec<TrieNode> {
    let mut nodes = vec![TrieNode::default()];
    for (index, (stem, _)) in names.iter().enumerate() {
        let mut current = 0;
        for byte in stem.bytes() {
            current = match nodes[current].children.get(&byte) {
                Some(&child) => child,
                None => {
                    let child = nodes.len();
                    nodes.push(TrieNode {
                        label: byte,
                        ..TrieNode::default()
                    });
                    nodes[current].children.insert(byte, child);
                    child
                }
            };
        }
        nodes[current].name = Some(index);
    }
    nodes
}

/// Node indices in breadth-first order, children sorted by label.
fn breadth_first(nodes: &[TrieNode]) -> Vec<usize> {
    let mut order = Vec::with_capacity(nodes.len());
    let mut queue = VecDeque::from([0]);
    while let Some(node) = queue.pop_front() {
        order.push(node);
        queue.extend(nodes[node].children.values().copied());
    }
    order
}

/// Lays `items` out on lines of at most [`LINE_WIDTH`] columns.
fn pack(out: &mut String, items: &[String]) {
    let mut line = String::from(INDENT);
    for item in items {
        if line.len() > INDENT.len() && line.len() + 1 + item.len() > LINE_WIDTH {
            out.push_str(&line);
            out.push('\n');
            line = String::from(INDENT);
        }
        if line.len() > INDENT.len() {
            line.push(' ');
        }
        line.push_str(item);
    }
    if line.len() > INDENT.len() {
        out.push_str(&line);
        out.push('\n');
    }
}

fn render(names: &[(String, Name)], nodes: &[TrieNode]) -> Result<String, TableError> {
    let order = breadth_first(nodes);
    if order.len() > usize::from(u16::MAX) {
        return Err(TableError::TooManyNodes(order.len()));
    }
    let mut new_id = vec![0; nodes.len()];
    for (id, &node) in order.iter().enumerate() {
        new_id[node] = id;
    }

    let mut replacements: Vec<&str> = Vec::new();
    let mut node_items = Vec::with_capacity(order.len());
    for &node in &order {
        let trie_node = &nodes[node];
        let child_count = trie_node.children.len();
        if child_count > usize::from(u8::MAX) {
            return Err(TableError::TooManyChildren(child_count));
        }
        let first_child = trie_node
            .children
            .values()
            .next()
            .map_or(0, |&child| new_id[child]);

        let item = match trie_node.name {
            None => format!("Node::branch({first_child}, {child_count}),"),
            Some(index) => {
                let name = &names[index].1;
                let replacement = match replacements.iter().position(|r| *r == name.replacement) {
                    Some(position) => position,
                    None => {
                        replacements.push(&name.replacement);
                        replacements.len() - 1
                    }
                };
                let kind = if name.legacy { "legacy" } else { "named" };
                format!("Node::{kind}({first_child}, {child_count}, {replacement}),")
            }
        };
        node_items.push(item);
    }

    let mut out = String::new();
    out.push_str(
        "// @generated by `charref-tablegen` from `data/entities.json`. Do not edit by hand.\n",
    );
    out.push_str("//\n");
    out.push_str(
        "// cargo run -p charref-tablegen -- crates/charref/data/entities.json \
         > crates/charref/src/named/table.rs\n",
    );
    out.push_str("\nuse super::Node;\n\n");

    writeln!(out, "pub(super) static NODES: [Node; {}] = [", order.len()).ok();
    pack(&mut out, &node_items);
    out.push_str("];\n\n");

    writeln!(out, "pub(super) static LABELS: &[u8; {}] = b\"\\", order.len()).ok();
    let labels: Vec<String> = order
        .iter()
        .map(|&node| match nodes[node].label {
            0 => String::from("\\0"),
            byte => char::from(byte).to_string(),
        })
        .collect();
    for chunk in labels.chunks(LABELS_PER_LINE) {
        writeln!(out, "{INDENT}{}\\", chunk.concat()).ok();
    }
    out.push_str("\";\n\n");

    writeln!(
        out,
        "pub(super) static REPLACEMENTS: [&str; {}] = [",
        replacements.len()
    )
    .ok();
    let replacement_items: Vec<String> = replacements
        .iter()
        .map(|r| format!("\"{}\",", r.escape_unicode()))
        .collect();
    pack(&mut out, &replacement_items);
    out.push_str("];\n");

    Ok(out)
}

fn run() -> Result<(), TableError> {
    let path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .ok_or(TableError::Usage)?;
    let source = fs::read_to_string(&path).map_err(|source| TableError::Read {
        path: path.clone(),
        source,
    })?;
    let entities: BTreeMap<String, Entity> = serde_json::from_str(&source)?;

    let names = collect_names(entities)?;
    let nodes = build_trie(&names);
    let table = render(&names, &nodes)?;

    io::stdout().lock().write_all(table.as_bytes())?;
    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::{Entity, build_trie, collect_names, render};

    #[test]
    fn checked_in_table_is_current() {
        let source = include_str!("../../charref/data/entities.json");
        let entities: BTreeMap<String, Entity> =
            serde_json::from_str(source).expect("entities.json parses");
        let names = collect_names(entities).expect("names collect");
        let nodes = build_trie(&names);
        let table = render(&names, &nodes).expect("table renders");
        assert!(
            table == include_str!("../../charref/src/named/table.rs"),
            "src/named/table.rs is stale; rerun charref-tablegen"
        );
    }
}
