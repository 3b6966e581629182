use crate::error::ExportError;
use crate::fp::tree::{FpTrie, NodeId};
use crate::fp::Item;
use std::fs;
use std::path::Path;

const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const VERTICAL: &str = "│   ";
const BLANK: &str = "    ";

/// Indented tree, one node per line, children in creation order:
///
/// ```text
/// root: 0
/// └── 2: 3 (Link=Head-2)
///     ├── 1: 2 (Link=Head-1)
/// ```
pub fn render_text<I: Item>(trie: &FpTrie<I>) -> String {
    let mut out = String::new();
    // (node, line prefix, indent for its children)
    let mut stack: Vec<(NodeId, String, String)> =
        vec![(NodeId::ROOT, String::new(), String::new())];

    while let Some((id, prefix, indent)) = stack.pop() {
        let Some(node) = trie.node(id) else { continue };

        let line = if node.is_root() {
            format!("{prefix}{}: {}", node.name(), node.count)
        } else {
            format!(
                "{prefix}{}: {} (Link={})",
                node.name(),
                node.count,
                trie.link_display(id)
            )
        };
        out.push_str(&format!("{line:<8}\n"));

        let children = trie.children(id);
        for (pos, &child) in children.iter().enumerate().rev() {
            let (branch, cont) = if pos + 1 == children.len() {
                (LAST_BRANCH, BLANK)
            } else {
                (BRANCH, VERTICAL)
            };
            stack.push((child, format!("{indent}{branch}"), format!("{indent}{cont}")));
        }
    }

    out
}

pub fn write_text<I: Item>(trie: &FpTrie<I>, path: impl AsRef<Path>) -> Result<(), ExportError> {
    let path = path.as_ref();
    fs::write(path, render_text(trie)).map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })
}
