use crate::fp::counter::FList;
use crate::fp::tree::FpTrie;
use crate::fp::Item;
use std::fmt;

/// Flat audit record of one trie node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeRecord {
    pub path: String,
    pub item: String,
    pub parent: String,
    pub link: String,
    pub count: usize,
}

impl fmt::Display for NodeRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Path: {} | Node: {} | Parent: {} | link: {} | Count: {}",
            self.path, self.item, self.parent, self.link, self.count
        )
    }
}

/// One record per created node, in creation order.
pub fn node_records<I: Item>(trie: &FpTrie<I>) -> Vec<NodeRecord> {
    trie.nodes()
        .map(|(id, node)| NodeRecord {
            path: node.path.to_string(),
            item: node.name(),
            parent: node
                .parent
                .and_then(|parent| trie.node(parent))
                .map(|parent| parent.name())
                .unwrap_or_default(),
            link: trie.link_display(id),
            count: node.count,
        })
        .collect()
}

pub fn node_report<I: Item>(trie: &FpTrie<I>) -> String {
    node_records(trie)
        .iter()
        .map(|record| format!("{record}\n"))
        .collect()
}

/// `{item: count, ...}` in F-list order.
pub fn flist_summary<I: Item>(f_list: &FList<I>) -> String {
    let entries: Vec<String> = f_list
        .iter()
        .map(|(item, count)| format!("{item}: {count}"))
        .collect();
    format!("{{{}}}", entries.join(", "))
}
