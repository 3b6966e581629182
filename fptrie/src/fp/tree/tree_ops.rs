use super::tree::{ChainLink, FpTrie, HeaderEntry, NodeId, PathKey, TrieNode};
use crate::error::{FpError, Result};
use crate::fp::Item;
use tracing::trace;

impl<I: Item> FpTrie<I> {
    /// Merges one F-list ordered transaction into the trie.
    ///
    /// `ordered_items` pairs every item with its local count and must already
    /// be filtered and sorted by F-list rank. Returns the node at the end of
    /// the inserted path.
    pub fn insert(&mut self, ordered_items: &[(I, usize)]) -> Result<NodeId> {
        if ordered_items.is_empty() {
            return Err(FpError::EmptyInsertion);
        }

        let mut current = NodeId::ROOT;
        for (item, local_count) in ordered_items {
            let path = self.nodes[current.0].path.child(item.clone());

            current = match self.paths.get(&path).copied() {
                Some(existing) => {
                    self.nodes[existing.0].count += *local_count;
                    existing
                }
                None => self.create_node(current, item, *local_count, path),
            };
        }

        Ok(current)
    }

    fn create_node(&mut self, parent: NodeId, item: &I, count: usize, path: PathKey<I>) -> NodeId {
        let header = self.reserve_header(item);
        let link = match self.headers[header].head {
            Some(previous) => ChainLink::Node(previous),
            None => ChainLink::Header,
        };

        let id = NodeId(self.nodes.len());
        trace!(node = id.0, path = %path, count, "new trie node");

        self.paths.insert(path.clone(), id);
        self.nodes
            .push(TrieNode::new_item(item.clone(), count, parent, path, link));
        self.nodes[parent.0].children.push(id);
        self.headers[header].head = Some(id);
        id
    }

    pub fn root(&self) -> &TrieNode<I> {
        &self.nodes[NodeId::ROOT.0]
    }

    pub fn node(&self, id: NodeId) -> Option<&TrieNode<I>> {
        self.nodes.get(id.0)
    }

    /// Node for an exact path of items from the root.
    pub fn get(&self, path: &[I]) -> Option<NodeId> {
        if path.is_empty() {
            return Some(NodeId::ROOT);
        }
        self.paths.get(&PathKey::from(path.to_vec())).copied()
    }

    /// All item nodes in creation order, root excluded.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &TrieNode<I>)> {
        self.nodes
            .iter()
            .enumerate()
            .skip(1)
            .map(|(idx, node)| (NodeId(idx), node))
    }

    /// Number of item nodes, root excluded.
    pub fn len(&self) -> usize {
        self.nodes.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        match self.nodes.get(id.0) {
            Some(node) => &node.children,
            None => &[],
        }
    }

    pub fn headers(&self) -> &[HeaderEntry<I>] {
        &self.headers
    }

    pub fn header(&self, item: &I) -> Option<&HeaderEntry<I>> {
        self.header_index.get(item).map(|&idx| &self.headers[idx])
    }

    pub fn chain_head(&self, item: &I) -> Option<NodeId> {
        self.header(item).and_then(|header| header.head)
    }

    /// Every node carrying `item`, newest first.
    pub fn chain(&self, item: &I) -> Chain<'_, I> {
        Chain {
            trie: self,
            next: self.chain_head(item),
        }
    }

    /// Total count of `item` over its chain.
    pub fn item_support(&self, item: &I) -> usize {
        self.chain(item).map(|id| self.nodes[id.0].count).sum()
    }

    /// Display name of whatever `id`'s chain link points at: the previous
    /// node's path key, or the header name for the first node of an item.
    pub fn link_display(&self, id: NodeId) -> String {
        let node = &self.nodes[id.0];
        match (node.link, &node.item) {
            (ChainLink::Node(previous), _) => self.nodes[previous.0].path.to_string(),
            (ChainLink::Header, Some(item)) => format!("Head-{item}"),
            (ChainLink::Header, None) => String::new(),
        }
    }

    /// Root is 0. Equals the length of the node's path key.
    pub fn depth(&self, id: NodeId) -> usize {
        self.nodes.get(id.0).map_or(0, |node| node.path.len())
    }

    /// Items on the path from the root to `id`, excluding `id` itself.
    pub fn prefix_items(&self, id: NodeId) -> Vec<I> {
        let mut items = Vec::new();
        let mut current = self.nodes.get(id.0).and_then(|node| node.parent);

        while let Some(idx) = current {
            if let Some(item) = &self.nodes[idx.0].item {
                items.push(item.clone());
            }
            current = self.nodes[idx.0].parent;
        }

        items.reverse();
        items
    }
}

/// Walks one item's chain from the newest node back to the header.
pub struct Chain<'a, I: Item> {
    trie: &'a FpTrie<I>,
    next: Option<NodeId>,
}

impl<I: Item> Iterator for Chain<'_, I> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.next?;
        self.next = match self.trie.nodes[current.0].link {
            ChainLink::Node(previous) => Some(previous),
            ChainLink::Header => None,
        };
        Some(current)
    }
}
