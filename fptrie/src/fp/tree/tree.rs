use crate::fp::Item;
use std::collections::HashMap;
use std::fmt;

/// Index of a node in the trie arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    pub const ROOT: NodeId = NodeId(0);

    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// Ordered items from the root down to a node. The root's key is empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PathKey<I>(Vec<I>);

impl<I: Item> PathKey<I> {
    pub fn root() -> Self {
        Self(Vec::new())
    }

    pub fn child(&self, item: I) -> Self {
        let mut items = Vec::with_capacity(self.0.len() + 1);
        items.extend_from_slice(&self.0);
        items.push(item);
        Self(items)
    }

    pub fn items(&self) -> &[I] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }
}

impl<I: Item> From<Vec<I>> for PathKey<I> {
    fn from(items: Vec<I>) -> Self {
        Self(items)
    }
}

/// `R` followed by the items, e.g. `R213`.
impl<I: Item> fmt::Display for PathKey<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("R")?;
        for item in &self.0 {
            write!(f, "{item}")?;
        }
        Ok(())
    }
}

/// Same-item link from a node to the node created before it for that item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChainLink {
    /// First node of its item: links back to the header entry.
    Header,
    Node(NodeId),
}

#[derive(Debug, Clone)]
pub struct TrieNode<I> {
    pub item: Option<I>,
    pub count: usize,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
    pub path: PathKey<I>,
    pub link: ChainLink,
}

impl<I: Item> TrieNode<I> {
    pub fn new_root() -> Self {
        Self {
            item: None,
            count: 0,
            parent: None,
            children: Vec::new(),
            path: PathKey::root(),
            link: ChainLink::Header,
        }
    }

    pub fn new_item(item: I, count: usize, parent: NodeId, path: PathKey<I>, link: ChainLink) -> Self {
        Self {
            item: Some(item),
            count,
            parent: Some(parent),
            children: Vec::new(),
            path,
            link,
        }
    }

    pub fn is_root(&self) -> bool {
        self.item.is_none()
    }

    /// `root` for the root, the item otherwise.
    pub fn name(&self) -> String {
        match &self.item {
            Some(item) => item.to_string(),
            None => "root".to_string(),
        }
    }
}

/// Pseudo-root heading the chain of one item. Never holds data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderEntry<I> {
    pub item: I,
    /// Most recently created node for the item.
    pub head: Option<NodeId>,
}

impl<I: Item> HeaderEntry<I> {
    pub fn new(item: I) -> Self {
        Self { item, head: None }
    }

    /// `Head-<item>`
    pub fn name(&self) -> String {
        format!("Head-{}", self.item)
    }
}

#[derive(Debug, Clone)]
pub struct FpTrie<I: Item> {
    pub(crate) nodes: Vec<TrieNode<I>>,
    pub(crate) paths: HashMap<PathKey<I>, NodeId>,
    pub(crate) headers: Vec<HeaderEntry<I>>,
    pub(crate) header_index: HashMap<I, usize>,
}

impl<I: Item> Default for FpTrie<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: Item> FpTrie<I> {
    pub fn new() -> Self {
        Self {
            nodes: vec![TrieNode::new_root()],
            paths: HashMap::new(),
            headers: Vec::new(),
            header_index: HashMap::new(),
        }
    }

    /// Creates a trie with one header entry reserved per item, in order.
    pub fn with_items<'a>(items: impl IntoIterator<Item = &'a I>) -> Self
    where
        I: 'a,
    {
        let mut trie = Self::new();
        for item in items {
            trie.reserve_header(item);
        }
        trie
    }

    pub(crate) fn reserve_header(&mut self, item: &I) -> usize {
        if let Some(&idx) = self.header_index.get(item) {
            return idx;
        }
        let idx = self.headers.len();
        self.headers.push(HeaderEntry::new(item.clone()));
        self.header_index.insert(item.clone(), idx);
        idx
    }
}
