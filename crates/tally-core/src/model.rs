//! Core data structures for the synonym graph

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Stable identifier for a node, the index of its arena slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub struct NodeId(pub u32);

/// One name in the graph.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub name: String,
    /// Occurrence count of this name before aliasing.
    pub freq: u64,
    /// Traversal marker. Flips to `true` once and never resets.
    pub visited: bool,
    /// Neighbors in edge-addition order.
    neighbors: Vec<NodeId>,
    /// Names already present in `neighbors`.
    neighbor_names: HashSet<String>,
}

impl Node {
    pub fn new(name: impl Into<String>, freq: u64) -> Self {
        Node {
            name: name.into(),
            freq,
            visited: false,
            neighbors: Vec::new(),
            neighbor_names: HashSet::new(),
        }
    }

    /// Link `other` as a neighbor. Returns `false` if it was already linked.
    pub fn add_neighbor(&mut self, other: NodeId, other_name: &str) -> bool {
        if self.neighbor_names.contains(other_name) {
            return false;
        }
        self.neighbor_names.insert(other_name.to_string());
        self.neighbors.push(other);
        true
    }

    pub fn has_neighbor(&self, name: &str) -> bool {
        self.neighbor_names.contains(name)
    }

    pub fn neighbors(&self) -> &[NodeId] {
        &self.neighbors
    }

    pub fn degree(&self) -> usize {
        self.neighbors.len()
    }
}

/// Edge weight stored in the arena. Every edge is one declared synonym pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Synonym {
    pub left: String,
    pub right: String,
}

/// Aggregated frequency of one connected component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentTotal {
    /// Representative name the total is reported under.
    pub key: String,
    pub total: u64,
    /// Member names in visit order.
    pub members: Vec<String>,
}

/// How a component picks its representative name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum KeyStrategy {
    /// The node the sweep started the component from.
    #[default]
    FirstVisited,
    /// The lexicographically smallest member name.
    SmallestName,
}

/// What to do when a synonym pair names something with no frequency entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UnknownNamePolicy {
    /// Abort construction with [`crate::GraphError::UnknownName`].
    #[default]
    Fail,
    /// Create the missing node with frequency 0.
    CreateZero,
}
