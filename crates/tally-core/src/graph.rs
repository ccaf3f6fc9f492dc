//! Graph wrapper using petgraph::UnGraph with name lookup and ordered neighbors

use crate::error::{GraphError, Result};
use crate::model::*;
use petgraph::graph::{NodeIndex, UnGraph};
use std::collections::HashMap;

/// The synonym graph — undirected, nodes keyed by unique name.
///
/// Nodes are never removed, so arena indices stay valid for the life of the graph.
pub struct Graph {
    inner: UnGraph<Node, Synonym>,
    /// Node ids in first-creation order.
    order: Vec<NodeId>,
    by_name: HashMap<String, NodeId>,
}

impl std::fmt::Debug for Graph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Graph")
            .field("node_count", &self.inner.node_count())
            .field("edge_count", &self.inner.edge_count())
            .finish()
    }
}

impl Graph {
    pub fn new() -> Self {
        Graph {
            inner: UnGraph::default(),
            order: Vec::new(),
            by_name: HashMap::new(),
        }
    }

    /// True iff a node with this name exists.
    pub fn has_node(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Create a node, or return the existing one. The first frequency seen for a name wins.
    pub fn create_node(&mut self, name: &str, freq: u64) -> NodeId {
        if let Some(&id) = self.by_name.get(name) {
            tracing::debug!("Node {:?} already exists, ignoring frequency {}", name, freq);
            return id;
        }

        let idx = self.inner.add_node(Node::new(name, freq));
        let id = NodeId(idx.index() as u32);
        self.order.push(id);
        self.by_name.insert(name.to_string(), id);
        tracing::debug!("Created node {:?} (freq {})", name, freq);
        id
    }

    /// Look up a node by name.
    pub fn get_node(&self, name: &str) -> Result<NodeId> {
        self.by_name
            .get(name)
            .copied()
            .ok_or_else(|| GraphError::unknown_name(name))
    }

    /// Add an undirected edge between two existing names.
    ///
    /// Both names are resolved before anything is mutated. Returns `false` if the
    /// edge was already present.
    pub fn add_edge(&mut self, name1: &str, name2: &str) -> Result<bool> {
        let a = self.get_node(name1)?;
        let b = self.get_node(name2)?;

        let forward = self.inner[index(a)].add_neighbor(b, name2);
        let backward = self.inner[index(b)].add_neighbor(a, name1);
        if !(forward || backward) {
            tracing::debug!("Edge {:?} <-> {:?} already present", name1, name2);
            return Ok(false);
        }

        self.inner.add_edge(
            index(a),
            index(b),
            Synonym {
                left: name1.to_string(),
                right: name2.to_string(),
            },
        );
        tracing::debug!("Added edge {:?} <-> {:?}", name1, name2);
        Ok(true)
    }

    /// Get a node by ID.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.inner.node_weight(index(id))
    }

    /// Get a mutable node by ID.
    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.inner.node_weight_mut(index(id))
    }

    /// Node ids in first-creation order.
    pub fn node_ids(&self) -> &[NodeId] {
        &self.order
    }

    /// Iterate over all nodes in first-creation order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.order.iter().filter_map(move |&id| self.node(id))
    }

    /// Neighbors of a node in edge-addition order.
    pub fn neighbors(&self, id: NodeId) -> impl Iterator<Item = &Node> {
        self.node(id)
            .map(|n| n.neighbors())
            .unwrap_or_default()
            .iter()
            .filter_map(move |&nid| self.node(nid))
    }

    /// Check whether `name1` lists `name2` as a neighbor.
    pub fn has_edge_between(&self, name1: &str, name2: &str) -> bool {
        self.by_name
            .get(name1)
            .and_then(|&id| self.node(id))
            .is_some_and(|n| n.has_neighbor(name2))
    }

    /// Total number of nodes.
    pub fn node_count(&self) -> usize {
        self.inner.node_count()
    }

    /// Total number of distinct edges.
    pub fn edge_count(&self) -> usize {
        self.inner.edge_count()
    }

    /// Number of connected components, independent of any traversal state.
    pub fn component_count(&self) -> usize {
        petgraph::algo::connected_components(&self.inner)
    }

    /// Sum of every node's frequency.
    pub fn frequency_sum(&self) -> Option<u64> {
        self.nodes().try_fold(0u64, |acc, n| acc.checked_add(n.freq))
    }

    /// True once every node has been visited.
    pub fn all_visited(&self) -> bool {
        self.nodes().all(|n| n.visited)
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}

fn index(id: NodeId) -> NodeIndex {
    NodeIndex::new(id.0 as usize)
}
