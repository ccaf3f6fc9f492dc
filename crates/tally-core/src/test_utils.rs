//! Test utilities for Tally

use crate::builder::construct_graph;
use crate::graph::Graph;
use crate::input::DataSet;
use crate::model::NodeId;

/// Graph built from the sample data set.
pub fn sample_graph() -> Graph {
    DataSet::sample()
        .build(Default::default())
        .expect("sample data should build")
}

/// Build a graph from string literals.
pub fn graph_of(names: &[(&str, u64)], synonyms: &[(&str, &str)]) -> Graph {
    construct_graph(names.iter().copied(), synonyms.iter().copied()).expect("test graph should build")
}

/// A single chain `n0 - n1 - ... - n{len-1}`, each with frequency 1.
pub fn chain_graph(len: usize) -> Graph {
    let names: Vec<(String, u64)> = (0..len).map(|i| (format!("n{i}"), 1)).collect();
    let synonyms: Vec<(String, String)> = (1..len)
        .map(|i| (format!("n{}", i - 1), format!("n{i}")))
        .collect();
    construct_graph(names, synonyms).expect("chain should build")
}

/// Names of a node's neighbors, in neighbor-list order.
pub fn neighbor_names(graph: &Graph, name: &str) -> Vec<String> {
    let id: NodeId = graph.get_node(name).expect("node should exist");
    graph.neighbors(id).map(|n| n.name.clone()).collect()
}
