//! Graph assembly from a frequency table and a list of synonym pairs

use crate::error::Result;
use crate::graph::Graph;
use crate::model::UnknownNamePolicy;

/// Build a graph, failing on any synonym that names an unknown entry.
pub fn construct_graph<N, A, B>(
    names: impl IntoIterator<Item = (N, u64)>,
    synonyms: impl IntoIterator<Item = (A, B)>,
) -> Result<Graph>
where
    N: AsRef<str>,
    A: AsRef<str>,
    B: AsRef<str>,
{
    construct_graph_with(names, synonyms, UnknownNamePolicy::Fail)
}

/// Build a graph with an explicit policy for synonyms that reference unknown names.
///
/// Nodes are created in `names` order, then edges are added in `synonyms` order.
pub fn construct_graph_with<N, A, B>(
    names: impl IntoIterator<Item = (N, u64)>,
    synonyms: impl IntoIterator<Item = (A, B)>,
    policy: UnknownNamePolicy,
) -> Result<Graph>
where
    N: AsRef<str>,
    A: AsRef<str>,
    B: AsRef<str>,
{
    let mut graph = Graph::new();

    for (name, freq) in names {
        graph.create_node(name.as_ref(), freq);
    }

    for (left, right) in synonyms {
        let (left, right) = (left.as_ref(), right.as_ref());
        if policy == UnknownNamePolicy::CreateZero {
            for name in [left, right] {
                if !graph.has_node(name) {
                    tracing::warn!("Synonym references unknown name {:?}, creating it with frequency 0", name);
                    graph.create_node(name, 0);
                }
            }
        }
        graph.add_edge(left, right)?;
    }

    tracing::info!(
        "Built graph: {} nodes, {} edges, {} components",
        graph.node_count(),
        graph.edge_count(),
        graph.component_count()
    );
    Ok(graph)
}
