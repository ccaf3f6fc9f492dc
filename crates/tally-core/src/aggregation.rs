//! Connected-component frequency aggregation

use crate::error::{GraphError, Result};
use crate::graph::Graph;
use crate::model::{ComponentTotal, KeyStrategy, NodeId};

/// Sum the frequencies of every not-yet-visited node reachable from `start`,
/// marking each one visited. Returns 0 if `start` is already visited.
pub fn total_frequency(graph: &mut Graph, start: NodeId) -> Result<u64> {
    walk_component(graph, start).map(|(total, _)| total)
}

/// Depth-first walk from `start` with an explicit stack.
///
/// Neighbors are pushed in reverse so they pop in neighbor-list order, giving the
/// same pre-order a recursive walk would. Returns the total and the newly visited
/// nodes in visit order.
fn walk_component(graph: &mut Graph, start: NodeId) -> Result<(u64, Vec<NodeId>)> {
    let start_name = graph
        .node(start)
        .map(|n| n.name.clone())
        .ok_or_else(|| GraphError::unknown_name(format!("#{}", start.0)))?;

    let mut total: u64 = 0;
    let mut members = Vec::new();
    let mut stack = vec![start];

    while let Some(id) = stack.pop() {
        let Some(node) = graph.node_mut(id) else {
            continue;
        };
        if node.visited {
            continue;
        }
        node.visited = true;
        total = total
            .checked_add(node.freq)
            .ok_or_else(|| GraphError::FrequencyOverflow(start_name.clone()))?;
        members.push(id);
        stack.extend(node.neighbors().iter().rev().copied());
    }

    Ok((total, members))
}

/// Partition the graph into connected components and total each one.
///
/// Nodes are swept in first-creation order; each unvisited node starts a new
/// component. Results come back in discovery order.
pub fn aggregate_components(graph: &mut Graph, strategy: KeyStrategy) -> Result<Vec<ComponentTotal>> {
    let ids = graph.node_ids().to_vec();
    let mut components = Vec::new();

    for id in ids {
        if graph.node(id).is_none_or(|n| n.visited) {
            continue;
        }

        let (total, member_ids) = walk_component(graph, id)?;
        let members: Vec<String> = member_ids
            .iter()
            .filter_map(|&m| graph.node(m).map(|n| n.name.clone()))
            .collect();

        let key = match strategy {
            KeyStrategy::FirstVisited => members.first().cloned(),
            KeyStrategy::SmallestName => members.iter().min().cloned(),
        }
        .ok_or_else(|| GraphError::unknown_name(format!("#{}", id.0)))?;

        tracing::debug!("Component {:?}: {} members, total {}", key, members.len(), total);
        components.push(ComponentTotal { key, total, members });
    }

    tracing::info!("Aggregated {} components", components.len());
    Ok(components)
}
