//! Tally Core — synonym graph, builder and component frequency aggregation

pub mod model;
pub mod error;
pub mod graph;
pub mod builder;
pub mod aggregation;
pub mod input;
pub mod report;


#[cfg(test)]
pub mod test_utils;

pub use model::{NodeId, Node, Synonym, ComponentTotal, KeyStrategy, UnknownNamePolicy};
pub use error::{GraphError, Result};
pub use graph::Graph;
pub use builder::{construct_graph, construct_graph_with};
pub use aggregation::{total_frequency, aggregate_components};
pub use input::DataSet;
pub use report::{render_mapping, render_json, render_detailed};
