//! Input data set: name frequencies plus synonym pairs, loadable from TOML or JSON

use crate::error::{GraphError, Result};
use crate::graph::Graph;
use crate::model::UnknownNamePolicy;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Frequencies and synonym pairs fed to the graph builder.
///
/// `names` keeps document order; it decides which node represents a component.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DataSet {
    #[serde(default, with = "ordered_names")]
    pub names: Vec<(String, u64)>,
    #[serde(default)]
    pub synonyms: Vec<(String, String)>,
}

impl DataSet {
    /// The built-in sample data.
    pub fn sample() -> Self {
        let names = [
            ("John", 3),
            ("Jonathan", 4),
            ("Johnny", 5),
            ("Chris", 1),
            ("Kris", 3),
            ("Brian", 2),
            ("Bryan", 4),
            ("Carleton", 4),
        ];
        let synonyms = [
            ("John", "Jonathan"),
            ("Jonathan", "Johnny"),
            ("Chris", "Kris"),
            ("Brian", "Bryan"),
        ];

        DataSet {
            names: names.iter().map(|&(n, f)| (n.to_string(), f)).collect(),
            synonyms: synonyms
                .iter()
                .map(|&(a, b)| (a.to_string(), b.to_string()))
                .collect(),
        }
    }

    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    pub fn from_json_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Load a data set, choosing the parser from the file extension.
    pub fn load(path: &Path) -> Result<Self> {
        let parse: fn(&str) -> Result<Self> = match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => Self::from_toml_str,
            Some("json") => Self::from_json_str,
            _ => return Err(GraphError::UnsupportedFormat(path.to_path_buf())),
        };

        let text = std::fs::read_to_string(path)?;
        let data = parse(&text)?;
        tracing::debug!(
            "Loaded {} names, {} synonyms from {}",
            data.names.len(),
            data.synonyms.len(),
            path.display()
        );
        Ok(data)
    }

    /// Build the synonym graph for this data set.
    pub fn build(&self, policy: UnknownNamePolicy) -> Result<Graph> {
        crate::builder::construct_graph_with(
            self.names.iter().map(|(n, f)| (n.as_str(), *f)),
            self.synonyms.iter().map(|(a, b)| (a.as_str(), b.as_str())),
            policy,
        )
    }
}

/// (De)serialize `Vec<(String, u64)>` as a map, keeping entry order and duplicates.
mod ordered_names {
    use serde::de::{MapAccess, Visitor};
    use serde::ser::SerializeMap;
    use serde::{Deserializer, Serializer};
    use std::fmt;

    pub fn serialize<S: Serializer>(names: &[(String, u64)], serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(names.len()))?;
        for (name, freq) in names {
            map.serialize_entry(name, freq)?;
        }
        map.end()
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<(String, u64)>, D::Error> {
        struct NamesVisitor;

        impl<'de> Visitor<'de> for NamesVisitor {
            type Value = Vec<(String, u64)>;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of name to non-negative frequency")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut names = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some(entry) = access.next_entry::<String, u64>()? {
                    names.push(entry);
                }
                Ok(names)
            }
        }

        deserializer.deserialize_map(NamesVisitor)
    }
}
