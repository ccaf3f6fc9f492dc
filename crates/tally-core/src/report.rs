//! Rendering of component totals

use crate::error::Result;
use crate::model::ComponentTotal;
use serde_json::{Map, Value};

/// One-line mapping in discovery order, e.g. `{John: 12, Carleton: 4}`.
pub fn render_mapping(components: &[ComponentTotal]) -> String {
    let entries: Vec<String> = components
        .iter()
        .map(|c| format!("{}: {}", c.key, c.total))
        .collect();
    format!("{{{}}}", entries.join(", "))
}

/// JSON object of key to total, keys in discovery order.
pub fn render_json(components: &[ComponentTotal]) -> Result<String> {
    let map: Map<String, Value> = components
        .iter()
        .map(|c| (c.key.clone(), Value::from(c.total)))
        .collect();
    Ok(serde_json::to_string(&Value::Object(map))?)
}

/// JSON array with each component's key, total and members.
pub fn render_detailed(components: &[ComponentTotal]) -> Result<String> {
    Ok(serde_json::to_string_pretty(components)?)
}
