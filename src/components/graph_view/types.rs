use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GraphNode {
	pub id: String,
	pub label: Option<String>,
	pub color: Option<String>,
	pub size: Option<f64>,
	pub x: Option<f64>,
	pub y: Option<f64>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GraphEdge {
	pub source: String,
	pub target: String,
	pub color: Option<String>,
	pub size: Option<f64>,
}

/// A snapshot of the graph to display, as produced by an external
/// collaborator. The view clones it before use and never mutates the
/// caller's value.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct GraphData {
	#[serde(default)]
	pub nodes: Vec<GraphNode>,
	#[serde(default)]
	pub edges: Vec<GraphEdge>,
}

/// Default styling applied where a snapshot leaves attributes unset.
#[derive(Clone, Debug)]
pub struct ViewSettings {
	pub default_node_color: String,
	pub min_edge_size: f64,
	pub max_edge_size: f64,
}

impl Default for ViewSettings {
	fn default() -> Self {
		Self {
			default_node_color: "black".into(),
			min_edge_size: 1.0,
			max_edge_size: 5.0,
		}
	}
}

impl GraphNode {
	pub fn new(id: impl Into<String>) -> Self {
		Self {
			id: id.into(),
			label: None,
			color: None,
			size: None,
			x: None,
			y: None,
		}
	}
}

impl GraphEdge {
	pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
		Self {
			source: source.into(),
			target: target.into(),
			color: None,
			size: None,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn snapshot_deserializes_from_wire_shape() {
		let json = r##"{
			"nodes": [
				{"id": "a", "label": "A", "size": 2.0},
				{"id": "b", "color": "#ff0000", "x": 10.0, "y": 20.0}
			],
			"edges": [
				{"source": "a", "target": "b", "size": 3.0}
			]
		}"##;
		let data: GraphData = serde_json::from_str(json).unwrap();
		assert_eq!(data.nodes.len(), 2);
		assert_eq!(data.edges.len(), 1);
		assert_eq!(data.nodes[0].id, "a");
		assert_eq!(data.nodes[0].label.as_deref(), Some("A"));
		assert_eq!(data.nodes[1].color.as_deref(), Some("#ff0000"));
		assert_eq!(data.edges[0].size, Some(3.0));
	}

	#[test]
	fn empty_snapshot_deserializes() {
		let data: GraphData = serde_json::from_str("{}").unwrap();
		assert!(data.nodes.is_empty());
		assert!(data.edges.is_empty());
	}

	#[test]
	fn default_settings_match_engine_config() {
		let settings = ViewSettings::default();
		assert_eq!(settings.default_node_color, "black");
		assert_eq!(settings.min_edge_size, 1.0);
		assert_eq!(settings.max_edge_size, 5.0);
	}
}
