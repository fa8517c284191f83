use std::collections::HashMap;
use std::f64::consts::PI;

use force_graph::{DefaultNodeIdx, EdgeData, ForceGraph, NodeData, SimulationParameters};

use super::types::{GraphData, GraphEdge, ViewSettings};

pub const NODE_RADIUS: f64 = 5.0;

const EDGE_COLOR: &str = "rgba(100, 180, 255, 0.6)";

#[derive(Clone, Debug, Default)]
pub struct NodeStyle {
	pub label: Option<String>,
	pub color: String,
	pub radius: f64,
}

#[derive(Clone, Debug)]
pub struct EdgeStyle {
	pub source: DefaultNodeIdx,
	pub target: DefaultNodeIdx,
	pub color: String,
	pub width: f64,
}

/// Rescales a snapshot's relative edge sizes into the configured
/// thickness band. Edge size is relative; only the band is absolute.
struct SizeBand {
	lo: f64,
	hi: f64,
	min_width: f64,
	max_width: f64,
}

impl SizeBand {
	fn from_edges(edges: &[GraphEdge], settings: &ViewSettings) -> Self {
		let sizes = edges.iter().map(|e| e.size.unwrap_or(1.0));
		let lo = sizes.clone().fold(f64::INFINITY, f64::min);
		let hi = sizes.fold(f64::NEG_INFINITY, f64::max);
		Self {
			lo,
			hi,
			min_width: settings.min_edge_size,
			max_width: settings.max_edge_size,
		}
	}

	fn width_for(&self, size: Option<f64>) -> f64 {
		let size = size.unwrap_or(1.0);
		if self.hi <= self.lo {
			// All edges the same relative size, draw them thin.
			return self.min_width;
		}
		self.min_width + (size - self.lo) / (self.hi - self.lo) * (self.max_width - self.min_width)
	}
}

/// The graph currently held by the engine: a force-directed simulation plus
/// the resolved per-element styling needed to draw it.
pub struct GraphStore {
	pub graph: ForceGraph<NodeStyle, ()>,
	pub edges: Vec<EdgeStyle>,
	pub width: f64,
	pub height: f64,
	node_count: usize,
}

impl GraphStore {
	pub fn new(width: f64, height: f64) -> Self {
		Self {
			graph: Self::new_simulation(),
			edges: Vec::new(),
			width,
			height,
			node_count: 0,
		}
	}

	fn new_simulation() -> ForceGraph<NodeStyle, ()> {
		ForceGraph::new(SimulationParameters {
			force_charge: 150.0,
			force_spring: 0.05,
			force_max: 100.0,
			node_speed: 3000.0,
			damping_factor: 0.9,
		})
	}

	/// Empty the held graph. The store itself stays alive.
	pub fn clear(&mut self) {
		self.graph = Self::new_simulation();
		self.edges.clear();
		self.node_count = 0;
	}

	/// Load a snapshot into the held graph. Nodes without coordinates are
	/// seeded on a circle around the canvas center; edges referencing
	/// missing node ids are dropped.
	pub fn read(&mut self, data: &GraphData, settings: &ViewSettings) {
		let mut id_to_idx = HashMap::new();

		for (i, node) in data.nodes.iter().enumerate() {
			let color = node
				.color
				.clone()
				.unwrap_or_else(|| settings.default_node_color.clone());
			let (x, y) = match (node.x, node.y) {
				(Some(x), Some(y)) => (x as f32, y as f32),
				_ => {
					let angle = (i as f64) * 2.0 * PI / data.nodes.len() as f64;
					(
						(self.width / 2.0 + 100.0 * angle.cos()) as f32,
						(self.height / 2.0 + 100.0 * angle.sin()) as f32,
					)
				}
			};

			let idx = self.graph.add_node(NodeData {
				x,
				y,
				mass: 10.0,
				is_anchor: false,
				user_data: NodeStyle {
					label: node.label.clone(),
					color,
					radius: node.size.map(|s| s * NODE_RADIUS).unwrap_or(NODE_RADIUS),
				},
			});
			id_to_idx.insert(node.id.clone(), idx);
			self.node_count += 1;
		}

		let band = SizeBand::from_edges(&data.edges, settings);
		for edge in &data.edges {
			if let (Some(&src), Some(&tgt)) =
				(id_to_idx.get(&edge.source), id_to_idx.get(&edge.target))
			{
				self.graph.add_edge(src, tgt, EdgeData::default());
				self.edges.push(EdgeStyle {
					source: src,
					target: tgt,
					color: edge.color.clone().unwrap_or_else(|| EDGE_COLOR.into()),
					width: band.width_for(edge.size),
				});
			}
		}
	}

	pub fn node_count(&self) -> usize {
		self.node_count
	}

	pub fn edge_count(&self) -> usize {
		self.edges.len()
	}

	pub fn is_empty(&self) -> bool {
		self.node_count == 0 && self.edges.is_empty()
	}

	pub fn positions(&self) -> HashMap<DefaultNodeIdx, (f64, f64)> {
		let mut positions = HashMap::with_capacity(self.node_count);
		self.graph.visit_nodes(|node| {
			positions.insert(node.index(), (node.x() as f64, node.y() as f64));
		});
		positions
	}

	pub fn tick(&mut self, dt: f32) {
		self.graph.update(dt);
	}
}
