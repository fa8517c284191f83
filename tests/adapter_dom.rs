//! Browser tests for the graph view adapter. Run with
//! `wasm-pack test --headless --chrome` (or `cargo test --target wasm32-unknown-unknown`
//! under a wasm test runner); on native targets this crate compiles empty.
#![cfg(target_arch = "wasm32")]

use graph_view_canvas::components::graph_view::{GraphData, GraphEdge, GraphNode, GraphView};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::HtmlCanvasElement;

wasm_bindgen_test_configure!(run_in_browser);

fn host() -> web_sys::Element {
	let document = web_sys::window().unwrap().document().unwrap();
	let host = document.create_element("div").unwrap();
	document.body().unwrap().append_child(&host).unwrap();
	host
}

fn snapshot(node_ids: &[&str], edges: &[(&str, &str)]) -> GraphData {
	GraphData {
		nodes: node_ids.iter().map(|id| GraphNode::new(*id)).collect(),
		edges: edges
			.iter()
			.map(|(s, t)| GraphEdge::new(*s, *t))
			.collect(),
	}
}

#[wasm_bindgen_test]
fn construction_builds_sized_container_without_engine() {
	let host = host();
	let view = GraphView::new(&host, 300.0, 200.0);

	assert!(!view.is_initialized());
	let container = host.first_element_child().unwrap();
	assert_eq!(container.class_name(), "graph-view-container");
	let canvas: HtmlCanvasElement = container.first_element_child().unwrap().dyn_into().unwrap();
	assert_eq!(canvas.width(), 300);
	assert_eq!(canvas.height(), 200);
}

#[wasm_bindgen_test]
fn first_render_creates_engine_holding_the_snapshot() {
	let host = host();
	let mut view = GraphView::new(&host, 300.0, 200.0);
	view.render(&snapshot(&["a", "b", "c"], &[("a", "b"), ("b", "c")]));

	assert!(view.is_initialized());
	let engine = view.engine().unwrap();
	assert_eq!(engine.node_count(), 3);
	assert_eq!(engine.edge_count(), 2);
}

#[wasm_bindgen_test]
fn second_render_replaces_the_displayed_graph() {
	let host = host();
	let mut view = GraphView::new(&host, 300.0, 200.0);
	view.render(&snapshot(&["a", "b", "c"], &[("a", "b")]));
	view.render(&snapshot(&["x", "y"], &[("x", "y")]));

	let engine = view.engine().unwrap();
	assert_eq!(engine.node_count(), 2);
	assert_eq!(engine.edge_count(), 1);
}

#[wasm_bindgen_test]
fn reset_after_render_empties_the_view_but_keeps_the_engine() {
	let host = host();
	let mut view = GraphView::new(&host, 300.0, 200.0);
	view.render(&snapshot(&["a", "b"], &[("a", "b")]));
	view.reset();

	assert!(view.is_initialized());
	let engine = view.engine().unwrap();
	assert_eq!(engine.node_count(), 0);
	assert_eq!(engine.edge_count(), 0);
}

#[wasm_bindgen_test]
fn reset_before_any_render_is_a_noop() {
	let host = host();
	let mut view = GraphView::new(&host, 300.0, 200.0);
	view.reset();
	assert!(!view.is_initialized());
}

#[wasm_bindgen_test]
fn mutating_the_snapshot_after_render_does_not_affect_the_view() {
	let host = host();
	let mut view = GraphView::new(&host, 300.0, 200.0);
	let mut data = snapshot(&["a", "b"], &[("a", "b")]);
	view.render(&data);

	data.nodes.clear();
	data.edges.clear();

	let engine = view.engine().unwrap();
	assert_eq!(engine.node_count(), 2);
	assert_eq!(engine.edge_count(), 1);
}
