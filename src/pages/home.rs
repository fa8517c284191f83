use leptos::prelude::*;

use crate::components::graph_view::{GraphData, GraphEdge, GraphNode, GraphViewCanvas};

/// Generate a sample graph snapshot (random tree, deterministic per seed).
fn generate_sample_data(n: usize, seed: usize) -> GraphData {
	let nodes: Vec<GraphNode> = (0..n)
		.map(|i| {
			let mut node = GraphNode::new(i.to_string());
			if i < 10 {
				node.label = Some(format!("Node {}", i));
			}
			node
		})
		.collect();

	let edges: Vec<GraphEdge> = (1..n)
		.map(|i| {
			let target = (rand_simple(i + seed) * (i as f64)) as usize;
			GraphEdge::new(i.to_string(), target.to_string())
		})
		.collect();

	GraphData { nodes, edges }
}

/// Simple pseudo-random number generator (deterministic for consistency).
fn rand_simple(seed: usize) -> f64 {
	let x = ((seed + 1) * 9301 + 49297) % 233280;
	(x as f64) / 233280.0
}

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	// None until the first render; the view stays uninitialized meanwhile.
	let (snapshot, set_snapshot) = signal(None::<GraphData>);
	let (generation, set_generation) = signal(0usize);

	let on_render = move |_| {
		let seed = generation.get();
		set_generation.set(seed + 1);
		set_snapshot.set(Some(generate_sample_data(60, seed)));
	};
	let on_reset = move |_| set_snapshot.set(None);

	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>

			<div class="graph-page">
				<div class="graph-controls">
					<h1>"Graph View"</h1>
					<p class="subtitle">"Render draws a fresh snapshot. Reset clears the surface."</p>
					<button on:click=on_render>"Render"</button>
					<button on:click=on_reset>"Reset"</button>
				</div>
				<GraphViewCanvas data=snapshot width=600.0 height=600.0 />
			</div>
		</ErrorBoundary>
	}
}
