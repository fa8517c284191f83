use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::graph::GraphStore;

pub fn render(store: &GraphStore, ctx: &CanvasRenderingContext2d) {
	ctx.set_fill_style_str("#1a1a2e");
	ctx.fill_rect(0.0, 0.0, store.width, store.height);
	draw_edges(store, ctx);
	draw_nodes(store, ctx);
}

fn draw_edges(store: &GraphStore, ctx: &CanvasRenderingContext2d) {
	let mut nodes = std::collections::HashMap::new();
	store.graph.visit_nodes(|node| {
		nodes.insert(
			node.index(),
			(node.x() as f64, node.y() as f64, node.data.user_data.radius),
		);
	});

	for edge in &store.edges {
		let (Some(&(x1, y1, r1)), Some(&(x2, y2, r2))) =
			(nodes.get(&edge.source), nodes.get(&edge.target))
		else {
			continue;
		};
		let (dx, dy) = (x2 - x1, y2 - y1);
		let dist = (dx * dx + dy * dy).sqrt();
		if dist < 0.001 {
			continue;
		}

		// Trim endpoints so lines stop at the node circles.
		let (ux, uy) = (dx / dist, dy / dist);

		ctx.set_stroke_style_str(&edge.color);
		ctx.set_line_width(edge.width);
		ctx.begin_path();
		ctx.move_to(x1 + ux * r1, y1 + uy * r1);
		ctx.line_to(x2 - ux * r2, y2 - uy * r2);
		ctx.stroke();
	}
}

fn draw_nodes(store: &GraphStore, ctx: &CanvasRenderingContext2d) {
	store.graph.visit_nodes(|node| {
		let (x, y) = (node.x() as f64, node.y() as f64);
		let style = &node.data.user_data;

		ctx.begin_path();
		let _ = ctx.arc(x, y, style.radius, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(&style.color);
		ctx.fill();

		if let Some(label) = &style.label {
			ctx.set_fill_style_str("rgba(255, 255, 255, 0.8)");
			ctx.set_font("10px sans-serif");
			let _ = ctx.fill_text(label, x + style.radius + 3.0, y + 3.0);
		}
	});
}
