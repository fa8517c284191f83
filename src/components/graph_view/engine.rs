use std::cell::RefCell;
use std::rc::Rc;

use log::debug;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::graph::GraphStore;
use super::render;
use super::types::{GraphData, ViewSettings};

/// Live handle to the drawing engine. The owning [`GraphView`] holds at
/// most one of these; it is created on the first render and lives until
/// the view itself is discarded.
///
/// [`GraphView`]: super::GraphView
pub struct Engine {
	store: Rc<RefCell<GraphStore>>,
	ctx: CanvasRenderingContext2d,
	settings: ViewSettings,
	animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

impl Engine {
	/// Build the engine over `canvas`, load the initial snapshot, draw it,
	/// and start the simulation loop.
	pub fn new(canvas: &HtmlCanvasElement, settings: ViewSettings, data: &GraphData) -> Self {
		let (w, h) = (canvas.width() as f64, canvas.height() as f64);
		let ctx: CanvasRenderingContext2d = canvas
			.get_context("2d")
			.unwrap()
			.unwrap()
			.dyn_into()
			.unwrap();

		let mut store = GraphStore::new(w, h);
		store.read(data, &settings);
		debug!(
			"engine created: {} nodes, {} edges",
			store.node_count(),
			store.edge_count()
		);

		let engine = Self {
			store: Rc::new(RefCell::new(store)),
			ctx,
			settings,
			animate: Rc::new(RefCell::new(None)),
		};
		engine.refresh();
		engine.start_animation();
		engine
	}

	/// Empty the held graph. The canvas is not redrawn until `refresh`.
	pub fn clear(&self) {
		self.store.borrow_mut().clear();
	}

	/// Load a snapshot into the held graph.
	pub fn read(&self, data: &GraphData) {
		self.store.borrow_mut().read(data, &self.settings);
	}

	/// Redraw the canvas from the held graph.
	pub fn refresh(&self) {
		render::render(&self.store.borrow(), &self.ctx);
	}

	pub fn node_count(&self) -> usize {
		self.store.borrow().node_count()
	}

	pub fn edge_count(&self) -> usize {
		self.store.borrow().edge_count()
	}

	fn start_animation(&self) {
		let (store, ctx, animate_inner) =
			(self.store.clone(), self.ctx.clone(), self.animate.clone());
		*self.animate.borrow_mut() = Some(Closure::new(move || {
			{
				let mut store = store.borrow_mut();
				store.tick(0.016);
				render::render(&store, &ctx);
			}
			if let Some(ref cb) = *animate_inner.borrow() {
				let _ = web_sys::window()
					.unwrap()
					.request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}));
		if let Some(ref cb) = *self.animate.borrow() {
			let _ = web_sys::window()
				.unwrap()
				.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	}
}
