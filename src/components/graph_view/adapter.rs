use log::info;
use wasm_bindgen::prelude::*;
use web_sys::{Element, HtmlCanvasElement};

use super::engine::Engine;
use super::types::{GraphData, ViewSettings};

/// A graph view embedded in the page: a fixed-size container appended to a
/// host element, default styling, and at most one live [`Engine`].
///
/// The engine is created lazily by the first [`render`](Self::render);
/// afterwards renders replace the displayed graph in place and
/// [`reset`](Self::reset) empties it. The engine is never torn down while
/// the view lives.
pub struct GraphView {
	canvas: HtmlCanvasElement,
	settings: ViewSettings,
	engine: Option<Engine>,
}

impl GraphView {
	/// Build a `width`×`height` drawing container and append it to `host`.
	/// No engine exists until the first render. Dimensions are passed
	/// through unvalidated.
	pub fn new(host: &Element, width: f64, height: f64) -> Self {
		let document = web_sys::window().unwrap().document().unwrap();

		let container = document.create_element("div").unwrap();
		container.set_class_name("graph-view-container");
		container
			.set_attribute("style", &format!("width: {width}px; height: {height}px;"))
			.unwrap();

		let canvas: HtmlCanvasElement = document
			.create_element("canvas")
			.unwrap()
			.dyn_into()
			.unwrap();
		canvas.set_width(width as u32);
		canvas.set_height(height as u32);
		container.append_child(&canvas).unwrap();
		host.append_child(&container).unwrap();

		Self {
			canvas,
			settings: ViewSettings::default(),
			engine: None,
		}
	}

	/// Replace the displayed graph with a snapshot of `data`. The input is
	/// cloned, so later mutation by the caller does not affect the view.
	pub fn render(&mut self, data: &GraphData) {
		let snapshot = data.clone();
		match &self.engine {
			Some(engine) => {
				engine.clear();
				engine.read(&snapshot);
				engine.refresh();
			}
			None => {
				info!("first render, creating engine instance");
				self.engine = Some(Engine::new(&self.canvas, self.settings.clone(), &snapshot));
			}
		}
	}

	/// Empty the displayed graph. A no-op before the first render.
	pub fn reset(&mut self) {
		if let Some(engine) = &self.engine {
			engine.clear();
			engine.refresh();
		}
	}

	/// Whether the first render has happened and an engine instance exists.
	pub fn is_initialized(&self) -> bool {
		self.engine.is_some()
	}

	pub fn engine(&self) -> Option<&Engine> {
		self.engine.as_ref()
	}
}
