use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use web_sys::Element;

use super::adapter::GraphView;
use super::types::GraphData;

#[component]
pub fn GraphViewCanvas(
	/// `Some(snapshot)` renders it; `None` resets the view.
	#[prop(into)]
	data: Signal<Option<GraphData>>,
	#[prop(default = 600.0)] width: f64,
	#[prop(default = 600.0)] height: f64,
) -> impl IntoView {
	let host_ref = NodeRef::<leptos::html::Div>::new();
	let view: Rc<RefCell<Option<GraphView>>> = Rc::new(RefCell::new(None));

	Effect::new(move |_| {
		let Some(host) = host_ref.get() else {
			return;
		};
		let host: Element = host.into();
		let snapshot = data.get();

		let mut slot = view.borrow_mut();
		let graph_view = slot.get_or_insert_with(|| GraphView::new(&host, width, height));
		match snapshot {
			Some(data) => graph_view.render(&data),
			None => graph_view.reset(),
		}
	});

	view! { <div class="graph-view-host" node_ref=host_ref></div> }
}
