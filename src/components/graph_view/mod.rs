mod adapter;
mod component;
mod engine;
mod graph;
mod render;
mod types;

pub use adapter::GraphView;
pub use component::GraphViewCanvas;
pub use engine::Engine;
pub use types::{GraphData, GraphEdge, GraphNode, ViewSettings};
