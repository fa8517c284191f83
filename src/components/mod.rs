pub mod graph_view;
