pub mod dijkstra;
mod shortest_path;

pub use dijkstra::{ShortestPaths, shortest_paths};
pub use shortest_path::format_path;
