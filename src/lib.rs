//! Meeting-point search and walking directions over a campus footway network.
//!
//! A [`campus::CampusMap`] holds what map ingestion produced: node coordinates,
//! walkways and buildings. From it a [`graph::Graph`] of walkway segments is
//! built once, then queried with Dijkstra's algorithm to find a building two
//! people can both walk to.

pub mod campus;
pub mod collections;
pub mod config;
pub mod errors;
pub mod geometry;
pub mod graph;
pub mod graph_algos;

pub use campus::meeting::{MeetingPoint, Route, find_meeting_point};
pub use campus::nearby::{Nearby, nearby_buildings, route_between};
pub use campus::{Building, CampusMap, NodeId, Walkway, WalkwayGraph};
pub use config::SearchConfig;
pub use errors::{MeetingError, Person};
pub use geometry::Coordinate;
pub use graph::Graph;
pub use graph_algos::{ShortestPaths, format_path, shortest_paths};
