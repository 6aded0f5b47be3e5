//! Campus map model: node coordinates, walkways and buildings, and the
//! walkway graph built from them.

pub mod meeting;
pub mod nearby;
pub mod resolver;

use log::{error, info};

use crate::collections::FxIndexMap;
use crate::errors::MeetingError;
use crate::geometry::{Coordinate, distance_miles};
use crate::graph::Graph;

/// Map node identifier
pub type NodeId = i64;

/// Graph of walkway segments, weighted by distance in miles
pub type WalkwayGraph = Graph<NodeId, f64>;


/// Named point of interest, not itself part of the walkway graph
#[derive(Clone, Debug, PartialEq)]
pub struct Building {
    /// Full name, e.g. "Science & Engineering Offices"
    pub name: String,
    /// Short name, may be empty
    pub abbreviation: String,
    pub location: Coordinate,
}

impl Building {
    pub fn new(name: impl Into<String>, abbreviation: impl Into<String>, location: Coordinate) -> Self {
        Self {
            name: name.into(),
            abbreviation: abbreviation.into(),
            location,
        }
    }
}


/// Walkable route through an ordered list of nodes
#[derive(Clone, Debug, PartialEq)]
pub struct Walkway {
    pub id: i64,
    pub nodes: Vec<NodeId>,
}

impl Walkway {
    pub fn new(id: i64, nodes: Vec<NodeId>) -> Self {
        Self { id, nodes }
    }
}


/// Everything the ingestion step hands over: read-only for the lifetime of a query
#[derive(Clone, Debug, Default)]
pub struct CampusMap {
    nodes: FxIndexMap<NodeId, Coordinate>,
    walkways: Vec<Walkway>,
    buildings: Vec<Building>,
}

impl CampusMap {

    pub fn new(
        nodes: impl IntoIterator<Item = (NodeId, Coordinate)>,
        walkways: Vec<Walkway>,
        buildings: Vec<Building>,
    ) -> Self {
        Self {
            nodes: nodes.into_iter().collect(),
            walkways,
            buildings,
        }
    }

    pub fn nodes(&self) -> &FxIndexMap<NodeId, Coordinate> {
        &self.nodes
    }

    pub fn walkways(&self) -> &[Walkway] {
        &self.walkways
    }

    pub fn buildings(&self) -> &[Building] {
        &self.buildings
    }

    /// Coordinate of a map node
    pub fn coordinate(&self, id: NodeId) -> Result<Coordinate, MeetingError> {
        coordinate(&self.nodes, id)
    }

    /// Closest walkway node to `building`, see [`resolver::nearest_node`]
    pub fn nearest_node(&self, building: &Building) -> Result<NodeId, MeetingError> {
        resolver::nearest_node(building, &self.walkways, &self.nodes)
    }

    /// Build the walkway graph: one vertex per node, and an edge in each
    /// direction between consecutive nodes of every walkway
    pub fn walkway_graph(&self) -> Result<WalkwayGraph, MeetingError> {
        let mut graph = WalkwayGraph::new();
        for &id in self.nodes.keys() {
            graph.add_vertex(id);
        }
        for walkway in &self.walkways {
            add_walkway(&mut graph, walkway, &self.nodes)?;
        }

        info!(
            "Built walkway graph: {} vertices, {} edges from {} walkways",
            graph.vertex_count(),
            graph.edge_count(),
            self.walkways.len()
        );
        Ok(graph)
    }
}


pub(crate) fn coordinate(nodes: &FxIndexMap<NodeId, Coordinate>, id: NodeId) -> Result<Coordinate, MeetingError> {
    nodes.get(&id).copied().ok_or(MeetingError::MissingCoordinate(id))
}


/// Add both directions of every segment of `walkway` to the graph
pub fn add_walkway(
    graph: &mut WalkwayGraph,
    walkway: &Walkway,
    nodes: &FxIndexMap<NodeId, Coordinate>,
) -> Result<(), MeetingError> {
    for pair in walkway.nodes.windows(2) {
        let (from, to) = (pair[0], pair[1]);
        let miles = distance_miles(&coordinate(nodes, from)?, &coordinate(nodes, to)?);

        if !graph.add_edge(from, to, miles) || !graph.add_edge(to, from, miles) {
            error!("Walkway {} references node outside the graph: {from} -> {to}", walkway.id);
            return Err(MeetingError::MissingVertex { from, to });
        }
    }
    Ok(())
}
