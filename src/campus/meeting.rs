//! Finding a building both people can walk to.
//!
//! The destination starts as the building closest to the midpoint between the
//! two people. Shortest-path trees are grown once from each person's node and
//! reused: if a candidate is unreachable it is excluded and the next closest
//! building to the midpoint is checked against the same trees.

use log::{debug, warn};

use crate::collections::FxIndexSet;
use crate::config::SearchConfig;
use crate::errors::{MeetingError, Person};
use crate::graph_algos::{ShortestPaths, shortest_paths};
use super::resolver::{find_building, nearest_building_to_midpoint};
use super::{Building, CampusMap, NodeId, WalkwayGraph};


/// Walking directions between two walkway nodes
#[derive(Clone, Debug, PartialEq)]
pub struct Route {
    pub from: NodeId,
    pub to: NodeId,
    /// Walking distance in miles
    pub distance: f64,
    /// Nodes from `from` to `to`, both included
    pub path: Vec<NodeId>,
}

impl Route {
    /// Route to `to` out of a shortest-path tree, None if it was not reached
    pub fn from_tree(tree: &ShortestPaths<NodeId, f64>, to: NodeId) -> Option<Self> {
        Some(Self {
            from: *tree.source(),
            to,
            distance: tree.distance(&to)?,
            path: tree.path_to(&to)?,
        })
    }
}


/// A destination reachable by both people
#[derive(Clone, Debug)]
pub struct MeetingPoint<'a> {
    pub first: &'a Building,
    pub second: &'a Building,
    pub destination: &'a Building,
    pub first_route: Route,
    pub second_route: Route,
    /// Full names of the candidates rejected as unreachable, in the order tried
    pub rejected: FxIndexSet<String>,
}


/// Find the building nearest the midpoint of the two queried buildings that
/// both people can walk to
pub fn find_meeting_point<'a>(
    first_query: &str,
    second_query: &str,
    campus: &'a CampusMap,
    graph: &WalkwayGraph,
    config: &SearchConfig,
) -> Result<MeetingPoint<'a>, MeetingError> {
    let buildings = campus.buildings();

    let first = find_building(first_query, buildings).ok_or_else(|| MeetingError::BuildingNotFound {
        person: Person::First,
        query: first_query.to_string(),
    })?;
    let second = find_building(second_query, buildings).ok_or_else(|| MeetingError::BuildingNotFound {
        person: Person::Second,
        query: second_query.to_string(),
    })?;

    let first_node = campus.nearest_node(first)?;
    let second_node = campus.nearest_node(second)?;
    debug!(
        "Meeting {} (node {first_node}) and {} (node {second_node})",
        first.name, second.name
    );

    let from_first = shortest_paths(graph, &first_node)?;
    // No destination can help if the two people cannot reach each other
    if !from_first.is_reachable(&second_node) {
        return Err(MeetingError::Unreachable);
    }
    let from_second = shortest_paths(graph, &second_node)?;

    let mut rejected: FxIndexSet<String> = FxIndexSet::default();
    loop {
        let within_limit = config.max_candidates.is_none_or(|max| rejected.len() < max);
        let candidate = if within_limit {
            nearest_building_to_midpoint(first, second, buildings, &rejected)
        } else {
            None
        };
        let Some(destination) = candidate else {
            return Err(MeetingError::CandidatesExhausted {
                rejected: rejected.into_iter().collect(),
            });
        };

        let destination_node = campus.nearest_node(destination)?;
        debug!("Candidate {} (node {destination_node})", destination.name);

        // both people have to reach it
        let routes = Route::from_tree(&from_first, destination_node)
            .zip(Route::from_tree(&from_second, destination_node));

        if let Some((first_route, second_route)) = routes {
            return Ok(MeetingPoint {
                first,
                second,
                destination,
                first_route,
                second_route,
                rejected,
            });
        }

        warn!(
            "{} (node {destination_node}) is unreachable for at least one person, trying next closest building",
            destination.name
        );
        rejected.insert(destination.name.clone());
    }
}
