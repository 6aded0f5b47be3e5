use thiserror::Error;

use crate::campus::NodeId;


/// Which of the two people a query belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Person {
    First,
    Second,
}

impl std::fmt::Display for Person {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Person::First => write!(f, "person 1"),
            Person::Second => write!(f, "person 2"),
        }
    }
}


#[derive(Error, Debug, PartialEq)]
pub enum MeetingError {
    #[error("{person}'s building not found for query {query:?}")]
    BuildingNotFound { person: Person, query: String },

    #[error("building not found for query {0:?}")]
    UnknownBuilding(String),

    #[error("destination unreachable")]
    Unreachable,

    #[error("no reachable destination building; rejected {} candidates", .rejected.len())]
    CandidatesExhausted { rejected: Vec<String> },

    #[error("no walkway nodes to snap to")]
    NoWalkwayNodes,

    #[error("node {0} has no coordinate")]
    MissingCoordinate(NodeId),

    #[error("edge {from} -> {to} references a vertex not in the graph")]
    MissingVertex { from: NodeId, to: NodeId },

    #[error("source vertex is not in the graph")]
    UnknownVertex,
}
