//! Matching buildings by name and by position, and snapping them onto the
//! walkway network.
//!
//! Every scan keeps the first candidate at the minimum distance, so ties go
//! to whatever comes first in list order.

use crate::collections::{FxIndexMap, FxIndexSet};
use crate::errors::MeetingError;
use crate::geometry::{Coordinate, distance_miles, midpoint};
use super::{Building, NodeId, Walkway, coordinate};


/// Look a building up by abbreviation, falling back to a substring of its full name
/// Abbreviations must match exactly (case-sensitive)
pub fn find_building<'a>(query: &str, buildings: &'a [Building]) -> Option<&'a Building> {
    buildings
        .iter()
        .find(|b| b.abbreviation == query)
        .or_else(|| buildings.iter().find(|b| b.name.contains(query)))
}


/// Walkway node closest to the building
/// Every node of every walkway is considered, nodes shared by several walkways
/// are simply seen more than once
pub fn nearest_node(
    building: &Building,
    walkways: &[Walkway],
    nodes: &FxIndexMap<NodeId, Coordinate>,
) -> Result<NodeId, MeetingError> {
    let mut best: Option<(NodeId, f64)> = None;

    for &id in walkways.iter().flat_map(|w| w.nodes.iter()) {
        let distance = distance_miles(&building.location, &coordinate(nodes, id)?);
        if best.is_none_or(|(_, min)| distance < min) {
            best = Some((id, distance));
        }
    }

    best.map(|(id, _)| id).ok_or(MeetingError::NoWalkwayNodes)
}


/// Building closest to the midpoint of `first` and `second`
/// Buildings whose full name is in `excluded` are skipped; the two endpoint
/// buildings themselves are eligible
pub fn nearest_building_to_midpoint<'a>(
    first: &Building,
    second: &Building,
    buildings: &'a [Building],
    excluded: &FxIndexSet<String>,
) -> Option<&'a Building> {
    let center = midpoint(&first.location, &second.location);
    nearest_to(&center, buildings.iter().filter(|b| !excluded.contains(&b.name)))
}


/// The `k` buildings closest to `origin`, nearest first
/// Buildings sharing the origin's full name are never selected, and each name
/// is selected at most once
pub fn k_nearest_buildings<'a>(origin: &Building, buildings: &'a [Building], k: usize) -> Vec<&'a Building> {
    let mut selected: Vec<&Building> = Vec::with_capacity(k);

    for _ in 0..k {
        let candidates = buildings.iter().filter(|b| {
            b.name != origin.name && !selected.iter().any(|s| s.name == b.name)
        });
        match nearest_to(&origin.location, candidates) {
            Some(b) => selected.push(b),
            None => break,
        }
    }

    selected
}


fn nearest_to<'a>(point: &Coordinate, candidates: impl Iterator<Item = &'a Building>) -> Option<&'a Building> {
    let mut best: Option<(&Building, f64)> = None;
    for b in candidates {
        let distance = distance_miles(point, &b.location);
        if best.is_none_or(|(_, min)| distance < min) {
            best = Some((b, distance));
        }
    }
    best.map(|(b, _)| b)
}
