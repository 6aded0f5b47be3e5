//! Exploring the buildings physically closest to one building, and walking
//! to any of them.

use log::debug;

use crate::config::SearchConfig;
use crate::errors::MeetingError;
use crate::graph_algos::shortest_paths;
use super::meeting::Route;
use super::resolver::{find_building, k_nearest_buildings};
use super::{Building, CampusMap, WalkwayGraph};


/// Buildings closest to `origin` by straight-line distance, nearest first
#[derive(Clone, Debug)]
pub struct Nearby<'a> {
    pub origin: &'a Building,
    pub buildings: Vec<&'a Building>,
}

/// Resolve `query` and list the `config.nearby_count` buildings closest to it
pub fn nearby_buildings<'a>(
    query: &str,
    campus: &'a CampusMap,
    config: &SearchConfig,
) -> Result<Nearby<'a>, MeetingError> {
    let origin = find_building(query, campus.buildings())
        .ok_or_else(|| MeetingError::UnknownBuilding(query.to_string()))?;
    let buildings = k_nearest_buildings(origin, campus.buildings(), config.nearby_count);
    debug!("{} buildings near {}", buildings.len(), origin.name);

    Ok(Nearby { origin, buildings })
}

/// Shortest walk between the walkway nodes closest to two buildings
pub fn route_between(
    graph: &WalkwayGraph,
    campus: &CampusMap,
    from: &Building,
    to: &Building,
) -> Result<Route, MeetingError> {
    let start = campus.nearest_node(from)?;
    let goal = campus.nearest_node(to)?;

    let tree = shortest_paths(graph, &start)?;
    Route::from_tree(&tree, goal).ok_or(MeetingError::Unreachable)
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::campus::fixtures;

    #[test]
    fn test_nearby_buildings() {
        let campus = fixtures::campus();
        let nearby = nearby_buildings("PEB", &campus, &SearchConfig::default().with_nearby_count(2)).unwrap();

        assert_eq!(nearby.origin.abbreviation, "PEB");
        let names: Vec<&str> = nearby.buildings.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, vec!["Student Center West", "Student Center East"]);
    }

    #[test]
    fn test_nearby_default_count_is_capped_by_campus_size() {
        let campus = fixtures::campus();
        let nearby = nearby_buildings("Outpost", &campus, &SearchConfig::default()).unwrap();
        assert_eq!(nearby.buildings.len(), 4);
    }

    #[test]
    fn test_nearby_unknown_building() {
        let campus = fixtures::campus();
        let err = nearby_buildings("Nowhere", &campus, &SearchConfig::default()).unwrap_err();
        assert_eq!(err, MeetingError::UnknownBuilding("Nowhere".into()));
    }

    #[test]
    fn test_route_between() {
        let campus = fixtures::campus();
        let graph = campus.walkway_graph().unwrap();
        let buildings = campus.buildings();

        let route = route_between(&graph, &campus, &buildings[0], &buildings[1]).unwrap();
        assert_eq!(route.from, 1);
        assert_eq!(route.to, 2);
        assert_eq!(route.path, vec![1, 4, 2]);
        assert!(route.distance > 0.0);
    }

    #[test]
    fn test_route_to_isolated_building() {
        let campus = fixtures::campus();
        let graph = campus.walkway_graph().unwrap();
        let buildings = campus.buildings();

        let err = route_between(&graph, &campus, &buildings[0], &buildings[2]).unwrap_err();
        assert_eq!(err, MeetingError::Unreachable);
    }
}
