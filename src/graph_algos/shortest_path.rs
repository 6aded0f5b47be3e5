use std::{fmt::Display, hash::Hash};

use crate::collections::FxIndexMap;

/// Construct the shortest path from the goal node back to the start node
/// Returns the ordered path as a vector of nodes from start to goal
/// predecessors: previous node on the shortest path, None for the start node
/// Returns None if the walk dead-ends before reaching start, or loops
pub(crate) fn shortest_path<N>(predecessors: &FxIndexMap<N, Option<N>>, start: &N, goal: &N) -> Option<Vec<N>>
where
    N: Eq + Hash + Clone,
{

    let mut path = vec![goal.clone()];
    let mut current = goal;

    // Trace back from goal to start, a valid tree needs at most one step per node
    while current != start {
        if path.len() > predecessors.len() {
            return None;
        }
        current = predecessors.get(current)?.as_ref()?;
        path.push(current.clone());
    }

    // The path is in reverse order, so reverse it
    path.reverse();
    Some(path)
}


/// Render a path as `Path: a->b->c`
pub fn format_path<N: Display>(path: &[N]) -> String {
    let steps: Vec<String> = path.iter().map(ToString::to_string).collect();
    format!("Path: {}", steps.join("->"))
}
