use crate::collections::FxIndexMap;
use crate::errors::MeetingError;
use crate::graph::Graph;
use super::shortest_path::shortest_path;

use std::{collections::BinaryHeap, hash::Hash, cmp::Ordering, fmt::Debug};
use log::debug;
use num_traits::Float;


/// Result of one single-source Dijkstra run
/// Every vertex of the graph has an entry in both maps, unreachable vertices
/// have an infinite distance and no predecessor
#[derive(Clone, Debug)]
pub struct ShortestPaths<V, W> {
    source: V,
    distances: FxIndexMap<V, W>,
    predecessors: FxIndexMap<V, Option<V>>,
}

impl<V, W> ShortestPaths<V, W>
where
    V: Eq + Hash + Clone,
    W: Float,
{

    pub fn source(&self) -> &V {
        &self.source
    }

    /// Shortest distance from the source, infinite if unreachable
    /// None if `v` was not a vertex of the graph
    pub fn distance(&self, v: &V) -> Option<W> {
        self.distances.get(v).copied()
    }

    /// Previous vertex on the shortest path to `v`
    pub fn predecessor(&self, v: &V) -> Option<&V> {
        self.predecessors.get(v)?.as_ref()
    }

    pub fn is_reachable(&self, v: &V) -> bool {
        self.distance(v).is_some_and(|d| d.is_finite())
    }

    pub fn distances(&self) -> &FxIndexMap<V, W> {
        &self.distances
    }

    pub fn predecessors(&self) -> &FxIndexMap<V, Option<V>> {
        &self.predecessors
    }

    /// Ordered path from the source to `goal`
    /// None if the goal is unknown or unreachable
    pub fn path_to(&self, goal: &V) -> Option<Vec<V>> {
        if !self.is_reachable(goal) {
            return None;
        }
        shortest_path(&self.predecessors, &self.source, goal)
    }
}


/// Single-source shortest paths using Dijkstra's Algorithm
/// https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm
/// Edge weights must be non-negative, this is not checked
pub fn shortest_paths<V, W>(graph: &Graph<V, W>, source: &V) -> Result<ShortestPaths<V, W>, MeetingError>
where
    V: Eq + Hash + Ord + Clone + Debug,
    W: Float,
    {

    let start_index = graph.vertex_index(source).ok_or(MeetingError::UnknownVertex)?;
    let n = graph.vertex_count();

    // Best known cost and parent per vertex index
    let mut costs = vec![W::infinity(); n];
    let mut parents: Vec<Option<usize>> = vec![None; n];
    let mut visited = vec![false; n];

    // Nodes to visit - binary heap sorts Biggest to Smallest, NodeId reverses it
    // Entries are never updated in place: a better path pushes a new entry and
    // the old one is skipped once its vertex has been visited
    let mut nodes_to_visit: BinaryHeap<NodeId<W>> = BinaryHeap::new();
    costs[start_index] = W::zero();
    nodes_to_visit.push(NodeId {
        index: start_index,
        cost: W::zero(),
    });

    while let Some(NodeId { index, .. }) = nodes_to_visit.pop() {

        let cost = costs[index];

        // Nothing left is reachable
        if cost.is_infinite() {
            break;
        }

        // stale entry
        if visited[index] {
            continue;
        }
        visited[index] = true;

        let Some(node) = graph.vertex_at(index) else {
            continue;
        };

        for (neighbor, edge_cost) in graph.edges(node) {
            let Some(neighbor_index) = graph.vertex_index(neighbor) else {
                continue;
            };

            let new_cost = cost + edge_cost;
            if new_cost < costs[neighbor_index] {
                costs[neighbor_index] = new_cost;
                parents[neighbor_index] = Some(index);
                nodes_to_visit.push(NodeId {
                    index: neighbor_index,
                    cost: new_cost,
                });
            }
        }
    }

    let vertices: Vec<V> = graph.vertices().cloned().collect();
    debug!(
        "Dijkstra from {source:?}: {} of {} vertices reachable",
        visited.iter().filter(|v| **v).count(),
        n
    );

    let predecessors = parents
        .into_iter()
        .zip(vertices.iter())
        .map(|(parent, v)| (v.clone(), parent.map(|p| vertices[p].clone())))
        .collect();
    let distances = vertices.iter().cloned().zip(costs).collect();

    Ok(ShortestPaths {
        source: source.clone(),
        distances,
        predecessors,
    })
}


/// Heap entry - for ordering we only need cost and the vertex index
#[derive(Debug)]
struct NodeId<T> {
    index: usize,
    cost: T,
}

impl<T: Float> Ord for NodeId<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        // reversed for a min-heap, NaN compares equal
        other.cost.partial_cmp(&self.cost).unwrap_or(Ordering::Equal)
    }
}
impl<T: Float> PartialOrd for NodeId<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl<T: Float> PartialEq for NodeId<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}
impl<T: Float> Eq for NodeId<T> {}
