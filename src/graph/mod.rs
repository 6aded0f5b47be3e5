use std::{
    collections::BTreeMap,
    fmt::Display,
    hash::Hash,
    io::{self, Write},
};

use crate::collections::FxIndexMap;


/// Weighted directed graph stored as an adjacency map
/// V: Vertex - opaque identifier, ordered so neighbor iteration is deterministic
/// W: Weight of an edge
///
/// Each vertex owns a sorted map of its outgoing edges, so there is at most one
/// edge per ordered (from, to) pair and neighbors come back in ascending order.
/// Vertices keep their insertion order.
#[derive(Clone, Debug)]
pub struct Graph<V, W> {
    adjacency: FxIndexMap<V, BTreeMap<V, W>>,
    edge_count: usize,
}

impl<V, W> Default for Graph<V, W> {
    fn default() -> Self {
        Self {
            adjacency: FxIndexMap::default(),
            edge_count: 0,
        }
    }
}

impl<V, W> Graph<V, W>
where
    V: Eq + Hash + Ord + Clone,
    W: Copy,
{

    pub fn new() -> Self {
        Self::default()
    }

    /// Number of vertices currently in the graph
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of directed edges currently in the graph
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn contains_vertex(&self, v: &V) -> bool {
        self.adjacency.contains_key(v)
    }

    /// Add a vertex with no edges
    /// Returns false if the vertex was already present, the graph is left untouched
    pub fn add_vertex(&mut self, v: V) -> bool {
        if self.adjacency.contains_key(&v) {
            return false;
        }
        self.adjacency.insert(v, BTreeMap::new());
        true
    }

    /// Add the directed edge from -> to
    /// An existing edge between the pair has its weight overwritten
    /// Returns false if either endpoint is not a vertex of the graph
    pub fn add_edge(&mut self, from: V, to: V, weight: W) -> bool {
        if !self.adjacency.contains_key(&to) {
            return false;
        }
        let Some(edges) = self.adjacency.get_mut(&from) else {
            return false;
        };
        if edges.insert(to, weight).is_none() {
            self.edge_count += 1;
        }
        true
    }

    /// Weight of the edge from -> to, if there is one
    pub fn weight(&self, from: &V, to: &V) -> Option<W> {
        self.adjacency.get(from)?.get(to).copied()
    }

    /// Vertices reachable from `v` along one edge, in ascending order
    /// Unknown vertices have no neighbors
    pub fn neighbors(&self, v: &V) -> Vec<V> {
        self.adjacency
            .get(v)
            .map(|edges| edges.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// Outgoing edges of `v` with their weights, in ascending neighbor order
    pub fn edges(&self, v: &V) -> impl Iterator<Item = (&V, W)> + '_ {
        self.adjacency
            .get(v)
            .into_iter()
            .flat_map(|edges| edges.iter().map(|(to, w)| (to, *w)))
    }

    /// All vertices in insertion order
    pub fn vertices(&self) -> impl Iterator<Item = &V> + '_ {
        self.adjacency.keys()
    }

    /// Position of `v` in the vertex order
    pub(crate) fn vertex_index(&self, v: &V) -> Option<usize> {
        self.adjacency.get_index_of(v)
    }

    pub(crate) fn vertex_at(&self, index: usize) -> Option<&V> {
        self.adjacency.get_index(index).map(|(v, _)| v)
    }

    /// Remove every vertex and edge
    pub fn clear(&mut self) {
        self.adjacency.clear();
        self.edge_count = 0;
    }
}

impl<V, W> Graph<V, W>
where
    V: Eq + Hash + Ord + Clone + Display,
    W: Copy + Display,
{
    /// Write the vertices and edges in a human readable form, for debugging
    pub fn dump<O: Write>(&self, output: &mut O) -> io::Result<()> {
        writeln!(output, "**Num vertices: {}", self.vertex_count())?;
        writeln!(output, "**Num edges: {}", self.edge_count())?;
        writeln!(output)?;
        writeln!(output, "**Vertices:")?;
        for v in self.vertices() {
            writeln!(output, " {v}")?;
        }
        writeln!(output)?;
        writeln!(output, "**Edges:")?;
        for v in self.vertices() {
            write!(output, "{v}:")?;
            for (to, w) in self.edges(v) {
                write!(output, " ({to}, {w})")?;
            }
            writeln!(output)?;
        }
        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Graph<i64, f64> {
        let mut g = Graph::new();
        for v in [1, 2, 3] {
            g.add_vertex(v);
        }
        g.add_edge(1, 2, 5.0);
        g.add_edge(2, 3, 3.0);
        g
    }

    #[test]
    fn test_add_vertex_is_idempotent() {
        let mut g = triangle();
        assert!(!g.add_vertex(1));
        assert_eq!(g.vertex_count(), 3);
        assert_eq!(g.edge_count(), 2);
        assert_eq!(g.weight(&1, &2), Some(5.0));
        assert!(g.add_vertex(4));
        assert_eq!(g.vertex_count(), 4);
    }

    #[test]
    fn test_add_edge_overwrites_weight() {
        let mut g = triangle();
        assert!(g.add_edge(1, 2, 7.5));
        assert_eq!(g.weight(&1, &2), Some(7.5));
        assert_eq!(g.edge_count(), 2);
    }

    #[test]
    fn test_add_edge_requires_both_vertices() {
        let mut g = triangle();
        assert!(!g.add_edge(1, 9, 1.0));
        assert!(!g.add_edge(9, 1, 1.0));
        assert!(!g.contains_vertex(&9));
        assert_eq!(g.edge_count(), 2);
        assert_eq!(g.vertex_count(), 3);
    }

    #[test]
    fn test_edges_are_directed() {
        let g = triangle();
        assert_eq!(g.weight(&1, &2), Some(5.0));
        assert_eq!(g.weight(&2, &1), None);
        assert_eq!(g.weight(&1, &3), None);
        assert_eq!(g.weight(&8, &9), None);
    }

    #[test]
    fn test_neighbors_sorted() {
        let mut g: Graph<i64, f64> = Graph::new();
        for v in [10, 3, 7, 1] {
            g.add_vertex(v);
        }
        g.add_edge(10, 7, 1.0);
        g.add_edge(10, 1, 1.0);
        g.add_edge(10, 3, 1.0);
        assert_eq!(g.neighbors(&10), vec![1, 3, 7]);
        assert!(g.neighbors(&3).is_empty());
        assert!(g.neighbors(&42).is_empty());
    }

    #[test]
    fn test_self_loop_allowed() {
        let mut g = triangle();
        assert!(g.add_edge(3, 3, 0.0));
        assert_eq!(g.neighbors(&3), vec![3]);
    }

    #[test]
    fn test_vertices_keep_insertion_order() {
        let mut g: Graph<i64, f64> = Graph::new();
        for v in [5, 2, 9] {
            g.add_vertex(v);
        }
        assert_eq!(g.vertices().copied().collect::<Vec<_>>(), vec![5, 2, 9]);
    }

    #[test]
    fn test_clear() {
        let mut g = triangle();
        let copy = g.clone();
        g.clear();
        assert_eq!(g.vertex_count(), 0);
        assert_eq!(g.edge_count(), 0);
        assert_eq!(copy.edge_count(), 2);
    }

    #[test]
    fn test_dump() {
        let g = triangle();
        let mut out = Vec::new();
        g.dump(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("**Num vertices: 3"));
        assert!(text.contains("**Num edges: 2"));
        assert!(text.contains("1: (2, 5)"));
        assert!(text.contains("2: (3, 3)"));
    }
}
