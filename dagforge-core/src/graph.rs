//! Upward-edge DAG model.
//!
//! [`UpwardDag`] stores a directed graph over the vertex set
//! `0..=max_vertex` in which every edge points from a lower-numbered vertex
//! to a higher-numbered one. Acyclicity therefore holds by construction and
//! the vertex numbering doubles as a topological order. Successor sets are
//! sorted and deduplicating so iteration is deterministic.

use std::collections::BTreeSet;

use crate::error::{GraphError, Result};

/// Directed acyclic graph whose edges only ever point upward.
///
/// Every vertex in `0..=max_vertex` is present from construction, matching
/// the fixture format consumers expect: a key per vertex, even when its
/// successor set is empty.
///
/// # Examples
/// ```
/// use dagforge_core::UpwardDag;
///
/// let mut graph = UpwardDag::new(2);
/// assert!(graph.insert_edge(0, 2).expect("edge is upward"));
/// assert!(graph.insert_edge(1, 2).expect("edge is upward"));
/// assert_eq!(graph.vertex_count(), 3);
/// assert_eq!(graph.edge_count(), 2);
/// assert!(graph.contains_edge(0, 2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpwardDag {
    successors: Vec<BTreeSet<usize>>,
}

impl UpwardDag {
    /// Creates an edgeless graph over the vertices `0..=max_vertex`.
    ///
    /// # Examples
    /// ```
    /// use dagforge_core::UpwardDag;
    ///
    /// let graph = UpwardDag::new(0);
    /// assert_eq!(graph.vertex_count(), 1);
    /// assert_eq!(graph.edge_count(), 0);
    /// ```
    #[must_use]
    pub fn new(max_vertex: usize) -> Self {
        Self {
            successors: vec![BTreeSet::new(); max_vertex + 1],
        }
    }

    /// Returns the highest vertex identifier in the graph.
    #[must_use]
    pub fn max_vertex(&self) -> usize {
        self.successors.len() - 1
    }

    /// Returns the number of vertices, always `max_vertex + 1`.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.successors.len()
    }

    /// Returns the total number of stored edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.successors.iter().map(BTreeSet::len).sum()
    }

    /// Inserts the edge `source -> target`, returning whether it was new.
    ///
    /// Re-inserting an existing edge is not an error; the set semantics
    /// dedupe it and the call reports `false`.
    ///
    /// # Errors
    /// Returns [`GraphError::EdgeNotUpward`] when `target <= source` and
    /// [`GraphError::VertexOutOfBounds`] when either endpoint lies outside
    /// the vertex set. The graph is unchanged on failure.
    ///
    /// # Examples
    /// ```
    /// use dagforge_core::{GraphError, UpwardDag};
    ///
    /// let mut graph = UpwardDag::new(3);
    /// assert!(graph.insert_edge(1, 3).expect("edge is upward"));
    /// assert!(!graph.insert_edge(1, 3).expect("duplicate is deduped"));
    /// let err = graph.insert_edge(3, 1).expect_err("downward edge");
    /// assert!(matches!(err, GraphError::EdgeNotUpward { .. }));
    /// ```
    pub fn insert_edge(&mut self, source: usize, target: usize) -> Result<bool> {
        let max_vertex = self.max_vertex();
        for vertex in [source, target] {
            if vertex > max_vertex {
                return Err(GraphError::VertexOutOfBounds { vertex, max_vertex });
            }
        }
        if target <= source {
            return Err(GraphError::EdgeNotUpward { source, target });
        }

        let inserted = self
            .successors
            .get_mut(source)
            .map(|set| set.insert(target));
        Ok(inserted.unwrap_or(false))
    }

    /// Returns the successor set of `vertex`, or `None` when the vertex is
    /// outside the graph.
    #[must_use]
    pub fn successors(&self, vertex: usize) -> Option<&BTreeSet<usize>> {
        self.successors.get(vertex)
    }

    /// Returns whether the edge `source -> target` is present.
    #[must_use]
    pub fn contains_edge(&self, source: usize, target: usize) -> bool {
        self.successors
            .get(source)
            .is_some_and(|set| set.contains(&target))
    }

    /// Iterates over `(vertex, successors)` pairs in ascending vertex order.
    ///
    /// # Examples
    /// ```
    /// use dagforge_core::UpwardDag;
    ///
    /// let graph = UpwardDag::new(1);
    /// let vertices: Vec<usize> = graph.iter().map(|(vertex, _)| vertex).collect();
    /// assert_eq!(vertices, [0, 1]);
    /// ```
    pub fn iter(&self) -> impl Iterator<Item = (usize, &BTreeSet<usize>)> {
        self.successors.iter().enumerate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case(0, 1)]
    #[case(3, 4)]
    #[case(0, 9)]
    fn insert_edge_accepts_upward_edges(#[case] source: usize, #[case] target: usize) {
        let mut graph = UpwardDag::new(9);
        assert!(graph.insert_edge(source, target).expect("edge is upward"));
        assert!(graph.contains_edge(source, target));
        assert_eq!(graph.edge_count(), 1);
    }

    #[rstest]
    #[case::downward(2, 1)]
    #[case::self_loop(4, 4)]
    fn insert_edge_rejects_non_upward_edges(#[case] source: usize, #[case] target: usize) {
        let mut graph = UpwardDag::new(4);
        let err = graph.insert_edge(source, target).expect_err("must reject");
        assert_eq!(err, GraphError::EdgeNotUpward { source, target });
        assert_eq!(graph.edge_count(), 0);
    }

    #[rstest]
    #[case::bad_target(0, 5)]
    #[case::bad_source(5, 6)]
    fn insert_edge_rejects_out_of_bounds_vertices(#[case] source: usize, #[case] target: usize) {
        let mut graph = UpwardDag::new(4);
        let err = graph.insert_edge(source, target).expect_err("must reject");
        assert!(matches!(err, GraphError::VertexOutOfBounds { .. }));
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn insert_edge_dedupes_repeats() {
        let mut graph = UpwardDag::new(2);
        assert!(graph.insert_edge(0, 2).expect("edge is upward"));
        assert!(!graph.insert_edge(0, 2).expect("repeat is deduped"));
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn every_vertex_is_present_from_birth() {
        let graph = UpwardDag::new(5);
        assert_eq!(graph.vertex_count(), 6);
        for vertex in 0..=5 {
            let successors = graph.successors(vertex).expect("vertex exists");
            assert!(successors.is_empty());
        }
        assert!(graph.successors(6).is_none());
    }

    #[test]
    fn successors_iterate_in_ascending_order() {
        let mut graph = UpwardDag::new(4);
        for target in [4, 2, 3] {
            graph.insert_edge(1, target).expect("edge is upward");
        }
        let successors: Vec<usize> = graph
            .successors(1)
            .expect("vertex exists")
            .iter()
            .copied()
            .collect();
        assert_eq!(successors, [2, 3, 4]);
    }
}
