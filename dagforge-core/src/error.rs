//! Error types for the dagforge core library.
//!
//! Defines the error enum exposed by the public graph API and a convenient
//! result alias.

use core::fmt;

/// Error produced when mutating an [`crate::UpwardDag`].
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum GraphError {
    /// Edges must point from a lower vertex to a strictly higher one.
    EdgeNotUpward {
        /// Vertex the rejected edge started from.
        source: usize,
        /// Vertex the rejected edge pointed at.
        target: usize,
    },
    /// An endpoint referred to a vertex outside the graph.
    VertexOutOfBounds {
        /// The offending vertex identifier.
        vertex: usize,
        /// Highest vertex identifier the graph holds.
        max_vertex: usize,
    },
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::EdgeNotUpward { source, target } => write!(
                f,
                "edge {source} -> {target} must point to a higher-numbered vertex"
            ),
            Self::VertexOutOfBounds { vertex, max_vertex } => write!(
                f,
                "vertex {vertex} is out of bounds (maximum vertex is {max_vertex})"
            ),
        }
    }
}

impl std::error::Error for GraphError {}

impl GraphError {
    /// Return the stable machine-readable code for this error.
    ///
    /// Codes are part of the public contract; downstream tooling may match
    /// on them, so they never change once published.
    ///
    /// # Examples
    /// ```
    /// use dagforge_core::GraphError;
    ///
    /// let err = GraphError::EdgeNotUpward { source: 2, target: 1 };
    /// assert_eq!(err.code(), "GRAPH_EDGE_NOT_UPWARD");
    /// ```
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::EdgeNotUpward { .. } => "GRAPH_EDGE_NOT_UPWARD",
            Self::VertexOutOfBounds { .. } => "GRAPH_VERTEX_OUT_OF_BOUNDS",
        }
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, GraphError>;

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case(GraphError::EdgeNotUpward { source: 3, target: 3 }, "GRAPH_EDGE_NOT_UPWARD")]
    #[case(
        GraphError::VertexOutOfBounds { vertex: 9, max_vertex: 4 },
        "GRAPH_VERTEX_OUT_OF_BOUNDS"
    )]
    fn codes_are_stable(#[case] err: GraphError, #[case] expected: &str) {
        assert_eq!(err.code(), expected);
    }

    #[rstest]
    fn display_names_the_offending_edge() {
        let err = GraphError::EdgeNotUpward {
            source: 5,
            target: 2,
        };
        assert_eq!(
            err.to_string(),
            "edge 5 -> 2 must point to a higher-numbered vertex"
        );
    }
}
