//! `ugraph` literal rendering.
//!
//! Serialises an [`UpwardDag`] into the textual adjacency-mapping literal
//! consumed downstream: a `g = ugraph({` header, one `K: [successors]`
//! line per vertex in ascending order with a trailing comma on every line
//! except the last, and a `})` footer. Successors are rendered in
//! ascending order so equal graphs always produce identical text.

use std::fmt;

use crate::graph::UpwardDag;

/// Displayable `ugraph` literal view over a graph.
///
/// # Examples
/// ```
/// use dagforge_core::{UgraphLiteral, UpwardDag};
///
/// let mut graph = UpwardDag::new(2);
/// graph.insert_edge(0, 1).expect("edge is upward");
/// graph.insert_edge(0, 2).expect("edge is upward");
/// let literal = UgraphLiteral::new(&graph).to_string();
/// assert_eq!(literal, "g = ugraph({\n0: [1, 2],\n1: [],\n2: []\n})");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct UgraphLiteral<'a> {
    graph: &'a UpwardDag,
}

impl<'a> UgraphLiteral<'a> {
    /// Wraps a graph for rendering.
    #[must_use]
    pub const fn new(graph: &'a UpwardDag) -> Self {
        Self { graph }
    }
}

impl fmt::Display for UgraphLiteral<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "g = ugraph({{")?;
        let max_vertex = self.graph.max_vertex();
        for (vertex, successors) in self.graph.iter() {
            write!(f, "{vertex}: [")?;
            for (position, successor) in successors.iter().enumerate() {
                if position > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{successor}")?;
            }
            // The final vertex line carries no trailing comma.
            if vertex == max_vertex {
                writeln!(f, "]")?;
            } else {
                writeln!(f, "],")?;
            }
        }
        write!(f, "}})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    fn graph_with_edges(max_vertex: usize, edges: &[(usize, usize)]) -> UpwardDag {
        let mut graph = UpwardDag::new(max_vertex);
        for &(source, target) in edges {
            graph.insert_edge(source, target).expect("edge is upward");
        }
        graph
    }

    #[test]
    fn renders_the_reference_literal_shape() {
        let graph = graph_with_edges(2, &[(0, 2), (0, 1), (1, 2)]);
        let literal = UgraphLiteral::new(&graph).to_string();
        assert_eq!(literal, "g = ugraph({\n0: [1, 2],\n1: [2],\n2: []\n})");
    }

    #[test]
    fn renders_a_single_vertex_graph() {
        let graph = UpwardDag::new(0);
        let literal = UgraphLiteral::new(&graph).to_string();
        assert_eq!(literal, "g = ugraph({\n0: []\n})");
    }

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(5)]
    fn every_vertex_line_except_the_last_ends_with_a_comma(#[case] max_vertex: usize) {
        let graph = UpwardDag::new(max_vertex);
        let literal = UgraphLiteral::new(&graph).to_string();
        let lines: Vec<&str> = literal.lines().collect();
        assert_eq!(lines.len(), max_vertex + 3);
        assert_eq!(lines.first().copied(), Some("g = ugraph({"));
        assert_eq!(lines.last().copied(), Some("})"));
        let vertex_lines = &lines[1..=max_vertex + 1];
        let (last, rest) = vertex_lines.split_last().expect("vertex lines exist");
        for line in rest {
            assert!(line.ends_with("],"), "line `{line}` lacks a trailing comma");
        }
        assert!(last.ends_with(']'), "line `{last}` must not end with a comma");
    }

    #[test]
    fn successors_render_in_ascending_order() {
        let graph = graph_with_edges(4, &[(1, 4), (1, 2), (1, 3)]);
        let literal = UgraphLiteral::new(&graph).to_string();
        assert!(literal.contains("1: [2, 3, 4],"));
    }
}
