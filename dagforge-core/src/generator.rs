//! Random upward-DAG generation.
//!
//! Reproduces the fixture generator's two-phase construction: a base-edge
//! seeding pass that gives each vertex at most one randomly drawn outgoing
//! edge, followed by a bounded number of extra-edge attempts. Randomness is
//! threaded as an explicit caller-owned [`SmallRng`] so runs are
//! reproducible under a fixed seed.
//!
//! The base pass draws a partner `r != x` for every vertex `x` and only
//! keeps the edge when the draw lands above `x`. Downward draws are
//! discarded without a retry, in both phases. This biases edge density and
//! makes the effective number of extra edges itself random; both are
//! deliberate properties of the generator, preserved as-is.

use rand::{Rng, SeedableRng, rngs::SmallRng};
use tracing::{debug, instrument};

use crate::{error::Result, graph::UpwardDag};

/// Parameters describing the graph to generate.
///
/// # Examples
/// ```
/// use dagforge_core::GraphSpec;
///
/// let spec = GraphSpec::new(7, 12);
/// assert_eq!(spec.max_vertex(), 7);
/// assert_eq!(spec.extra_edge_attempts(), 12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphSpec {
    max_vertex: usize,
    extra_edge_attempts: usize,
}

impl GraphSpec {
    /// Creates a spec for a graph over `0..=max_vertex` with
    /// `extra_edge_attempts` draws in the extra-edge phase.
    #[must_use]
    pub const fn new(max_vertex: usize, extra_edge_attempts: usize) -> Self {
        Self {
            max_vertex,
            extra_edge_attempts,
        }
    }

    /// Returns the highest vertex identifier of the generated graph.
    #[must_use]
    pub const fn max_vertex(&self) -> usize {
        self.max_vertex
    }

    /// Returns the number of extra-edge attempts.
    ///
    /// Each attempt adds at most one edge; attempts whose draw lands below
    /// the source vertex are discarded, so the effective count is lower.
    #[must_use]
    pub const fn extra_edge_attempts(&self) -> usize {
        self.extra_edge_attempts
    }
}

/// Generates a random upward-edge DAG using the caller's RNG.
///
/// # Errors
/// Returns [`crate::GraphError`] if an internally produced edge violates
/// the graph invariants. The phases only ever construct upward in-bounds
/// edges, so this indicates a logic error rather than a caller mistake.
///
/// # Examples
/// ```
/// use dagforge_core::{GraphSpec, generate};
/// use rand::{SeedableRng, rngs::SmallRng};
///
/// let mut rng = SmallRng::seed_from_u64(42);
/// let graph = generate(&GraphSpec::new(5, 8), &mut rng).expect("generation succeeds");
/// assert_eq!(graph.vertex_count(), 6);
/// ```
#[instrument(
    skip_all,
    fields(
        max_vertex = spec.max_vertex(),
        extra_edge_attempts = spec.extra_edge_attempts(),
    )
)]
pub fn generate(spec: &GraphSpec, rng: &mut SmallRng) -> Result<UpwardDag> {
    let mut graph = UpwardDag::new(spec.max_vertex());
    let base_edges = seed_base_edges(&mut graph, rng)?;
    let extra_edges = add_extra_edges(&mut graph, spec.extra_edge_attempts(), rng)?;
    debug!(base_edges, extra_edges, "generated fixture graph");
    Ok(graph)
}

/// Generates a random upward-edge DAG from an explicit seed.
///
/// Equal seeds and specs yield identical graphs.
///
/// # Errors
/// Propagates the same internal invariant failures as [`generate`].
///
/// # Examples
/// ```
/// use dagforge_core::{GraphSpec, generate_seeded};
///
/// let spec = GraphSpec::new(4, 3);
/// let first = generate_seeded(&spec, 7).expect("generation succeeds");
/// let second = generate_seeded(&spec, 7).expect("generation succeeds");
/// assert_eq!(first, second);
/// ```
pub fn generate_seeded(spec: &GraphSpec, seed: u64) -> Result<UpwardDag> {
    let mut rng = SmallRng::seed_from_u64(seed);
    generate(spec, &mut rng)
}

/// Seeds at most one outgoing edge per vertex.
///
/// For each vertex the partner is redrawn until it differs from the vertex
/// itself; the edge is kept only when the partner lands above it. Returns
/// the number of edges added.
fn seed_base_edges(graph: &mut UpwardDag, rng: &mut SmallRng) -> Result<usize> {
    let max_vertex = graph.max_vertex();
    let mut added = 0;
    for vertex in 0..=max_vertex {
        let Some(partner) = draw_distinct(vertex, max_vertex, rng) else {
            continue;
        };
        if partner > vertex && graph.insert_edge(vertex, partner)? {
            added += 1;
        }
    }
    Ok(added)
}

/// Attempts `attempts` extra edges, discarding downward draws without a
/// retry. Returns the number of edges actually added, which is at most
/// `attempts` and usually lower (downward draws and duplicates add
/// nothing).
fn add_extra_edges(graph: &mut UpwardDag, attempts: usize, rng: &mut SmallRng) -> Result<usize> {
    let max_vertex = graph.max_vertex();
    let mut added = 0;
    for _ in 0..attempts {
        let source = rng.gen_range(0..=max_vertex);
        let Some(target) = draw_distinct(source, max_vertex, rng) else {
            continue;
        };
        if target > source && graph.insert_edge(source, target)? {
            added += 1;
        }
    }
    Ok(added)
}

/// Draws a uniformly random vertex in `0..=max_vertex` distinct from
/// `vertex`, redrawing on collisions.
///
/// A single-vertex graph has no distinct partner, so the draw yields
/// `None` instead of looping forever.
fn draw_distinct(vertex: usize, max_vertex: usize, rng: &mut SmallRng) -> Option<usize> {
    if max_vertex == 0 {
        return None;
    }
    loop {
        let draw = rng.gen_range(0..=max_vertex);
        if draw != vertex {
            return Some(draw);
        }
    }
}
