//! Dagforge core library.
//!
//! Test-support primitives: a seeded random generator for upward-edge DAG
//! fixtures, the `ugraph` literal renderer for those fixtures, and a stable
//! reference merge sort for checking the ordering behaviour of other code.

mod error;
mod generator;
mod graph;
mod render;
mod sort;

pub use crate::{
    error::{GraphError, Result},
    generator::{GraphSpec, generate, generate_seeded},
    graph::UpwardDag,
    render::UgraphLiteral,
    sort::merge_sort,
};
