//! Command-line orchestration for the dagforge fixture generator.
//!
//! The binary follows the fixture-generation protocol: two integers are
//! read from the input stream — the highest vertex id, then the number of
//! extra-edge attempts — and the generated graph is written to the output
//! stream as a `ugraph` literal. An optional `--seed` flag makes the run
//! reproducible; without it the generator seeds from OS entropy.

use std::io::{self, BufRead, Write};
use std::num::ParseIntError;

use clap::Parser;
use dagforge_core::{GraphError, GraphSpec, UgraphLiteral, generate};
use rand::{SeedableRng, rngs::SmallRng};
use thiserror::Error;

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(name = "dagforge", about = "Generate a random upward-edge DAG fixture.")]
pub struct Cli {
    /// Seed for the random generator; equal seeds reproduce the same graph.
    /// Defaults to OS entropy when omitted.
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Generation parameters read from the input stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerateRequest {
    /// Highest vertex id of the generated graph.
    pub max_vertex: usize,
    /// Number of extra-edge attempts after base seeding.
    pub extra_edge_attempts: usize,
}

/// Errors surfaced while executing the CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Reading from the input stream failed.
    #[error("failed to read input: {source}")]
    Input {
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// Writing the rendered literal failed.
    #[error("failed to write output: {source}")]
    Output {
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// The input stream ended before both integers were supplied.
    #[error("input ended before {expected} was provided")]
    MissingInput {
        /// Description of the missing field.
        expected: &'static str,
    },
    /// A supplied line was not a non-negative integer.
    #[error("could not parse {field} from `{value}`: {source}")]
    ParseInt {
        /// Description of the field being parsed.
        field: &'static str,
        /// The raw (trimmed) line that failed to parse.
        value: String,
        /// Underlying parse failure.
        #[source]
        source: ParseIntError,
    },
    /// Graph construction failed.
    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// Reads the two-line generation request from `reader`.
///
/// Each line is trimmed of surrounding whitespace before parsing, matching
/// the tolerance of the reference protocol.
///
/// # Errors
/// Returns [`CliError::MissingInput`] when the stream ends early,
/// [`CliError::ParseInt`] when a line is not a non-negative integer, and
/// [`CliError::Input`] when reading fails.
///
/// # Examples
/// ```
/// use std::io::Cursor;
/// use dagforge_cli::cli::read_request;
///
/// let request = read_request(Cursor::new("3\n5\n")).expect("input is well-formed");
/// assert_eq!(request.max_vertex, 3);
/// assert_eq!(request.extra_edge_attempts, 5);
/// ```
pub fn read_request(mut reader: impl BufRead) -> Result<GenerateRequest, CliError> {
    let max_vertex = read_integer(&mut reader, "the highest vertex id")?;
    let extra_edge_attempts = read_integer(&mut reader, "the extra-edge attempt count")?;
    Ok(GenerateRequest {
        max_vertex,
        extra_edge_attempts,
    })
}

fn read_integer(reader: &mut impl BufRead, field: &'static str) -> Result<usize, CliError> {
    let mut line = String::new();
    let bytes = reader
        .read_line(&mut line)
        .map_err(|source| CliError::Input { source })?;
    if bytes == 0 {
        return Err(CliError::MissingInput { expected: field });
    }
    let trimmed = line.trim();
    trimmed.parse().map_err(|source| CliError::ParseInt {
        field,
        value: trimmed.to_owned(),
        source,
    })
}

/// Executes the CLI: reads a request, generates a graph, renders it.
///
/// # Errors
/// Returns [`CliError`] when reading, parsing, generation, or writing
/// fails.
///
/// # Examples
/// ```
/// use std::io::Cursor;
/// use dagforge_cli::cli::{Cli, run_cli};
///
/// let cli = Cli { seed: Some(42) };
/// let mut output = Vec::new();
/// run_cli(cli, Cursor::new("2\n0\n"), &mut output).expect("pipeline succeeds");
/// let text = String::from_utf8(output).expect("output is UTF-8");
/// assert!(text.starts_with("g = ugraph({\n"));
/// assert!(text.ends_with("\n})\n"));
/// ```
pub fn run_cli(cli: Cli, reader: impl BufRead, mut writer: impl Write) -> Result<(), CliError> {
    let request = read_request(reader)?;
    let spec = GraphSpec::new(request.max_vertex, request.extra_edge_attempts);
    let mut rng = match cli.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_entropy(),
    };
    let graph = generate(&spec, &mut rng)?;
    writeln!(writer, "{}", UgraphLiteral::new(&graph))
        .map_err(|source| CliError::Output { source })?;
    Ok(())
}
