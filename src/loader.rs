//! Reading graphs from their line-oriented text description.
//!
//! ```text
//! // comments and blank lines are ignored
//! Graph name
//! A -- B
//! B -- C 5
//! D
//! ```
//!
//! The first remaining line names the graph.  Every later line is either an
//! edge, `<vertex> -- <vertex> [weight]`, or the name of a vertex to add with
//! no edges.  Vertices mentioned by an edge are created on first use.  Edge
//! lines with nothing after `--` are skipped without error.
//!
//! Input is read as bytes; invalid UTF-8 is replaced with `U+FFFD` rather than
//! rejected.
use std::{
    borrow::Cow,
    convert::Infallible,
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
    str::FromStr,
};

use crate::{
    error::LoadError,
    graph::{DEFAULT_WEIGHT, Graph, Weight},
    tracing_support::{debug, info_span},
};

/// One meaningful line of a graph description.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Line<'a> {
    Edge {
        left: &'a str,
        right: &'a str,
        weight: Weight,
    },
    Vertex(&'a str),
}

/// Classifies a line that is known not to be blank or a comment.  Returns
/// `None` for an edge line without a right-hand vertex.
fn parse_line(line: &str) -> Option<Line<'_>> {
    let Some((left, rest)) = line.split_once("--") else {
        return Some(Line::Vertex(line));
    };
    let mut tokens = rest.split_whitespace();
    let right = tokens.next()?;
    let weight = tokens.next().map_or(DEFAULT_WEIGHT, parse_weight);
    Some(Line::Edge {
        left: left.trim(),
        right,
        weight,
    })
}

/// Parses a weight the way C's `atoi` does: an optional sign followed by
/// the leading digits.  Anything unparseable counts as 0.
fn parse_weight(token: &str) -> Weight {
    let (negative, digits) = match token.as_bytes().first() {
        Some(b'-') => (true, &token[1..]),
        Some(b'+') => (false, &token[1..]),
        _ => (false, token),
    };
    let magnitude = digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0 as Weight, |acc, digit| {
            acc.saturating_mul(10)
                .saturating_add(Weight::from(digit - b'0'))
        });
    if negative { -magnitude } else { magnitude }
}

fn is_ignored(line: &str) -> bool {
    line.is_empty() || line.starts_with("//")
}

/// Applies one trimmed, non-ignored line to a graph under construction.
fn apply_line(graph: &mut Graph, line: &str, line_number: usize) {
    if graph.name().is_none() {
        graph.set_name(line);
        return;
    }
    match parse_line(line) {
        Some(Line::Edge {
            left,
            right,
            weight,
        }) => {
            let u = graph.get_or_create(left);
            let v = graph.get_or_create(right);
            graph.add_weighted_edge(u, v, weight);
        }
        Some(Line::Vertex(name)) => {
            graph.get_or_create(name);
        }
        None => {
            debug!(line_number, line, "skipping edge line without a second vertex");
        }
    }
}

/// Builds a graph from raw lines, stopping at the first line that failed to
/// read.
fn build<'a, E>(lines: impl IntoIterator<Item = Result<Cow<'a, str>, E>>) -> Result<Graph, E> {
    let _span = info_span!("load").entered();
    let mut graph = Graph::new();
    for (index, line) in lines.into_iter().enumerate() {
        let line = line?;
        let line = line.trim();
        if !is_ignored(line) {
            apply_line(&mut graph, line, index + 1);
        }
    }
    debug!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "loaded graph"
    );
    Ok(graph)
}

/// Reads a graph description from `reader`.  Bytes that are not valid UTF-8
/// are decoded lossily; only read failures are errors.
pub fn load<R: BufRead>(reader: R) -> Result<Graph, LoadError> {
    let lines = reader.split(b'\n').map(|line| {
        line.map(|bytes| Cow::<str>::Owned(String::from_utf8_lossy(&bytes).into_owned()))
    });
    build(lines).map_err(LoadError::from)
}

/// Reads a graph description from the file at `path`.
pub fn load_file(path: impl AsRef<Path>) -> Result<Graph, LoadError> {
    let file = File::open(path)?;
    load(BufReader::new(file))
}

impl Graph {
    /// Builds a graph from an in-memory description.
    pub fn parse(data: &str) -> Self {
        let lines = data.lines().map(|line| Ok::<_, Infallible>(Cow::Borrowed(line)));
        match build(lines) {
            Ok(graph) => graph,
            Err(never) => match never {},
        }
    }
}

impl FromStr for Graph {
    type Err = LoadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Graph::parse(s))
    }
}
