//! An in-memory engine for undirected, weighted graphs.
//!
//! A [`Graph`] is read from a small line-oriented text format (see
//! [`loader`]) and then answers structural queries:
//!
//! - vertex and edge counts
//! - connected components ([`Graph::component_count`])
//! - bipartiteness ([`Graph::is_bipartite`])
//! - the diameter of each component ([`Graph::component_diameters`])
//! - articulation points and bridges ([`Graph::cut_vertices`],
//!   [`Graph::cut_edges`])
//!
//! Analyses borrow the graph immutably and keep all of their working state
//! local to the call, so they may run concurrently on a shared graph.
//!
//! ```
//! use graphscan::Graph;
//!
//! let graph = Graph::parse("G1\nA -- B\nB -- C 5\nC -- A\nD\n");
//! assert_eq!(graph.component_count(), 2);
//! assert!(!graph.is_bipartite());
//! assert_eq!(graph.component_diameters(), vec![0, 2]);
//! assert!(graph.cut_vertices().is_empty());
//! ```
pub mod bipartite;
pub mod components;
pub mod cuts;
pub mod error;
pub mod graph;
pub mod loader;
pub mod report;
pub mod search;
pub mod shortest_path;
pub mod tracing_support;

mod util;

#[cfg(test)]
mod graph_test_support;

pub use error::{GraphError, LoadError};
pub use graph::{Adjacent, DEFAULT_WEIGHT, Graph, VertexId, Weight};
pub use loader::{load, load_file};
pub use report::Report;
