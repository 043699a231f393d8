//! Query functions over a graph that may be absent, and the text form of
//! their results.
//!
//! Each function takes `Option<&Graph>` and answers with a neutral value
//! (0, `false`, an empty string or `None`) when there is no graph.  Lists
//! are rendered as space-separated words:
//!
//! - [`diameters`]: one diameter per component, ascending, e.g. `"0 2 7"`
//! - [`cut_vertices`]: vertex names in alphabetical order, e.g. `"B D"`
//! - [`cut_edges`]: both names of every bridge, e.g. `"A B B C"`
use std::fmt;

use crate::{graph::Graph, util::join_words};

pub fn name(graph: Option<&Graph>) -> Option<&str> {
    graph.and_then(Graph::name)
}

pub fn vertex_count(graph: Option<&Graph>) -> usize {
    graph.map_or(0, Graph::vertex_count)
}

pub fn edge_count(graph: Option<&Graph>) -> usize {
    graph.map_or(0, Graph::edge_count)
}

pub fn component_count(graph: Option<&Graph>) -> usize {
    graph.map_or(0, Graph::component_count)
}

/// An absent graph is reported as not bipartite.
pub fn is_bipartite(graph: Option<&Graph>) -> bool {
    graph.is_some_and(Graph::is_bipartite)
}

pub fn diameters(graph: Option<&Graph>) -> String {
    graph.map_or_else(String::new, |graph| {
        join_words(graph.component_diameters())
    })
}

pub fn cut_vertices(graph: Option<&Graph>) -> String {
    graph.map_or_else(String::new, |graph| join_words(graph.cut_vertices()))
}

pub fn cut_edges(graph: Option<&Graph>) -> String {
    graph.map_or_else(String::new, |graph| {
        join_words(
            graph
                .cut_edges()
                .into_iter()
                .flat_map(|(first, second)| [first, second]),
        )
    })
}

/// Releases a graph.  Returns whether there was one to release.
pub fn release(graph: Option<Graph>) -> bool {
    match graph {
        Some(graph) => {
            graph.release();
            true
        }
        None => false,
    }
}

/// The answers to every query, collected from one graph.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Report {
    pub name: Option<String>,
    pub vertex_count: usize,
    pub edge_count: usize,
    pub component_count: usize,
    pub is_bipartite: bool,
    pub diameters: String,
    pub cut_vertices: String,
    pub cut_edges: String,
}

impl Report {
    pub fn new(graph: Option<&Graph>) -> Self {
        Self {
            name: name(graph).map(str::to_owned),
            vertex_count: vertex_count(graph),
            edge_count: edge_count(graph),
            component_count: component_count(graph),
            is_bipartite: is_bipartite(graph),
            diameters: diameters(graph),
            cut_vertices: cut_vertices(graph),
            cut_edges: cut_edges(graph),
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "name: {}", self.name.as_deref().unwrap_or(""))?;
        writeln!(f, "vertices: {}", self.vertex_count)?;
        writeln!(f, "edges: {}", self.edge_count)?;
        writeln!(f, "components: {}", self.component_count)?;
        writeln!(f, "bipartite: {}", u8::from(self.is_bipartite))?;
        writeln!(f, "diameters: {}", self.diameters)?;
        writeln!(f, "cut vertices: {}", self.cut_vertices)?;
        write!(f, "cut edges: {}", self.cut_edges)
    }
}
