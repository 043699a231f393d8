//! The graph store.
//!
//! [`Graph`] owns the vertex names, the adjacency lists and the edge count of
//! an undirected, weighted graph.  Vertices are identified by [`VertexId`],
//! an index into the vertex table that stays valid for the lifetime of the
//! graph; there is no way to remove a vertex, so ids are never reused.
//!
//! Every call to [`Graph::add_weighted_edge`] stores the edge twice, once in
//! the adjacency list of each endpoint, and counts it once.  Parallel edges
//! and self-loops are stored exactly as requested.
//!
//! The analyses live in sibling modules as further `impl Graph` blocks:
//!
//! - [`crate::components`]: connected components
//! - [`crate::bipartite`]: two-colouring
//! - [`crate::shortest_path`]: Dijkstra and component diameters
//! - [`crate::cuts`]: articulation points and bridges
use std::fmt::{self, Debug};

use crate::error::GraphError;

/// Edge weight.  Weights are expected to be non-negative.
pub type Weight = i64;

/// Weight given to edges that don't specify one.
pub const DEFAULT_WEIGHT: Weight = 1;

/// Identifier of a vertex: its position in insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexId(pub(crate) usize);

impl VertexId {
    /// Returns the insertion index of the vertex.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

/// One entry of an adjacency list: the far end of an edge and its weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Adjacent {
    pub target: VertexId,
    pub weight: Weight,
}

/// An undirected, weighted graph with named vertices.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Graph {
    name: Option<String>,
    vertices: Vec<String>,
    adjacency: Vec<Vec<Adjacent>>,
    edge_count: usize,
}

impl Graph {
    /// Creates an empty, unnamed graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty graph with the given name.
    pub fn with_name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Returns the name of the graph, if one has been set.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = Some(name.into());
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of `add_edge` calls made on this graph.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Gets an iterator over all vertex ids in insertion order.
    pub fn vertex_ids(&self) -> impl ExactSizeIterator<Item = VertexId> + use<> {
        (0..self.vertices.len()).map(VertexId)
    }

    /// Gets the name of a vertex.  Panics if `id` is not a vertex of this
    /// graph.
    pub fn vertex_name(&self, id: VertexId) -> &str {
        self.assert_valid_vertex_id(id);
        &self.vertices[id.0]
    }

    /// Gets the vertex names in insertion order.
    pub fn vertex_names(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.vertices.iter().map(String::as_str)
    }

    /// Gets the adjacency list of a vertex, in the order the edges were added.
    pub fn neighbors(&self, id: VertexId) -> &[Adjacent] {
        self.assert_valid_vertex_id(id);
        &self.adjacency[id.0]
    }

    /// Gets the number of adjacency entries of a vertex.  A self-loop
    /// contributes two.
    pub fn degree(&self, id: VertexId) -> usize {
        self.neighbors(id).len()
    }

    /// Looks up a vertex by exact, case-sensitive name.
    pub fn find(&self, name: &str) -> Option<VertexId> {
        self.vertices
            .iter()
            .position(|vertex| vertex == name)
            .map(VertexId)
    }

    /// Returns the id of the vertex called `name`, adding it with no edges if
    /// it does not exist yet.
    pub fn get_or_create(&mut self, name: &str) -> VertexId {
        match self.find(name) {
            Some(id) => id,
            None => self.add_vertex(name.to_owned()),
        }
    }

    fn add_vertex(&mut self, name: String) -> VertexId {
        let id = VertexId(self.vertices.len());
        self.vertices.push(name);
        self.adjacency.push(Vec::new());
        id
    }

    /// Adds an edge of weight [`DEFAULT_WEIGHT`] between `u` and `v`.
    pub fn add_edge(&mut self, u: VertexId, v: VertexId) {
        self.add_weighted_edge(u, v, DEFAULT_WEIGHT);
    }

    /// Adds an undirected edge between `u` and `v`.  Both endpoints get an
    /// adjacency entry carrying `weight`.  Panics if either id is not a vertex
    /// of this graph.
    pub fn add_weighted_edge(&mut self, u: VertexId, v: VertexId, weight: Weight) {
        self.assert_valid_vertex_id(u);
        self.assert_valid_vertex_id(v);
        self.adjacency[u.0].push(Adjacent { target: v, weight });
        self.adjacency[v.0].push(Adjacent { target: u, weight });
        self.edge_count += 1;
    }

    /// Checks that `id` names a vertex of this graph.
    pub fn check_valid_vertex_id(&self, id: VertexId) -> Result<(), GraphError> {
        if id.0 < self.vertices.len() {
            Ok(())
        } else {
            Err(GraphError::InvalidVertexId {
                id,
                vertex_count: self.vertices.len(),
            })
        }
    }

    /// Panics if `id` does not name a vertex of this graph.
    pub fn assert_valid_vertex_id(&self, id: VertexId) {
        if let Err(error) = self.check_valid_vertex_id(id) {
            panic!("{error}");
        }
    }

    /// Releases the graph and everything it owns.
    pub fn release(self) {}
}

impl Debug for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct AdjacencyView<'a>(&'a Graph);

        impl Debug for AdjacencyView<'_> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let graph = self.0;
                f.debug_map()
                    .entries(graph.vertex_ids().map(|id| {
                        let edges: Vec<_> = graph
                            .neighbors(id)
                            .iter()
                            .map(|adj| (graph.vertex_name(adj.target), adj.weight))
                            .collect();
                        (graph.vertex_name(id), edges)
                    }))
                    .finish()
            }
        }

        f.debug_struct("Graph")
            .field("name", &self.name)
            .field("edge_count", &self.edge_count)
            .field("adjacency", &AdjacencyView(self))
            .finish()
    }
}
