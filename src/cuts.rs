//! Articulation points and bridges.
//!
//! A single depth-first search over every component assigns each vertex a
//! discovery time and a low-link value, the smallest discovery time reachable
//! from its DFS subtree using at most one back edge.  Then:
//!
//! - a DFS root is an articulation point iff it has two or more tree children;
//! - any other vertex `u` is one iff some tree child `v` has
//!   `low[v] >= disc[u]`;
//! - a tree edge `(u, v)` is a bridge iff `low[v] > disc[u]`.
//!
//! Edges leading back to a vertex's DFS parent are not back edges, even when
//! the graph has several parallel edges between the two.
use bitvec::prelude::*;

use crate::{
    graph::{Graph, VertexId},
    tracing_support::info_span,
    util::sort_pair,
};

/// The result of one articulation point and bridge search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CutAnalysis {
    articulation: BitVec,
    bridges: Vec<(VertexId, VertexId)>,
}

impl CutAnalysis {
    /// Articulation points in vertex id order.
    pub fn articulation_points(&self) -> Vec<VertexId> {
        self.articulation.iter_ones().map(VertexId).collect()
    }

    pub fn is_articulation_point(&self, id: VertexId) -> bool {
        self.articulation
            .get(id.index())
            .is_some_and(|flag| *flag)
    }

    /// Bridges as `(parent, child)` tree edges, in the order the search
    /// finished them.
    pub fn bridges(&self) -> &[(VertexId, VertexId)] {
        &self.bridges
    }
}

/// A DFS frame: the vertex, how far through its adjacency list the search
/// has got, and how many tree children it has so far.
struct Frame {
    vertex: VertexId,
    cursor: usize,
    children: usize,
}

impl Frame {
    fn new(vertex: VertexId) -> Self {
        Self {
            vertex,
            cursor: 0,
            children: 0,
        }
    }
}

/// Per-call search state.  The discovery clock runs across all components
/// of one search and starts again at 1 for the next.
struct LowLink<'g> {
    graph: &'g Graph,
    time: usize,
    visited: BitVec,
    disc: Vec<usize>,
    low: Vec<usize>,
    parent: Vec<Option<VertexId>>,
    articulation: BitVec,
    bridges: Vec<(VertexId, VertexId)>,
}

impl<'g> LowLink<'g> {
    fn new(graph: &'g Graph) -> Self {
        let n = graph.vertex_count();
        Self {
            graph,
            time: 0,
            visited: bitvec![0; n],
            disc: vec![0; n],
            low: vec![0; n],
            parent: vec![None; n],
            articulation: bitvec![0; n],
            bridges: Vec::new(),
        }
    }

    fn discover(&mut self, vertex: VertexId, parent: Option<VertexId>) -> Frame {
        self.time += 1;
        let i = vertex.index();
        self.visited.set(i, true);
        self.disc[i] = self.time;
        self.low[i] = self.time;
        self.parent[i] = parent;
        Frame::new(vertex)
    }

    fn compute(mut self) -> CutAnalysis {
        for root in self.graph.vertex_ids() {
            if !self.visited[root.index()] {
                self.search_from(root);
            }
        }
        CutAnalysis {
            articulation: self.articulation,
            bridges: self.bridges,
        }
    }

    fn search_from(&mut self, root: VertexId) {
        let graph = self.graph;
        let mut stack = vec![self.discover(root, None)];
        while let Some(frame) = stack.last_mut() {
            let u = frame.vertex;
            if let Some(adj) = graph.neighbors(u).get(frame.cursor) {
                frame.cursor += 1;
                let v = adj.target;
                if !self.visited[v.index()] {
                    frame.children += 1;
                    let child = self.discover(v, Some(u));
                    stack.push(child);
                } else if self.parent[u.index()] != Some(v) {
                    // Back edge.
                    self.low[u.index()] = self.low[u.index()].min(self.disc[v.index()]);
                }
                continue;
            }

            let Some(finished) = stack.pop() else {
                break;
            };
            match stack.last() {
                Some(parent_frame) => self.finish_child(parent_frame.vertex, finished.vertex),
                None if finished.children > 1 => {
                    self.articulation.set(finished.vertex.index(), true);
                }
                None => {}
            }
        }
    }

    /// Folds a finished tree child `v` into its parent `u`.
    fn finish_child(&mut self, u: VertexId, v: VertexId) {
        let (ui, vi) = (u.index(), v.index());
        self.low[ui] = self.low[ui].min(self.low[vi]);
        if self.parent[ui].is_some() && self.low[vi] >= self.disc[ui] {
            self.articulation.set(ui, true);
        }
        if self.low[vi] > self.disc[ui] {
            self.bridges.push((u, v));
        }
    }
}

impl Graph {
    /// Finds all articulation points and bridges with one depth-first search.
    pub fn cut_analysis(&self) -> CutAnalysis {
        let _span = info_span!("cut_analysis").entered();
        LowLink::new(self).compute()
    }

    /// Returns the vertices whose removal would increase the number of
    /// connected components, in vertex id order.
    pub fn articulation_points(&self) -> Vec<VertexId> {
        self.cut_analysis().articulation_points()
    }

    /// Returns the edges whose removal would increase the number of connected
    /// components, as `(parent, child)` pairs of the search tree.
    pub fn bridges(&self) -> Vec<(VertexId, VertexId)> {
        self.cut_analysis().bridges
    }

    /// Names of the articulation points in alphabetical order.
    pub fn cut_vertices(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .articulation_points()
            .into_iter()
            .map(|id| self.vertex_name(id))
            .collect();
        names.sort_unstable();
        names
    }

    /// Bridges as pairs of vertex names.  Each pair is in alphabetical order,
    /// and the pairs are sorted by first name, then second.
    pub fn cut_edges(&self) -> Vec<(&str, &str)> {
        let mut pairs: Vec<(&str, &str)> = self
            .bridges()
            .into_iter()
            .map(|(u, v)| sort_pair(self.vertex_name(u), self.vertex_name(v)))
            .collect();
        pairs.sort_unstable();
        pairs
    }
}
