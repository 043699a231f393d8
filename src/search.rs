use std::borrow::BorrowMut;

use bitvec::prelude::*;

use crate::graph::{Graph, VertexId};

/// Creates a visited set for `graph` with every vertex unvisited.
pub fn visited_set(graph: &Graph) -> BitVec {
    bitvec![0; graph.vertex_count()]
}

/// Depth-first iterator over the vertices reachable from a start vertex.
///
/// Visited vertices are recorded in a bit set with one bit per vertex.  With
/// [`Dfs::new`] the set is supplied by the caller, so several searches can
/// share it: a vertex already marked when the search reaches it is skipped.
/// The search uses an explicit stack, so its depth is not limited by the call
/// stack.
pub struct Dfs<'g, V = BitVec> {
    graph: &'g Graph,
    visited: V,
    stack: Vec<VertexId>,
}

impl<'g, 'v> Dfs<'g, &'v mut BitSlice> {
    pub fn new(graph: &'g Graph, start: VertexId, visited: &'v mut BitSlice) -> Self {
        graph.assert_valid_vertex_id(start);
        assert_eq!(
            visited.len(),
            graph.vertex_count(),
            "visited set must have one bit per vertex"
        );
        Self {
            graph,
            visited,
            stack: vec![start],
        }
    }
}

impl<V> Iterator for Dfs<'_, V>
where
    V: BorrowMut<BitSlice>,
{
    type Item = VertexId;

    fn next(&mut self) -> Option<Self::Item> {
        let visited = self.visited.borrow_mut();
        while let Some(vid) = self.stack.pop() {
            if visited.replace(vid.index(), true) {
                continue;
            }
            // Reversed so that neighbours are explored in adjacency order.
            for adj in self.graph.neighbors(vid).iter().rev() {
                if !visited[adj.target.index()] {
                    self.stack.push(adj.target);
                }
            }
            return Some(vid);
        }
        None
    }
}

impl Graph {
    /// Performs a depth-first search starting from the given vertex.
    pub fn dfs(&self, start: VertexId) -> Dfs<'_> {
        self.assert_valid_vertex_id(start);
        Dfs {
            graph: self,
            visited: visited_set(self),
            stack: vec![start],
        }
    }
}
