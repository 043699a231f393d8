//! Shortest paths and component diameters.
//!
//! Distances are computed with the dense O(V²) form of Dijkstra's algorithm,
//! which needs nothing beyond the adjacency lists and suits the small graphs
//! this crate is meant for.  Weights are assumed to be non-negative; the
//! results for negative weights are unspecified.
#[cfg(feature = "pathfinding")]
use std::collections::HashMap;

use bitvec::prelude::*;

use crate::{
    graph::{Graph, VertexId, Weight},
    tracing_support::info_span,
};

impl Graph {
    /// Computes the length of the shortest path from `source` to every
    /// vertex, indexed by vertex id.  Unreachable vertices get `None`.
    pub fn dijkstra(&self, source: VertexId) -> Vec<Option<Weight>> {
        self.assert_valid_vertex_id(source);
        let n = self.vertex_count();
        let mut dist: Vec<Option<Weight>> = vec![None; n];
        let mut done = bitvec![0; n];
        dist[source.index()] = Some(0);
        for _ in 0..n {
            let next = (0..n)
                .filter(|&i| !done[i])
                .filter_map(|i| dist[i].map(|d| (d, i)))
                .min();
            let Some((du, u)) = next else {
                break;
            };
            done.set(u, true);
            for adj in self.neighbors(VertexId(u)) {
                let candidate = du.saturating_add(adj.weight);
                let slot = &mut dist[adj.target.index()];
                if slot.is_none_or(|dv| candidate < dv) {
                    *slot = Some(candidate);
                }
            }
        }
        dist
    }

    /// Returns the diameter of every connected component in nondescending
    /// order.  The diameter is the largest shortest-path distance between two
    /// members of the component; a single vertex has diameter 0.
    pub fn component_diameters(&self) -> Vec<Weight> {
        let _span = info_span!("component_diameters").entered();
        let mut diameters: Vec<Weight> = self
            .components()
            .iter()
            .map(|members| self.diameter_of(members))
            .collect();
        diameters.sort_unstable();
        diameters
    }

    fn diameter_of(&self, members: &[VertexId]) -> Weight {
        let _span = info_span!("diameter_of", size = members.len()).entered();
        members
            .iter()
            .flat_map(|&source| {
                let dist = self.dijkstra(source);
                members
                    .iter()
                    .filter_map(move |member| dist[member.index()])
            })
            .fold(0, Weight::max)
    }

    /// Finds shortest paths from a starting vertex to all reachable vertices
    /// using `pathfinding`'s Dijkstra.  Returns a map from each reachable
    /// vertex to a tuple of the path taken and the total cost.
    #[cfg(feature = "pathfinding")]
    pub fn shortest_paths(&self, start: VertexId) -> HashMap<VertexId, (Vec<VertexId>, Weight)> {
        use pathfinding::prelude::{build_path, dijkstra_all};

        self.assert_valid_vertex_id(start);
        let parents: HashMap<VertexId, (VertexId, Weight)> = dijkstra_all(&start, |&vid| {
            self.neighbors(vid)
                .iter()
                .map(|adj| (adj.target, adj.weight))
                .collect::<Vec<_>>()
        });
        let mut result: HashMap<VertexId, (Vec<VertexId>, Weight)> = parents
            .iter()
            .map(|(vid, &(_, cost))| (*vid, (build_path(vid, &parents), cost)))
            .collect();
        result.insert(start, (vec![start], 0));
        result
    }
}
