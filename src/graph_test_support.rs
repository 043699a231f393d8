use std::collections::{HashSet, VecDeque};

use quickcheck::{Arbitrary, Gen};

use crate::{
    graph::{Graph, VertexId, Weight},
    tracing_support::{LevelFilter, info_span, init_tracing},
};

/// A random graph together with the edges used to build it.
#[derive(Debug, Clone)]
pub struct ArbGraph {
    pub graph: Graph,
    pub edges: Vec<(VertexId, VertexId, Weight)>,
}

impl Arbitrary for ArbGraph {
    fn arbitrary(g: &mut Gen) -> Self {
        let num_vertices = usize::arbitrary(g) % 16; // Limit size for testing
        let num_edges = usize::arbitrary(g) % 32;
        let num_extra_parallel_edges = usize::arbitrary(g) % 3;
        let num_extra_self_loops = usize::arbitrary(g) % 3;

        let mut graph = Graph::with_name("arbitrary");
        let vertices: Vec<_> = (0..num_vertices)
            .map(|i| graph.get_or_create(&format!("v{i:02}")))
            .collect();
        let mut edges = Vec::new();
        let mut add = |graph: &mut Graph, u: VertexId, v: VertexId, g: &mut Gen| {
            let weight = Weight::from(u8::arbitrary(g) % 20);
            graph.add_weighted_edge(u, v, weight);
            edges.push((u, v, weight));
        };

        for i in 0..num_edges {
            if vertices.len() < 2 {
                break;
            }
            let source = *g.choose(&vertices).unwrap_or(&vertices[0]);
            let target = *g.choose(&vertices).unwrap_or(&vertices[0]);
            if source == target {
                continue;
            }
            add(&mut graph, source, target, g);
            if i < num_extra_parallel_edges {
                add(&mut graph, target, source, g);
            }
            if i < num_extra_self_loops {
                add(&mut graph, source, source, g);
            }
        }

        ArbGraph { graph, edges }
    }
}

/// Counts the components of `graph` with `skip_vertex` removed and every
/// edge between `skip_edge`'s endpoints removed, using union-find.
pub fn count_components_without(
    graph: &Graph,
    skip_vertex: Option<VertexId>,
    skip_edge: Option<(VertexId, VertexId)>,
) -> usize {
    fn root(parent: &mut [usize], mut i: usize) -> usize {
        while parent[i] != i {
            parent[i] = parent[parent[i]];
            i = parent[i];
        }
        i
    }

    let mut parent: Vec<usize> = (0..graph.vertex_count()).collect();
    for u in graph.vertex_ids() {
        if Some(u) == skip_vertex {
            continue;
        }
        for adj in graph.neighbors(u) {
            let v = adj.target;
            if Some(v) == skip_vertex
                || skip_edge.is_some_and(|(a, b)| (a, b) == (u, v) || (a, b) == (v, u))
            {
                continue;
            }
            let (ru, rv) = (root(&mut parent, u.index()), root(&mut parent, v.index()));
            parent[ru] = rv;
        }
    }
    graph
        .vertex_ids()
        .filter(|&u| Some(u) != skip_vertex)
        .map(|u| root(&mut parent, u.index()))
        .collect::<HashSet<_>>()
        .len()
}

/// Checks the internal consistency of a graph: every adjacency entry has a
/// mirror entry with the same weight, and the entry total matches the edge
/// count.
pub fn check_graph_consistency(graph: &Graph) {
    init_tracing(LevelFilter::OFF);
    let _span = info_span!("check_graph_consistency").entered();

    let mut total_entries = 0;
    for u in graph.vertex_ids() {
        for adj in graph.neighbors(u) {
            total_entries += 1;
            let forward = graph
                .neighbors(u)
                .iter()
                .filter(|other| **other == *adj)
                .count();
            let backward = graph
                .neighbors(adj.target)
                .iter()
                .filter(|other| other.target == u && other.weight == adj.weight)
                .count();
            assert_eq!(forward, backward, "asymmetric adjacency at {u}");
        }
    }
    assert_eq!(total_entries, 2 * graph.edge_count());
}

/// Breadth-first search from the lowest vertex of each component, returning
/// an edge whose endpoints share a BFS level.  Such an edge closes an odd
/// cycle, and one exists iff the graph is not bipartite.
pub fn find_same_level_edge(graph: &Graph) -> Option<(VertexId, VertexId)> {
    let mut level: Vec<Option<usize>> = vec![None; graph.vertex_count()];
    let mut queue = VecDeque::new();
    for root in graph.vertex_ids() {
        if level[root.index()].is_some() {
            continue;
        }
        level[root.index()] = Some(0);
        queue.push_back(root);
        while let Some(u) = queue.pop_front() {
            let depth = level[u.index()].expect("queued vertices have a level");
            for adj in graph.neighbors(u) {
                match level[adj.target.index()] {
                    None => {
                        level[adj.target.index()] = Some(depth + 1);
                        queue.push_back(adj.target);
                    }
                    Some(other) if other == depth => return Some((u, adj.target)),
                    Some(_) => {}
                }
            }
        }
    }
    None
}
