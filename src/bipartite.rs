use crate::{graph::Graph, tracing_support::info_span};

/// One of the two colour classes of a bipartite graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

impl Graph {
    /// Returns true if the vertices can be split into two sets such that
    /// every edge has one end in each.  A self-loop makes a graph
    /// non-bipartite.
    pub fn is_bipartite(&self) -> bool {
        self.bipartition().is_some()
    }

    /// Two-colours the graph by depth-first search, giving the lowest vertex
    /// of each component [`Side::Left`].  Returns the side of each vertex,
    /// indexed by vertex id, or `None` as soon as an edge joins two vertices
    /// of the same colour.
    pub fn bipartition(&self) -> Option<Vec<Side>> {
        let _span = info_span!("bipartition").entered();
        let mut sides: Vec<Option<Side>> = vec![None; self.vertex_count()];
        let mut stack = Vec::new();
        for root in self.vertex_ids() {
            if sides[root.index()].is_some() {
                continue;
            }
            sides[root.index()] = Some(Side::Left);
            stack.push(root);
            while let Some(u) = stack.pop() {
                let side = sides[u.index()]?;
                for adj in self.neighbors(u) {
                    match sides[adj.target.index()] {
                        None => {
                            sides[adj.target.index()] = Some(side.opposite());
                            stack.push(adj.target);
                        }
                        Some(other) if other == side => return None,
                        Some(_) => {}
                    }
                }
            }
        }
        sides.into_iter().collect()
    }
}
