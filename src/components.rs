use crate::{
    graph::{Graph, VertexId},
    search::{Dfs, visited_set},
    tracing_support::info_span,
};

impl Graph {
    /// Counts the connected components.  An isolated vertex is a component
    /// of its own.
    pub fn component_count(&self) -> usize {
        let _span = info_span!("component_count").entered();
        let mut visited = visited_set(self);
        let mut count = 0;
        for root in self.vertex_ids() {
            if !visited[root.index()] {
                count += 1;
                Dfs::new(self, root, &mut visited).for_each(drop);
            }
        }
        count
    }

    /// Returns the members of each connected component.  Components are
    /// ordered by their lowest vertex id; members appear in depth-first order
    /// starting from that vertex.
    pub fn components(&self) -> Vec<Vec<VertexId>> {
        let _span = info_span!("components").entered();
        let mut visited = visited_set(self);
        let mut components = Vec::new();
        for root in self.vertex_ids() {
            if !visited[root.index()] {
                components.push(Dfs::new(self, root, &mut visited).collect());
            }
        }
        components
    }
}
