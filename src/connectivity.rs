//! Connected components, cycle detection and the Eulerian circuit test.
use std::hash::Hash;

use tracing::trace;

use crate::graph::Graph;
use crate::traversal::{Dfs, DfsEvent};

impl<V: Eq + Hash + Clone> Graph<V> {
    /// Partition the vertices into connected components.
    ///
    /// Components are listed in the order of their first vertex, and each component lists
    /// its vertices in depth-first preorder.
    pub fn connected_components(&self) -> Vec<Vec<V>> {
        let mut dfs = Dfs::new(self);
        let mut components = Vec::new();

        for root in 0..self.order() {
            if !dfs.start_at(root) {
                continue;
            }

            let component: Vec<V> = dfs
                .by_ref()
                .filter_map(|event| match event {
                    DfsEvent::Discover { node, .. } => Some(self.label(node).clone()),
                    DfsEvent::NonTreeEdge { .. } => None,
                })
                .collect();

            trace!(root, size = component.len(), "collected connected component");
            components.push(component);
        }

        components
    }

    /// Whether all vertices lie in a single component. The empty graph counts as connected.
    pub fn is_connected(&self) -> bool {
        let mut dfs = Dfs::new(self);
        if self.order() > 0 {
            dfs.start_at(0);
            dfs.by_ref().for_each(drop);
        }
        (0..self.order()).all(|u| dfs.is_visited(u))
    }

    /// Whether some component contains a cycle.
    ///
    /// Parallel edges cannot be represented, so two vertices joined twice do not form a
    /// cycle. A self-loop does.
    pub fn has_cycle(&self) -> bool {
        let mut dfs = Dfs::new(self);

        (0..self.order()).any(|root| {
            dfs.start_at(root)
                && dfs.by_ref().any(|event| match event {
                    DfsEvent::NonTreeEdge { from, to } => {
                        trace!(from, to, "back edge closes a cycle");
                        true
                    }
                    DfsEvent::Discover { .. } => false,
                })
        })
    }

    /// Whether the graph has a closed walk using every edge exactly once.
    ///
    /// That is the case when every degree is even and all vertices with at least one edge
    /// are connected. Isolated vertices are ignored, so a graph without edges has a
    /// (trivial) circuit.
    pub fn has_eulerian_circuit(&self) -> bool {
        if !self.all_degrees_even() {
            return false;
        }

        let Some(start) = (0..self.order()).find(|&u| self.degree_of(u) > 0) else {
            return true;
        };

        let mut dfs = Dfs::new(self);
        dfs.start_at(start);
        dfs.by_ref().for_each(drop);

        (0..self.order()).all(|u| dfs.is_visited(u) || self.degree_of(u) == 0)
    }
}
