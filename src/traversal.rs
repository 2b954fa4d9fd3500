//! Depth-first traversal with an explicit stack.
//!
//! The traversal explores neighbours in vertex order and visits them in the same order a
//! recursive DFS would, without being limited by the call stack. Besides newly discovered
//! vertices it reports every edge leading back to an already visited vertex other than the
//! parent, which is what cycle detection needs.
use std::collections::btree_set;

use crate::graph::Graph;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum DfsEvent {
    /// `node` was reached for the first time.
    Discover { node: usize },
    /// `from` has an edge to the already visited `to`, which is not its parent.
    NonTreeEdge { from: usize, to: usize },
}

struct Frame<'a> {
    node: usize,
    parent: Option<usize>,
    neighbors: btree_set::Iter<'a, usize>,
}

/// A depth-first search that can be restarted at several roots while sharing one visited
/// set, so that consecutive trees cover one connected component each.
pub(crate) struct Dfs<'a, V> {
    graph: &'a Graph<V>,
    visited: Vec<bool>,
    stack: Vec<Frame<'a>>,
    root: Option<usize>,
}

impl<'a, V> Dfs<'a, V> {
    pub fn new(graph: &'a Graph<V>) -> Self {
        Self {
            graph,
            visited: vec![false; graph.order()],
            stack: Vec::new(),
            root: None,
        }
    }

    pub fn is_visited(&self, node: usize) -> bool {
        self.visited[node]
    }

    /// Start a new tree at `root`. Returns `false` (and does nothing) if `root` was already
    /// visited. Any unfinished tree is abandoned.
    pub fn start_at(&mut self, root: usize) -> bool {
        if self.visited[root] {
            return false;
        }

        self.stack.clear();
        self.visit(root, None);
        self.root = Some(root);
        true
    }

    fn visit(&mut self, node: usize, parent: Option<usize>) {
        let graph = self.graph;
        self.visited[node] = true;
        self.stack.push(Frame {
            node,
            parent,
            neighbors: graph.neighbor_indices(node).iter(),
        });
    }
}

impl<V> Iterator for Dfs<'_, V> {
    type Item = DfsEvent;

    fn next(&mut self) -> Option<DfsEvent> {
        if let Some(root) = self.root.take() {
            return Some(DfsEvent::Discover { node: root });
        }

        while let Some(frame) = self.stack.last_mut() {
            let (node, parent) = (frame.node, frame.parent);
            match frame.neighbors.next().copied() {
                Some(next) if !self.visited[next] => {
                    self.visit(next, Some(node));
                    return Some(DfsEvent::Discover { node: next });
                }
                Some(next) if Some(next) != parent => {
                    return Some(DfsEvent::NonTreeEdge {
                        from: node,
                        to: next,
                    });
                }
                Some(_) => {}
                None => {
                    self.stack.pop();
                }
            }
        }

        None
    }
}
