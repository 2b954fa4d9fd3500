//! Two-colouring of undirected graphs.
use std::collections::VecDeque;
use std::hash::Hash;

use itertools::{Either, Itertools};
use tracing::trace;

use crate::graph::Graph;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

impl Side {
    fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// A split of the vertex set such that every edge joins the two sides.
///
/// The first vertex of each component is put on the left, so sides of different components
/// carry no relation to each other.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bipartition<V> {
    left: Vec<V>,
    right: Vec<V>,
}

impl<V> Bipartition<V> {
    pub fn left(&self) -> &[V] {
        &self.left
    }

    pub fn right(&self) -> &[V] {
        &self.right
    }

    pub fn into_sides(self) -> (Vec<V>, Vec<V>) {
        (self.left, self.right)
    }
}

impl<V: Eq + Hash + Clone> Graph<V> {
    /// Whether the graph has no odd cycle.
    pub fn is_bipartite(&self) -> bool {
        self.sides().is_some()
    }

    /// Colour the graph with two colours, or return `None` if some edge cannot be
    /// properly coloured.
    pub fn two_coloring(&self) -> Option<Bipartition<V>> {
        let sides = self.sides()?;
        let (left, right): (Vec<V>, Vec<V>) = sides
            .into_iter()
            .enumerate()
            .partition_map(|(u, side)| match side {
                Side::Left => Either::Left(self.label(u).clone()),
                Side::Right => Either::Right(self.label(u).clone()),
            });
        Some(Bipartition { left, right })
    }

    /// Breadth-first colouring of each component in turn, stopping at the first conflict.
    fn sides(&self) -> Option<Vec<Side>> {
        let mut side: Vec<Option<Side>> = vec![None; self.order()];
        let mut queue = VecDeque::new();

        for root in 0..self.order() {
            if side[root].is_some() {
                continue;
            }

            side[root] = Some(Side::Left);
            queue.push_back((root, Side::Left));

            while let Some((u, color)) = queue.pop_front() {
                for &w in self.neighbor_indices(u) {
                    match side[w] {
                        None => {
                            side[w] = Some(color.opposite());
                            queue.push_back((w, color.opposite()));
                        }
                        Some(other) if other == color => {
                            trace!(u, w, "edge joins two vertices of the same colour");
                            return None;
                        }
                        Some(_) => {}
                    }
                }
            }
        }

        side.into_iter().collect()
    }
}
