//! Brute-force isomorphism testing.
//!
//! The search tries every permutation of the vertex set, so it takes factorial time in the
//! number of vertices. It is a reference algorithm: ten vertices already mean millions of
//! candidate bijections. The nogood checks reject pairs of graphs with different vertex
//! counts, edge counts or degree sequences before any permutation is tried, but two graphs
//! that pass them are searched exhaustively. Use [`IsomorphismSearch::max_permutations`]
//! to bound the work.
use std::hash::Hash;

use tracing::debug;

use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::permutation::Permutation;

/// A bijection between the vertices of two graphs that preserves adjacency.
#[derive(Clone, PartialEq, Debug)]
pub struct Isomorphism<V, W = V> {
    /// `pairs[i]` maps the `i`-th vertex of the source graph
    pairs: Vec<(V, W)>,
    permutation: Permutation,
}

impl<V: Eq + Hash + Clone> Isomorphism<V, V> {
    /// The isomorphism from a graph to itself that fixes every vertex.
    pub fn identity(graph: &Graph<V>) -> Self {
        Self::from_permutation(graph, graph, Permutation::identity(graph.vertex_count()))
    }
}

impl<V: Eq + Hash + Clone, W: Eq + Hash + Clone> Isomorphism<V, W> {
    /// Find an isomorphism from `f` to `g`, trying permutations in lexicographic order.
    ///
    /// Runs in factorial time; see the [module documentation](crate::isomorphism).
    pub fn new(f: &Graph<V>, g: &Graph<W>) -> Option<Self> {
        IsomorphismSearch::new().run(f, g).ok().flatten()
    }

    fn from_permutation(f: &Graph<V>, g: &Graph<W>, permutation: Permutation) -> Self {
        let pairs = (0..f.order())
            .map(|u| (f.label(u).clone(), g.label(permutation.apply(u)).clone()))
            .collect();
        Self { pairs, permutation }
    }

    /// Image of `vertex`, or `None` if it is not a vertex of the source graph.
    pub fn map(&self, vertex: &V) -> Option<&W> {
        self.pairs
            .iter()
            .find(|(source, _)| source == vertex)
            .map(|(_, target)| target)
    }

    /// `(source, target)` pairs in the vertex order of the source graph.
    pub fn pairs(&self) -> &[(V, W)] {
        &self.pairs
    }

    /// The bijection in terms of vertex positions: the `i`-th vertex of the source graph maps
    /// to the `permutation[i]`-th vertex of the target graph.
    pub fn permutation(&self) -> &Permutation {
        &self.permutation
    }
}

/// Configuration for an isomorphism search.
///
/// By default the search is unbounded and always runs to completion.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IsomorphismSearch {
    max_permutations: Option<u64>,
}

impl IsomorphismSearch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Give up with [`Error::SearchLimitExceeded`] once `limit` permutations have been tried
    /// without finding an isomorphism.
    pub fn max_permutations(mut self, limit: u64) -> Self {
        self.max_permutations = Some(limit);
        self
    }

    /// Search for an isomorphism from `f` to `g`.
    ///
    /// Returns `Ok(None)` when the graphs are not isomorphic. Permutations are tried in
    /// lexicographic order, so a graph compared with itself yields the identity first.
    pub fn run<V, W>(&self, f: &Graph<V>, g: &Graph<W>) -> Result<Option<Isomorphism<V, W>>>
    where
        V: Eq + Hash + Clone,
        W: Eq + Hash + Clone,
    {
        crate::nogood::nogood(f, g).map_or(Ok(None), |()| self.search(f, g))
    }

    fn search<V, W>(&self, f: &Graph<V>, g: &Graph<W>) -> Result<Option<Isomorphism<V, W>>>
    where
        V: Eq + Hash + Clone,
        W: Eq + Hash + Clone,
    {
        let n = f.order();
        if n == 0 {
            return Ok(Some(Isomorphism::from_permutation(
                f,
                g,
                Permutation::identity(0),
            )));
        }

        let mut tried: u64 = 0;
        for permutation in Permutation::all(n) {
            if self.max_permutations == Some(tried) {
                debug!(tried, vertices = n, "isomorphism search hit its permutation limit");
                return Err(Error::SearchLimitExceeded { limit: tried });
            }
            tried += 1;

            if preserves_adjacency(f, g, &permutation) {
                debug!(tried, vertices = n, "found isomorphism");
                return Ok(Some(Isomorphism::from_permutation(f, g, permutation)));
            }
        }

        debug!(tried, vertices = n, "no permutation preserves adjacency");
        Ok(None)
    }
}

/// Whether mapping the `u`-th vertex of `f` to the `permutation[u]`-th vertex of `g` sends
/// every neighbourhood of `f` exactly onto the corresponding neighbourhood of `g`.
fn preserves_adjacency<V, W>(f: &Graph<V>, g: &Graph<W>, permutation: &Permutation) -> bool {
    (0..f.order()).all(|u| {
        let source = f.neighbor_indices(u);
        let target = g.neighbor_indices(permutation.apply(u));
        source.len() == target.len() && source.iter().all(|&w| target.contains(&permutation[w]))
    })
}

impl<V: Eq + Hash + Clone> Graph<V> {
    /// Whether some bijection of the vertices maps this graph exactly onto `other`.
    ///
    /// Graphs with different vertex counts are rejected immediately. Otherwise this may try
    /// all `n!` bijections; see the [`isomorphism`](crate::isomorphism) module.
    pub fn is_isomorphic<W: Eq + Hash + Clone>(&self, other: &Graph<W>) -> bool {
        Isomorphism::new(self, other).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cycle(n: u32) -> Graph<u32> {
        Graph::new((0..n).map(|u| (u, (u + 1) % n)))
    }

    fn assert_is_isomorphism<V, W>(f: &Graph<V>, g: &Graph<W>, iso: &Isomorphism<V, W>)
    where
        V: Eq + Hash + Clone + std::fmt::Debug,
        W: Eq + Hash + Clone + std::fmt::Debug,
    {
        assert_eq!(iso.pairs().len(), f.vertex_count());
        for (u, v) in f.edges() {
            let (mu, mv) = (iso.map(u).unwrap(), iso.map(v).unwrap());
            assert!(
                g.neighbors(mu).unwrap().any(|w| w == mv),
                "edge {u:?}-{v:?} is not mapped onto an edge"
            );
        }
    }

    #[test]
    fn test_find_identity_isomorphism() {
        let g = Graph::new([("A", "B"), ("B", "C"), ("C", "A"), ("C", "D")]);
        let iso = Isomorphism::new(&g, &g).expect("a graph is isomorphic to itself");
        assert_eq!(iso, Isomorphism::identity(&g));
        assert_eq!(iso.permutation(), &Permutation::identity(4));
    }

    #[test]
    fn test_find_relabelling() {
        // path a - b - c - d written in a scrambled order with other labels
        let f = Graph::new([("a", "b"), ("b", "c"), ("c", "d")]);
        let g = Graph::new([(30, 10), (10, 40), (20, 30)]);

        let iso = Isomorphism::new(&f, &g).expect("both are paths on four vertices");
        assert_is_isomorphism(&f, &g, &iso);

        let endpoints = [iso.map(&"a").unwrap(), iso.map(&"d").unwrap()];
        assert!(endpoints.contains(&&20) && endpoints.contains(&&40));
    }

    #[test]
    fn test_rotated_cycle() {
        let f = cycle(6);
        let g = Graph::new((0..6u32).map(|u| ((u * 5) % 6, (u * 5 + 5) % 6)));
        assert!(f.is_isomorphic(&g));
        assert!(g.is_isomorphic(&f));
    }

    #[test]
    fn test_same_degrees_not_isomorphic() {
        // a 6-cycle and two triangles are both 2-regular on six vertices
        let two_triangles = Graph::new([(0, 1), (1, 2), (2, 0), (3, 4), (4, 5), (5, 3)]);
        assert!(!cycle(6).is_isomorphic(&two_triangles));
        assert!(!two_triangles.is_isomorphic(&cycle(6)));
    }

    #[test]
    fn test_vertex_count_short_circuit() {
        assert!(!cycle(4).is_isomorphic(&cycle(5)));
        let search = IsomorphismSearch::new().max_permutations(0);
        assert_eq!(search.run(&cycle(4), &cycle(5)), Ok(None));
    }

    #[test]
    fn test_empty_graphs() {
        let empty: Graph<u8> = Graph::default();
        let iso = Isomorphism::new(&empty, &empty).unwrap();
        assert!(iso.pairs().is_empty());
        assert!(!empty.is_isomorphic(&Graph::new([(1u8, 2u8)])));
    }

    #[test]
    fn test_self_loops_must_match() {
        let f = Graph::new([(0, 0), (0, 1)]);
        let g = Graph::new([(0, 1), (1, 1)]);
        let h = Graph::new([(0, 1), (1, 2)]);
        assert!(f.is_isomorphic(&g));
        assert!(!f.is_isomorphic(&h));
    }

    #[test]
    fn test_search_limit() {
        let f = cycle(6);
        let two_triangles = Graph::new([(0, 1), (1, 2), (2, 0), (3, 4), (4, 5), (5, 3)]);

        let bounded = IsomorphismSearch::new().max_permutations(10);
        assert_eq!(
            bounded.run(&f, &two_triangles),
            Err(Error::SearchLimitExceeded { limit: 10 })
        );

        let unbounded = IsomorphismSearch::new();
        assert_eq!(unbounded.run(&f, &two_triangles), Ok(None));
    }

    #[test]
    fn test_search_limit_large_enough() {
        let f = cycle(5);
        let g = Graph::new([(4, 2), (2, 0), (0, 3), (3, 1), (1, 4)]);
        let found = IsomorphismSearch::new()
            .max_permutations(120)
            .run(&f, &g)
            .unwrap()
            .expect("pentagons are isomorphic");
        assert_is_isomorphism(&f, &g, &found);
    }
}
