use std::hash::Hash;

use itertools::Itertools;
use tracing::debug;

use crate::graph::Graph;

/// Cheap necessary conditions for `f` and `g` to be isomorphic: equal vertex count, equal
/// edge count and equal degree multiset. Returns `None` if one of them fails.
pub(crate) fn nogood<V: Eq + Hash + Clone, W: Eq + Hash + Clone>(
    f: &Graph<V>,
    g: &Graph<W>,
) -> Option<()> {
    if f.vertex_count() != g.vertex_count() {
        debug!(
            f_vertices = f.vertex_count(),
            g_vertices = g.vertex_count(),
            "vertex counts differ"
        );
        return None;
    }

    if f.edge_count() != g.edge_count() {
        debug!(
            f_edges = f.edge_count(),
            g_edges = g.edge_count(),
            "edge counts differ"
        );
        return None;
    }

    if !is_sorted_equal(&f.degree_sequence(), &g.degree_sequence()) {
        debug!("degree sequences differ");
        return None;
    }

    Some(())
}

/// Check that two slices are equal once sorted (exact length and elements)
fn is_sorted_equal<T: Eq + Hash>(x: &[T], y: &[T]) -> bool {
    x.len() == y.len() && x.iter().counts() == y.iter().counts()
}
