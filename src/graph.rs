//! Immutable undirected graphs over arbitrary hashable vertex labels.
//!
//! Vertices are numbered `0..n` in the order they first appear in the edge list, and every
//! query that depends on "iteration order" uses that numbering. Neighbourhoods are kept as
//! ordered sets of vertex numbers, so repeated edges collapse and traversals are
//! reproducible.
use std::collections::{BTreeSet, HashMap};
use std::hash::Hash;

/// An undirected graph built once from a list of edges.
///
/// Self-loops are stored literally: the edge `(a, a)` puts `a` into its own neighbourhood
/// and contributes one to its degree.
#[derive(Clone, Debug)]
pub struct Graph<V> {
    labels: Vec<V>,
    index: HashMap<V, usize>,
    adjacency: Vec<BTreeSet<usize>>,
}

impl<V> Default for Graph<V> {
    fn default() -> Self {
        Self {
            labels: Vec::new(),
            index: HashMap::new(),
            adjacency: Vec::new(),
        }
    }
}

// Two graphs are equal when they have the same vertices, in the same order, with the same
// edges. Isomorphic graphs with a different vertex order compare unequal.
impl<V: PartialEq> PartialEq for Graph<V> {
    fn eq(&self, other: &Self) -> bool {
        self.labels == other.labels && self.adjacency == other.adjacency
    }
}

impl<V: Eq> Eq for Graph<V> {}

impl<V: Eq + Hash + Clone> Graph<V> {
    /// Build a graph from undirected edges `(u, v)`.
    ///
    /// Unseen vertices are created on the fly and duplicate edges are absorbed. Any input,
    /// including an empty one, produces a valid graph.
    pub fn new(edges: impl IntoIterator<Item = (V, V)>) -> Self {
        let mut graph = Self::default();
        for (u, v) in edges {
            let u = graph.intern(u);
            let v = graph.intern(v);
            graph.adjacency[u].insert(v);
            graph.adjacency[v].insert(u);
        }
        graph
    }

    fn intern(&mut self, label: V) -> usize {
        if let Some(&i) = self.index.get(&label) {
            return i;
        }

        let i = self.labels.len();
        self.index.insert(label.clone(), i);
        self.labels.push(label);
        self.adjacency.push(BTreeSet::new());
        i
    }

    pub fn vertex_count(&self) -> usize {
        self.labels.len()
    }

    /// Number of distinct undirected edges. A self-loop counts once.
    pub fn edge_count(&self) -> usize {
        self.adjacency
            .iter()
            .enumerate()
            .map(|(u, neighbors)| neighbors.range(u..).count())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Vertices in first-appearance order.
    pub fn vertices(&self) -> impl ExactSizeIterator<Item = &V> + '_ {
        self.labels.iter()
    }

    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.index.contains_key(vertex)
    }

    /// Neighbours of `vertex` in vertex order, or `None` if it is not in the graph.
    pub fn neighbors(&self, vertex: &V) -> Option<impl Iterator<Item = &V> + '_> {
        let &u = self.index.get(vertex)?;
        Some(self.adjacency[u].iter().map(|&w| &self.labels[w]))
    }

    /// Size of the neighbourhood of `vertex`, or `None` if it is not in the graph.
    pub fn degree(&self, vertex: &V) -> Option<usize> {
        self.index.get(vertex).map(|&u| self.adjacency[u].len())
    }

    /// Every undirected edge exactly once, ordered by its first endpoint.
    pub fn edges(&self) -> impl Iterator<Item = (&V, &V)> + '_ {
        self.adjacency.iter().enumerate().flat_map(move |(u, neighbors)| {
            neighbors
                .range(u..)
                .map(move |&w| (&self.labels[u], &self.labels[w]))
        })
    }

    /// A graph on `n` vertices is complete if every vertex has `n - 1` neighbours.
    ///
    /// The empty graph is vacuously complete.
    pub fn is_complete(&self) -> bool {
        let n = self.vertex_count();
        self.adjacency
            .iter()
            .all(|neighbors| neighbors.len() + 1 == n)
    }

    /// Whether every vertex has even degree.
    ///
    /// This is the degree half of the Eulerian circuit condition; connectivity is not
    /// checked here.
    pub fn all_degrees_even(&self) -> bool {
        self.adjacency
            .iter()
            .all(|neighbors| neighbors.len() % 2 == 0)
    }
}

impl<V: Eq + Hash + Clone> FromIterator<(V, V)> for Graph<V> {
    fn from_iter<I: IntoIterator<Item = (V, V)>>(iter: I) -> Self {
        Self::new(iter)
    }
}

// Index-based access for the algorithm modules.
impl<V> Graph<V> {
    pub(crate) fn order(&self) -> usize {
        self.labels.len()
    }

    pub(crate) fn label(&self, u: usize) -> &V {
        &self.labels[u]
    }

    pub(crate) fn neighbor_indices(&self, u: usize) -> &BTreeSet<usize> {
        &self.adjacency[u]
    }

    pub(crate) fn degree_of(&self, u: usize) -> usize {
        self.adjacency[u].len()
    }

    pub(crate) fn degree_sequence(&self) -> Vec<usize> {
        self.adjacency.iter().map(BTreeSet::len).collect()
    }
}
