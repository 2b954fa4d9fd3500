//! Structural analysis of small undirected graphs.
//!
//! A [`Graph`] is built once from a list of edges over any hashable vertex label and then
//! answers questions about its structure: connected components, completeness, cycles,
//! bipartiteness, even degrees, Eulerian circuits and isomorphism with another graph.
//!
//! ```
//! use graph_analysis::Graph;
//!
//! let triangle = Graph::new([("A", "B"), ("B", "C"), ("A", "C")]);
//! assert!(triangle.is_complete());
//! assert!(triangle.has_cycle());
//! assert!(!triangle.is_bipartite());
//! assert!(triangle.has_eulerian_circuit());
//! ```
//!
//! Vertices are ordered by first appearance in the edge list, which makes every result
//! deterministic. The isomorphism test is a brute-force search over all vertex
//! permutations and is only practical for a handful of vertices.
pub mod bipartite;
pub mod error;
pub mod graph;
pub mod isomorphism;
pub mod permutation;

mod connectivity;
// cheap rejections before an isomorphism search
mod nogood;
mod traversal;

pub use bipartite::Bipartition;
pub use error::{Error, Result};
pub use graph::Graph;
pub use isomorphism::{Isomorphism, IsomorphismSearch};
pub use permutation::Permutation;
