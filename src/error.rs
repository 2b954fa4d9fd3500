//! Error types.
//!
//! Building and querying a graph never fails. The only fallible operation is an
//! isomorphism search run with a permutation budget.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The search tried `limit` permutations without reaching a verdict
    #[error("isomorphism search gave up after {limit} permutations")]
    SearchLimitExceeded { limit: u64 },
}
