use std::ops::Deref;

use itertools::Itertools;

/// A bijection on `0..n`, stored as the list of images.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Permutation(Vec<usize>);

impl Permutation {
    /// Validate `values` as a permutation: every number in `0..values.len()` exactly once.
    pub fn new(values: impl IntoIterator<Item = usize>) -> Option<Self> {
        let vec: Vec<usize> = values.into_iter().collect();

        let mut seen = vec![false; vec.len()];
        for &value in &vec {
            if value >= vec.len() || seen[value] {
                return None;
            }
            seen[value] = true;
        }

        Some(Self(vec))
    }

    pub fn identity(size: usize) -> Self {
        Self((0..size).collect())
    }

    /// Every permutation of `0..size`, in lexicographic order starting with the identity.
    ///
    /// There are `size!` of them.
    pub fn all(size: usize) -> impl Iterator<Item = Permutation> {
        (0..size).permutations(size).map(Permutation)
    }

    /// Image of `i`. Panics if `i` is out of range.
    pub fn apply(&self, i: usize) -> usize {
        self.0[i]
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }
}

impl Deref for Permutation {
    type Target = [usize];

    fn deref(&self) -> &[usize] {
        &self.0
    }
}
