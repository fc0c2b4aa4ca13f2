use crate::error::GeneratorError;
use crate::random::generator::Bounded;
use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;

/// Integers in `[0, n)` with linearly growing or shrinking weights.
///
/// Ascending weights are `0, 1, ..., n - 1`, so `0` is never produced.
/// Descending weights are `n, n - 1, ..., 1`.
#[derive(Debug, Clone)]
pub struct DiscreteTriangular {
    weights: Vec<u64>,
    index: WeightedIndex<u64>,
}

impl DiscreteTriangular {
    pub fn new(n: usize, ascending: bool) -> Result<Self, GeneratorError> {
        let n = n as u64;
        let weights: Vec<u64> = if ascending {
            (0..n).collect()
        } else {
            (1..=n).rev().collect()
        };
        let index = WeightedIndex::new(&weights)?;

        Ok(DiscreteTriangular { weights, index })
    }

    pub fn weights(&self) -> &[u64] {
        &self.weights
    }

    pub fn probabilities(&self) -> Vec<f64> {
        let total: u64 = self.weights.iter().sum();
        self.weights
            .iter()
            .map(|w| *w as f64 / total as f64)
            .collect()
    }
}

impl Distribution<usize> for DiscreteTriangular {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        self.index.sample(rng)
    }
}

impl Bounded<usize> for DiscreteTriangular {
    fn lower(&self) -> usize {
        0
    }

    fn upper(&self) -> usize {
        self.weights.len() - 1
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
