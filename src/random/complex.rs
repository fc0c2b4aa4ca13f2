use crate::random::generator::{Bounded, RandomNumberGenerator, UniformRange};
use num_complex::Complex;
use rand::distributions::Distribution;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Complex numbers whose real and imaginary parts are drawn from `D`.
#[derive(Debug, Clone)]
pub struct RandomComplexGenerator<T = f64, D = UniformRange<T>, G = StdRng> {
    parts: RandomNumberGenerator<T, D, G>,
}

impl<T, D: Distribution<T>, G: Rng + SeedableRng> RandomComplexGenerator<T, D, G> {
    pub fn new(distribution: D) -> Self {
        RandomComplexGenerator {
            parts: RandomNumberGenerator::new(distribution),
        }
    }

    pub fn from_seed(seed: u64, distribution: D) -> Self {
        RandomComplexGenerator {
            parts: RandomNumberGenerator::from_seed(seed, distribution),
        }
    }
}

impl<T, D: Distribution<T>, G: Rng> RandomComplexGenerator<T, D, G> {
    pub fn with_engine(engine: G, distribution: D) -> Self {
        RandomComplexGenerator {
            parts: RandomNumberGenerator::with_engine(engine, distribution),
        }
    }

    /// Real part first, then imaginary part.
    pub fn generate(&mut self) -> Complex<T> {
        let re = self.parts.generate();
        let im = self.parts.generate();
        Complex::new(re, im)
    }

    /// A single draw used for both parts.
    pub fn generate_equal(&mut self) -> Complex<T>
    where
        T: Clone,
    {
        let value = self.parts.generate();
        Complex::new(value.clone(), value)
    }

    pub fn engine(&self) -> &G {
        self.parts.engine()
    }

    pub fn distribution(&self) -> &D {
        self.parts.distribution()
    }

    pub fn swap(&mut self, other: &mut Self) {
        self.parts.swap(&mut other.parts);
    }
}

impl<T: Clone, D: Distribution<T> + Bounded<T>, G: Rng> RandomComplexGenerator<T, D, G> {
    pub fn lower(&self) -> Complex<T> {
        Complex::new(self.parts.lower(), self.parts.lower())
    }

    pub fn upper(&self) -> Complex<T> {
        Complex::new(self.parts.upper(), self.parts.upper())
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_complex() {
        let mut complex: RandomComplexGenerator =
            RandomComplexGenerator::from_seed(11, UniformRange::new(-1.0, 1.0).unwrap());
        assert_eq!(complex.lower(), Complex::new(-1.0, -1.0));
        assert_eq!(complex.upper(), Complex::new(1.0, 1.0));

        for _ in 0..500 {
            let z = complex.generate();
            assert!((-1.0..=1.0).contains(&z.re));
            assert!((-1.0..=1.0).contains(&z.im));
        }

        let z = complex.generate_equal();
        assert_eq!(z.re, z.im);
    }

    #[test]
    fn test_parts_follow_engine_order() {
        let range = UniformRange::new(0i32, 1000).unwrap();
        let mut parts: RandomNumberGenerator<i32> =
            RandomNumberGenerator::from_seed(8, range.clone());
        let mut complex: RandomComplexGenerator<i32> =
            RandomComplexGenerator::with_engine(StdRng::seed_from_u64(8), range);

        let re = parts.generate();
        let im = parts.generate();
        assert_eq!(complex.generate(), Complex::new(re, im));
        assert_eq!(complex.distribution().upper(), 1000);
    }
}
