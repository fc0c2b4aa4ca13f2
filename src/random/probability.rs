use crate::random::generator::{RandomNumberGenerator, UniformRange};
use num_traits::Float;
use rand::distributions::uniform::SampleUniform;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Probabilities uniformly spread over `[0.0, 1.0]`.
#[derive(Debug, Clone)]
pub struct UniformProbabilityGenerator<F: SampleUniform = f64, G = StdRng> {
    generator: RandomNumberGenerator<F, UniformRange<F>, G>,
}

impl<F: Float + SampleUniform, G: Rng + SeedableRng> UniformProbabilityGenerator<F, G> {
    pub fn new() -> Self {
        UniformProbabilityGenerator {
            generator: RandomNumberGenerator::new(UniformRange::unit()),
        }
    }

    pub fn from_seed(seed: u64) -> Self {
        UniformProbabilityGenerator {
            generator: RandomNumberGenerator::from_seed(seed, UniformRange::unit()),
        }
    }
}

impl<F: Float + SampleUniform, G: Rng + SeedableRng> Default for UniformProbabilityGenerator<F, G> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: Float + SampleUniform, G: Rng> UniformProbabilityGenerator<F, G> {
    pub fn with_engine(engine: G) -> Self {
        UniformProbabilityGenerator {
            generator: RandomNumberGenerator::with_engine(engine, UniformRange::unit()),
        }
    }

    pub fn generate(&mut self) -> F {
        self.generator.generate()
    }

    pub fn engine(&self) -> &G {
        self.generator.engine()
    }

    pub fn distribution(&self) -> &UniformRange<F> {
        self.generator.distribution()
    }

    pub fn lower(&self) -> F {
        F::zero()
    }

    pub fn upper(&self) -> F {
        F::one()
    }

    pub fn swap(&mut self, other: &mut Self) {
        self.generator.swap(&mut other.generator);
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::generator::Bounded;

    #[test]
    fn test_probabilities_in_unit_interval() {
        let mut probability: UniformProbabilityGenerator = UniformProbabilityGenerator::new();
        assert_eq!((probability.lower(), probability.upper()), (0.0, 1.0));
        assert_eq!(probability.distribution(), &UniformRange::unit());
        assert_eq!(
            (probability.distribution().lower(), probability.distribution().upper()),
            (0.0, 1.0)
        );
        for _ in 0..1000 {
            let p = probability.generate();
            assert!((0.0..=1.0).contains(&p));
        }
    }

    #[test]
    fn test_seeded_probabilities_repeat() {
        let mut a = UniformProbabilityGenerator::<f32>::from_seed(3);
        let mut b = UniformProbabilityGenerator::<f32>::with_engine(StdRng::seed_from_u64(3));
        for _ in 0..20 {
            assert_eq!(a.generate(), b.generate());
        }

        let mut c = UniformProbabilityGenerator::<f32>::from_seed(4);
        a.swap(&mut c);
        let mut d = UniformProbabilityGenerator::<f32>::from_seed(4);
        assert_eq!(a.generate(), d.generate());
    }
}
