use crate::error::GeneratorError;
use log::{debug, trace};
use num_traits::Float;
use rand::distributions::uniform::SampleUniform;
use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;
use std::marker::PhantomData;

/// Inclusive bounds of the values a distribution can produce.
pub trait Bounded<T> {
    fn lower(&self) -> T;
    fn upper(&self) -> T;
}

/// Bounds a uniform sampler can be built over without overflowing.
pub trait SampleBounds: SampleUniform + PartialOrd + Clone {
    fn sampleable(low: &Self, high: &Self) -> bool;
}

macro_rules! impl_exact_bounds {
    ($($t:ty),*) => {$(
        impl SampleBounds for $t {
            fn sampleable(_low: &Self, _high: &Self) -> bool {
                true
            }
        }
    )*};
}

macro_rules! impl_float_bounds {
    ($($t:ty),*) => {$(
        impl SampleBounds for $t {
            // The sampler scales the width by 1 / (1 - EPSILON)
            fn sampleable(low: &Self, high: &Self) -> bool {
                ((*high - *low) / (1.0 - <$t>::EPSILON)).is_finite()
            }
        }
    )*};
}

impl_exact_bounds!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_float_bounds!(f32, f64);

/// Uniform distribution over `[low, high]`, both ends included.
pub struct UniformRange<T: SampleUniform> {
    low: T,
    high: T,
    uniform: Uniform<T>,
}

impl<T: SampleBounds> UniformRange<T> {
    /// Fails with `InvalidRange` when `low > high`, when either bound is NaN,
    /// or when the width of a float range overflows.
    pub fn new(low: T, high: T) -> Result<Self, GeneratorError> {
        // negated so that NaN bounds fail too
        if !(low <= high) || !T::sampleable(&low, &high) {
            trace!("rejected uniform range");
            return Err(GeneratorError::InvalidRange);
        }
        Ok(UniformRange {
            uniform: Uniform::new_inclusive(low.clone(), high.clone()),
            low,
            high,
        })
    }
}

impl<F: Float + SampleUniform> UniformRange<F> {
    /// `[0.0, 1.0]`
    pub fn unit() -> Self {
        UniformRange {
            low: F::zero(),
            high: F::one(),
            uniform: Uniform::new_inclusive(F::zero(), F::one()),
        }
    }
}

impl<T: SampleUniform> Distribution<T> for UniformRange<T> {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> T {
        self.uniform.sample(rng)
    }
}

// Rebuilds the sampler from bounds that were validated on construction
impl<T: SampleUniform + Clone> Clone for UniformRange<T> {
    fn clone(&self) -> Self {
        UniformRange {
            low: self.low.clone(),
            high: self.high.clone(),
            uniform: Uniform::new_inclusive(self.low.clone(), self.high.clone()),
        }
    }
}

impl<T: SampleUniform + fmt::Debug> fmt::Debug for UniformRange<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UniformRange")
            .field("low", &self.low)
            .field("high", &self.high)
            .finish()
    }
}

impl<T: SampleUniform + PartialEq> PartialEq for UniformRange<T> {
    fn eq(&self, other: &Self) -> bool {
        self.low == other.low && self.high == other.high
    }
}

impl<T: SampleUniform + Clone> Bounded<T> for UniformRange<T> {
    fn lower(&self) -> T {
        self.low.clone()
    }

    fn upper(&self) -> T {
        self.high.clone()
    }
}

/// Draws values of type `T` from a distribution `D` using the engine `G`.
#[derive(Debug, Clone)]
pub struct RandomNumberGenerator<T, D = UniformRange<T>, G = StdRng> {
    engine: G,
    distribution: D,
    _values: PhantomData<fn() -> T>,
}

impl<T, D: Distribution<T>, G: Rng + SeedableRng> RandomNumberGenerator<T, D, G> {
    /// Engine seeded from operating system entropy.
    pub fn new(distribution: D) -> Self {
        debug!("seeding random number generator from entropy");
        Self::with_engine(G::from_entropy(), distribution)
    }

    pub fn from_seed(seed: u64, distribution: D) -> Self {
        debug!("seeding random number generator with {}", seed);
        Self::with_engine(G::seed_from_u64(seed), distribution)
    }
}

impl<T, D: Distribution<T>, G: Rng> RandomNumberGenerator<T, D, G> {
    pub fn with_engine(engine: G, distribution: D) -> Self {
        RandomNumberGenerator {
            engine,
            distribution,
            _values: PhantomData,
        }
    }

    pub fn generate(&mut self) -> T {
        self.distribution.sample(&mut self.engine)
    }

    pub fn sample_n(&mut self, n: usize) -> Vec<T> {
        (0..n).map(|_| self.generate()).collect()
    }

    pub fn engine(&self) -> &G {
        &self.engine
    }

    pub fn distribution(&self) -> &D {
        &self.distribution
    }

    pub fn swap(&mut self, other: &mut Self) {
        std::mem::swap(&mut self.engine, &mut other.engine);
        std::mem::swap(&mut self.distribution, &mut other.distribution);
    }
}

impl<T, D: Distribution<T> + Bounded<T>, G: Rng> RandomNumberGenerator<T, D, G> {
    pub fn lower(&self) -> T {
        self.distribution.lower()
    }

    pub fn upper(&self) -> T {
        self.distribution.upper()
    }
}

impl<T: SampleBounds> RandomNumberGenerator<T> {
    /// Entropy-seeded generator of values uniformly spread over `[low, high]`.
    pub fn uniform(low: T, high: T) -> Result<Self, GeneratorError> {
        Ok(Self::new(UniformRange::new(low, high)?))
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
