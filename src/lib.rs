pub mod matrix {
    pub mod element;
    pub mod fixed_matrix;
}
pub mod random {
    pub mod complex;
    pub mod generator;
    pub mod probability;
    pub mod triangular;
}

pub mod error;

pub use error::{GeneratorError, MatrixError};
pub use matrix::element::Scalar;
pub use matrix::fixed_matrix::{from_source, make_identity, FixedMatrix};
pub use random::complex::RandomComplexGenerator;
pub use random::generator::{Bounded, RandomNumberGenerator, SampleBounds, UniformRange};
pub use random::probability::UniformProbabilityGenerator;
pub use random::triangular::DiscreteTriangular;
