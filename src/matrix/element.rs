use num_traits::{One, Zero};
use std::ops::{Add, Mul, Sub};

pub trait Scalar:  // Avoid repeating all the traits
    Clone
    + Zero
    + One
    + PartialEq
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + std::fmt::Debug
{
}

impl<T> Scalar for T where
    T: Clone
        + Zero
        + One
        + PartialEq
        + Add<Output = T>
        + Sub<Output = T>
        + Mul<Output = T>
        + std::fmt::Debug
{
}
