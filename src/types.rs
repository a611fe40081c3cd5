//! Types and traits for real numbers
use num_traits::{Float, FromPrimitive, ToPrimitive};
use std::fmt::{Debug, Display};
use std::ops::{AddAssign, DivAssign, MulAssign, SubAssign};

/// Floating point type, used throughout this crate for the transforms
pub trait FloatNum:
    Float + FromPrimitive + ToPrimitive + AddAssign + SubAssign + MulAssign + DivAssign
    + Debug + Display + 'static
{
}

impl<T> FloatNum for T where
    T: Float
        + FromPrimitive
        + ToPrimitive
        + AddAssign
        + SubAssign
        + MulAssign
        + DivAssign
        + Debug
        + Display
        + 'static
{
}
