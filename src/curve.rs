//! Ordered `(x, y)` curves: transformed profiles and reference lines
use crate::error::{Error, Result};
use ndarray::{s, Array1, ArrayBase, Data, Ix1};

/// Ordered sequence of `(x, y)` pairs
#[derive(Debug, Clone, PartialEq)]
pub struct Curve {
    /// Abscissa (wall distance in some scaling)
    pub x: Array1<f64>,
    /// Ordinate (velocity in some scaling)
    pub y: Array1<f64>,
}

impl Curve {
    /// Return a new curve
    ///
    /// # Errors
    /// `x` and `y` differ in length
    pub fn new<S1, S2>(x: &ArrayBase<S1, Ix1>, y: &ArrayBase<S2, Ix1>) -> Result<Self>
    where
        S1: Data<Elem = f64>,
        S2: Data<Elem = f64>,
    {
        if x.len() != y.len() {
            return Err(Error::ShapeMismatch {
                context: "curve",
                name: "y",
                expected: x.len(),
                found: y.len(),
            });
        }
        Ok(Self {
            x: x.to_owned(),
            y: y.to_owned(),
        })
    }

    /// Number of points
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// True if the curve has no points
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Every `step`-th point, starting with the first
    pub fn every(&self, step: usize) -> Self {
        let step = step.max(1) as isize;
        Self {
            x: self.x.slice(s![..;step]).to_owned(),
            y: self.y.slice(s![..;step]).to_owned(),
        }
    }

    /// Points that can be placed on a logarithmic x-axis (`x > 0`)
    pub fn log_x_points(&self) -> Vec<(f64, f64)> {
        self.x
            .iter()
            .zip(self.y.iter())
            .filter(|(x, _)| **x > 0.)
            .map(|(x, y)| (*x, *y))
            .collect()
    }

    /// Largest absolute difference between the ordinates of two
    /// curves sampled at the same rows.
    ///
    /// # Errors
    /// Curves differ in length
    pub fn max_deviation(&self, other: &Curve) -> Result<f64> {
        if self.len() != other.len() {
            return Err(Error::ShapeMismatch {
                context: "curve deviation",
                name: "other",
                expected: self.len(),
                found: other.len(),
            });
        }
        Ok(self
            .y
            .iter()
            .zip(other.y.iter())
            .map(|(a, b)| (a - b).abs())
            .fold(0., f64::max))
    }
}
