//! # Van Driest velocity transformation
//!
//! $$
//! u^{vD} = \int_0^{u^+} \sqrt{\frac{\rho}{\rho_w}} du^+
//! $$
//!
//! The integral is evaluated as a cumulative sum over the profile,
//! averaging the density between neighbouring samples.
use super::check_len;
use crate::error::{Error, Result};
use crate::types::FloatNum;
use ndarray::{Array1, ArrayBase, Data, Ix1};

const CONTEXT: &str = "van Driest transform";

/// Van Driest transform of the inner-scaled velocity `u`.
///
/// # Input
///   *u*: Mean velocity (inner-scaled), row 0 at the wall
///
///   *r*: Density
///
///   *re_tau*: Friction Reynolds number
///
///   *y*: Wall distance
///
/// # Return
/// `(ypl, uvd)`, the inner-scaled wall distance `y * re_tau`
/// and the transformed velocity, with `uvd[0] = 0`.
///
/// # Errors
/// Arrays of different length, an empty profile, or a density
/// sample that is not strictly positive.
///
/// # Example
///```
/// use ndarray::array;
/// use velotrans::transform::van_driest;
/// let y = array![0., 1., 2.];
/// let r = array![1., 1., 1.];
/// let u = array![0., 1., 3.];
/// let (ypl, uvd) = van_driest(&u, &r, 100., &y).unwrap();
/// assert_eq!(ypl, array![0., 100., 200.]);
/// assert_eq!(uvd, array![0., 1., 3.]);
///```
pub fn van_driest<A, S1, S2, S3>(
    u: &ArrayBase<S1, Ix1>,
    r: &ArrayBase<S2, Ix1>,
    re_tau: A,
    y: &ArrayBase<S3, Ix1>,
) -> Result<(Array1<A>, Array1<A>)>
where
    A: FloatNum,
    S1: Data<Elem = A>,
    S2: Data<Elem = A>,
    S3: Data<Elem = A>,
{
    let n = u.len();
    if n == 0 {
        return Err(Error::EmptyProfile(CONTEXT));
    }
    check_len(CONTEXT, "density", n, r.len())?;
    check_len(CONTEXT, "wall distance", n, y.len())?;

    // also catches NaN
    if let Some(i) = r.iter().position(|v| !(*v > A::zero())) {
        return Err(Error::domain(
            CONTEXT,
            i,
            format!("density {} is not positive", r[i]),
        ));
    }

    let r_wall = r[0];
    let two = A::one() + A::one();
    let ypl = y.mapv(|v| v * re_tau);
    let mut uvd = Array1::<A>::zeros(n);
    for i in 1..n {
        let ratio = (r[i] + r[i - 1]) / two / r_wall;
        uvd[i] = uvd[i - 1] + ratio.sqrt() * (u[i] - u[i - 1]);
    }
    Ok((ypl, uvd))
}
