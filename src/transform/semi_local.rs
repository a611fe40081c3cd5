//! # Semi-local velocity transformation
//!
//! $$
//! u^\star = \int_0^{u^{vD}} \left[1 + \frac{y}{Re_\tau^\star}\frac{dRe_\tau^\star}{dy} \right] du^{vD}
//! $$
//!
//! with the local friction Reynolds number
//! $$
//! Re_\tau^\star = Re_\tau \sqrt{\rho/\rho_w} / (\mu/\mu_w)
//! $$
//!
//! The derivative of `Re_tau^star` is a first order forward difference
//! on the profile, with the wall value `(y = 0, Re_tau)` prepended.
use super::check_len;
use super::van_driest::van_driest;
use crate::error::{Error, Result};
use crate::types::FloatNum;
use ndarray::{Array1, ArrayBase, Data, Ix1};

const CONTEXT: &str = "semi-local transform";

/// Intermediate quantities of the semi-local transform, one entry
/// per profile sample.
#[derive(Debug, Clone, PartialEq)]
pub struct SemiLocalFactors<A> {
    /// Local friction Reynolds number
    pub re_tau_star: Array1<A>,
    /// Wall-normal derivative of `re_tau_star`
    pub d_re_tau_star_dy: Array1<A>,
    /// Correction factor `1 + y / re_tau_star * d_re_tau_star_dy`
    pub fact: Array1<A>,
}

/// Local friction Reynolds number, its derivative and the
/// correction factor of the semi-local transform.
///
/// # Errors
/// Arrays of different length, an empty profile, a density sample that
/// is not strictly positive, zero viscosity, a vanishing `re_tau_star`
/// or non increasing wall distances.
pub fn semi_local_factors<A, S1, S2, S3>(
    r: &ArrayBase<S1, Ix1>,
    mu: &ArrayBase<S2, Ix1>,
    re_tau: A,
    y: &ArrayBase<S3, Ix1>,
) -> Result<SemiLocalFactors<A>>
where
    A: FloatNum,
    S1: Data<Elem = A>,
    S2: Data<Elem = A>,
    S3: Data<Elem = A>,
{
    let n = r.len();
    if n == 0 {
        return Err(Error::EmptyProfile(CONTEXT));
    }
    check_len(CONTEXT, "viscosity", n, mu.len())?;
    check_len(CONTEXT, "wall distance", n, y.len())?;

    // also catches NaN
    if let Some(i) = r.iter().position(|v| !(*v > A::zero())) {
        return Err(Error::domain(
            CONTEXT,
            i,
            format!("density {} is not positive", r[i]),
        ));
    }
    let (r_wall, mu_wall) = (r[0], mu[0]);
    if mu_wall.is_zero() {
        return Err(Error::domain(CONTEXT, 0, "wall viscosity is zero"));
    }

    let mut re_tau_star = Array1::<A>::zeros(n);
    for i in 0..n {
        let ratio = r[i] / r_wall;
        if mu[i].is_zero() {
            return Err(Error::domain(CONTEXT, i, "viscosity is zero"));
        }
        let rts = re_tau * ratio.sqrt() / (mu[i] / mu_wall);
        if rts.is_zero() || !rts.is_finite() {
            return Err(Error::domain(
                CONTEXT,
                i,
                format!("local friction Reynolds number is {}", rts),
            ));
        }
        re_tau_star[i] = rts;
    }

    let mut d_re_tau_star_dy = Array1::<A>::zeros(n);
    let mut fact = Array1::<A>::zeros(n);
    let (mut y_prev, mut rts_prev) = (A::zero(), re_tau);
    for i in 0..n {
        let dy = y[i] - y_prev;
        let drts = re_tau_star[i] - rts_prev;
        // A sample at the wall coincides with the prepended wall value,
        // where re_tau_star equals re_tau. Its correction term vanishes with y.
        let deriv = if i == 0 && dy.is_zero() {
            A::zero()
        } else if dy > A::zero() {
            drts / dy
        } else {
            return Err(Error::domain(
                CONTEXT,
                i,
                format!("wall distance is not increasing (spacing {})", dy),
            ));
        };
        d_re_tau_star_dy[i] = deriv;
        fact[i] = A::one() + y[i] / re_tau_star[i] * deriv;
        y_prev = y[i];
        rts_prev = re_tau_star[i];
    }

    Ok(SemiLocalFactors {
        re_tau_star,
        d_re_tau_star_dy,
        fact,
    })
}

/// Semi-local transform of the inner-scaled velocity `u`.
///
/// # Input
///   *u*: Mean velocity (inner-scaled), row 0 at the wall
///
///   *r*: Density
///
///   *mu*: Dynamic viscosity
///
///   *re_tau*: Friction Reynolds number
///
///   *y*: Wall distance
///
/// # Return
/// `(ystar, ustar)`, the semi-locally scaled wall distance
/// `y * re_tau_star` and the transformed velocity, with `ustar[0] = 0`.
///
/// # Errors
/// See [`semi_local_factors`] and [`van_driest`].
///
/// # Example
///```
/// use ndarray::array;
/// use velotrans::transform::semi_local;
/// let y = array![0., 1., 2.];
/// let r = array![1., 1., 1.];
/// let mu = array![1., 1., 1.];
/// let u = array![0., 1., 3.];
/// let (ystar, ustar) = semi_local(&u, &r, &mu, 100., &y).unwrap();
/// assert_eq!(ystar, array![0., 100., 200.]);
/// assert_eq!(ustar, array![0., 1., 3.]);
///```
pub fn semi_local<A, S1, S2, S3, S4>(
    u: &ArrayBase<S1, Ix1>,
    r: &ArrayBase<S2, Ix1>,
    mu: &ArrayBase<S3, Ix1>,
    re_tau: A,
    y: &ArrayBase<S4, Ix1>,
) -> Result<(Array1<A>, Array1<A>)>
where
    A: FloatNum,
    S1: Data<Elem = A>,
    S2: Data<Elem = A>,
    S3: Data<Elem = A>,
    S4: Data<Elem = A>,
{
    let n = u.len();
    if n == 0 {
        return Err(Error::EmptyProfile(CONTEXT));
    }
    check_len(CONTEXT, "density", n, r.len())?;

    let factors = semi_local_factors(r, mu, re_tau, y)?;
    let fact = &factors.fact;
    let ystar = y * &factors.re_tau_star;
    let (_, uvd) = van_driest(u, r, re_tau, y)?;

    let two = A::one() + A::one();
    let mut ustar = Array1::<A>::zeros(n);
    for i in 1..n {
        ustar[i] = ustar[i - 1] + (fact[i] + fact[i - 1]) / two * (uvd[i] - uvd[i - 1]);
    }
    Ok((ystar, ustar))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{array, Array1};
    use ndarray_rand::rand_distr::Uniform;
    use ndarray_rand::RandomExt;

    fn approx_eq(result: &Array1<f64>, expected: &Array1<f64>) {
        let dif = 1e-10;
        assert_eq!(result.len(), expected.len());
        for (a, b) in expected.iter().zip(result.iter()) {
            if (a - b).abs() > dif {
                panic!("Large difference of values, got {} expected {}.", b, a)
            }
        }
    }

    fn random_profile(n: usize) -> (Array1<f64>, Array1<f64>, Array1<f64>, Array1<f64>) {
        let y = Array1::linspace(0., 1., n);
        let r: Array1<f64> = Array1::random(n, Uniform::new(0.5, 1.5));
        let mu: Array1<f64> = Array1::random(n, Uniform::new(0.5, 1.5));
        let incr: Array1<f64> = Array1::random(n, Uniform::new(0.0, 1.0));
        let mut u = Array1::<f64>::zeros(n);
        for i in 1..n {
            u[i] = u[i - 1] + incr[i];
        }
        (u, r, mu, y)
    }

    #[test]
    fn test_semi_local_channel() {
        let y = array![0., 1., 2.];
        let r = array![1., 1., 1.];
        let mu = array![1., 1., 1.];
        let u = array![0., 1., 3.];
        let factors = semi_local_factors(&r, &mu, 100., &y).unwrap();
        assert_eq!(factors.re_tau_star, array![100., 100., 100.]);
        assert_eq!(factors.fact, array![1., 1., 1.]);
        let (ystar, ustar) = semi_local(&u, &r, &mu, 100., &y).unwrap();
        assert_eq!(ystar, array![0., 100., 200.]);
        assert_eq!(ustar, array![0., 1., 3.]);
    }

    #[test]
    fn test_semi_local_constant_properties() {
        let n = 50;
        let (u, _, _, y) = random_profile(n);
        let r = Array1::from_elem(n, 1.3);
        let mu = Array1::from_elem(n, 0.2);
        let factors = semi_local_factors(&r, &mu, 395., &y).unwrap();
        approx_eq(&factors.re_tau_star, &Array1::from_elem(n, 395.));
        approx_eq(&factors.d_re_tau_star_dy, &Array1::zeros(n));
        approx_eq(&factors.fact, &Array1::ones(n));
        let (_, ustar) = semi_local(&u, &r, &mu, 395., &y).unwrap();
        let (_, uvd) = van_driest(&u, &r, 395., &y).unwrap();
        approx_eq(&ustar, &uvd);
    }

    #[test]
    fn test_semi_local_scaling_identity() {
        let n = 50;
        let (u, r, mu, y) = random_profile(n);
        let factors = semi_local_factors(&r, &mu, 180., &y).unwrap();
        let (ystar, _) = semi_local(&u, &r, &mu, 180., &y).unwrap();
        for i in 0..n {
            assert_eq!(ystar[i], y[i] * factors.re_tau_star[i]);
        }
    }

    #[test]
    fn test_semi_local_variable_properties() {
        // re_tau_star = 100 * sqrt(r) / mu = [100, 50, 25]
        let y = array![0., 1., 2.];
        let r = array![1., 1., 1.];
        let mu = array![1., 2., 4.];
        let u = array![0., 1., 3.];
        let factors = semi_local_factors(&r, &mu, 100., &y).unwrap();
        approx_eq(&factors.re_tau_star, &array![100., 50., 25.]);
        approx_eq(&factors.d_re_tau_star_dy, &array![0., -50., -25.]);
        // fact = 1 + y / rts * drts = [1, 0, -1]
        approx_eq(&factors.fact, &array![1., 0., -1.]);
        let (ystar, ustar) = semi_local(&u, &r, &mu, 100., &y).unwrap();
        approx_eq(&ystar, &array![0., 50., 50.]);
        // ustar = [0, 0.5 * 1 * 1, 0.5 + (-0.5) * 2]
        approx_eq(&ustar, &array![0., 0.5, -0.5]);
    }

    #[test]
    fn test_semi_local_first_sample_off_wall() {
        let y = array![0.5, 1.0];
        let r = array![1., 1.];
        let mu = array![1., 1.];
        let factors = semi_local_factors(&r, &mu, 10., &y).unwrap();
        approx_eq(&factors.d_re_tau_star_dy, &array![0., 0.]);
        approx_eq(&factors.fact, &array![1., 1.]);
    }

    #[test]
    fn test_semi_local_zero_viscosity() {
        let y = array![0., 1., 2.];
        let r = array![1., 1., 1.];
        let mu = array![1., 0., 1.];
        let u = array![0., 1., 3.];
        let result = semi_local(&u, &r, &mu, 100., &y);
        assert!(matches!(result, Err(Error::Domain { index: 1, .. })));
    }

    #[test]
    fn test_semi_local_zero_wall_density() {
        let y = array![0., 1.];
        let r = array![0., 1.];
        let mu = array![1., 1.];
        let result = semi_local_factors(&r, &mu, 100., &y);
        assert!(matches!(result, Err(Error::Domain { index: 0, .. })));
    }

    #[test]
    fn test_semi_local_duplicate_wall_distance() {
        let y = array![0., 1., 1., 2.];
        let r = array![1., 0.9, 0.8, 0.7];
        let mu = array![1., 0.9, 0.8, 0.7];
        let u = array![0., 1., 2., 3.];
        let result = semi_local(&u, &r, &mu, 100., &y);
        assert!(matches!(result, Err(Error::Domain { index: 2, .. })));
    }

    #[test]
    fn test_semi_local_negative_wall_distance() {
        let y = array![-0.1, 1.];
        let r = array![1., 1.];
        let mu = array![1., 1.];
        let result = semi_local_factors(&r, &mu, 100., &y);
        assert!(matches!(result, Err(Error::Domain { index: 0, .. })));
    }

    #[test]
    fn test_semi_local_zero_re_tau() {
        let y = array![0., 1.];
        let r = array![1., 1.];
        let mu = array![1., 1.];
        let result = semi_local_factors(&r, &mu, 0., &y);
        assert!(matches!(result, Err(Error::Domain { index: 0, .. })));
    }

    #[test]
    fn test_semi_local_negative_density() {
        let y = array![0., 1.];
        let r = array![1., -1.];
        let mu = array![1., 1.];
        let u = array![0., 1.];
        let result = semi_local(&u, &r, &mu, 100., &y);
        assert!(matches!(result, Err(Error::Domain { index: 1, .. })));
    }

    #[test]
    fn test_semi_local_single_negative_density() {
        let y = array![0., 1., 2.];
        let r = array![1., -0.5, 1.];
        let mu = array![1., 1., 1.];
        let u = array![0., 1., 2.];
        let result = semi_local(&u, &r, &mu, 100., &y);
        assert!(matches!(result, Err(Error::Domain { index: 1, .. })));
    }

    #[test]
    fn test_semi_local_shape_mismatch() {
        let y = array![0., 1., 2.];
        let r = array![1., 1., 1.];
        let mu = array![1., 1.];
        let u = array![0., 1., 3.];
        let result = semi_local(&u, &r, &mu, 100., &y);
        assert!(matches!(
            result,
            Err(Error::ShapeMismatch {
                name: "viscosity",
                ..
            })
        ));
        let u = array![0., 1.];
        let mu = array![1., 1., 1.];
        let result = semi_local(&u, &r, &mu, 100., &y);
        assert!(matches!(
            result,
            Err(Error::ShapeMismatch {
                name: "density",
                expected: 2,
                found: 3,
                ..
            })
        ));
    }

    #[test]
    fn test_semi_local_deterministic() {
        let (u, r, mu, y) = random_profile(64);
        let first = semi_local(&u, &r, &mu, 395., &y).unwrap();
        let second = semi_local(&u, &r, &mu, 395., &y).unwrap();
        assert_eq!(first, second);
    }
}
