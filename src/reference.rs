//! Analytic reference curves of the inner layer
//!
//! Viscous sublayer
//! $$
//! u^+ = y^+
//! $$
//! and the semi-empirical log law
//! $$
//! u^+ = \frac{1}{\kappa} \ln y^+ + B
//! $$
use crate::curve::Curve;
use ndarray::Array1;

/// von Kármán constant
pub const KAPPA: f64 = 0.41;

/// Additive constant of the log law
pub const LOG_LAW_B: f64 = 5.2;

/// Range and number of samples of the sublayer line (in `y+`)
const SUBLAYER: (f64, f64, usize) = (0.2, 13., 100);

/// Range and number of samples of the log law (in `log10(y+)`)
const LOG_LAYER: (f64, f64, usize) = (0.9, 3., 20);

/// Reference curves drawn in every panel
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceCurves {
    /// Viscous sublayer, `u+ = y+`
    pub sublayer: Curve,
    /// Log law
    pub log_law: Curve,
}

/// Return both reference curves
pub fn reference_curves() -> ReferenceCurves {
    ReferenceCurves {
        sublayer: viscous_sublayer(),
        log_law: log_law(),
    }
}

/// Viscous sublayer `u+ = y+` for `y+` in `[0.2, 13]`
pub fn viscous_sublayer() -> Curve {
    let (start, end, n) = SUBLAYER;
    let y = Array1::linspace(start, end, n);
    Curve { x: y.clone(), y }
}

/// Log law over `y+` in `[10^0.9, 10^3]`, sampled evenly in `log10(y+)`
pub fn log_law() -> Curve {
    let (start, end, n) = LOG_LAYER;
    let x = Array1::linspace(start, end, n).mapv(|e| 10f64.powf(e));
    let y = x.mapv(|yp| 1. / KAPPA * yp.ln() + LOG_LAW_B);
    Curve { x, y }
}
