//! # `velotrans`: Velocity transformations of variable-property channel flow
//!<img align="right" src="https://rustacean.net/assets/cuddlyferris.png" width="80">
//!
//! Post-processing of DNS data of turbulent channel flows with variable
//! thermophysical properties (Pecnik & Patel, JFM 2017).
//!
//! # Details
//!
//! Mean velocity profiles of flows with variable density and viscosity
//! do not collapse on the law of the wall in classical inner scaling.
//! This crate implements two transformations which account for the
//! property variations:
//! - `Van Driest`, density weighted, see [`transform::van_driest()`]
//! - `Semi-local`, additionally corrects for the wall-normal variation of
//! the local friction Reynolds number, see [`transform::semi_local()`]
//!
//! Both are cumulative integrals over the profile, evaluated with
//! first order recurrences on `ndarray` arrays.
//!
//! The remaining modules read the DNS case files ([`io`]), provide the
//! analytic reference curves ([`reference`]) and draw the comparison
//! figure ([`plot`]).
//!
//! # Example
//! Transform a constant property profile
//! ```
//! use ndarray::array;
//! use velotrans::transform::{semi_local, van_driest};
//!
//! let y = array![0., 1., 2.];
//! let rho = array![1., 1., 1.];
//! let mu = array![1., 1., 1.];
//! let u = array![0., 1., 3.];
//! let re_tau = 100.;
//! let (ypl, uvd) = van_driest(&u, &rho, re_tau, &y).unwrap();
//! let (ystar, ustar) = semi_local(&u, &rho, &mu, re_tau, &y).unwrap();
//! assert_eq!(uvd, ustar);
//! assert_eq!(ypl, ystar);
//! ```
//!
//! ## Run
//!
//! Place the DNS case files in `data/`, select the case in `src/main.rs`
//! and run
//!
//! `cargo run --release`
//!
//! The figure is written to `<case>_velocity_transforms.png`.
#![warn(missing_docs)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]
#[macro_use]
extern crate enum_dispatch;
pub mod curve;
pub mod error;
pub mod io;
pub mod logger;
pub mod plot;
pub mod profile;
pub mod reference;
pub mod transform;
pub mod types;

pub use error::{Error, Result};
