//! # Velocity transformations
//!
//! Pure functions on one-dimensional profiles:
//! - Van Driest transform, see [`van_driest()`]
//! - Semi-local transform, see [`semi_local()`]
//!
//! The [`VelocityTransform`] trait applies a transform to a loaded case.
//! Each implementor corresponds to one panel of the comparison figure:
//! - `InnerScaling`: `u+` over `y+`, the untransformed profile
//! - `VanDriest`: `u^vD` over `y+`
//! - `SemiLocal`: `u*` over `y*`
pub mod semi_local;
pub mod van_driest;
use crate::curve::Curve;
use crate::error::{Error, Result};
use crate::io::schema::Column;
use crate::profile::{CaseParams, ProfileTable};
pub use semi_local::{semi_local, semi_local_factors, SemiLocalFactors};
pub use van_driest::van_driest;

/// Return an error if `found` differs from `expected`
pub(crate) fn check_len(
    context: &'static str,
    name: &'static str,
    expected: usize,
    found: usize,
) -> Result<()> {
    if expected == found {
        Ok(())
    } else {
        Err(Error::ShapeMismatch {
            context,
            name,
            expected,
            found,
        })
    }
}

/// Transform the velocity profile of a DNS case
#[enum_dispatch]
pub trait VelocityTransform {
    /// Short name, used in log messages
    fn name(&self) -> &'static str;

    /// Labels of the (x, y) axes
    fn axis_labels(&self) -> (&'static str, &'static str);

    /// Compute the transformed profile from wall distance,
    /// density, viscosity and `u+`.
    ///
    /// # Errors
    /// Precondition on the profile is violated
    fn apply(&self, table: &ProfileTable, params: &CaseParams) -> Result<Curve>;

    /// The same quantity, as provided by the DNS file
    fn dns_reference(&self, table: &ProfileTable) -> Curve;
}

/// Untransformed profile `u+` over `y+`
#[derive(Debug, Clone, Copy, Default)]
pub struct InnerScaling;

/// Van Driest transform, see [`van_driest()`]
#[derive(Debug, Clone, Copy, Default)]
pub struct VanDriest;

/// Semi-local transform, see [`semi_local()`]
#[derive(Debug, Clone, Copy, Default)]
pub struct SemiLocal;

/// Collection of velocity transforms, one variant per implementor
#[allow(missing_docs)]
#[enum_dispatch(VelocityTransform)]
#[derive(Debug, Clone, Copy)]
pub enum Transform {
    InnerScaling,
    VanDriest,
    SemiLocal,
}

impl Transform {
    /// All transforms, in the order they are plotted
    pub const ALL: [Transform; 3] = [
        Transform::InnerScaling(InnerScaling),
        Transform::VanDriest(VanDriest),
        Transform::SemiLocal(SemiLocal),
    ];
}

/// Curve from two table columns
fn columns(table: &ProfileTable, x: Column, y: Column) -> Curve {
    Curve {
        x: table.column(x).to_owned(),
        y: table.column(y).to_owned(),
    }
}

impl VelocityTransform for InnerScaling {
    fn name(&self) -> &'static str {
        "inner scaling"
    }

    fn axis_labels(&self) -> (&'static str, &'static str) {
        ("y+", "u+")
    }

    fn apply(&self, table: &ProfileTable, params: &CaseParams) -> Result<Curve> {
        let ypl = table.wall_distance().mapv(|y| y * params.re_tau);
        Curve::new(&ypl, &table.u_plus())
    }

    fn dns_reference(&self, table: &ProfileTable) -> Curve {
        columns(table, Column::YPlus, Column::UPlus)
    }
}

impl VelocityTransform for VanDriest {
    fn name(&self) -> &'static str {
        "van Driest"
    }

    fn axis_labels(&self) -> (&'static str, &'static str) {
        ("y+", "u^vD")
    }

    fn apply(&self, table: &ProfileTable, params: &CaseParams) -> Result<Curve> {
        let (ypl, uvd) = van_driest(
            &table.u_plus(),
            &table.density(),
            params.re_tau,
            &table.wall_distance(),
        )?;
        Ok(Curve { x: ypl, y: uvd })
    }

    fn dns_reference(&self, table: &ProfileTable) -> Curve {
        columns(table, Column::YPlus, Column::UVanDriest)
    }
}

impl VelocityTransform for SemiLocal {
    fn name(&self) -> &'static str {
        "semi-local"
    }

    fn axis_labels(&self) -> (&'static str, &'static str) {
        ("y*", "u*")
    }

    fn apply(&self, table: &ProfileTable, params: &CaseParams) -> Result<Curve> {
        let (ystar, ustar) = semi_local(
            &table.u_plus(),
            &table.density(),
            &table.viscosity(),
            params.re_tau,
            &table.wall_distance(),
        )?;
        Ok(Curve { x: ystar, y: ustar })
    }

    fn dns_reference(&self, table: &ProfileTable) -> Curve {
        columns(table, Column::YStar, Column::UStar)
    }
}
