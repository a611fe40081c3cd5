//! Data of a single DNS case: profile table, case parameters and header
use crate::error::{Error, Result};
use crate::io::schema::{Column, MIN_COLUMNS, PARAMETER_NAMES};
use ndarray::{Array2, ArrayView1, Axis};
use std::fmt;

/// Wall-normal profiles, one row per position with row 0 at the wall
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileTable {
    data: Array2<f64>,
}

impl ProfileTable {
    /// Wrap a table of shape (rows, columns)
    ///
    /// # Errors
    /// Table has no rows or fewer columns than required
    pub fn new(data: Array2<f64>) -> Result<Self> {
        if data.nrows() == 0 {
            return Err(Error::parse(0, "profile table has no rows"));
        }
        if data.ncols() < MIN_COLUMNS {
            return Err(Error::parse(
                0,
                format!(
                    "profile table has {} columns, expected at least {}",
                    data.ncols(),
                    MIN_COLUMNS
                ),
            ));
        }
        Ok(Self { data })
    }

    /// Number of wall-normal positions
    pub fn nrows(&self) -> usize {
        self.data.nrows()
    }

    /// Raw table
    pub fn data(&self) -> &Array2<f64> {
        &self.data
    }

    /// View on a single column
    pub fn column(&self, column: Column) -> ArrayView1<f64> {
        self.data.index_axis(Axis(1), column.index())
    }

    /// Wall distance
    pub fn wall_distance(&self) -> ArrayView1<f64> {
        self.column(Column::WallDistance)
    }

    /// Density
    pub fn density(&self) -> ArrayView1<f64> {
        self.column(Column::Density)
    }

    /// Dynamic viscosity
    pub fn viscosity(&self) -> ArrayView1<f64> {
        self.column(Column::Viscosity)
    }

    /// Inner-scaled mean velocity
    pub fn u_plus(&self) -> ArrayView1<f64> {
        self.column(Column::UPlus)
    }
}

/// Case parameters from the file header
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CaseParams {
    /// Friction Reynolds number
    pub re_tau: f64,
    /// Prandtl number
    pub pr: f64,
    /// Temperature exponent for density
    pub exp_rho: f64,
    /// Temperature exponent for viscosity
    pub exp_mu: f64,
    /// Temperature exponent for conductivity
    pub exp_lam: f64,
    /// Volumetric heating
    pub q_vol: f64,
}

impl CaseParams {
    /// Build parameters from the six values in file order
    ///
    /// # Errors
    /// `re_tau` or `pr` not strictly positive, or any value not finite
    pub fn from_values(values: [f64; 6]) -> Result<Self> {
        for (name, value) in PARAMETER_NAMES.iter().zip(values.iter()) {
            if !value.is_finite() {
                return Err(Error::InvalidParameter {
                    name: *name,
                    value: *value,
                    reason: "must be finite",
                });
            }
        }
        for (name, value) in PARAMETER_NAMES.iter().zip(values.iter()).take(2) {
            if *value <= 0. {
                return Err(Error::InvalidParameter {
                    name: *name,
                    value: *value,
                    reason: "must be positive",
                });
            }
        }
        let [re_tau, pr, exp_rho, exp_mu, exp_lam, q_vol] = values;
        Ok(Self {
            re_tau,
            pr,
            exp_rho,
            exp_mu,
            exp_lam,
            q_vol,
        })
    }

    fn values(&self) -> [f64; 6] {
        [
            self.re_tau,
            self.pr,
            self.exp_rho,
            self.exp_mu,
            self.exp_lam,
            self.q_vol,
        ]
    }
}

impl fmt::Display for CaseParams {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (name, value) in PARAMETER_NAMES.iter().zip(self.values().iter()) {
            writeln!(f, "{:<6} = {}", name, value)?;
        }
        Ok(())
    }
}

/// Descriptive part of the file header
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Header {
    /// Report lines, marker character removed
    pub lines: Vec<String>,
}

impl fmt::Display for Header {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_table_columns() {
        let data = Array2::from_shape_fn((3, 12), |(i, j)| (10 * i + j) as f64);
        let table = ProfileTable::new(data).unwrap();
        assert_eq!(table.nrows(), 3);
        assert_eq!(table.wall_distance().to_vec(), vec![0., 10., 20.]);
        assert_eq!(table.density().to_vec(), vec![5., 15., 25.]);
        assert_eq!(table.viscosity().to_vec(), vec![6., 16., 26.]);
        assert_eq!(table.u_plus().to_vec(), vec![8., 18., 28.]);
        assert_eq!(table.column(Column::UStar).to_vec(), vec![11., 21., 31.]);
    }

    #[test]
    fn test_profile_table_too_narrow() {
        let data = Array2::<f64>::zeros((3, 11));
        assert!(matches!(ProfileTable::new(data), Err(Error::Parse { .. })));
        let data = Array2::<f64>::zeros((0, 12));
        assert!(matches!(ProfileTable::new(data), Err(Error::Parse { .. })));
    }

    #[test]
    fn test_case_params_validation() {
        let params = CaseParams::from_values([395., 1., -1., 0.7, 0.7, 17.55]).unwrap();
        assert_eq!(params.re_tau, 395.);
        assert_eq!(params.q_vol, 17.55);
        let result = CaseParams::from_values([0., 1., 0., 0., 0., 0.]);
        assert!(matches!(
            result,
            Err(Error::InvalidParameter { name: "ReTau", .. })
        ));
        let result = CaseParams::from_values([395., -1., 0., 0., 0., 0.]);
        assert!(matches!(result, Err(Error::InvalidParameter { name: "Pr", .. })));
        let result = CaseParams::from_values([395., 1., 0., f64::NAN, 0., 0.]);
        assert!(matches!(
            result,
            Err(Error::InvalidParameter { name: "expMu", .. })
        ));
    }

    #[test]
    fn test_case_params_display() {
        let params = CaseParams::from_values([395., 1., -1., 0.7, 0.7, 0.]).unwrap();
        let text = params.to_string();
        assert!(text.starts_with("ReTau  = 395\n"));
        assert!(text.contains("expMu  = 0.7\n"));
    }
}
