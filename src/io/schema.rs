//! Layout of the DNS case files
//!
//! Each file starts with a fixed header of [`HEADER_LINES`] lines,
//! every header line prefixed with a one character marker.
//! The case parameters sit on [`PARAMETER_LINE`], the part of the header
//! echoed to the operator spans [`REPORT_LINES`]. All line numbers
//! are 1-based, as in a text editor.
//!
//! The header is followed by the profile table, one row per wall-normal
//! position with whitespace separated columns, see [`Column`].
use std::ops::RangeInclusive;

/// Number of lines before the first data row
pub const HEADER_LINES: usize = 88;

/// Line holding the six case parameters
pub const PARAMETER_LINE: usize = 39;

/// Header lines printed as report
pub const REPORT_LINES: RangeInclusive<usize> = 54..=86;

/// Names of the parameters on [`PARAMETER_LINE`], in file order
pub const PARAMETER_NAMES: [&str; 6] = ["ReTau", "Pr", "expRho", "expMu", "expLam", "Qvol"];

/// Character starting a comment in the data block
pub const COMMENT_MARKER: char = '#';

/// Columns of the profile table read by this crate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    /// Wall distance `y`
    WallDistance,
    /// Inner-scaled wall distance `y+`
    YPlus,
    /// Semi-locally scaled wall distance `y*`
    YStar,
    /// Density
    Density,
    /// Dynamic viscosity
    Viscosity,
    /// Inner-scaled mean velocity `u+`
    UPlus,
    /// Van Driest velocity as stored in the file
    UVanDriest,
    /// Semi-local velocity as stored in the file
    UStar,
}

impl Column {
    /// All columns read by this crate
    pub const ALL: [Column; 8] = [
        Column::WallDistance,
        Column::YPlus,
        Column::YStar,
        Column::Density,
        Column::Viscosity,
        Column::UPlus,
        Column::UVanDriest,
        Column::UStar,
    ];

    /// Column index in the profile table
    pub const fn index(self) -> usize {
        match self {
            Column::WallDistance => 0,
            Column::YPlus => 1,
            Column::YStar => 2,
            Column::Density => 5,
            Column::Viscosity => 6,
            Column::UPlus => 8,
            Column::UVanDriest => 10,
            Column::UStar => 11,
        }
    }
}

/// Minimum number of columns a data row must have
pub const MIN_COLUMNS: usize = Column::UStar.index() + 1;
