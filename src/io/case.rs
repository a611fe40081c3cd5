//! Available DNS cases
use std::fmt;

/// Channel flow DNS cases with variable thermophysical properties
/// (Pecnik & Patel, JFM 2017)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DnsCase {
    /// Constant density and viscosity
    ConstProperty,
    /// Constant semi-local Reynolds number
    ConstReTauStar,
    /// Gas-like property variation
    GasLike,
    /// Liquid-like property variation
    LiquidLike,
}

impl DnsCase {
    /// All cases
    pub const ALL: [DnsCase; 4] = [
        DnsCase::ConstProperty,
        DnsCase::ConstReTauStar,
        DnsCase::GasLike,
        DnsCase::LiquidLike,
    ];

    /// Name of the data file
    pub fn file_name(self) -> &'static str {
        match self {
            DnsCase::ConstProperty => "constProperty.txt",
            DnsCase::ConstReTauStar => "constReTauStar.txt",
            DnsCase::GasLike => "gasLike.txt",
            DnsCase::LiquidLike => "liquidLike.txt",
        }
    }

    /// File name without extension
    pub fn stem(self) -> &'static str {
        let name = self.file_name();
        name.strip_suffix(".txt").unwrap_or(name)
    }
}

impl fmt::Display for DnsCase {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.stem())
    }
}
