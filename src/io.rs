//! # Input of DNS case files
//!
//! - [`schema`]: fixed layout of the files
//! - [`case`]: available cases
//! - [`read_dns`]: parse a file into table, parameters and header
pub mod case;
pub mod read_dns;
pub mod schema;
pub use case::DnsCase;
pub use read_dns::{parse_case, read_case, DnsData};
