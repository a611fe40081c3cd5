//! Read DNS case files
//!
//! See [`super::schema`] for the file layout.
use super::schema::{COMMENT_MARKER, HEADER_LINES, MIN_COLUMNS};
use super::schema::{PARAMETER_LINE, PARAMETER_NAMES, REPORT_LINES};
use crate::error::{Error, Result};
use crate::profile::{CaseParams, Header, ProfileTable};
use ndarray::Array2;
use std::path::Path;

/// Everything read from a single case file
#[derive(Debug, Clone, PartialEq)]
pub struct DnsData {
    /// Profile table
    pub table: ProfileTable,
    /// Case parameters
    pub params: CaseParams,
    /// Report lines of the header
    pub header: Header,
}

/// Read case file from disk
///
/// # Errors
/// File can't be read or is malformed, see [`parse_case`]
pub fn read_case<P: AsRef<Path>>(path: P) -> Result<DnsData> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.display().to_string(),
        source,
    })?;
    let data = parse_case(&content)?;
    log::info!(
        "Read {:?}: {} rows, {} columns",
        path,
        data.table.nrows(),
        data.table.data().ncols()
    );
    Ok(data)
}

/// Parse the content of a case file
///
/// # Errors
/// Header too short, parameter line malformed or invalid,
/// non-numeric or ragged data rows, or no data rows at all.
pub fn parse_case(content: &str) -> Result<DnsData> {
    let lines: Vec<&str> = content.lines().collect();
    if lines.len() < HEADER_LINES {
        return Err(Error::parse(
            lines.len(),
            format!(
                "file ends after {} lines, header has {} lines",
                lines.len(),
                HEADER_LINES
            ),
        ));
    }
    let params = parse_parameters(lines[PARAMETER_LINE - 1], PARAMETER_LINE)?;
    let header = Header {
        lines: lines[REPORT_LINES.start() - 1..*REPORT_LINES.end()]
            .iter()
            .map(|line| strip_marker(line).to_owned())
            .collect(),
    };
    let table = parse_table(&lines[HEADER_LINES..], HEADER_LINES + 1)?;
    Ok(DnsData {
        table,
        params,
        header,
    })
}

/// Remove the leading marker character of a header line
fn strip_marker(line: &str) -> &str {
    let mut chars = line.chars();
    chars.next();
    chars.as_str()
}

/// Parse the six case parameters
fn parse_parameters(line: &str, lineno: usize) -> Result<CaseParams> {
    let mut tokens = strip_marker(line).split_whitespace();
    let mut values = [0.; 6];
    for (name, value) in PARAMETER_NAMES.iter().zip(values.iter_mut()) {
        let token = tokens
            .next()
            .ok_or_else(|| Error::parse(lineno, format!("missing parameter {}", name)))?;
        *value = token.parse::<f64>().map_err(|e| {
            Error::parse(
                lineno,
                format!("parameter {}: can't parse {:?} ({})", name, token, e),
            )
        })?;
    }
    CaseParams::from_values(values)
}

/// Parse whitespace separated rows, skipping blank lines and comments.
/// `first_lineno` is the 1-based line number of `lines[0]`.
fn parse_table(lines: &[&str], first_lineno: usize) -> Result<ProfileTable> {
    let mut values: Vec<f64> = Vec::new();
    let mut ncols: Option<usize> = None;
    let mut nrows = 0;
    for (offset, line) in lines.iter().enumerate() {
        let lineno = first_lineno + offset;
        let content = match line.find(COMMENT_MARKER) {
            Some(pos) => &line[..pos],
            None => line,
        };
        let mut row = 0;
        for token in content.split_whitespace() {
            let value = token.parse::<f64>().map_err(|e| {
                Error::parse(lineno, format!("can't parse {:?} ({})", token, e))
            })?;
            values.push(value);
            row += 1;
        }
        if row == 0 {
            continue;
        }
        match ncols {
            None => {
                if row < MIN_COLUMNS {
                    return Err(Error::parse(
                        lineno,
                        format!("row has {} columns, expected at least {}", row, MIN_COLUMNS),
                    ));
                }
                ncols = Some(row);
            }
            Some(n) if n != row => {
                return Err(Error::parse(
                    lineno,
                    format!("row has {} columns, previous rows have {}", row, n),
                ));
            }
            Some(_) => (),
        }
        nrows += 1;
    }
    let ncols = ncols.ok_or_else(|| Error::parse(first_lineno, "no data rows after the header"))?;
    let data = Array2::from_shape_vec((nrows, ncols), values)
        .map_err(|e| Error::parse(first_lineno, e.to_string()))?;
    ProfileTable::new(data)
}
