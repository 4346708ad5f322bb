//! Brand catalog file loader
//!
//! The catalog file is plain text:
//!
//! ```text
//! brandZero,brandOne,brandTwo
//! 0,1,0
//! 1,0,1
//! 0,1,0
//! ```
//!
//! The first non-empty line lists the brand names, followed by one row of
//! comma-separated `0`/`1` similarity flags per brand. Blank lines are skipped.

use std::path::Path;
use tracing::{debug, info, instrument};

use super::{self as catalog, BrandCatalog};
use crate::error::{Error, Result};

/// Read and parse a catalog file holding exactly `expected_size` brands
#[instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn load_catalog(path: impl AsRef<Path>, expected_size: usize) -> Result<BrandCatalog> {
    let text = std::fs::read_to_string(path.as_ref())?;
    let catalog = parse_catalog(&text, expected_size)?;
    info!(brands = catalog.len(), "Brand catalog loaded");
    Ok(catalog)
}

/// Parse catalog text holding exactly `expected_size` brands
pub fn parse_catalog(text: &str, expected_size: usize) -> Result<BrandCatalog> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty());

    let (header_line, header) = lines
        .next()
        .ok_or_else(|| Error::catalog_format(1, "missing brand name header"))?;

    let names: Vec<String> = header.split(',').map(|s| s.trim().to_string()).collect();
    if names.len() != expected_size {
        return Err(Error::catalog_format(
            header_line,
            format!("expected {} brand names, found {}", expected_size, names.len()),
        ));
    }

    if let Some(message) = catalog::name_defect(&names) {
        return Err(Error::catalog_format(header_line, message));
    }

    let mut matrix = Vec::with_capacity(expected_size);
    let mut row_lines = Vec::with_capacity(expected_size);
    for (line_no, line) in lines {
        if matrix.len() == expected_size {
            return Err(Error::catalog_format(
                line_no,
                format!("expected {} matrix rows, found more", expected_size),
            ));
        }
        matrix.push(parse_row(line_no, line, expected_size)?);
        row_lines.push(line_no);
    }

    if matrix.len() != expected_size {
        return Err(Error::catalog_format(
            row_lines.last().copied().unwrap_or(header_line),
            format!(
                "expected {} matrix rows, found {}",
                expected_size,
                matrix.len()
            ),
        ));
    }

    if let Some((i, j)) = catalog::first_asymmetry(&matrix) {
        return Err(Error::catalog_format(
            row_lines[i],
            catalog::asymmetry_message(&names, i, j),
        ));
    }

    debug!(brands = names.len(), "Parsed brand catalog");
    Ok(BrandCatalog::from_checked_rows(names, matrix))
}

fn parse_row(line_no: usize, line: &str, width: usize) -> Result<Vec<bool>> {
    let row = line
        .split(',')
        .map(|flag| match flag.trim() {
            "0" => Ok(false),
            "1" => Ok(true),
            other => Err(Error::catalog_format(
                line_no,
                format!("similarity flag must be 0 or 1, found '{}'", other),
            )),
        })
        .collect::<Result<Vec<bool>>>()?;

    if row.len() != width {
        return Err(Error::catalog_format(
            line_no,
            format!("expected {} flags, found {}", width, row.len()),
        ));
    }
    Ok(row)
}
