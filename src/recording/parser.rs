//! Header/body splitting and sample-row parsing
//!
//! A recording file is a free-text metadata header followed by a numeric
//! sample table. The parse runs in two phases: phase 1 classifies raw lines
//! until the first one matching the numeric-row grammar, phase 2 parses
//! every remaining line with the strict 7-field schema. A metadata line
//! that merely starts with a digit (e.g. a sampling-rate note) does not
//! match the grammar because the number must be followed by the field
//! separator.

use crate::error::{AiraugError, Result};
use crate::types::{Recording, Sample};
use nalgebra::Vector3;
use std::path::Path;
use tracing::debug;

/// Field separator of the sample table
pub const FIELD_SEPARATOR: char = ';';

/// Number of fields per sample row: label + 3 acceleration + 3 angular rate
pub const FIELDS_PER_ROW: usize = 7;

/// Read and parse one recording from disk.
///
/// Decoding is lossy (invalid UTF-8 bytes are replaced) and a leading
/// byte-order marker is tolerated; capture tools write both variants.
pub fn read_recording(path: &Path) -> Result<Recording> {
    let bytes = std::fs::read(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => AiraugError::FileNotFound(path.to_path_buf()),
        _ => AiraugError::Io(e),
    })?;

    let text = String::from_utf8_lossy(&bytes);
    parse_recording(path, &text)
}

/// Split raw recording text into metadata lines and sample rows
pub fn parse_recording(path: &Path, text: &str) -> Result<Recording> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    let mut metadata = Vec::new();
    let mut samples = Vec::new();
    let mut in_samples = false;

    for (idx, line) in text.lines().enumerate() {
        let line = line.strip_suffix('\r').unwrap_or(line);

        if !in_samples {
            if is_numeric_row(line) {
                in_samples = true;
            } else {
                metadata.push(line.to_string());
                continue;
            }
        }

        // Everything at or after the boundary must be a sample row;
        // skipping a bad row would desynchronize row-label alignment.
        samples.push(parse_sample(path, idx + 1, line)?);
    }

    if !in_samples {
        return Err(AiraugError::format_error(
            path,
            "could not locate the numeric data section",
        ));
    }

    debug!(
        "Parsed {}: {} header lines, {} samples",
        path.display(),
        metadata.len(),
        samples.len()
    );

    Ok(Recording { metadata, samples })
}

/// Numeric-row grammar: optional leading whitespace, an optionally signed
/// integer with an optional decimal fraction, optional whitespace, then
/// the field separator.
fn is_numeric_row(line: &str) -> bool {
    let rest = line.trim_start();
    let rest = rest.strip_prefix('-').unwrap_or(rest);

    let digits = rest.len() - rest.trim_start_matches(|c: char| c.is_ascii_digit()).len();
    if digits == 0 {
        return false;
    }
    let rest = &rest[digits..];

    let rest = match rest.strip_prefix('.') {
        Some(after_dot) => {
            let frac =
                after_dot.len() - after_dot.trim_start_matches(|c: char| c.is_ascii_digit()).len();
            if frac == 0 {
                return false;
            }
            &after_dot[frac..]
        }
        None => rest,
    };

    rest.trim_start().starts_with(FIELD_SEPARATOR)
}

/// Parse one sample row with the fixed 7-field schema
fn parse_sample(path: &Path, line_number: usize, line: &str) -> Result<Sample> {
    let fields: Vec<&str> = line.split(FIELD_SEPARATOR).map(str::trim).collect();

    if fields.len() != FIELDS_PER_ROW {
        return Err(AiraugError::format_error(
            path,
            format!(
                "line {}: expected {} fields, found {}",
                line_number,
                FIELDS_PER_ROW,
                fields.len()
            ),
        ));
    }

    let label: i64 = fields[0].parse().map_err(|_| {
        AiraugError::format_error(
            path,
            format!("line {}: invalid label '{}'", line_number, fields[0]),
        )
    })?;

    let mut values = [0.0f64; 6];
    for (slot, field) in values.iter_mut().zip(&fields[1..]) {
        *slot = field.parse().map_err(|_| {
            AiraugError::format_error(
                path,
                format!("line {}: invalid numeric field '{}'", line_number, field),
            )
        })?;
    }

    Ok(Sample {
        label,
        acc: Vector3::new(values[0], values[1], values[2]),
        gyr: Vector3::new(values[3], values[4], values[5]),
    })
}
