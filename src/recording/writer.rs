//! Recording serialization back to the AirChar on-disk format
//!
//! Output is byte-compatible with the input format: each metadata line
//! followed by a line break, then one `;`-separated row per sample with no
//! header row. The whole file is rendered into one in-memory buffer before
//! a single write, so a failed write never leaves a partial file behind.

use crate::error::{AiraugError, Result};
use crate::recording::parser::FIELD_SEPARATOR;
use crate::types::Recording;
use std::fmt::Write as _;
use std::path::Path;
use tracing::debug;

/// Render a recording to its on-disk text form
pub fn serialize_recording(recording: &Recording, with_bom: bool) -> String {
    let mut out = String::new();

    if with_bom {
        out.push('\u{feff}');
    }

    for line in &recording.metadata {
        out.push_str(line);
        out.push('\n');
    }

    for sample in &recording.samples {
        let sep = FIELD_SEPARATOR;
        // write! to a String cannot fail
        let _ = writeln!(
            out,
            "{}{sep}{}{sep}{}{sep}{}{sep}{}{sep}{}{sep}{}",
            sample.label,
            sample.acc.x,
            sample.acc.y,
            sample.acc.z,
            sample.gyr.x,
            sample.gyr.y,
            sample.gyr.z,
        );
    }

    out
}

/// Serialize and write a recording, creating or overwriting `path`
pub fn write_recording(path: &Path, recording: &Recording, with_bom: bool) -> Result<()> {
    let buffer = serialize_recording(recording, with_bom);

    std::fs::write(path, buffer).map_err(|e| AiraugError::output_error(path, e))?;

    debug!(
        "Wrote {} ({} samples)",
        path.display(),
        recording.samples.len()
    );

    Ok(())
}
