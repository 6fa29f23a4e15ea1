//! Per-recording augmentation orchestration
//!
//! Drives the full variant pipeline for one recording: rotation matrix ->
//! rotate samples -> rewrite metadata -> derive filename -> serialize and
//! write. Each rotation spec runs independently; one spec's failure is
//! recorded in the report and the remaining specs still run.

use crate::augment::{augmented_filename, rewrite_metadata};
use crate::error::{AiraugError, Result};
use crate::recording::write_recording;
use crate::rotation::{rotate_samples, rotation_matrix};
use crate::types::{Recording, RecordingReport, RotationSpec, SpecFailure};
use std::path::Path;
use tracing::{debug, warn};

/// Produce one augmented variant per rotation spec for a single recording.
///
/// The recording itself is never mutated; every spec works on a fresh copy
/// of the sample table. Returns a report with the variant count and any
/// per-spec failures. The only hard error is a filename without a valid
/// file name component.
pub fn augment_recording(
    input_path: &Path,
    recording: &Recording,
    specs: &[RotationSpec],
    output_dir: &Path,
    with_bom: bool,
) -> Result<RecordingReport> {
    let original_filename = input_path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| AiraugError::Naming {
            filename: input_path.display().to_string(),
        })?;

    let mut report = RecordingReport {
        path: input_path.to_path_buf(),
        variants_written: 0,
        spec_failures: Vec::new(),
    };

    for spec in specs {
        match produce_variant(
            input_path,
            original_filename,
            recording,
            spec,
            output_dir,
            with_bom,
        ) {
            Ok(()) => report.variants_written += 1,
            Err(e) => {
                warn!(
                    "Variant {} failed for {}: {}",
                    spec,
                    input_path.display(),
                    e
                );
                report.spec_failures.push(SpecFailure {
                    spec: *spec,
                    reason: e.to_string(),
                });
            }
        }
    }

    debug!(
        "Augmented {}: {} variants written, {} failed",
        input_path.display(),
        report.variants_written,
        report.spec_failures.len()
    );

    Ok(report)
}

/// Run the variant pipeline for one rotation spec
fn produce_variant(
    input_path: &Path,
    original_filename: &str,
    recording: &Recording,
    spec: &RotationSpec,
    output_dir: &Path,
    with_bom: bool,
) -> Result<()> {
    let matrix = rotation_matrix(spec.axis, f64::from(spec.angle_degrees));

    let variant = Recording {
        metadata: rewrite_metadata(input_path, &recording.metadata, spec)?,
        samples: rotate_samples(&matrix, &recording.samples),
    };

    let filename = augmented_filename(original_filename, spec)?;
    write_recording(&output_dir.join(filename), &variant, with_bom)
}
