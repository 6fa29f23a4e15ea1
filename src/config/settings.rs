//! Runtime configuration settings

use crate::error::{AiraugError, Result};
use crate::types::{Axis, RotationSpec};
use std::path::PathBuf;
use tracing::warn;

/// Default angle spread: 10 to 90 degrees in 10 degree steps, both signs
pub const DEFAULT_ANGLES: [i32; 18] = [
    -90, -80, -70, -60, -50, -40, -30, -20, -10, 10, 20, 30, 40, 50, 60, 70, 80, 90,
];

/// Runtime settings for the augmentation pipeline
#[derive(Debug, Clone)]
pub struct Settings {
    /// Input path (file or directory)
    pub input: PathBuf,
    /// Output directory
    pub output: PathBuf,
    /// Rotation specs to apply to every recording (axes x angles)
    pub specs: Vec<RotationSpec>,
    /// Number of worker threads
    pub threads: usize,
    /// Scan recursively
    pub recursive: bool,
    /// Write a BOM at the start of each output file
    pub write_bom: bool,
    /// Write a JSON run report
    pub write_report: bool,
    /// Show progress bars
    pub show_progress: bool,
    /// Dry run mode - show recordings without processing
    pub dry_run: bool,
}

impl Settings {
    /// Create settings from CLI arguments
    pub fn from_cli(cli: &super::cli::Cli) -> Result<Self> {
        let axes = cli
            .axes
            .iter()
            .map(|s| Axis::from_symbol(s))
            .collect::<Result<Vec<_>>>()?;

        let angles = cli
            .angles
            .clone()
            .unwrap_or_else(|| DEFAULT_ANGLES.to_vec());

        let specs = build_specs(&axes, &angles)?;

        let default_threads = num_cpus::get().saturating_sub(1).max(1);

        Ok(Self {
            input: cli.input.clone(),
            output: cli.output.clone(),
            specs,
            threads: cli.threads.unwrap_or(default_threads),
            recursive: cli.recursive,
            write_bom: cli.bom,
            write_report: cli.report,
            show_progress: !cli.quiet,
            dry_run: cli.dry_run,
        })
    }
}

impl Default for Settings {
    fn default() -> Self {
        let axes = [Axis::X];
        Self {
            input: PathBuf::from("samples"),
            output: PathBuf::from("samplesAug"),
            specs: build_specs(&axes, &DEFAULT_ANGLES).unwrap_or_default(),
            threads: num_cpus::get().saturating_sub(1).max(1),
            recursive: true,
            write_bom: false,
            write_report: true,
            show_progress: true,
            dry_run: false,
        }
    }
}

/// Cross axes with angles into the rotation spec set.
///
/// Angle 0 would be a no-op duplicate of the original and is dropped with
/// a warning. Duplicates are removed while preserving first-seen order, so
/// distinct specs always map to distinct output filenames.
fn build_specs(axes: &[Axis], angles: &[i32]) -> Result<Vec<RotationSpec>> {
    if axes.is_empty() {
        return Err(AiraugError::Config(
            "at least one rotation axis is required".to_string(),
        ));
    }

    let mut specs = Vec::with_capacity(axes.len() * angles.len());
    for &axis in axes {
        for &angle in angles {
            if angle == 0 {
                warn!("Skipping angle 0 (identity rotation, no variant produced)");
                continue;
            }
            let spec = RotationSpec::new(axis, angle);
            if !specs.contains(&spec) {
                specs.push(spec);
            }
        }
    }

    if specs.is_empty() {
        return Err(AiraugError::Config(
            "no non-zero rotation angles configured".to_string(),
        ));
    }

    Ok(specs)
}
