//! Core data types for airaug
//!
//! These types represent the domain model and flow through the pipeline.

use crate::error::{AiraugError, Result};
use nalgebra::Vector3;
use std::path::PathBuf;

// =============================================================================
// Rotation primitives
// =============================================================================

/// The three sensor-frame rotation axes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Parse an axis symbol, case-insensitively
    pub fn from_symbol(symbol: &str) -> Result<Self> {
        match symbol.trim().to_lowercase().as_str() {
            "x" => Ok(Axis::X),
            "y" => Ok(Axis::Y),
            "z" => Ok(Axis::Z),
            other => Err(AiraugError::InvalidAxis(other.to_string())),
        }
    }

    /// Lowercase symbol used in filenames and metadata ("x", "y", "z")
    pub fn symbol(self) -> &'static str {
        match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        }
    }
}

/// One augmentation variant: a rotation about a single axis by a whole
/// number of degrees. Angle 0 is never part of a generated variant set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RotationSpec {
    pub axis: Axis,
    pub angle_degrees: i32,
}

impl RotationSpec {
    pub fn new(axis: Axis, angle_degrees: i32) -> Self {
        Self {
            axis,
            angle_degrees,
        }
    }

    /// Token identifying this spec in filenames and metadata, with an
    /// explicit sign (e.g. "x+30", "z-90")
    pub fn token(&self) -> String {
        format!("{}{:+}", self.axis.symbol(), self.angle_degrees)
    }
}

impl std::fmt::Display for RotationSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.token())
    }
}

// =============================================================================
// Recordings
// =============================================================================

/// One time-labeled IMU sample: symbol/event label plus 3-axis linear
/// acceleration and 3-axis angular rate.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    /// Symbol/event label (ASCII code in the AirChar dataset)
    pub label: i64,
    /// Linear acceleration (ax, ay, az)
    pub acc: Vector3<f64>,
    /// Angular rate (gx, gy, gz)
    pub gyr: Vector3<f64>,
}

/// One in-air handwriting recording: a free-text metadata header followed
/// by an ordered table of samples. The two blocks are contiguous and never
/// interleaved.
#[derive(Debug, Clone, PartialEq)]
pub struct Recording {
    /// Header lines, verbatim minus line terminators, in file order
    pub metadata: Vec<String>,
    /// Sample rows in file order
    pub samples: Vec<Sample>,
}

impl Recording {
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

// =============================================================================
// Per-recording results
// =============================================================================

/// Failure of a single rotation spec within one recording's run
#[derive(Debug, Clone)]
pub struct SpecFailure {
    pub spec: RotationSpec,
    pub reason: String,
}

/// Outcome of augmenting one recording: how many variants were written and
/// which specs failed. Spec failures do not abort the other specs.
#[derive(Debug, Clone)]
pub struct RecordingReport {
    pub path: PathBuf,
    pub variants_written: usize,
    pub spec_failures: Vec<SpecFailure>,
}
