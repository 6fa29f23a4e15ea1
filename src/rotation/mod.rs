//! Rotation engine: 3x3 rotation matrices and batch application to samples
//!
//! The three axis matrices are the standard right-handed elementary
//! rotations. Acceleration and angular-rate triples are both spatial
//! vectors in the sensor frame, so a frame change rotates them with the
//! same matrix.

use crate::types::{Axis, Sample};
use nalgebra::Matrix3;

/// Build the rotation matrix for a rotation about `axis` by `angle_degrees`
pub fn rotation_matrix(axis: Axis, angle_degrees: f64) -> Matrix3<f64> {
    let theta = angle_degrees.to_radians();
    let (st, ct) = theta.sin_cos();

    match axis {
        Axis::X => Matrix3::new(
            1.0, 0.0, 0.0, //
            0.0, ct, -st, //
            0.0, st, ct,
        ),
        Axis::Y => Matrix3::new(
            ct, 0.0, st, //
            0.0, 1.0, 0.0, //
            -st, 0.0, ct,
        ),
        Axis::Z => Matrix3::new(
            ct, -st, 0.0, //
            st, ct, 0.0, //
            0.0, 0.0, 1.0,
        ),
    }
}

/// Rotate every sample's acceleration and angular-rate vector by `matrix`,
/// returning fresh samples with labels copied unchanged.
///
/// Each stored triple is a row vector; rotating it by `R` acting on column
/// vectors is `R * v`, the same as the row-vector form `v * R^T`.
pub fn rotate_samples(matrix: &Matrix3<f64>, samples: &[Sample]) -> Vec<Sample> {
    samples
        .iter()
        .map(|s| Sample {
            label: s.label,
            acc: matrix * s.acc,
            gyr: matrix * s.gyr,
        })
        .collect()
}
