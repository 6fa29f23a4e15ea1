//! Metadata rewriting for augmented recordings
//!
//! Exactly one header line records augmentation status; it is the only
//! line the core ever touches. Everything else passes through verbatim,
//! in original order, comment and separator lines included.

use crate::error::{AiraugError, Result};
use crate::types::RotationSpec;
use std::path::Path;

/// Case-insensitive prefix of the augmentation-status line
const AUGMENTATION_PREFIX: &str = "augmentation:";

/// Rewrite the augmentation-status line to record the applied rotation.
///
/// The replacement renders as `Augmentation: Yes (x+30)` - the same form
/// the capture tool's `Augmentation: No` occupies. Only the first matching
/// line is rewritten.
pub fn rewrite_metadata(
    path: &Path,
    metadata: &[String],
    spec: &RotationSpec,
) -> Result<Vec<String>> {
    let status_line = format!("Augmentation: Yes ({})", spec.token());
    let mut rewritten = Vec::with_capacity(metadata.len());
    let mut replaced = false;

    for line in metadata {
        if !replaced && is_augmentation_line(line) {
            rewritten.push(status_line.clone());
            replaced = true;
        } else {
            rewritten.push(line.clone());
        }
    }

    if !replaced {
        return Err(AiraugError::MissingField {
            path: path.to_path_buf(),
        });
    }

    Ok(rewritten)
}

fn is_augmentation_line(line: &str) -> bool {
    line.trim_start()
        .get(..AUGMENTATION_PREFIX.len())
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case(AUGMENTATION_PREFIX))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Axis, RotationSpec};
    use std::path::PathBuf;

    fn path() -> PathBuf {
        PathBuf::from("t.csv")
    }

    fn header() -> Vec<String> {
        vec![
            "AirChar - The in-the-Air Handwritten Dataset".to_string(),
            "#".to_string(),
            "Sampling Frequency: 100Hz".to_string(),
            "Augmentation: No".to_string(),
            "Features: No".to_string(),
        ]
    }

    #[test]
    fn test_rewrites_exactly_one_line() {
        let spec = RotationSpec::new(Axis::X, 30);
        let out = rewrite_metadata(&path(), &header(), &spec).unwrap();

        assert_eq!(out.len(), 5);
        assert_eq!(out[3], "Augmentation: Yes (x+30)");
        let unchanged: Vec<_> = (0..5).filter(|&i| out[i] == header()[i]).collect();
        assert_eq!(unchanged, vec![0, 1, 2, 4]);
    }

    #[test]
    fn test_negative_angle_rendering() {
        let spec = RotationSpec::new(Axis::Z, -90);
        let out = rewrite_metadata(&path(), &header(), &spec).unwrap();
        assert_eq!(out[3], "Augmentation: Yes (z-90)");
    }

    #[test]
    fn test_prefix_match_is_case_insensitive_and_trimmed() {
        let lines = vec!["  AUGMENTATION: no".to_string()];
        let spec = RotationSpec::new(Axis::Y, 10);
        let out = rewrite_metadata(&path(), &lines, &spec).unwrap();
        assert_eq!(out[0], "Augmentation: Yes (y+10)");
    }

    #[test]
    fn test_missing_line_is_error() {
        let lines = vec!["No status here".to_string()];
        let spec = RotationSpec::new(Axis::X, 30);
        let err = rewrite_metadata(&path(), &lines, &spec).unwrap_err();
        assert!(matches!(err, AiraugError::MissingField { .. }));
        assert!(err.is_recoverable());
    }
}
