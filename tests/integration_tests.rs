//! Integration tests for the airaug pipeline
//!
//! These tests run the full batch pipeline over generated AirChar-format
//! recordings and verify the augmented outputs.

use airaug::config::Settings;
use airaug::recording::read_recording;
use airaug::types::{Axis, RotationSpec};
use airaug::pipeline;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Generate an AirChar-format recording file for testing
///
/// The header mirrors what the capture tool writes: free-text lines,
/// an `Augmentation: No` status line, and a trailing column-name line
/// that must classify as metadata (it does not match the numeric-row
/// grammar). The capture tool writes a UTF-8 BOM, so tests cover both.
fn write_test_recording(path: &Path, rows: &[&str], with_bom: bool) {
    let filename = path.file_name().unwrap().to_string_lossy();
    let mut content = String::new();
    if with_bom {
        content.push('\u{feff}');
    }
    content.push_str(&format!(
        "AirChar - The in-the-Air Handwritten Dataset\n\
         for Character Recognition Based on Acceleration (IMU) Data\n\
         #\n\
         IMU: LSM9DS1\n\
         Sampling Frequency: 100Hz\n\
         FileName: {}\n\
         Character: A\n\
         Preprocessing Filter: No\n\
         Augmentation: No\n\
         Features: No\n\
         Format: csv\n\
         #\n\
         Label;accX;accY;accZ;gyrX;gyrY;gyrZ\n",
        filename
    ));
    for row in rows {
        content.push_str(row);
        content.push('\n');
    }
    fs::write(path, content).expect("Failed to write test recording");
}

/// Create test settings with progress bars disabled
fn create_test_settings(input: &Path, output: &Path, specs: Vec<RotationSpec>) -> Settings {
    Settings {
        input: input.to_path_buf(),
        output: output.to_path_buf(),
        specs,
        threads: 2,
        recursive: true,
        write_bom: false,
        write_report: true,
        show_progress: false, // Disable progress bars in tests
        dry_run: false,
    }
}

#[test]
fn test_pipeline_writes_one_variant_per_spec() {
    let input_dir = TempDir::new().expect("Failed to create input temp dir");
    let output_dir = TempDir::new().expect("Failed to create output temp dir");

    write_test_recording(
        &input_dir.path().join("A_s01v01n0001p0a0f0.csv"),
        &["65;0.1;0.2;0.3;1.0;2.0;3.0", "65;0.4;0.5;0.6;4.0;5.0;6.0"],
        false,
    );

    let specs = vec![
        RotationSpec::new(Axis::X, -20),
        RotationSpec::new(Axis::X, 30),
        RotationSpec::new(Axis::Y, 45),
    ];
    let settings = create_test_settings(input_dir.path(), output_dir.path(), specs);

    let result = pipeline::run(&settings).expect("Pipeline failed");
    assert_eq!(result.total_files, 1);
    assert_eq!(result.successful, 1);
    assert_eq!(result.failed, 0);
    assert_eq!(result.variants_written, 3);

    // Scenario: `a0` replaced once, extension preserved
    assert!(output_dir.path().join("A_s01v01n0001p0ax-20f0.csv").exists());
    assert!(output_dir.path().join("A_s01v01n0001p0ax+30f0.csv").exists());
    assert!(output_dir.path().join("A_s01v01n0001p0ay+45f0.csv").exists());
}

#[test]
fn test_metadata_rewritten_and_other_lines_preserved() {
    let input_dir = TempDir::new().unwrap();
    let output_dir = TempDir::new().unwrap();

    let input_path = input_dir.path().join("A_s01v01n0001p0a0f0.csv");
    write_test_recording(&input_path, &["65;1.0;0.0;0.0;0.0;0.0;1.0"], false);
    let original = read_recording(&input_path).unwrap();

    let settings = create_test_settings(
        input_dir.path(),
        output_dir.path(),
        vec![RotationSpec::new(Axis::X, 30)],
    );
    pipeline::run(&settings).unwrap();

    let variant = read_recording(&output_dir.path().join("A_s01v01n0001p0ax+30f0.csv")).unwrap();

    assert_eq!(variant.metadata.len(), original.metadata.len());
    let mut changed = Vec::new();
    for (i, (a, b)) in variant.metadata.iter().zip(&original.metadata).enumerate() {
        if a != b {
            changed.push((i, a.clone()));
        }
    }
    assert_eq!(changed.len(), 1, "exactly one header line should change");
    assert_eq!(changed[0].1, "Augmentation: Yes (x+30)");
}

#[test]
fn test_quarter_turn_about_z_maps_x_to_y() {
    let input_dir = TempDir::new().unwrap();
    let output_dir = TempDir::new().unwrap();

    write_test_recording(
        &input_dir.path().join("A_s01v01n0001p0a0f0.csv"),
        &["5;1.0;0.0;0.0;0.0;0.0;1.0"],
        false,
    );

    let settings = create_test_settings(
        input_dir.path(),
        output_dir.path(),
        vec![RotationSpec::new(Axis::Z, 90)],
    );
    pipeline::run(&settings).unwrap();

    let variant = read_recording(&output_dir.path().join("A_s01v01n0001p0az+90f0.csv")).unwrap();
    assert_eq!(variant.samples.len(), 1);

    let s = &variant.samples[0];
    assert_eq!(s.label, 5);
    assert!((s.acc.x - 0.0).abs() < 1e-9);
    assert!((s.acc.y - 1.0).abs() < 1e-9);
    assert!((s.acc.z - 0.0).abs() < 1e-9);
    // Angular rate along the rotation axis is unchanged
    assert!((s.gyr.z - 1.0).abs() < 1e-9);
}

#[test]
fn test_bom_input_tolerated() {
    let input_dir = TempDir::new().unwrap();
    let output_dir = TempDir::new().unwrap();

    write_test_recording(
        &input_dir.path().join("B_s02v01n0003p0a0f0.csv"),
        &["66;0.5;0.5;0.5;1.0;1.0;1.0"],
        true,
    );

    let settings = create_test_settings(
        input_dir.path(),
        output_dir.path(),
        vec![RotationSpec::new(Axis::X, 10)],
    );
    let result = pipeline::run(&settings).unwrap();

    assert_eq!(result.successful, 1);
    let variant = read_recording(&output_dir.path().join("B_s02v01n0003p0ax+10f0.csv")).unwrap();
    assert_eq!(variant.metadata[0], "AirChar - The in-the-Air Handwritten Dataset");
}

#[test]
fn test_malformed_recording_produces_no_output_but_batch_continues() {
    let input_dir = TempDir::new().unwrap();
    let output_dir = TempDir::new().unwrap();

    // 5-field row: malformed
    write_test_recording(
        &input_dir.path().join("A_s01v01n0001p0a0f0.csv"),
        &["65;0.1;0.2;0.3;1.0"],
        false,
    );
    // Valid sibling
    write_test_recording(
        &input_dir.path().join("B_s01v01n0002p0a0f0.csv"),
        &["66;0.1;0.2;0.3;1.0;2.0;3.0"],
        false,
    );

    let settings = create_test_settings(
        input_dir.path(),
        output_dir.path(),
        vec![RotationSpec::new(Axis::X, 30), RotationSpec::new(Axis::X, -30)],
    );
    let result = pipeline::run(&settings).unwrap();

    assert_eq!(result.total_files, 2);
    assert_eq!(result.successful, 1);
    assert_eq!(result.failed, 1);
    assert_eq!(result.variants_written, 2);

    // No variant of the malformed recording exists
    let outputs: Vec<String> = fs::read_dir(output_dir.path())
        .unwrap()
        .filter_map(|e| e.ok())
        .map(|e| e.file_name().to_string_lossy().to_string())
        .collect();
    assert!(outputs.iter().all(|n| !n.starts_with("A_")));
    assert!(outputs.contains(&"B_s01v01n0002p0ax+30f0.csv".to_string()));
    assert!(outputs.contains(&"B_s01v01n0002p0ax-30f0.csv".to_string()));
}

#[test]
fn test_naming_violation_reported_per_spec() {
    let input_dir = TempDir::new().unwrap();
    let output_dir = TempDir::new().unwrap();

    // Valid content, but the filename lacks the a0 token
    write_test_recording(
        &input_dir.path().join("renamed_recording.csv"),
        &["65;0.1;0.2;0.3;1.0;2.0;3.0"],
        false,
    );

    let settings = create_test_settings(
        input_dir.path(),
        output_dir.path(),
        vec![RotationSpec::new(Axis::X, 30), RotationSpec::new(Axis::Y, 30)],
    );
    let result = pipeline::run(&settings).unwrap();

    assert_eq!(result.failed, 1);
    assert_eq!(result.variants_written, 0);

    // The report attributes one error per attempted spec
    let report: serde_json::Value = serde_json::from_str(
        &fs::read_to_string(output_dir.path().join("airaug_report.json")).unwrap(),
    )
    .unwrap();
    let files = report.get("files").unwrap().as_array().unwrap();
    assert_eq!(files.len(), 1);
    assert_eq!(files[0].get("status").unwrap(), "failed");
    assert_eq!(files[0].get("errors").unwrap().as_array().unwrap().len(), 2);
}

#[test]
fn test_run_report_written() {
    let input_dir = TempDir::new().unwrap();
    let output_dir = TempDir::new().unwrap();

    write_test_recording(
        &input_dir.path().join("C_s03v01n0001p0a0f0.csv"),
        &["67;1.0;2.0;3.0;4.0;5.0;6.0"],
        false,
    );

    let settings = create_test_settings(
        input_dir.path(),
        output_dir.path(),
        vec![RotationSpec::new(Axis::Z, -45)],
    );
    pipeline::run(&settings).unwrap();

    let report: serde_json::Value = serde_json::from_str(
        &fs::read_to_string(output_dir.path().join("airaug_report.json")).unwrap(),
    )
    .unwrap();
    assert_eq!(report.get("version").unwrap(), "1.0");
    let metadata = report.get("metadata").unwrap();
    assert_eq!(metadata.get("file_count").unwrap(), 1);
    assert_eq!(metadata.get("variants_written").unwrap(), 1);
    let files = report.get("files").unwrap().as_array().unwrap();
    assert_eq!(files[0].get("status").unwrap(), "ok");
}

#[test]
fn test_empty_input_directory() {
    let input_dir = TempDir::new().unwrap();
    let output_dir = TempDir::new().unwrap();

    let settings = create_test_settings(
        input_dir.path(),
        output_dir.path(),
        vec![RotationSpec::new(Axis::X, 30)],
    );
    let result = pipeline::run(&settings).unwrap();

    assert_eq!(result.total_files, 0);
    assert_eq!(result.variants_written, 0);
}

#[test]
fn test_variant_round_trips_through_parser() {
    let input_dir = TempDir::new().unwrap();
    let output_dir = TempDir::new().unwrap();

    let rows = ["65;0.123;-0.456;0.789;10.5;-20.25;30.125"];
    write_test_recording(&input_dir.path().join("A_s01v01n0001p0a0f0.csv"), &rows, false);

    let settings = create_test_settings(
        input_dir.path(),
        output_dir.path(),
        vec![RotationSpec::new(Axis::Y, 60)],
    );
    pipeline::run(&settings).unwrap();

    // Rotating the variant back by -60 recovers the original vectors
    let original = read_recording(&input_dir.path().join("A_s01v01n0001p0a0f0.csv")).unwrap();
    let variant = read_recording(&output_dir.path().join("A_s01v01n0001p0ay+60f0.csv")).unwrap();

    let back = airaug::rotation::rotation_matrix(Axis::Y, -60.0);
    let restored = airaug::rotation::rotate_samples(&back, &variant.samples);

    for (a, b) in restored.iter().zip(&original.samples) {
        assert_eq!(a.label, b.label);
        assert!((a.acc - b.acc).norm() < 1e-9);
        assert!((a.gyr - b.gyr).norm() < 1e-9);
    }
}
