//! JSON run report for batch auditing
//!
//! Records, per input recording, how many variants were written and which
//! specs failed with what reason, so a silently empty output set can
//! always be traced back to a cause.

use crate::error::{AiraugError, Result};
use crate::pipeline::FileRecord;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use tracing::info;

/// JSON report schema version
const SCHEMA_VERSION: &str = "1.0";

/// Top-level report structure
#[derive(Debug, Serialize, Deserialize)]
pub struct RunReport {
    /// Schema version for forward compatibility
    pub version: String,
    /// Report metadata
    pub metadata: ReportMetadata,
    /// Per-recording outcomes
    pub files: Vec<FileJson>,
}

/// Report metadata
#[derive(Debug, Serialize, Deserialize)]
pub struct ReportMetadata {
    /// airaug version that generated this report
    pub generator_version: String,
    /// Timestamp of the run
    pub generated_at: String,
    /// Number of input recordings
    pub file_count: usize,
    /// Total augmented variants written
    pub variants_written: usize,
}

/// JSON representation of one recording's outcome
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileJson {
    /// Input recording path
    pub path: String,
    /// "ok" when every configured variant was written, "failed" otherwise
    pub status: String,
    /// Number of augmented variants written
    pub variants_written: usize,
    /// Error messages for variants or recordings that failed
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
}

/// Write the run report to a JSON file
///
/// Uses atomic write pattern: writes to a temp file first, then renames.
/// This prevents a truncated report if the write is interrupted.
pub fn write_report(records: &[FileRecord], output_path: &Path) -> Result<()> {
    let temp_path = output_path.with_extension("json.tmp");

    let file = File::create(&temp_path).map_err(|e| AiraugError::Output {
        path: output_path.to_path_buf(),
        reason: format!("Failed to create temp file: {}", e),
    })?;

    let writer = BufWriter::new(file);

    let report = RunReport {
        version: SCHEMA_VERSION.to_string(),
        metadata: ReportMetadata {
            generator_version: env!("CARGO_PKG_VERSION").to_string(),
            generated_at: chrono::Utc::now().to_rfc3339(),
            file_count: records.len(),
            variants_written: records.iter().map(|r| r.variants_written).sum(),
        },
        files: records.iter().map(record_to_json).collect(),
    };

    serde_json::to_writer_pretty(writer, &report).map_err(|e| {
        let _ = std::fs::remove_file(&temp_path);
        AiraugError::Output {
            path: output_path.to_path_buf(),
            reason: e.to_string(),
        }
    })?;

    // Atomic rename: either succeeds completely or fails without modifying target
    std::fs::rename(&temp_path, output_path).map_err(|e| {
        let _ = std::fs::remove_file(&temp_path);
        AiraugError::Output {
            path: output_path.to_path_buf(),
            reason: format!("Failed to finalize file: {}", e),
        }
    })?;

    info!(
        "Wrote report for {} recordings to {}",
        records.len(),
        output_path.display()
    );

    Ok(())
}

fn record_to_json(record: &FileRecord) -> FileJson {
    FileJson {
        path: record.path.to_string_lossy().to_string(),
        status: if record.is_success() { "ok" } else { "failed" }.to_string(),
        variants_written: record.variants_written,
        errors: record.errors.clone(),
    }
}
