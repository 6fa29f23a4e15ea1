//! Recording discovery and scanning

use crate::error::{AiraugError, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

/// File extension of AirChar recordings
const RECORDING_EXTENSION: &str = "csv";

/// Discovered recording file with basic metadata
#[derive(Debug, Clone)]
pub struct DiscoveredFile {
    pub path: PathBuf,
    pub size_bytes: u64,
}

/// Scan a path (file or directory) for recording files
pub fn scan(input: &Path, recursive: bool) -> Result<Vec<DiscoveredFile>> {
    if !input.exists() {
        return Err(AiraugError::FileNotFound(input.to_path_buf()));
    }

    let mut files = Vec::new();

    if input.is_file() {
        // Single file mode
        match try_discover_file(input) {
            Some(file) => files.push(file),
            None => {
                return Err(AiraugError::format_error(
                    input,
                    format!("not a .{} recording", RECORDING_EXTENSION),
                ));
            }
        }
    } else if input.is_dir() {
        // Directory mode
        let walker = if recursive {
            WalkDir::new(input)
        } else {
            WalkDir::new(input).max_depth(1)
        };

        for entry in walker.into_iter().filter_map(|e| e.ok()) {
            let path = entry.path();
            if path.is_file() {
                if let Some(file) = try_discover_file(path) {
                    debug!("Discovered: {}", file.path.display());
                    files.push(file);
                }
            }
        }
    }

    info!("Discovered {} recordings", files.len());

    if files.is_empty() {
        warn!("No .{} recordings found in {}", RECORDING_EXTENSION, input.display());
    }

    Ok(files)
}

/// Try to create a DiscoveredFile if the path looks like a recording
fn try_discover_file(path: &Path) -> Option<DiscoveredFile> {
    let ext = path.extension()?.to_str()?;
    if !ext.eq_ignore_ascii_case(RECORDING_EXTENSION) {
        return None;
    }

    let metadata = std::fs::metadata(path).ok()?;
    let size_bytes = metadata.len();

    Some(DiscoveredFile {
        path: path.to_path_buf(),
        size_bytes,
    })
}
