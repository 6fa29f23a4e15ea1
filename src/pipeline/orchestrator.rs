//! Batch pipeline orchestration
//!
//! Coordinates recording discovery, parallel per-recording augmentation,
//! and the run report. Recordings are independent of each other, so the
//! batch fans out across a rayon pool with one recording per task; the
//! per-recording core holds no state that survives across recordings.

use crate::augment;
use crate::config::Settings;
use crate::discovery::{self, DiscoveredFile};
use crate::error::{AiraugError, Result};
use crate::export;
use crate::recording::read_recording;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, error, info, warn};

/// Pipeline result summary
#[derive(Debug)]
pub struct PipelineResult {
    pub total_files: usize,
    pub successful: usize,
    pub failed: usize,
    pub variants_written: usize,
}

/// Tagged outcome of one recording's run, aggregated by the driver and
/// serialized into the run report. A failure on one recording never aborts
/// the batch.
#[derive(Debug)]
pub struct FileRecord {
    pub path: PathBuf,
    pub variants_written: usize,
    pub errors: Vec<String>,
}

impl FileRecord {
    /// A record is successful when every configured variant was written
    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Run the full augmentation pipeline
pub fn run(settings: &Settings) -> Result<PipelineResult> {
    let pipeline_start = Instant::now();

    configure_thread_pool(settings.threads)?;

    // Phase 1: Discovery
    let discovery_start = Instant::now();
    info!("Scanning for recordings...");
    let files = discovery::scan(&settings.input, settings.recursive)?;

    if files.is_empty() {
        return Ok(PipelineResult {
            total_files: 0,
            successful: 0,
            failed: 0,
            variants_written: 0,
        });
    }

    info!(
        "Found {} recordings in {:.2}s",
        files.len(),
        discovery_start.elapsed().as_secs_f64()
    );

    // Dry run mode - show recordings and exit
    if settings.dry_run {
        return run_dry_run(&files, settings);
    }

    std::fs::create_dir_all(&settings.output)
        .map_err(|e| AiraugError::output_error(&settings.output, e))?;

    // Phase 2: Augmentation
    let augment_start = Instant::now();
    info!(
        "Augmenting {} recordings with {} rotation specs each",
        files.len(),
        settings.specs.len()
    );

    let progress_bar = if settings.show_progress {
        let pb = ProgressBar::new(files.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("=>-"),
        );
        Some(pb)
    } else {
        None
    };

    let records: Vec<FileRecord> = files
        .par_iter()
        .map(|file| {
            let record = process_recording(file, settings);
            if let Some(ref pb) = progress_bar {
                pb.inc(1);
                pb.set_message(
                    file.path
                        .file_name()
                        .unwrap_or_default()
                        .to_string_lossy()
                        .to_string(),
                );
            }
            record
        })
        .collect();

    if let Some(pb) = progress_bar {
        pb.finish_with_message("Augmentation complete");
    }

    info!(
        "Augmentation completed in {:.2}s",
        augment_start.elapsed().as_secs_f64()
    );

    // Phase 3: Run report
    if settings.write_report {
        let report_path = settings.output.join("airaug_report.json");
        export::write_report(&records, &report_path)?;
    }

    info!(
        "Total pipeline time: {:.2}s",
        pipeline_start.elapsed().as_secs_f64()
    );

    let successful = records.iter().filter(|r| r.is_success()).count();
    let variants_written = records.iter().map(|r| r.variants_written).sum();

    Ok(PipelineResult {
        total_files: records.len(),
        successful,
        failed: records.len() - successful,
        variants_written,
    })
}

/// Process one recording: parse, augment, tag the outcome
fn process_recording(file: &DiscoveredFile, settings: &Settings) -> FileRecord {
    debug!("Processing: {}", file.path.display());

    let recording = match read_recording(&file.path) {
        Ok(rec) => rec,
        Err(e) => {
            report_failure(&file.path, &e);
            return FileRecord {
                path: file.path.clone(),
                variants_written: 0,
                errors: vec![e.to_string()],
            };
        }
    };

    match augment::augment_recording(
        &file.path,
        &recording,
        &settings.specs,
        &settings.output,
        settings.write_bom,
    ) {
        Ok(report) => {
            debug!(
                "Augmented {}: {} variants",
                file.path.display(),
                report.variants_written
            );
            FileRecord {
                path: file.path.clone(),
                variants_written: report.variants_written,
                errors: report
                    .spec_failures
                    .iter()
                    .map(|f| format!("{}: {}", f.spec, f.reason))
                    .collect(),
            }
        }
        Err(e) => {
            report_failure(&file.path, &e);
            FileRecord {
                path: file.path.clone(),
                variants_written: 0,
                errors: vec![e.to_string()],
            }
        }
    }
}

fn report_failure(path: &std::path::Path, err: &AiraugError) {
    if err.is_recoverable() {
        warn!("Skipping {}: {}", path.display(), err);
    } else {
        error!("Failed {}: {}", path.display(), err);
    }
}

/// Dry run mode - show recordings that would be augmented without processing
fn run_dry_run(files: &[DiscoveredFile], settings: &Settings) -> Result<PipelineResult> {
    use std::collections::HashMap;

    println!();
    println!("=== DRY RUN MODE ===");
    println!();

    // Group files by directory
    let mut by_directory: HashMap<PathBuf, Vec<&DiscoveredFile>> = HashMap::new();
    for file in files {
        let dir = file.path.parent().unwrap_or(&file.path).to_path_buf();
        by_directory.entry(dir).or_default().push(file);
    }

    let mut directories: Vec<_> = by_directory.keys().cloned().collect();
    directories.sort();

    for dir in &directories {
        let dir_files = &by_directory[dir];
        println!("{}/ ({} files)", dir.display(), dir_files.len());
        for file in dir_files {
            let filename = file
                .path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or("?");
            println!("  {}", filename);
        }
        println!();
    }

    println!("─────────────────────────────────────────");
    println!();
    println!(
        "Would augment {} recordings with {} rotation specs each:",
        files.len(),
        settings.specs.len()
    );
    let tokens: Vec<String> = settings.specs.iter().map(|s| s.token()).collect();
    println!("  {}", tokens.join(", "));
    println!();
    println!(
        "Would create {} files in {}/",
        files.len() * settings.specs.len(),
        settings.output.display()
    );
    println!();

    Ok(PipelineResult {
        total_files: files.len(),
        successful: 0,
        failed: 0,
        variants_written: 0,
    })
}

/// Configure the Rayon thread pool
fn configure_thread_pool(num_threads: usize) -> Result<()> {
    match rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .build_global()
    {
        Ok(()) => {
            debug!("Configured thread pool with {} threads", num_threads);
        }
        Err(e) => {
            // If the pool is already initialized (e.g., in tests), that's OK
            if e.to_string().contains("already been initialized") {
                debug!("Thread pool already initialized, using existing pool");
            } else {
                return Err(AiraugError::Config(format!(
                    "Failed to configure thread pool: {}",
                    e
                )));
            }
        }
    }
    Ok(())
}
