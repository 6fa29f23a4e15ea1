//! CLI argument parsing and configuration

use clap::Parser;
use std::path::PathBuf;

/// airaug - Rotation-based augmentation for in-air handwriting IMU data
///
/// Scans a directory of AirChar-format CSV recordings and writes rotated
/// variants of each one, rewriting the metadata header and encoding the
/// applied rotation in the output filename.
#[derive(Parser, Debug)]
#[command(name = "airaug")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Input path (recording file or directory)
    #[arg(short, long, value_name = "PATH")]
    pub input: PathBuf,

    /// Output directory for augmented recordings
    #[arg(short, long, value_name = "DIR")]
    pub output: PathBuf,

    /// Rotation axes to exercise (comma-separated subset of x,y,z)
    #[arg(long, value_name = "AXES", value_delimiter = ',')]
    #[arg(value_parser = ["x", "y", "z"], default_value = "x")]
    pub axes: Vec<String>,

    /// Rotation angles in signed degrees (comma-separated; 0 is skipped).
    /// Defaults to -90..90 in 10 degree steps
    #[arg(long, value_name = "DEGREES", value_delimiter = ',', allow_negative_numbers = true)]
    pub angles: Option<Vec<i32>>,

    /// Number of worker threads (defaults to CPU count - 1)
    #[arg(short = 'j', long, value_name = "N")]
    pub threads: Option<usize>,

    /// Scan subdirectories recursively
    #[arg(short, long, default_value = "true")]
    pub recursive: bool,

    /// Write a UTF-8 byte-order marker at the start of each output file
    #[arg(long, default_value = "false")]
    pub bom: bool,

    /// Write a JSON run report next to the augmented recordings
    #[arg(long, default_value = "true")]
    pub report: bool,

    /// Verbose output (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (suppress progress bars)
    #[arg(short, long, default_value = "false")]
    pub quiet: bool,

    /// Dry run - show recordings that would be augmented without processing
    #[arg(long, default_value = "false")]
    pub dry_run: bool,
}
