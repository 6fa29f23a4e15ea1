//! airaug - Rotation-Based Augmentation for In-Air Handwriting IMU Data
//!
//! A command-line utility that enlarges an AirChar-format training corpus
//! by synthesizing rotated variants of each recording: every sample's
//! acceleration and angular-rate vectors are rotated about a configured
//! axis, the metadata header is rewritten to record the rotation, and the
//! output filename encodes it.
//!
//! # Architecture
//!
//! The library is organized into several key modules:
//!
//! - `config`: CLI argument parsing and runtime settings
//! - `discovery`: Recording file scanning
//! - `recording`: AirChar format parsing and serialization
//! - `rotation`: Rotation matrices and batch vector rotation
//! - `augment`: Metadata rewriting, filename encoding, per-recording orchestration
//! - `pipeline`: Parallel batch orchestration
//! - `export`: JSON run report
//!
//! # Example
//!
//! ```no_run
//! use airaug::{config::Settings, pipeline};
//!
//! let settings = Settings::default();
//! let result = pipeline::run(&settings).expect("Augmentation failed");
//! println!("Wrote {} variants", result.variants_written);
//! ```

pub mod augment;
pub mod config;
pub mod discovery;
pub mod error;
pub mod export;
pub mod pipeline;
pub mod recording;
pub mod rotation;
pub mod types;

// Re-export key types at crate root
pub use error::{AiraugError, Result};
pub use types::{Axis, Recording, RotationSpec, Sample};
