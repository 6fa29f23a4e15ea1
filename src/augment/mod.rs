//! Augmentation core: metadata rewriting, filename derivation, and the
//! per-recording orchestrator

pub mod metadata;
pub mod naming;
pub mod orchestrator;

pub use metadata::rewrite_metadata;
pub use naming::augmented_filename;
pub use orchestrator::augment_recording;
