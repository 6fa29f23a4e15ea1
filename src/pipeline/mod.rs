//! Batch pipeline orchestration

pub mod orchestrator;

pub use orchestrator::{run, FileRecord, PipelineResult};
