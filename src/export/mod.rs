//! Run report export

pub mod report;

pub use report::write_report;
