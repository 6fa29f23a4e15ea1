//! Recording parsing and serialization (AirChar on-disk format)

pub mod parser;
pub mod writer;

pub use parser::{parse_recording, read_recording};
pub use writer::{serialize_recording, write_recording};
