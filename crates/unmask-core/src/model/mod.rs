//! Data model for scan output.
//!
//! Re-exports the per-file verdict record and the ordered scan result.

pub mod size;
pub mod verdict;

pub use verdict::{FileError, FileMetadata, FileVerdict, ScanResult, Status};
