//! Unmask Core — signature sniffing, hashing, and classification.
//!
//! This crate contains all detection logic with zero UI dependencies.
//! It is designed to be reusable across different frontends (CLI, GUI, TUI).
//!
//! # Modules
//!
//! - [`model`] — Verdict records and scan results.
//! - [`probe`] — Content digests and filesystem metadata for a single file.
//! - [`analysis`] — Signature table, type sniffing, and status classification.
//! - [`scanner`] — Corpus walking with progress reporting, plus a background runner.
//! - [`config`] — Scan options.
//! - [`error`] — Error types shared by the modules above.

pub mod analysis;
pub mod config;
pub mod error;
pub mod model;
pub mod probe;
pub mod scanner;

pub use config::{ErrorPolicy, ScanOptions};
pub use error::ScanError;
pub use model::{FileError, FileMetadata, FileVerdict, ScanResult, Status};
