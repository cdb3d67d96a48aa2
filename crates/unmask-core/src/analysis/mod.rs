//! Analysis modules — content sniffing, classification, and post-scan totals.

pub mod classify;
pub mod signatures;
pub mod sniff;
pub mod summary;

pub use classify::{classify, classify_with, decide_status, declared_extension};
pub use signatures::{kind_for_extension, FileKind, Signature, KINDS, SIGNATURES};
pub use sniff::{read_prefix, sniff_bytes, sniff_file, SNIFF_LEN};
pub use summary::ScanSummary;
