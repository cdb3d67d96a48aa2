/// Per-file probes — content digests and filesystem attributes.
///
/// Both probes work on a single path and fail with a plain `io::Error`;
/// the classifier attaches the path when it wraps them into a `ScanError`.
pub mod hash;
pub mod metadata;

pub use hash::{hash_file, Digests, HashAlgorithm};
pub use metadata::{format_timestamp, read_metadata, FileStat, TIMESTAMP_FORMAT};
