/// Scan progress reporting — messages sent from the scan thread to the
/// caller's thread via a crossbeam channel.
use crate::error::ScanError;
use crate::model::ScanResult;
use std::path::PathBuf;
use std::time::Duration;

/// Progress updates sent from the scan thread.
#[derive(Debug)]
pub enum ScanProgress {
    /// One more file has been classified (or skipped under
    /// [`ErrorPolicy::Continue`](crate::ErrorPolicy::Continue)).
    Update {
        completed: usize,
        total: usize,
        current_path: PathBuf,
    },
    /// A non-fatal error: a file or directory that could not be read. The
    /// scan goes on and the same record appears in the final result.
    Error { path: PathBuf, message: String },
    /// Scanning completed. Carries the full result.
    Complete {
        result: ScanResult,
        duration: Duration,
    },
    /// The scan stopped on an error (missing root, or a per-file error under
    /// [`ErrorPolicy::Abort`](crate::ErrorPolicy::Abort)).
    Failed(ScanError),
    /// Scan was cancelled by the caller.
    Cancelled,
}
