/// Filesystem attributes: size and local-time timestamps.
use chrono::{DateTime, Local};
use std::fs;
use std::io;
use std::path::Path;
use std::time::SystemTime;
use tracing::debug;

/// Timestamp layout used everywhere a time is shown.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Size and timestamps of one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileStat {
    pub size_bytes: u64,
    pub created_at: String,
    pub modified_at: String,
}

/// Stat `path` (following symlinks) and format its timestamps in local time.
///
/// Platforms or filesystems that do not record a creation time report the
/// modification time in `created_at`.
pub fn read_metadata(path: &Path) -> io::Result<FileStat> {
    let meta = fs::metadata(path)?;
    let modified = meta.modified()?;
    let created = match meta.created() {
        Ok(t) => t,
        Err(err) => {
            debug!("No creation time for {}: {err}", path.display());
            modified
        }
    };

    Ok(FileStat {
        size_bytes: meta.len(),
        created_at: format_timestamp(created),
        modified_at: format_timestamp(modified),
    })
}

/// Format a `SystemTime` as local wall-clock time, second precision.
pub fn format_timestamp(time: SystemTime) -> String {
    DateTime::<Local>::from(time)
        .format(TIMESTAMP_FORMAT)
        .to_string()
}
