/// Verdict records — one per scanned file — and the ordered scan result.
use crate::analysis::FileKind;
use compact_str::CompactString;
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

/// Displayed in place of a declared extension when the name has none.
pub const NO_EXTENSION: &str = "none";
/// Displayed in place of a detected extension when no signature matched.
pub const UNKNOWN_EXTENSION: &str = "unknown";

/// Classification outcome. Exactly one holds per file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Status {
    /// The signature matches the declared extension.
    Normal,
    /// The signature was recognised and does not match the declared extension.
    Masquerading,
    /// No known signature matched.
    Unrecognized,
}

impl Status {
    /// Human-readable label for display.
    pub fn label(self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::Masquerading => "Masquerading",
            Self::Unrecognized => "Unrecognized",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Filesystem attributes and digests for one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileMetadata {
    pub size_bytes: u64,
    /// Local time, `YYYY-MM-DD HH:MM:SS`.
    pub created_at: String,
    /// Local time, `YYYY-MM-DD HH:MM:SS`.
    pub modified_at: String,
    pub hash_md5: String,
    pub hash_sha256: String,
}

/// The classification record for a single file.
#[derive(Debug, Clone, Serialize)]
pub struct FileVerdict {
    /// Full path as discovered by the walker.
    pub path: PathBuf,
    /// Base name of the file.
    pub name: CompactString,
    /// Lowercased extension from the name, `None` when the name has none.
    pub declared_extension: Option<CompactString>,
    /// Signature match, `None` when no entry in the table matched.
    pub detected: Option<FileKind>,
    pub status: Status,
    pub metadata: FileMetadata,
}

impl FileVerdict {
    /// Declared extension, or [`NO_EXTENSION`].
    pub fn declared_label(&self) -> &str {
        self.declared_extension.as_deref().unwrap_or(NO_EXTENSION)
    }

    /// Canonical extension of the detected kind, if any.
    pub fn detected_extension(&self) -> Option<&'static str> {
        self.detected.map(|k| k.extension)
    }

    /// Detected extension, or [`UNKNOWN_EXTENSION`].
    pub fn detected_label(&self) -> &'static str {
        self.detected_extension().unwrap_or(UNKNOWN_EXTENSION)
    }

    /// Media type of the detected kind, if any.
    pub fn detected_mime(&self) -> Option<&'static str> {
        self.detected.map(|k| k.mime)
    }

    /// True for anything other than `Normal` — these files get the
    /// expanded metadata block in reports.
    pub fn is_flagged(&self) -> bool {
        self.status != Status::Normal
    }
}

/// A file that was enumerated but could not be classified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileError {
    pub path: PathBuf,
    /// Underlying cause (permission denied, not found, ...).
    pub message: String,
}

/// Ordered output of one scan. Built once by the walker, then read-only.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ScanResult {
    /// Verdicts in discovery order.
    pub verdicts: Vec<FileVerdict>,
    /// Files skipped because they could not be read.
    pub errors: Vec<FileError>,
    /// Number of files enumerated in the first pass.
    pub total_files: usize,
}

impl ScanResult {
    pub fn len(&self) -> usize {
        self.verdicts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.verdicts.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FileVerdict> {
        self.verdicts.iter()
    }

    /// Number of verdicts with the given status.
    pub fn count(&self, status: Status) -> usize {
        self.verdicts.iter().filter(|v| v.status == status).count()
    }

    /// Verdicts whose status is not `Normal`, in discovery order.
    pub fn flagged(&self) -> impl Iterator<Item = &FileVerdict> {
        self.verdicts.iter().filter(|v| v.is_flagged())
    }
}

impl<'a> IntoIterator for &'a ScanResult {
    type Item = &'a FileVerdict;
    type IntoIter = std::slice::Iter<'a, FileVerdict>;

    fn into_iter(self) -> Self::IntoIter {
        self.verdicts.iter()
    }
}
