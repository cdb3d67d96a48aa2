/// File classification — combine sniffing, metadata, and digests into one
/// verdict per file.
use super::signatures::FileKind;
use super::sniff::{read_prefix, sniff_bytes};
use crate::config::ScanOptions;
use crate::error::ScanError;
use crate::model::{FileMetadata, FileVerdict, Status};
use crate::probe::{read_metadata, Digests};
use compact_str::CompactString;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Lowercased extension of `path`'s file name, `None` if there is none.
///
/// Dot-files (`.bashrc`) and names ending in a bare dot (`notes.`) have no
/// extension.
pub fn declared_extension(path: &Path) -> Option<CompactString> {
    let ext = path.extension()?.to_string_lossy();
    if ext.is_empty() {
        return None;
    }
    Some(CompactString::new(ext.to_lowercase()))
}

/// Apply the decision rule, in this order:
///
/// 1. nothing detected → `Unrecognized`
/// 2. declared extension differs from the detected one → `Masquerading`
/// 3. otherwise → `Normal`
///
/// The comparison is against the canonical extension unless
/// `accept_aliases` is set, in which case an alias such as `jpeg` also
/// matches. A missing declared extension never matches, so an extensionless
/// file with a recognised signature is `Masquerading`.
pub fn decide_status(
    declared: Option<&str>,
    detected: Option<&FileKind>,
    accept_aliases: bool,
) -> Status {
    let Some(kind) = detected else {
        return Status::Unrecognized;
    };
    let matches = declared.is_some_and(|ext| {
        if accept_aliases {
            kind.accepts_extension(ext)
        } else {
            kind.matches_extension(ext)
        }
    });
    if matches {
        Status::Normal
    } else {
        Status::Masquerading
    }
}

/// Classify a single file with default options.
pub fn classify(path: &Path) -> Result<FileVerdict, ScanError> {
    classify_with(path, &ScanOptions::default())
}

/// Classify a single file.
///
/// The file is opened once: the sniffed prefix and the rest of the content
/// feed both digests in the same pass. Fails with [`ScanError::Io`] if the
/// file cannot be read or stat'ed; no partial verdict is produced.
pub fn classify_with(path: &Path, options: &ScanOptions) -> Result<FileVerdict, ScanError> {
    let name = path
        .file_name()
        .map(|n| CompactString::new(n.to_string_lossy()))
        .unwrap_or_else(|| CompactString::new(path.to_string_lossy()));
    let declared_extension = declared_extension(path);

    let mut file = File::open(path).map_err(|e| ScanError::io(path, e))?;
    let prefix = read_prefix(&mut file).map_err(|e| ScanError::io(path, e))?;
    let detected = sniff_bytes(&prefix);
    let status = decide_status(
        declared_extension.as_deref(),
        detected.as_ref(),
        options.accept_aliases,
    );

    let digests =
        Digests::from_reader(prefix.as_slice().chain(file)).map_err(|e| ScanError::io(path, e))?;
    let stat = read_metadata(path).map_err(|e| ScanError::io(path, e))?;

    debug!(
        "{}: declared={} detected={} -> {status}",
        path.display(),
        declared_extension.as_deref().unwrap_or("-"),
        detected.map(|k| k.extension).unwrap_or("-"),
    );

    Ok(FileVerdict {
        path: path.to_path_buf(),
        name,
        declared_extension,
        detected,
        status,
        metadata: FileMetadata {
            size_bytes: stat.size_bytes,
            created_at: stat.created_at,
            modified_at: stat.modified_at,
            hash_md5: digests.md5,
            hash_sha256: digests.sha256,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::signatures::{JPG, PNG, TIF, ZIP};
    use crate::probe::{hash_file, HashAlgorithm};
    use std::fs;
    use tempfile::TempDir;

    const PNG_BYTES: &[u8] = b"\x89PNG\r\n\x1a\n\x00\x00\x00\rIHDR\x00\x00\x00\x01";
    const ZIP_BYTES: &[u8] = b"PK\x03\x04\x14\x00\x00\x00\x08\x00";

    fn write(tmp: &TempDir, name: &str, content: &[u8]) -> std::path::PathBuf {
        let path = tmp.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    // ── declared_extension ───────────────────────────────────────────────

    #[test]
    fn extension_is_lowercased() {
        assert_eq!(declared_extension(Path::new("IMG_001.JPG")).as_deref(), Some("jpg"));
        assert_eq!(declared_extension(Path::new("a/b/archive.tar.gz")).as_deref(), Some("gz"));
    }

    #[test]
    fn names_without_extension() {
        assert_eq!(declared_extension(Path::new("data")), None);
        assert_eq!(declared_extension(Path::new(".bashrc")), None);
        assert_eq!(declared_extension(Path::new("notes.")), None);
    }

    // ── decide_status ────────────────────────────────────────────────────

    #[test]
    fn unknown_signature_is_unrecognized_regardless_of_name() {
        for aliases in [false, true] {
            assert_eq!(decide_status(Some("txt"), None, aliases), Status::Unrecognized);
            assert_eq!(decide_status(None, None, aliases), Status::Unrecognized);
        }
    }

    #[test]
    fn mismatch_is_masquerading() {
        assert_eq!(decide_status(Some("jpg"), Some(&PNG), false), Status::Masquerading);
        assert_eq!(decide_status(Some("jpg"), Some(&PNG), true), Status::Masquerading);
    }

    #[test]
    fn canonical_match_is_normal() {
        assert_eq!(decide_status(Some("png"), Some(&PNG), false), Status::Normal);
        assert_eq!(decide_status(Some("JPG"), Some(&JPG), false), Status::Normal);
    }

    /// By default only the canonical extension counts, so `.jpeg` on a JPEG
    /// differs from the detected `jpg`.
    #[test]
    fn alias_is_masquerading_by_default() {
        assert_eq!(decide_status(Some("jpeg"), Some(&JPG), false), Status::Masquerading);
        assert_eq!(decide_status(Some("tiff"), Some(&TIF), false), Status::Masquerading);
    }

    #[test]
    fn alias_is_normal_when_accepted() {
        assert_eq!(decide_status(Some("jpeg"), Some(&JPG), true), Status::Normal);
        assert_eq!(decide_status(Some("tiff"), Some(&TIF), true), Status::Normal);
    }

    /// Chosen policy: an extensionless file with a known signature is hiding
    /// its type, so it is flagged.
    #[test]
    fn missing_extension_with_known_signature_is_masquerading() {
        assert_eq!(decide_status(None, Some(&ZIP), false), Status::Masquerading);
        assert_eq!(decide_status(None, Some(&ZIP), true), Status::Masquerading);
    }

    // ── classify ─────────────────────────────────────────────────────────

    #[test]
    fn png_named_jpg_is_masquerading() {
        let tmp = TempDir::new().unwrap();
        let path = write(&tmp, "holiday.jpg", PNG_BYTES);

        let v = classify(&path).unwrap();
        assert_eq!(v.name, "holiday.jpg");
        assert_eq!(v.declared_label(), "jpg");
        assert_eq!(v.detected_label(), "png");
        assert_eq!(v.status, Status::Masquerading);
        assert_eq!(v.metadata.size_bytes, PNG_BYTES.len() as u64);
        assert_eq!(v.metadata.hash_md5.len(), 32);
        assert_eq!(v.metadata.hash_sha256.len(), 64);
    }

    #[test]
    fn text_file_is_unrecognized() {
        let tmp = TempDir::new().unwrap();
        let path = write(&tmp, "notes.txt", b"shopping list\n- eggs\n- milk\n");

        let v = classify(&path).unwrap();
        assert_eq!(v.detected_label(), "unknown");
        assert_eq!(v.status, Status::Unrecognized);
    }

    #[test]
    fn zip_without_extension() {
        let tmp = TempDir::new().unwrap();
        let path = write(&tmp, "data", ZIP_BYTES);

        let v = classify(&path).unwrap();
        assert_eq!(v.declared_label(), "none");
        assert_eq!(v.detected_label(), "zip");
        assert_eq!(v.status, Status::Masquerading);
    }

    #[test]
    fn empty_file_is_unrecognized() {
        let tmp = TempDir::new().unwrap();
        let path = write(&tmp, "empty.png", b"");

        let v = classify(&path).unwrap();
        assert_eq!(v.detected, None);
        assert_eq!(v.status, Status::Unrecognized);
        assert_eq!(v.metadata.size_bytes, 0);
    }

    #[test]
    fn matching_file_is_normal() {
        let tmp = TempDir::new().unwrap();
        let path = write(&tmp, "LOGO.PNG", PNG_BYTES);

        let v = classify(&path).unwrap();
        assert_eq!(v.declared_label(), "png");
        assert_eq!(v.status, Status::Normal);
        assert!(!v.is_flagged());
    }

    #[test]
    fn jpeg_extension_follows_alias_option() {
        let tmp = TempDir::new().unwrap();
        let path = write(&tmp, "scan.jpeg", b"\xFF\xD8\xFF\xE0\x00\x10JFIF\x00");

        assert_eq!(classify(&path).unwrap().status, Status::Masquerading);
        let lenient = ScanOptions::default().accept_aliases(true);
        assert_eq!(classify_with(&path, &lenient).unwrap().status, Status::Normal);
    }

    /// Digests taken during classification match hashing the file directly,
    /// including content that extends past the sniffed prefix.
    #[test]
    fn digests_cover_whole_file() {
        let tmp = TempDir::new().unwrap();
        let mut content = PNG_BYTES.to_vec();
        content.extend((0..20_000u32).map(|i| (i % 241) as u8));
        let path = write(&tmp, "large.png", &content);

        let v = classify(&path).unwrap();
        assert_eq!(v.metadata.hash_md5, hash_file(&path, HashAlgorithm::Md5).unwrap());
        assert_eq!(v.metadata.hash_sha256, hash_file(&path, HashAlgorithm::Sha256).unwrap());
        assert_eq!(v.metadata.size_bytes, content.len() as u64);
    }

    #[test]
    fn unreadable_path_fails_with_io_error() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("vanished.pdf");

        match classify(&missing) {
            Err(ScanError::Io { path, source }) => {
                assert_eq!(path, missing);
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("expected Io error, got {other:?}"),
        }
    }

    #[test]
    fn directory_fails_with_io_error() {
        let tmp = TempDir::new().unwrap();
        assert!(matches!(classify(tmp.path()), Err(ScanError::Io { .. })));
    }
}
