/// Corpus walker — enumerate every file under a root, then classify them in
/// order.
///
/// The walk is two-pass: a full enumeration first, so the progress callback
/// can report an accurate total, then classification. Both passes are
/// sequential on the calling thread; use [`start_scan`](super::start_scan) to
/// run a walk in the background.
///
/// Enumeration uses `jwalk` in serial mode with sorting on, which yields a
/// depth-first walk with each directory's entries in lexicographic order.
/// The verdict order is therefore reproducible on an unchanged tree.
use crate::analysis::classify_with;
use crate::config::{ErrorPolicy, ScanOptions};
use crate::error::ScanError;
use crate::model::{FileError, ScanResult};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;
use tracing::{debug, info, warn};

/// Something the walker reports while it runs.
#[derive(Debug, Clone, Copy)]
pub enum WalkEvent<'a> {
    /// `path` has been classified, or skipped under
    /// [`ErrorPolicy::Continue`]. `completed` counts up from 1 to `total`.
    Progress {
        completed: usize,
        total: usize,
        path: &'a Path,
    },
    /// A file or directory could not be read. The same record ends up in
    /// [`ScanResult::errors`].
    Skipped(&'a FileError),
}

/// Walk `root` and classify every file.
///
/// `on_progress(completed, total)` runs after each file, with `completed`
/// counting up from 1 to `total`. An empty directory produces no calls.
///
/// Fails with [`ScanError::PathNotFound`] before doing any work when `root`
/// does not exist.
pub fn walk<F>(root: &Path, options: &ScanOptions, mut on_progress: F) -> Result<ScanResult, ScanError>
where
    F: FnMut(usize, usize),
{
    walk_until(root, options, &AtomicBool::new(false), |event| {
        if let WalkEvent::Progress { completed, total, .. } = event {
            on_progress(completed, total);
        }
    })
}

/// Like [`walk`], but reports every [`WalkEvent`], checks `cancel` before
/// each file, and returns [`ScanError::Cancelled`] once it is set.
pub fn walk_until<F>(
    root: &Path,
    options: &ScanOptions,
    cancel: &AtomicBool,
    mut on_event: F,
) -> Result<ScanResult, ScanError>
where
    F: FnMut(WalkEvent<'_>),
{
    let root_meta = match fs::metadata(root) {
        Ok(meta) => meta,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            return Err(ScanError::PathNotFound(root.to_path_buf()));
        }
        Err(err) => return Err(ScanError::io(root, err)),
    };
    if !root_meta.is_dir() && !root_meta.is_file() {
        return Err(ScanError::io(
            root,
            io::Error::new(io::ErrorKind::InvalidInput, "not a regular file or directory"),
        ));
    }

    let start = Instant::now();
    info!("Starting scan of {}", root.display());

    let mut result = ScanResult::default();
    let files = if root_meta.is_dir() {
        enumerate(root, options, &mut result.errors, &mut on_event)
    } else {
        vec![root.to_path_buf()]
    };
    let total = files.len();
    result.total_files = total;
    debug!("Enumerated {total} files in {:?}", start.elapsed());

    for (i, path) in files.iter().enumerate() {
        if cancel.load(Ordering::Relaxed) {
            info!("Scan cancelled after {i} of {total} files");
            return Err(ScanError::Cancelled);
        }

        match classify_with(path, options) {
            Ok(verdict) => result.verdicts.push(verdict),
            Err(err) if options.error_policy == ErrorPolicy::Abort => return Err(err),
            Err(err) => {
                warn!("Skipping unreadable file: {err}");
                let error = skipped(path, err);
                on_event(WalkEvent::Skipped(&error));
                result.errors.push(error);
            }
        }

        on_event(WalkEvent::Progress {
            completed: i + 1,
            total,
            path,
        });
    }

    info!(
        "Scan complete: {} classified, {} skipped in {:?}",
        result.verdicts.len(),
        result.errors.len(),
        start.elapsed()
    );
    Ok(result)
}

/// First pass: collect candidate file paths under `root`.
///
/// Directories are descended. Regular files are kept, and so are symlinks
/// whose target is a regular file or missing. FIFOs, sockets and devices,
/// reached directly or through a link, are dropped since opening them can
/// block. Directories that cannot be listed are recorded in `errors`,
/// reported through `on_event`, and do not count toward the total.
fn enumerate<F>(
    root: &Path,
    options: &ScanOptions,
    errors: &mut Vec<FileError>,
    on_event: &mut F,
) -> Vec<PathBuf>
where
    F: FnMut(WalkEvent<'_>),
{
    let walker = jwalk::WalkDir::new(root)
        .sort(true)
        .skip_hidden(false)
        .follow_links(options.follow_links)
        .parallelism(jwalk::Parallelism::Serial);

    let mut files = Vec::new();
    for entry_result in walker {
        let entry = match entry_result {
            Ok(e) => e,
            Err(err) => {
                let path = err
                    .path()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| root.to_path_buf());
                warn!("Cannot enumerate {}: {err}", path.display());
                let error = FileError {
                    path,
                    message: err.to_string(),
                };
                on_event(WalkEvent::Skipped(&error));
                errors.push(error);
                continue;
            }
        };

        let file_type = entry.file_type();
        if file_type.is_dir() {
            continue;
        }

        let path = entry.path();
        if file_type.is_file() || (file_type.is_symlink() && links_to_file(&path)) {
            files.push(path);
        } else {
            debug!("Skipping {}: not a regular file", path.display());
        }
    }
    files
}

/// A symlink worth classifying: its target is a regular file, or it dangles
/// and the read failure gets recorded later.
fn links_to_file(path: &Path) -> bool {
    fs::metadata(path).map_or(true, |m| m.is_file())
}

/// Turn a per-file error into a skipped-file record, keeping only the cause
/// in the message since the path is stored alongside.
fn skipped(path: &Path, err: ScanError) -> FileError {
    let message = match err {
        ScanError::Io { source, .. } => source.to_string(),
        other => other.to_string(),
    };
    FileError {
        path: path.to_path_buf(),
        message,
    }
}
