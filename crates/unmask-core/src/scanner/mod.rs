//! Scanner module — walks a corpus and classifies every file.
//!
//! [`walk`] is the synchronous core: it runs on the caller's thread and
//! reports progress through a callback. [`start_scan`] wraps it for
//! interactive frontends, running the walk on a named background thread and
//! forwarding progress over a bounded channel so the caller's thread stays
//! free to redraw.

pub mod progress;
pub mod walk;

pub use walk::{walk, walk_until, WalkEvent};

use crate::config::ScanOptions;
use crate::error::ScanError;
use progress::ScanProgress;

use crossbeam_channel::Receiver;
use std::io;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Instant;
use tracing::info;

/// Maximum number of progress messages that may queue up in the channel.
///
/// One `Update` is sent per file, plus one `Error` per unreadable entry. If
/// the receiver falls behind, the scanner stalls rather than consuming
/// unbounded heap.
pub const PROGRESS_CHANNEL_CAPACITY: usize = 4_096;

/// Handle to a running or completed scan. Allows cancellation and
/// receiving progress updates.
pub struct ScanHandle {
    /// Receiver for progress updates from the scan thread. The last message
    /// is always `Complete`, `Failed`, or `Cancelled`.
    pub progress_rx: Receiver<ScanProgress>,
    /// Flag to request cancellation.
    cancel_flag: Arc<AtomicBool>,
    /// Join handle for the scan thread.
    _thread: Option<thread::JoinHandle<()>>,
}

impl ScanHandle {
    /// Request the scan to stop before the next file.
    pub fn cancel(&self) {
        self.cancel_flag.store(true, Ordering::Relaxed);
    }

    /// Check whether cancellation has been requested.
    pub fn is_cancelled(&self) -> bool {
        self.cancel_flag.load(Ordering::Relaxed)
    }
}

/// Start a new scan on a background thread.
///
/// Returns a `ScanHandle` for receiving progress and requesting
/// cancellation. Fails only if the thread cannot be spawned.
pub fn start_scan(root_path: PathBuf, options: ScanOptions) -> io::Result<ScanHandle> {
    let (progress_tx, progress_rx) =
        crossbeam_channel::bounded::<ScanProgress>(PROGRESS_CHANNEL_CAPACITY);
    let cancel_flag = Arc::new(AtomicBool::new(false));
    let cancel_clone = cancel_flag.clone();

    let thread = thread::Builder::new()
        .name("unmask-scanner".into())
        .spawn(move || {
            let start = Instant::now();
            let outcome = walk_until(&root_path, &options, &cancel_clone, |event| {
                let message = match event {
                    WalkEvent::Progress {
                        completed,
                        total,
                        path,
                    } => ScanProgress::Update {
                        completed,
                        total,
                        current_path: path.to_path_buf(),
                    },
                    WalkEvent::Skipped(error) => ScanProgress::Error {
                        path: error.path.clone(),
                        message: error.message.clone(),
                    },
                };
                let _ = progress_tx.send(message);
            });

            let last = match outcome {
                Ok(result) => ScanProgress::Complete {
                    result,
                    duration: start.elapsed(),
                },
                Err(ScanError::Cancelled) => ScanProgress::Cancelled,
                Err(err) => {
                    info!("Scan of {} failed: {err}", root_path.display());
                    ScanProgress::Failed(err)
                }
            };
            let _ = progress_tx.send(last);
        })?;

    Ok(ScanHandle {
        progress_rx,
        cancel_flag,
        _thread: Some(thread),
    })
}
