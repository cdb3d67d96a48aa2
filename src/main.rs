//! Unmask — find files whose extension lies about their content.
//!
//! Thin binary entry point. Detection lives in `unmask-core` and report
//! rendering in `unmask-report`; this file parses arguments, runs the scan
//! on a worker thread, and draws progress while it waits.

use anyhow::{bail, Context};
use clap::{Parser, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use unmask_core::analysis::{ScanSummary, KINDS};
use unmask_core::scanner::progress::ScanProgress;
use unmask_core::scanner::start_scan;
use unmask_core::{ErrorPolicy, ScanError, ScanOptions, ScanResult};
use unmask_report::ReportFormat;

/// Scan a file or folder for files disguised behind a false extension.
#[derive(Debug, Parser)]
#[command(name = "unmask", version, about)]
struct Cli {
    /// File or directory to scan.
    #[arg(required_unless_present = "list_signatures")]
    path: Option<PathBuf>,

    /// Report format printed to stdout.
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Also save the report into this directory under a timestamped name.
    #[arg(long, value_name = "DIR")]
    save: Option<PathBuf>,

    /// Descend into symlinked directories.
    #[arg(long)]
    follow_links: bool,

    /// Stop at the first unreadable file instead of skipping it.
    #[arg(long)]
    fail_fast: bool,

    /// Accept well-known alternative extensions (`.jpeg`, `.tiff`, `.jar`)
    /// as matching the detected type.
    #[arg(long)]
    accept_aliases: bool,

    /// Do not draw the progress bar.
    #[arg(short, long)]
    quiet: bool,

    /// Log per-file decisions.
    #[arg(short, long)]
    verbose: bool,

    /// Exit with status 1 when any file is masquerading or unrecognized.
    #[arg(long)]
    strict: bool,

    /// Print the detectable types and exit.
    #[arg(long)]
    list_signatures: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Csv,
    Json,
}

impl From<Format> for ReportFormat {
    fn from(f: Format) -> Self {
        match f {
            Format::Text => ReportFormat::Text,
            Format::Csv => ReportFormat::Csv,
            Format::Json => ReportFormat::Json,
        }
    }
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    // Initialise structured logging. Logs go to stderr so stdout carries only
    // the report.
    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .init();

    if cli.list_signatures {
        print_signatures();
        return Ok(ExitCode::SUCCESS);
    }
    let Some(root) = cli.path.clone() else {
        bail!("no path given");
    };

    let options = ScanOptions::default()
        .follow_links(cli.follow_links)
        .accept_aliases(cli.accept_aliases)
        .error_policy(if cli.fail_fast {
            ErrorPolicy::Abort
        } else {
            ErrorPolicy::Continue
        });

    let result = run_scan(root, options, !cli.quiet)?;

    let format = ReportFormat::from(cli.format);
    let report = unmask_report::render(&result, format, chrono::Local::now())
        .context("failed to render report")?;
    io::stdout()
        .write_all(report.as_bytes())
        .context("failed to write report to stdout")?;

    if let Some(dir) = &cli.save {
        let path = unmask_report::save_report(&result, format, dir)
            .with_context(|| format!("failed to save report into {}", dir.display()))?;
        eprintln!("Report saved to {}", path.display());
    }

    let summary = ScanSummary::from_result(&result);
    if cli.strict && summary.has_findings() {
        return Ok(ExitCode::from(1));
    }
    Ok(ExitCode::SUCCESS)
}

/// Run the scan on the background thread and wait for its result, drawing a
/// progress bar on stderr as updates arrive.
fn run_scan(root: PathBuf, options: ScanOptions, show_progress: bool) -> anyhow::Result<ScanResult> {
    tracing::info!("Unmask scanning {}", root.display());
    let handle = start_scan(root.clone(), options).context("failed to start scanner thread")?;

    let pb = progress_bar(show_progress)?;
    let mut skipped = 0usize;
    for message in handle.progress_rx.iter() {
        match message {
            ScanProgress::Update { .. } | ScanProgress::Error { .. } => {
                track(&pb, &message, &mut skipped);
            }
            ScanProgress::Complete { result, duration } => {
                pb.finish_and_clear();
                tracing::info!("Scanned {} files in {duration:?}", result.total_files);
                return Ok(result);
            }
            ScanProgress::Failed(ScanError::PathNotFound(path)) => {
                pb.finish_and_clear();
                bail!("path not found: {}", path.display());
            }
            ScanProgress::Failed(err) => {
                pb.finish_and_clear();
                return Err(err).with_context(|| format!("scan of {} failed", root.display()));
            }
            ScanProgress::Cancelled => {
                pb.finish_and_clear();
                bail!("scan cancelled");
            }
        }
    }
    pb.finish_and_clear();
    bail!("scanner thread exited without a result")
}

/// The scan progress bar. Hidden for `--quiet`; indicatif also keeps it
/// hidden when stderr is not a terminal.
fn progress_bar(visible: bool) -> anyhow::Result<ProgressBar> {
    let pb = if visible {
        ProgressBar::new(0)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("Scanning... [{bar:40.cyan/blue}] ({pos}/{len}) files {percent:>3}% {msg}")?
            .progress_chars("=>-"),
    );
    Ok(pb)
}

/// Reflect an in-flight message on the bar. Final messages are left to the
/// caller.
fn track(pb: &ProgressBar, message: &ScanProgress, skipped: &mut usize) {
    match message {
        ScanProgress::Update {
            completed, total, ..
        } => {
            pb.set_length(*total as u64);
            pb.set_position(*completed as u64);
        }
        ScanProgress::Error { path, message } => {
            *skipped += 1;
            tracing::debug!("Unreadable: {} ({message})", path.display());
            pb.set_message(format!("{skipped} unreadable"));
        }
        _ => {}
    }
}

fn print_signatures() {
    for kind in KINDS {
        if kind.aliases.is_empty() {
            println!("{:<7} {}", kind.extension, kind.mime);
        } else {
            println!(
                "{:<7} {}  (also: {})",
                kind.extension,
                kind.mime,
                kind.aliases.join(", ")
            );
        }
    }
}
