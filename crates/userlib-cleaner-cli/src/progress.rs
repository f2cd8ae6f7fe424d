use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, Write};
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use tracing::{debug, info, warn};
use userlib_cleaner_core::cleanup::CleanupSummary;
use userlib_cleaner_core::resolver::KeepReason;
use userlib_cleaner_core::{ArchiveRecord, ProgressReporter};

/// Spinner currently drawn on stderr, if any.
static ACTIVE_BAR: Mutex<Option<ProgressBar>> = Mutex::new(None);

fn active_bar() -> Option<ProgressBar> {
    ACTIVE_BAR.lock().ok().and_then(|guard| guard.clone())
}

/// Stderr writer for the log layer that hides the active spinner while a
/// line is written, so log output and the spinner do not interleave.
#[derive(Default)]
pub struct BarAwareStderr;

impl Write for BarAwareStderr {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match active_bar() {
            Some(pb) => pb.suspend(|| io::stderr().write_all(buf))?,
            None => io::stderr().write_all(buf)?,
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stderr().flush()
    }
}

/// CLI progress reporter.
///
/// - Listing phase: spinner showing the archive being parsed
/// - Resolve and cleanup phases: one log line per decision
pub struct CliReporter {
    destructive: AtomicBool,
}

impl CliReporter {
    pub fn new() -> Self {
        Self {
            destructive: AtomicBool::new(false),
        }
    }

    fn finish_bar(&self) {
        if let Ok(mut guard) = ACTIVE_BAR.lock() {
            if let Some(pb) = guard.take() {
                pb.finish_and_clear();
            }
        }
    }
}

impl ProgressReporter for CliReporter {
    fn on_listing_start(&self, _dir: &Path) {
        let pb = ProgressBar::new_spinner();
        let style = ProgressStyle::with_template("{spinner:.cyan} [{pos}] {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏");
        pb.set_style(style);
        pb.set_message("Parsing JARs...");
        pb.enable_steady_tick(std::time::Duration::from_millis(80));
        if let Ok(mut guard) = ACTIVE_BAR.lock() {
            if let Some(old) = guard.replace(pb) {
                old.finish_and_clear();
            }
        }
    }

    fn on_archive_start(&self, path: &Path) {
        let name = path
            .file_name()
            .map(|f| f.to_string_lossy().into_owned())
            .unwrap_or_default();
        if let Some(pb) = active_bar() {
            pb.inc(1);
            pb.set_message(name);
        }
    }

    fn on_listing_complete(&self, total: usize, resolved: usize, duration_secs: f64) {
        self.finish_bar();
        eprintln!(
            "  {} Parsed {} JARs ({} resolved) in {:.2}s",
            "✓".green(),
            total,
            resolved,
            duration_secs
        );
    }

    fn on_keep_changed(
        &self,
        kept: &ArchiveRecord,
        replaced: &ArchiveRecord,
        reason: KeepReason,
    ) {
        match reason {
            KeepReason::CanonicalName => info!(
                "Preferring file {} over {}",
                kept.file_name,
                replaced.file_name
            ),
            KeepReason::Newer => info!(
                "Found newer {} over {}",
                kept.file_name,
                replaced.file_name
            ),
        }
    }

    fn on_cleanup_start(&self, destructive: bool) {
        self.destructive.store(destructive, Ordering::Relaxed);
    }

    fn on_kept(&self, record: &ArchiveRecord) {
        debug!("Keeping jar: {:?}", record);
    }

    fn on_duplicate(&self, record: &ArchiveRecord, keep: &ArchiveRecord, removed: bool) {
        if removed {
            warn!(
                "Removing duplicate of {}: {}",
                record.package_identity,
                record.file_name
            );
        } else if !self.destructive.load(Ordering::Relaxed) {
            warn!(
                "Would remove duplicate of {}: {} (keeping {})",
                record.package_identity,
                record.file_name,
                keep.file_name
            );
        }
    }

    fn on_cleanup_complete(&self, summary: &CleanupSummary, duration_secs: f64) {
        debug!(
            "Cleanup finished in {:.2}s: {} duplicates, {} failed",
            duration_secs, summary.duplicates, summary.failed
        );
    }
}
