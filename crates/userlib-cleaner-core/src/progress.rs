use crate::cleanup::CleanupSummary;
use crate::model::ArchiveRecord;
use crate::resolver::KeepReason;
use std::path::Path;

/// Trait for reporting run progress and keep/remove decisions.
///
/// The CLI implements it with tracing and indicatif; tests use [`SilentReporter`].
/// All methods have default no-op implementations.
pub trait ProgressReporter: Send + Sync {
    fn on_listing_start(&self, _dir: &Path) {}
    fn on_archive_start(&self, _path: &Path) {}
    fn on_archive_resolved(&self, _record: &ArchiveRecord, _strategy: &str) {}
    fn on_archive_unresolved(&self, _path: &Path) {}
    fn on_listing_complete(&self, _total: usize, _resolved: usize, _duration_secs: f64) {}
    fn on_resolve_start(&self) {}
    fn on_keep_changed(
        &self,
        _kept: &ArchiveRecord,
        _replaced: &ArchiveRecord,
        _reason: KeepReason,
    ) {
    }
    fn on_resolve_complete(&self, _packages: usize, _duration_secs: f64) {}
    fn on_cleanup_start(&self, _destructive: bool) {}
    fn on_kept(&self, _record: &ArchiveRecord) {}
    fn on_duplicate(&self, _record: &ArchiveRecord, _keep: &ArchiveRecord, _removed: bool) {}
    fn on_cleanup_complete(&self, _summary: &CleanupSummary, _duration_secs: f64) {}
}

/// No-op progress reporter for silent operation.
pub struct SilentReporter;

impl ProgressReporter for SilentReporter {}
