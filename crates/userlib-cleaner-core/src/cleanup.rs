use crate::model::ArchiveRecord;
use crate::progress::ProgressReporter;
use crate::resolver::KeepSet;
use std::fs;
use tracing::{debug, error};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CleanupSummary {
    /// Duplicates found on disk. Counted the same way whether or not they were deleted.
    pub duplicates: usize,
    /// Deletions that were attempted and failed (destructive mode only).
    pub failed: usize,
}

/// Report every record that is not its package's keep entry and, when
/// `destructive` is set, delete it.
///
/// Records that vanished from disk since the scan are not counted.
pub fn remove_duplicates(
    records: &[ArchiveRecord],
    keep_set: &KeepSet,
    destructive: bool,
    reporter: &dyn ProgressReporter,
) -> CleanupSummary {
    let mut summary = CleanupSummary::default();

    for record in records {
        let Some(keep) = keep_set.get(&record.package_identity) else {
            debug!("No keep entry for {}, leaving it alone", record.file_name);
            continue;
        };

        if keep.same_file(record) {
            reporter.on_kept(record);
            continue;
        }

        if !record.path.exists() {
            debug!("{} no longer exists", record.path.display());
            continue;
        }

        let removed = if destructive {
            match fs::remove_file(&record.path) {
                Ok(()) => true,
                Err(err) => {
                    error!("Failed to remove '{}': {}", record.path.display(), err);
                    summary.failed += 1;
                    false
                }
            }
        } else {
            false
        };

        reporter.on_duplicate(record, keep, removed);
        summary.duplicates += 1;
    }

    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PackageMetadata;
    use crate::progress::SilentReporter;
    use crate::resolver::compute_keep_set;
    use std::path::Path;

    fn record_on_disk(dir: &Path, name: &str, identity: &str, version: &str) -> ArchiveRecord {
        let path = dir.join(name);
        fs::write(&path, b"jar").unwrap();
        let mut meta = PackageMetadata {
            package_identity: identity.to_string(),
            ..Default::default()
        };
        meta.set_version(version);
        meta.into_record(&path).unwrap()
    }

    #[test]
    fn test_dry_run_never_deletes() {
        let dir = tempfile::tempdir().unwrap();
        let records = vec![
            record_on_disk(dir.path(), "lib-1.0.jar", "lib", "1.0"),
            record_on_disk(dir.path(), "lib-2.0.jar", "lib", "2.0"),
            record_on_disk(dir.path(), "other-1.0.jar", "other", "1.0"),
        ];
        let keep = compute_keep_set(&records, &SilentReporter);

        let summary = remove_duplicates(&records, &keep, false, &SilentReporter);
        assert_eq!(summary.duplicates, 1);
        assert_eq!(summary.failed, 0);
        assert!(records.iter().all(|r| r.path.exists()));
    }

    #[test]
    fn test_destructive_removes_only_duplicates() {
        let dir = tempfile::tempdir().unwrap();
        let records = vec![
            record_on_disk(dir.path(), "lib-1.0.jar", "lib", "1.0"),
            record_on_disk(dir.path(), "lib-2.0.jar", "lib", "2.0"),
            record_on_disk(dir.path(), "lib-1.5.jar", "lib", "1.5"),
        ];
        let keep = compute_keep_set(&records, &SilentReporter);

        let summary = remove_duplicates(&records, &keep, true, &SilentReporter);
        assert_eq!(summary.duplicates, 2);
        assert!(!records[0].path.exists());
        assert!(records[1].path.exists());
        assert!(!records[2].path.exists());
    }

    #[test]
    fn test_missing_files_are_not_counted() {
        let dir = tempfile::tempdir().unwrap();
        let records = vec![
            record_on_disk(dir.path(), "lib-1.0.jar", "lib", "1.0"),
            record_on_disk(dir.path(), "lib-2.0.jar", "lib", "2.0"),
        ];
        let keep = compute_keep_set(&records, &SilentReporter);
        fs::remove_file(&records[0].path).unwrap();

        let summary = remove_duplicates(&records, &keep, false, &SilentReporter);
        assert_eq!(summary.duplicates, 0);
    }

    #[test]
    fn test_failed_deletion_is_counted_and_run_continues() {
        let dir = tempfile::tempdir().unwrap();
        // A directory named like a jar cannot be removed with remove_file.
        let stuck = dir.path().join("lib-1.0.jar");
        fs::create_dir(&stuck).unwrap();
        let mut meta = PackageMetadata {
            package_identity: "lib".to_string(),
            ..Default::default()
        };
        meta.set_version("1.0");
        let records = vec![
            meta.into_record(&stuck).unwrap(),
            record_on_disk(dir.path(), "lib-2.0.jar", "lib", "2.0"),
            record_on_disk(dir.path(), "other-1.0.jar", "other", "1.0"),
            record_on_disk(dir.path(), "other-0.9.jar", "other", "0.9"),
        ];
        let keep = compute_keep_set(&records, &SilentReporter);

        let summary = remove_duplicates(&records, &keep, true, &SilentReporter);
        assert_eq!(summary.duplicates, 2);
        assert_eq!(summary.failed, 1);
        assert!(stuck.is_dir());
        assert!(records[1].path.exists());
        assert!(records[2].path.exists());
        assert!(!records[3].path.exists());
    }

    #[test]
    fn test_same_count_in_both_modes() {
        let dir = tempfile::tempdir().unwrap();
        let records = vec![
            record_on_disk(dir.path(), "a-1.jar", "a", "1"),
            record_on_disk(dir.path(), "a-2.jar", "a", "2"),
            record_on_disk(dir.path(), "b-1.jar", "b", "1"),
            record_on_disk(dir.path(), "b-1-copy.jar", "b", "1"),
        ];
        let keep = compute_keep_set(&records, &SilentReporter);

        let dry = remove_duplicates(&records, &keep, false, &SilentReporter);
        let real = remove_duplicates(&records, &keep, true, &SilentReporter);
        assert_eq!(dry.duplicates, real.duplicates);
        assert_eq!(real.duplicates, 2);
    }
}
