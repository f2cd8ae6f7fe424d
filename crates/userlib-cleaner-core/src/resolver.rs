//! Picks the one archive to keep for each package identity.

use crate::model::ArchiveRecord;
use crate::progress::ProgressReporter;
use std::collections::BTreeMap;

/// Why a candidate replaced the current keep entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeepReason {
    /// Same version number, and the candidate's file name ends with `<version>.jar`.
    CanonicalName,
    /// Strictly higher version number.
    Newer,
}

/// The chosen archive per package identity. Built once, read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeepSet {
    entries: BTreeMap<String, ArchiveRecord>,
}

impl KeepSet {
    pub fn get(&self, package_identity: &str) -> Option<&ArchiveRecord> {
        self.entries.get(package_identity)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True when `record` is the archive kept for its package.
    pub fn is_kept(&self, record: &ArchiveRecord) -> bool {
        self.get(&record.package_identity)
            .is_some_and(|kept| kept.same_file(record))
    }
}

/// A package identity with its archives, in input order.
#[derive(Debug)]
pub struct PackageGroup<'a> {
    pub package_identity: &'a str,
    pub members: Vec<&'a ArchiveRecord>,
}

/// Group records by package identity. Groups come out in order of first
/// appearance and members keep their input order.
pub fn group_by_identity(records: &[ArchiveRecord]) -> Vec<PackageGroup<'_>> {
    let mut groups: Vec<PackageGroup<'_>> = Vec::new();
    let mut index: BTreeMap<&str, usize> = BTreeMap::new();

    for record in records {
        let identity = record.package_identity.as_str();
        match index.get(identity) {
            Some(&position) => groups[position].members.push(record),
            None => {
                index.insert(identity, groups.len());
                groups.push(PackageGroup {
                    package_identity: identity,
                    members: vec![record],
                });
            }
        }
    }

    groups
}

/// Decide whether `candidate` should replace `current`.
pub fn compare(current: &ArchiveRecord, candidate: &ArchiveRecord) -> Option<KeepReason> {
    if candidate.version_number == current.version_number && candidate.has_canonical_name() {
        Some(KeepReason::CanonicalName)
    } else if candidate.version_number > current.version_number {
        Some(KeepReason::Newer)
    } else {
        None
    }
}

/// Choose the keep record for one group.
///
/// Seeds with the first member, then for every member pairs it with every
/// other member and lets the candidate challenge whatever is currently kept.
/// Self comparisons and candidates that already are the keep entry are
/// skipped. The pairwise pass is quadratic in the group size.
pub fn select_keep<'a>(
    group: &PackageGroup<'a>,
    reporter: &dyn ProgressReporter,
) -> Option<&'a ArchiveRecord> {
    let seed = *group.members.first()?;

    let kept = group.members.iter().fold(seed, |kept, outer| {
        group.members.iter().fold(kept, |kept, candidate| {
            if candidate.same_file(outer) || candidate.same_file(kept) {
                return kept;
            }
            match compare(kept, candidate) {
                Some(reason) => {
                    reporter.on_keep_changed(candidate, kept, reason);
                    *candidate
                }
                None => kept,
            }
        })
    });

    Some(kept)
}

/// Build the keep set for all resolved records.
pub fn compute_keep_set(records: &[ArchiveRecord], reporter: &dyn ProgressReporter) -> KeepSet {
    let entries = group_by_identity(records)
        .iter()
        .filter_map(|group| {
            select_keep(group, reporter)
                .map(|kept| (group.package_identity.to_string(), kept.clone()))
        })
        .collect();

    KeepSet { entries }
}
