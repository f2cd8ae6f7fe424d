use crate::version;
use std::path::{Path, PathBuf};

/// Identity and version details pulled out of an archive by one extractor.
///
/// This is the transient shape an extractor fills in; it only becomes an
/// [`ArchiveRecord`] once it carries a package identity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageMetadata {
    pub package_identity: String,
    pub version: String,
    pub version_number: u64,
    pub display_name: Option<String>,
    pub vendor: Option<String>,
    pub license: Option<String>,
}

impl PackageMetadata {
    pub fn set_version(&mut self, version: &str) {
        self.version = version.to_string();
        self.version_number = version::normalize(version);
    }

    pub fn is_resolved(&self) -> bool {
        !self.package_identity.is_empty()
    }

    /// Bind the metadata to an archive path. Returns `None` when no identity was found.
    pub fn into_record(self, path: &Path) -> Option<ArchiveRecord> {
        if !self.is_resolved() {
            return None;
        }
        Some(ArchiveRecord {
            path: path.to_path_buf(),
            file_name: path
                .file_name()
                .map(|f| f.to_string_lossy().into_owned())
                .unwrap_or_default(),
            package_identity: self.package_identity,
            version: self.version,
            version_number: self.version_number,
            display_name: self.display_name,
            vendor: self.vendor,
            license: self.license,
        })
    }
}

/// One resolved archive. The package identity is never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveRecord {
    pub path: PathBuf,
    pub file_name: String,
    pub package_identity: String,
    pub version: String,
    pub version_number: u64,
    pub display_name: Option<String>,
    pub vendor: Option<String>,
    pub license: Option<String>,
}

impl ArchiveRecord {
    pub fn same_file(&self, other: &ArchiveRecord) -> bool {
        self.path == other.path
    }

    /// True when the path ends with `<version>.jar`, i.e. the file name embeds
    /// the parsed version verbatim.
    pub fn has_canonical_name(&self) -> bool {
        let suffix = format!("{}.jar", self.version);
        self.path.to_string_lossy().ends_with(&suffix)
    }
}
