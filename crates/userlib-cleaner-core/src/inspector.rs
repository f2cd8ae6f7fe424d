use crate::error::Error;
use crate::extract::{Evidence, ExtractorChain};
use crate::model::ArchiveRecord;
use crate::progress::ProgressReporter;
use crate::scratch;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use zip::result::ZipError;
use zip::ZipArchive;

pub const MANIFEST_ENTRY: &str = "META-INF/MANIFEST.MF";
pub const POM_PROPERTIES_FILE: &str = "pom.properties";

/// True for the entries worth reading: the JAR manifest, or any `pom.properties`.
pub fn is_metadata_entry(entry_name: &str) -> bool {
    entry_name == MANIFEST_ENTRY || entry_name.rsplit('/').next() == Some(POM_PROPERTIES_FILE)
}

/// Opens archives and runs the extractor chain over their metadata entries.
pub struct ArchiveInspector {
    chain: ExtractorChain,
    scratch_dir: Option<PathBuf>,
}

impl ArchiveInspector {
    pub fn new(chain: ExtractorChain) -> Self {
        Self {
            chain,
            scratch_dir: None,
        }
    }

    /// Stage extracted entries under `dir` instead of the system temp directory.
    pub fn with_scratch_dir(mut self, dir: &Path) -> Self {
        self.scratch_dir = Some(dir.to_path_buf());
        self
    }

    /// Resolve one archive.
    ///
    /// Returns `Ok(None)` when no strategy could name the package. Failing to
    /// open the archive at all is an error; an unreadable metadata entry is
    /// only logged and skipped.
    pub fn inspect(
        &self,
        path: &Path,
        reporter: &dyn ProgressReporter,
    ) -> Result<Option<ArchiveRecord>, Error> {
        reporter.on_archive_start(path);

        let open_error = |source: ZipError| Error::ArchiveOpen {
            path: path.to_path_buf(),
            source,
        };
        let file = File::open(path).map_err(|e| open_error(ZipError::from(e)))?;
        let mut archive = ZipArchive::new(BufReader::new(file)).map_err(open_error)?;
        let entry_names: Vec<String> = archive.file_names().map(str::to_owned).collect();

        for entry_name in entry_names.iter().filter(|name| is_metadata_entry(name)) {
            let text = match archive.by_name(entry_name) {
                Ok(mut entry) => scratch::read_entry_text(&mut entry, self.scratch_dir.as_deref())
                    .map_err(ZipError::from),
                Err(err) => Err(err),
            };
            let text = match text {
                Ok(text) => text,
                Err(err) => {
                    warn!(
                        "Unable to read {} from {}: {}",
                        entry_name,
                        path.display(),
                        err
                    );
                    continue;
                }
            };

            let evidence = Evidence::EntryText {
                entry_name: entry_name.as_str(),
                text: &text,
            };
            if let Some(record) = self.resolve(path, &evidence, reporter) {
                return Ok(Some(record));
            }
        }

        let evidence = Evidence::Archive {
            path,
            entry_names: &entry_names,
        };
        if let Some(record) = self.resolve(path, &evidence, reporter) {
            return Ok(Some(record));
        }

        warn!("Failed to parse metadata from {}", path.display());
        reporter.on_archive_unresolved(path);
        Ok(None)
    }

    fn resolve(
        &self,
        path: &Path,
        evidence: &Evidence<'_>,
        reporter: &dyn ProgressReporter,
    ) -> Option<ArchiveRecord> {
        let (strategy, meta) = self.chain.resolve(evidence)?;
        let record = meta.into_record(path)?;
        debug!("Parsed properties via {}: {:?}", strategy, record);
        reporter.on_archive_resolved(&record, strategy);
        Some(record)
    }
}
