use crate::cleanup::{self, CleanupSummary};
use crate::config::AppConfig;
use crate::error::Error;
use crate::extract::ExtractorChain;
use crate::inspector::ArchiveInspector;
use crate::model::ArchiveRecord;
use crate::progress::ProgressReporter;
use crate::resolver;
use crate::scanner;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::{debug, info};

pub struct CleanerEngine {
    config: AppConfig,
    scratch_dir: Option<PathBuf>,
}

#[derive(Debug)]
pub struct InspectionResult {
    pub records: Vec<ArchiveRecord>,
    pub archives_scanned: usize,
    pub unresolved: usize,
    pub duration: Duration,
}

#[derive(Debug)]
pub struct RunResult {
    pub inspect_duration: Duration,
    pub resolve_duration: Duration,
    pub cleanup_duration: Duration,
    pub archives_scanned: usize,
    pub resolved: usize,
    pub unresolved: usize,
    pub packages: usize,
    pub cleanup: CleanupSummary,
    pub destructive: bool,
}

impl CleanerEngine {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            scratch_dir: None,
        }
    }

    pub fn with_scratch_dir(mut self, dir: &Path) -> Self {
        self.scratch_dir = Some(dir.to_path_buf());
        self
    }

    /// List the target directory and resolve every archive in it.
    pub fn inspect(&self, reporter: &dyn ProgressReporter) -> Result<InspectionResult, Error> {
        let target = Path::new(&self.config.target);
        info!("Finding and parsing JARs in {}", target.display());
        reporter.on_listing_start(target);
        let start = Instant::now();

        let archives = scanner::list_archives(target, &self.config.ignore_patterns)?;
        let chain = ExtractorChain::for_mode(&self.config.mode);
        debug!("Extraction strategies: {:?}", chain.names());

        let mut inspector = ArchiveInspector::new(chain);
        if let Some(dir) = &self.scratch_dir {
            inspector = inspector.with_scratch_dir(dir);
        }

        let mut records = Vec::with_capacity(archives.len());
        for path in &archives {
            debug!("Processing JAR: {}", path.display());
            if let Some(record) = inspector.inspect(path, reporter)? {
                records.push(record);
            }
        }

        let duration = start.elapsed();
        reporter.on_listing_complete(archives.len(), records.len(), duration.as_secs_f64());

        Ok(InspectionResult {
            archives_scanned: archives.len(),
            unresolved: archives.len() - records.len(),
            records,
            duration,
        })
    }

    /// Run the full pipeline:
    /// 1. List and inspect archives
    /// 2. Pick one archive per package
    /// 3. Report (and, when `clean` is set, delete) the rest
    pub fn run(&self, reporter: &dyn ProgressReporter) -> Result<RunResult, Error> {
        let inspection = self.inspect(reporter)?;

        info!("Computing duplicates");
        reporter.on_resolve_start();
        let resolve_start = Instant::now();
        let keep_set = resolver::compute_keep_set(&inspection.records, reporter);
        let resolve_duration = resolve_start.elapsed();
        reporter.on_resolve_complete(keep_set.len(), resolve_duration.as_secs_f64());

        info!("Cleaning...");
        reporter.on_cleanup_start(self.config.clean);
        let cleanup_start = Instant::now();
        let summary = cleanup::remove_duplicates(
            &inspection.records,
            &keep_set,
            self.config.clean,
            reporter,
        );
        let cleanup_duration = cleanup_start.elapsed();
        reporter.on_cleanup_complete(&summary, cleanup_duration.as_secs_f64());

        Ok(RunResult {
            inspect_duration: inspection.duration,
            resolve_duration,
            cleanup_duration,
            archives_scanned: inspection.archives_scanned,
            resolved: inspection.records.len(),
            unresolved: inspection.unresolved,
            packages: keep_set.len(),
            cleanup: summary,
            destructive: self.config.clean,
        })
    }
}
