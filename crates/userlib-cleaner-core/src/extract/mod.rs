//! Metadata extraction strategies.
//!
//! Each strategy looks at one kind of [`Evidence`] and either produces package
//! metadata with a non-empty identity or declines. The inspector walks an
//! [`ExtractorChain`] in order and takes the first answer.

mod manifest;
mod optimistic;
mod properties;

pub use manifest::ManifestExtractor;
pub use optimistic::OptimisticExtractor;
pub use properties::PomPropertiesExtractor;

use crate::config::ParseMode;
use crate::model::PackageMetadata;
use std::path::Path;

/// Input handed to an extractor.
#[derive(Debug, Clone, Copy)]
pub enum Evidence<'a> {
    /// Decoded text of one candidate metadata entry inside the archive.
    EntryText { entry_name: &'a str, text: &'a str },
    /// The archive as a whole: its path plus the names of all its entries.
    Archive {
        path: &'a Path,
        entry_names: &'a [String],
    },
}

pub trait MetadataExtractor: Send + Sync {
    fn name(&self) -> &'static str;

    /// Try to derive package metadata. `None` unless an identity was found.
    fn attempt(&self, evidence: &Evidence<'_>) -> Option<PackageMetadata>;
}

/// Ordered list of strategies; first success wins.
pub struct ExtractorChain {
    extractors: Vec<Box<dyn MetadataExtractor>>,
}

impl ExtractorChain {
    pub fn new(extractors: Vec<Box<dyn MetadataExtractor>>) -> Self {
        Self { extractors }
    }

    /// Manifest, then pom.properties, then (in auto mode only) the optimistic guess.
    pub fn for_mode(mode: &ParseMode) -> Self {
        let mut extractors: Vec<Box<dyn MetadataExtractor>> =
            vec![Box::new(ManifestExtractor), Box::new(PomPropertiesExtractor)];
        if mode.allows_optimistic() {
            extractors.push(Box::new(OptimisticExtractor));
        }
        Self::new(extractors)
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.extractors.iter().map(|e| e.name()).collect()
    }

    /// Returns the first resolved result along with the name of the strategy that produced it.
    pub fn resolve(&self, evidence: &Evidence<'_>) -> Option<(&'static str, PackageMetadata)> {
        self.extractors.iter().find_map(|extractor| {
            extractor
                .attempt(evidence)
                .filter(PackageMetadata::is_resolved)
                .map(|meta| (extractor.name(), meta))
        })
    }
}
