use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Unable to read directory {}: {source}", path.display())]
    DirectoryRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Unable to open archive {}: {source}", path.display())]
    ArchiveOpen {
        path: PathBuf,
        source: zip::result::ZipError,
    },

    #[error("Invalid ignore pattern '{pattern}': {source}")]
    IgnorePattern {
        pattern: String,
        source: glob::PatternError,
    },
}
