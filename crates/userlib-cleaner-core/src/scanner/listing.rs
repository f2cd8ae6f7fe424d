use crate::error::Error;
use glob::Pattern;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const ARCHIVE_EXTENSION: &str = ".jar";

/// List the archives directly inside `dir`, sorted by file name.
///
/// Only regular files whose name ends in `.jar` are returned; subdirectories are
/// not entered. Paths matching any of `ignore_globs` are skipped.
pub fn list_archives(dir: &Path, ignore_globs: &[String]) -> Result<Vec<PathBuf>, Error> {
    let ignore_patterns = compile_patterns(ignore_globs)?;

    let entries = fs::read_dir(dir).map_err(|source| Error::DirectoryRead {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut archives = Vec::new();
    for entry_result in entries {
        let entry = entry_result.map_err(|source| Error::DirectoryRead {
            path: dir.to_path_buf(),
            source,
        })?;

        let file_name = entry.file_name();
        if !file_name
            .as_encoded_bytes()
            .ends_with(ARCHIVE_EXTENSION.as_bytes())
        {
            continue;
        }

        let path = entry.path();
        if !path.is_file() {
            debug!("Skipping non-file entry {}", path.display());
            continue;
        }
        if ignore_patterns.iter().any(|pattern| pattern.matches_path(&path)) {
            debug!("Ignoring {}", path.display());
            continue;
        }

        archives.push(path);
    }

    archives.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(archives)
}

fn compile_patterns(ignore_globs: &[String]) -> Result<Vec<Pattern>, Error> {
    ignore_globs
        .iter()
        .map(|glob| {
            Pattern::new(glob).map_err(|source| Error::IgnorePattern {
                pattern: glob.clone(),
                source,
            })
        })
        .collect()
}
