use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Write a JAR at `dir/name` containing the given `(entry name, contents)` pairs.
pub fn write_jar(dir: &Path, name: &str, entries: &[(&str, &str)]) -> PathBuf {
    let path = dir.join(name);
    let file = fs::File::create(&path).unwrap();
    let mut writer = ZipWriter::new(file);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Stored);

    for (entry_name, contents) in entries {
        writer.start_file(*entry_name, options.clone()).unwrap();
        writer.write_all(contents.as_bytes()).unwrap();
    }
    writer.finish().unwrap();
    path
}

pub fn osgi_manifest(symbolic_name: &str, version: &str) -> String {
    format!(
        "Manifest-Version: 1.0\r\nBundle-SymbolicName: {}\r\nBundle-Version: {}\r\n\r\n",
        symbolic_name, version
    )
}

pub fn pom_properties(group_id: &str, artifact_id: &str, version: &str) -> String {
    format!(
        "#Generated by Maven\nversion={}\ngroupId={}\nartifactId={}\n",
        version, group_id, artifact_id
    )
}

pub fn count_files(dir: &Path) -> usize {
    fs::read_dir(dir)
        .unwrap()
        .flatten()
        .filter(|e| e.path().is_file())
        .count()
}
