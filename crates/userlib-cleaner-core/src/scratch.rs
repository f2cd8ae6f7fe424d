use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;
use tempfile::{Builder, NamedTempFile};

/// Copy an archive entry into a fresh temporary file and read it back as text.
///
/// The temporary file is owned by a [`NamedTempFile`] guard, so it is removed
/// when this function returns, whether the copy or the read-back failed or not.
/// Invalid UTF-8 is replaced rather than rejected.
pub fn read_entry_text<R: Read>(entry: &mut R, scratch_dir: Option<&Path>) -> io::Result<String> {
    let mut staged = create_scratch_file(scratch_dir)?;
    io::copy(entry, staged.as_file_mut())?;
    staged.as_file_mut().flush()?;

    let bytes = fs::read(staged.path())?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn create_scratch_file(scratch_dir: Option<&Path>) -> io::Result<NamedTempFile> {
    let mut builder = Builder::new();
    builder.prefix("jar");
    match scratch_dir {
        Some(dir) => builder.tempfile_in(dir),
        None => builder.tempfile(),
    }
}
