use crate::output::{OutputError, OutputResult};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// File name the generated body is persisted under
pub const ROBOTS_FILE_NAME: &str = "robots.txt";

/// Writes the rendered body into `out_dir` as `robots.txt`
///
/// The content is already fully materialized, so the write is a single
/// atomic replacement: the bytes go to a temporary file in the same
/// directory, which is then renamed over the destination. A crash mid-write
/// never leaves a truncated `robots.txt` behind.
///
/// # Arguments
///
/// * `out_dir` - Build output directory; must already exist
/// * `content` - The rendered `robots.txt` body
///
/// # Returns
///
/// * `Ok(PathBuf)` - Path of the written file
/// * `Err(OutputError)` - The directory is missing or the write failed
pub fn write_robots_txt(out_dir: &Path, content: &str) -> OutputResult<PathBuf> {
    if !out_dir.is_dir() {
        return Err(OutputError::MissingDirectory(
            out_dir.display().to_string(),
        ));
    }

    let destination = out_dir.join(ROBOTS_FILE_NAME);

    let mut file = NamedTempFile::new_in(out_dir)?;
    file.write_all(content.as_bytes())?;
    file.persist(&destination).map_err(|e| e.error)?;

    Ok(destination)
}
