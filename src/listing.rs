use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Collects every entry name in `path` into a Vec, unsorted.
///
/// `read_dir` omits the `.` and `..` entries that a raw directory scan
/// reports, so they are seeded up front to keep the listing complete.
/// Names that are not valid UTF-8 are converted lossily.
pub fn read_directory(path: &Path) -> Result<Vec<String>> {
    let read_dir = fs::read_dir(path)
        .with_context(|| format!("Unable to open directory: {}", path.display()))?;

    let mut names = vec![".".to_string(), "..".to_string()];

    for entry in read_dir {
        let entry = entry
            .with_context(|| format!("Failed to read directory: {}", path.display()))?;
        names.push(entry.file_name().to_string_lossy().into_owned());
    }

    Ok(names)
}
