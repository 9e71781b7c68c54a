use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use std::time::SystemTime;

/// Logical size reported for directories instead of their recursive
/// content size. 4096 is the typical size of a directory inode on Linux.
const DIR_SIZE: u64 = 4096;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FileKind {
    File,
    Dir,
    /// Device, socket, fifo... anything without a meaningful byte length.
    Other,
}

#[derive(Debug, Clone, Copy)]
pub struct FileMeta {
    /// None for special files; callers omit the size field entirely.
    pub size: Option<u64>,
    pub modified: SystemTime,
}

fn classify(metadata: &fs::Metadata) -> FileKind {
    if metadata.is_file() {
        FileKind::File
    } else if metadata.is_dir() {
        FileKind::Dir
    } else {
        FileKind::Other
    }
}

/// Stats `dir/name` and computes the entry's logical size.
///
/// Follows symlinks, like stat(2): a link to a regular file counts as a
/// regular file. Failure here is per-entry and non-fatal to the listing.
pub fn inspect(dir: &Path, name: &str) -> Result<FileMeta> {
    let path = dir.join(name);
    let metadata = fs::metadata(&path)
        .with_context(|| format!("Failed to stat: {}", path.display()))?;

    let size = match classify(&metadata) {
        FileKind::File => Some(metadata.len()),
        FileKind::Dir => Some(DIR_SIZE),
        FileKind::Other => None,
    };

    let modified = metadata
        .modified()
        .with_context(|| format!("Failed to read modification time: {}", path.display()))?;

    Ok(FileMeta { size, modified })
}
