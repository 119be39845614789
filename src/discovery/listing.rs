use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use tracing::debug;
use walkdir::WalkDir;

/// Which entries of a directory a listing should keep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    /// Anything that is not a directory, symlinks included.
    File,
}

impl EntryKind {
    fn accepts(self, file_type: fs::FileType) -> bool {
        match self {
            EntryKind::Directory => file_type.is_dir(),
            EntryKind::File => !file_type.is_dir(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Entry {
    pub name: String,
    pub path: PathBuf,
    pub modified: SystemTime,
}

/// Lists the immediate children of `dir` matching `kind`, in file-name order.
///
/// Symlinks are classified by the link itself, not by their target. Names
/// that are not valid UTF-8 are skipped.
pub fn list_entries(dir: &Path, kind: EntryKind) -> io::Result<Vec<Entry>> {
    let mut entries = Vec::new();

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry?;
        if !kind.accepts(entry.file_type()) {
            continue;
        }

        let Some(name) = entry.file_name().to_str().map(str::to_owned) else {
            debug!(path = %entry.path().display(), "Skipping entry with non UTF-8 name");
            continue;
        };

        let modified = entry.metadata()?.modified()?;
        entries.push(Entry {
            name,
            path: entry.into_path(),
            modified,
        });
    }

    Ok(entries)
}

/// Reports whether `path` exists and is a directory (following symlinks).
///
/// A missing path is `Ok(false)`; any other probe failure is returned.
pub fn probe_dir(path: &Path) -> io::Result<bool> {
    match fs::metadata(path) {
        Ok(meta) => Ok(meta.is_dir()),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(err) => Err(err),
    }
}
