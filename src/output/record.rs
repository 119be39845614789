use chrono::{DateTime, Local, SecondsFormat};
use serde::Serialize;
use std::time::UNIX_EPOCH;

use crate::discovery::DiscoveredFile;

#[derive(Debug, Clone, Serialize)]
pub struct FileRecord {
    pub name: String,
    pub directory: String,
    pub path: String,
    pub modified: String,
    pub modified_unix: i64,
}

impl FileRecord {
    pub fn from_discovered(file: &DiscoveredFile) -> Self {
        let modified: DateTime<Local> = file.last_modified().into();
        FileRecord {
            name: file.name().to_string(),
            directory: file.containing_directory().display().to_string(),
            path: file.full_path().display().to_string(),
            modified: modified.to_rfc3339_opts(SecondsFormat::Secs, false),
            modified_unix: unix_seconds(file),
        }
    }
}

fn unix_seconds(file: &DiscoveredFile) -> i64 {
    match file.last_modified().duration_since(UNIX_EPOCH) {
        Ok(after) => after.as_secs() as i64,
        Err(before) => -(before.duration().as_secs() as i64),
    }
}

/// Short local timestamp for table output.
pub fn format_modified(file: &DiscoveredFile) -> String {
    let modified: DateTime<Local> = file.last_modified().into();
    modified.format("%Y-%m-%d %H:%M:%S").to_string()
}
