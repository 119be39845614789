//! Locates Cricut Design Space canvas images under the user's home directory.
//!
//! Layout walked:
//!
//! ```text
//! <home>/.cricut-design-space/LocalData/<project-id>/Canvas/<canvas-id>/*.png
//! ```
//!
//! Project and canvas ids are numeric; any other directory at those levels is
//! ignored.

pub mod filter;
pub mod home;
pub mod listing;
pub mod sort;

use std::path::{Path, PathBuf};
use std::time::SystemTime;

use tracing::{debug, info, trace};

use crate::error::DiscoveryError;
pub use filter::{is_numeric, matches_image_pattern};
pub use home::resolve_home_dir;
use listing::{list_entries, probe_dir, EntryKind};
pub use sort::sort_by_recency_desc;

pub const ANCHOR_DIR_NAME: &str = ".cricut-design-space";
pub const DATA_DIR_NAME: &str = "LocalData";
pub const CANVAS_DIR_NAME: &str = "Canvas";

/// A canvas image found during discovery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredFile {
    name: String,
    containing_directory: PathBuf,
    full_path: PathBuf,
    last_modified: SystemTime,
}

impl DiscoveredFile {
    pub fn new(
        name: impl Into<String>,
        containing_directory: impl Into<PathBuf>,
        last_modified: SystemTime,
    ) -> Self {
        let name = name.into();
        let containing_directory = containing_directory.into();
        let full_path = containing_directory.join(&name);
        Self {
            name,
            containing_directory,
            full_path,
            last_modified,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn containing_directory(&self) -> &Path {
        &self.containing_directory
    }

    pub fn full_path(&self) -> &Path {
        &self.full_path
    }

    pub fn last_modified(&self) -> SystemTime {
        self.last_modified
    }
}

/// Walks the Cricut data tree below a fixed home directory.
#[derive(Debug, Clone)]
pub struct DiscoveryEngine {
    home: PathBuf,
}

impl DiscoveryEngine {
    pub fn new(home: impl Into<PathBuf>) -> Self {
        Self { home: home.into() }
    }

    pub fn from_environment() -> Result<Self, DiscoveryError> {
        Ok(Self::new(resolve_home_dir()?))
    }

    pub fn home(&self) -> &Path {
        &self.home
    }

    pub fn anchor_root(&self) -> PathBuf {
        self.home.join(ANCHOR_DIR_NAME)
    }

    pub fn data_root(&self) -> PathBuf {
        self.anchor_root().join(DATA_DIR_NAME)
    }

    /// Collects every canvas image in discovery order.
    ///
    /// Missing `Canvas` folders and non-numeric directories are skipped. Any
    /// access failure aborts the walk and no partial result is returned.
    pub fn discover(&self) -> Result<Vec<DiscoveredFile>, DiscoveryError> {
        let anchor_root = self.anchor_root();
        require_anchor(&anchor_root)?;
        info!(path = %anchor_root.display(), "Cricut directory found");

        let data_root = self.data_root();
        require_anchor(&data_root)?;
        info!(path = %data_root.display(), "Cricut LocalData directory found");

        let mut found = Vec::new();
        for_each_numeric_dir(&data_root, "project", |project_dir| {
            let canvas_root = project_dir.join(CANVAS_DIR_NAME);
            let exists = probe_dir(&canvas_root)
                .map_err(|e| DiscoveryError::canvas_check_failed(&canvas_root, e))?;
            if !exists {
                debug!(path = %canvas_root.display(), "Canvas directory missing, skipping project");
                return Ok(());
            }

            for_each_numeric_dir(&canvas_root, "canvas", |canvas_dir| {
                collect_images(canvas_dir, &mut found)
            })
        })?;

        info!(count = found.len(), "Discovery finished");
        Ok(found)
    }
}

/// Discovers canvas images under the current user's home directory.
pub fn discover() -> Result<Vec<DiscoveredFile>, DiscoveryError> {
    DiscoveryEngine::from_environment()?.discover()
}

fn require_anchor(path: &Path) -> Result<(), DiscoveryError> {
    let exists = probe_dir(path).map_err(|e| DiscoveryError::anchor_check_failed(path, e))?;
    if !exists {
        return Err(DiscoveryError::anchor_missing(path));
    }
    Ok(())
}

/// Calls `visit` for each numerically named subdirectory of `parent`.
fn for_each_numeric_dir<F>(
    parent: &Path,
    label: &str,
    mut visit: F,
) -> Result<(), DiscoveryError>
where
    F: FnMut(&Path) -> Result<(), DiscoveryError>,
{
    let dirs = list_entries(parent, EntryKind::Directory)
        .map_err(|e| DiscoveryError::listing_failed(parent, e))?;

    for dir in dirs {
        if !is_numeric(&dir.name) {
            debug!(kind = label, path = %dir.path.display(), "Skipping non-numeric directory");
            continue;
        }
        visit(&dir.path)?;
    }

    Ok(())
}

fn collect_images(
    canvas_dir: &Path,
    found: &mut Vec<DiscoveredFile>,
) -> Result<(), DiscoveryError> {
    let files = list_entries(canvas_dir, EntryKind::File)
        .map_err(|e| DiscoveryError::listing_failed(canvas_dir, e))?;

    for file in files {
        if !matches_image_pattern(&file.name) {
            continue;
        }
        trace!(path = %file.path.display(), "Found canvas image");
        found.push(DiscoveredFile::new(file.name, canvas_dir, file.modified));
    }

    Ok(())
}
