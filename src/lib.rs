/// Cricut Finder
///
/// Locates the canvas images Cricut Design Space keeps under the user's home
/// directory, orders them by recency and opens their folders in the native
/// file manager.
pub mod cli;
pub mod discovery;
pub mod error;
pub mod logging;
pub mod opener;
pub mod output;

pub use discovery::{discover, sort_by_recency_desc, DiscoveredFile, DiscoveryEngine};
pub use error::{DiscoveryError, Error, OpenError, Result};
pub use opener::{FolderOpener, SystemOpener};

/// Runs discovery and returns the images newest first.
pub fn discover_sorted(engine: &DiscoveryEngine) -> Result<Vec<DiscoveredFile>> {
    Ok(sort_by_recency_desc(engine.discover()?))
}

/// Opens the folder holding `file` with `opener`.
pub fn open_containing_folder(opener: &dyn FolderOpener, file: &DiscoveredFile) -> Result<()> {
    opener.open(file.containing_directory())?;
    Ok(())
}
