use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DiscoveryError {
    #[error("could not determine the home directory")]
    HomeDirUnresolved,

    #[error("{path} is missing or not a directory")]
    AnchorMissing { path: PathBuf },

    #[error("failed to check directory '{path}': {source}")]
    AnchorCheckFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to check canvas directory '{path}': {source}")]
    CanvasCheckFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to read directory '{path}': {source}")]
    ListingFailed {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl DiscoveryError {
    pub fn anchor_missing(path: impl Into<PathBuf>) -> Self {
        Self::AnchorMissing { path: path.into() }
    }

    pub fn anchor_check_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::AnchorCheckFailed {
            path: path.into(),
            source,
        }
    }

    pub fn canvas_check_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::CanvasCheckFailed {
            path: path.into(),
            source,
        }
    }

    pub fn listing_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ListingFailed {
            path: path.into(),
            source,
        }
    }

    /// True for the "application data is not on this machine" case, as
    /// opposed to an access failure.
    pub fn is_missing_data(&self) -> bool {
        matches!(self, Self::AnchorMissing { .. } | Self::HomeDirUnresolved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor_missing_display() {
        let err = DiscoveryError::anchor_missing("/home/me/.cricut-design-space");
        assert_eq!(
            err.to_string(),
            "/home/me/.cricut-design-space is missing or not a directory"
        );
        assert!(err.is_missing_data());
    }

    #[test]
    fn test_check_failed_includes_path_and_cause() {
        let io = std::io::Error::from(std::io::ErrorKind::PermissionDenied);
        let err = DiscoveryError::canvas_check_failed("/data/1/Canvas", io);
        let msg = err.to_string();
        assert!(msg.contains("/data/1/Canvas"));
        assert!(msg.contains("canvas"));
        assert!(!err.is_missing_data());
    }

    #[test]
    fn test_anchor_check_failed_is_not_missing_data() {
        let io = std::io::Error::from(std::io::ErrorKind::PermissionDenied);
        let err = DiscoveryError::anchor_check_failed("/home/me", io);
        assert!(err.to_string().starts_with("failed to check directory '/home/me'"));
        assert!(!err.is_missing_data());
    }
}
