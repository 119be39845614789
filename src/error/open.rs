use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OpenError {
    #[error("failed to launch '{program}' for '{path}': {source}")]
    LaunchFailed {
        program: &'static str,
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("unsupported platform: {platform}")]
    UnsupportedPlatform { platform: String },
}

impl OpenError {
    pub fn launch_failed(
        program: &'static str,
        path: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        Self::LaunchFailed {
            program,
            path: path.into(),
            source,
        }
    }

    pub fn unsupported_platform(platform: impl Into<String>) -> Self {
        Self::UnsupportedPlatform {
            platform: platform.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_platform_display() {
        let err = OpenError::unsupported_platform("haiku");
        assert_eq!(err.to_string(), "unsupported platform: haiku");
    }

    #[test]
    fn test_launch_failed_display() {
        let io = std::io::Error::from(std::io::ErrorKind::NotFound);
        let err = OpenError::launch_failed("xdg-open", "/tmp/canvas", io);
        let msg = err.to_string();
        assert!(msg.contains("xdg-open"));
        assert!(msg.contains("/tmp/canvas"));
    }
}
