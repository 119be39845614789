//! Opening a folder in the platform's native file manager.

use std::path::Path;
use std::process::Command;

use tracing::{debug, warn};

use crate::error::OpenError;

pub trait FolderOpener {
    /// Launches the file manager at `path` without waiting for it.
    fn open(&self, path: &Path) -> Result<(), OpenError>;
}

/// File manager launcher for the platform this binary runs on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SystemOpener {
    Explorer,
    Finder,
    XdgOpen,
    Unsupported(String),
}

impl SystemOpener {
    pub fn detect() -> Self {
        Self::for_os(std::env::consts::OS)
    }

    pub fn for_os(os: &str) -> Self {
        match os {
            "windows" => Self::Explorer,
            "macos" => Self::Finder,
            "linux" => Self::XdgOpen,
            other => Self::Unsupported(other.to_string()),
        }
    }

    pub fn program(&self) -> Option<&'static str> {
        match self {
            Self::Explorer => Some("explorer"),
            Self::Finder => Some("open"),
            Self::XdgOpen => Some("xdg-open"),
            Self::Unsupported(_) => None,
        }
    }

    pub fn platform(&self) -> &str {
        match self {
            Self::Explorer => "windows",
            Self::Finder => "macos",
            Self::XdgOpen => "linux",
            Self::Unsupported(os) => os,
        }
    }
}

impl FolderOpener for SystemOpener {
    fn open(&self, path: &Path) -> Result<(), OpenError> {
        let Some(program) = self.program() else {
            warn!(platform = %self.platform(), "No file manager launcher for this platform");
            return Err(OpenError::unsupported_platform(self.platform()));
        };

        debug!(program, path = %path.display(), "Launching file manager");
        Command::new(program)
            .arg(path)
            .spawn()
            .map(drop)
            .map_err(|e| OpenError::launch_failed(program, path, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DiscoveredFile;
    use std::cell::RefCell;
    use std::path::PathBuf;
    use std::time::SystemTime;

    #[derive(Default)]
    struct RecordingOpener {
        opened: RefCell<Vec<PathBuf>>,
    }

    impl FolderOpener for RecordingOpener {
        fn open(&self, path: &Path) -> Result<(), OpenError> {
            self.opened.borrow_mut().push(path.to_path_buf());
            Ok(())
        }
    }

    #[test]
    fn test_for_os_selects_launcher() {
        assert_eq!(SystemOpener::for_os("windows").program(), Some("explorer"));
        assert_eq!(SystemOpener::for_os("macos").program(), Some("open"));
        assert_eq!(SystemOpener::for_os("linux").program(), Some("xdg-open"));
        assert_eq!(SystemOpener::for_os("plan9").program(), None);
    }

    #[test]
    fn test_unsupported_platform_error() {
        let opener = SystemOpener::for_os("plan9");
        let err = opener.open(Path::new("/tmp")).unwrap_err();
        match err {
            OpenError::UnsupportedPlatform { platform } => assert_eq!(platform, "plan9"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_detect_matches_current_os() {
        assert_eq!(
            SystemOpener::detect(),
            SystemOpener::for_os(std::env::consts::OS)
        );
    }

    #[test]
    fn test_platform_names_round_trip() {
        for os in ["windows", "macos", "linux", "plan9"] {
            assert_eq!(SystemOpener::for_os(os).platform(), os);
        }
    }

    #[test]
    fn test_open_containing_folder_opens_directory_not_file() {
        let opener = RecordingOpener::default();
        let file = DiscoveredFile::new("a.png", "/data/1/Canvas/2", SystemTime::now());

        crate::open_containing_folder(&opener, &file).unwrap();

        let opened = opener.opened.borrow();
        assert_eq!(opened.as_slice(), &[PathBuf::from("/data/1/Canvas/2")]);
        assert_ne!(opened[0], file.full_path());
    }

    #[test]
    fn test_open_containing_folder_reports_unsupported_platform() {
        let file = DiscoveredFile::new("a.png", "/data/1/Canvas/2", SystemTime::now());
        let err = crate::open_containing_folder(&SystemOpener::for_os("plan9"), &file).unwrap_err();
        assert!(matches!(
            err,
            crate::Error::Open(OpenError::UnsupportedPlatform { .. })
        ));
    }
}
