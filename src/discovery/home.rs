use std::ffi::OsString;
use std::path::PathBuf;

use crate::error::DiscoveryError;

#[cfg(windows)]
const HOME_ENV_VAR: &str = "USERPROFILE";
#[cfg(not(windows))]
const HOME_ENV_VAR: &str = "HOME";

/// Resolves the current user's home directory.
///
/// The platform account lookup is tried first, then the conventional
/// environment variable (`USERPROFILE` on Windows, `HOME` elsewhere).
pub fn resolve_home_dir() -> Result<PathBuf, DiscoveryError> {
    resolve_with(dirs::home_dir(), |key| std::env::var_os(key))
        .ok_or(DiscoveryError::HomeDirUnresolved)
}

fn resolve_with(
    account_home: Option<PathBuf>,
    env: impl Fn(&str) -> Option<OsString>,
) -> Option<PathBuf> {
    account_home
        .filter(|path| !path.as_os_str().is_empty())
        .or_else(|| {
            env(HOME_ENV_VAR)
                .filter(|value| !value.is_empty())
                .map(PathBuf::from)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_lookup_wins() {
        let resolved = resolve_with(Some(PathBuf::from("/home/account")), |_| {
            Some(OsString::from("/home/env"))
        });
        assert_eq!(resolved, Some(PathBuf::from("/home/account")));
    }

    #[test]
    fn test_falls_back_to_env_var() {
        let resolved = resolve_with(None, |key| {
            assert_eq!(key, HOME_ENV_VAR);
            Some(OsString::from("/home/env"))
        });
        assert_eq!(resolved, Some(PathBuf::from("/home/env")));
    }

    #[test]
    fn test_empty_account_home_falls_back() {
        let resolved = resolve_with(Some(PathBuf::new()), |_| Some(OsString::from("/home/env")));
        assert_eq!(resolved, Some(PathBuf::from("/home/env")));
    }

    #[test]
    fn test_nothing_usable() {
        assert_eq!(resolve_with(None, |_| None), None);
        assert_eq!(resolve_with(None, |_| Some(OsString::new())), None);
    }
}
