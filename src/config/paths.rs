//! Well-known per-user locations

use std::path::{Path, PathBuf};

use crate::constants::paths::{APP_DIR, DOWNLOADS_DIR, FILENAME};

use super::error::{Result, SettingsError};

/// Application data directory: `<data-dir>/PicoTorrent`
///
/// - Windows: `%APPDATA%\PicoTorrent`
/// - Linux:   `~/.local/share/PicoTorrent`
/// - macOS:   `~/Library/Application Support/PicoTorrent`
pub fn data_dir() -> Result<PathBuf> {
    dirs::data_dir()
        .map(|base| base.join(APP_DIR))
        .ok_or(SettingsError::NoDataDir)
}

/// Full path of the settings file
pub fn settings_path() -> Result<PathBuf> {
    data_dir().map(|dir| settings_path_in(&dir))
}

pub fn settings_path_in(dir: &Path) -> PathBuf {
    dir.join(FILENAME)
}

/// Default save location for new torrents
///
/// Platform downloads folder, then `~/Downloads`, then a relative `Downloads`.
pub fn default_download_dir() -> PathBuf {
    dirs::download_dir()
        .or_else(|| dirs::home_dir().map(|home| home.join(DOWNLOADS_DIR)))
        .unwrap_or_else(|| PathBuf::from(DOWNLOADS_DIR))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_path_in_appends_filename() {
        let path = settings_path_in(Path::new("/tmp/PicoTorrent"));
        assert_eq!(path, PathBuf::from("/tmp/PicoTorrent/PicoTorrent.json"));
    }

    #[test]
    fn test_default_download_dir_follows_platform() {
        let resolved = default_download_dir();
        match (dirs::download_dir(), dirs::home_dir()) {
            (Some(downloads), _) => assert_eq!(resolved, downloads),
            (None, Some(home)) => assert_eq!(resolved, home.join(DOWNLOADS_DIR)),
            (None, None) => assert_eq!(resolved, PathBuf::from(DOWNLOADS_DIR)),
        }
    }

    #[test]
    fn test_settings_path_is_data_dir_plus_filename() {
        match (dirs::data_dir(), settings_path()) {
            (Some(base), Ok(path)) => {
                assert_eq!(path, base.join(APP_DIR).join(FILENAME));
                assert_eq!(path, settings_path_in(&data_dir().unwrap()));
            }
            (None, Err(err)) => assert!(matches!(err, SettingsError::NoDataDir)),
            (base, path) => panic!("data dir {base:?} disagrees with settings path {path:?}"),
        }
    }
}
