//! Application-wide constants
//!
//! File locations and the built-in defaults for every named setting,
//! providing a single source of truth for constant values.

/// Settings file location
pub mod paths {
    /// Directory created under the platform data directory
    pub const APP_DIR: &str = "PicoTorrent";

    /// Settings file name inside [`APP_DIR`]
    pub const FILENAME: &str = "PicoTorrent.json";

    /// Fallback download folder name under the home directory
    pub const DOWNLOADS_DIR: &str = "Downloads";
}

/// Built-in defaults returned when a key is absent from the document
pub mod defaults {
    /// Maximum number of session alerts queued before dropping
    pub const ALERT_QUEUE_SIZE: u32 = 500;

    pub const CHECK_FOR_UPDATES: bool = true;

    /// Version string of an update the user chose to skip (empty = none)
    pub const IGNORED_UPDATE: &str = "";

    /// Listen on all interfaces
    pub const LISTEN_ADDRESS: &str = "0.0.0.0";

    pub const LISTEN_PORT: u16 = 6881;

    pub const PROMPT_FOR_REMOVE_DATA: bool = true;

    pub const PROMPT_FOR_SAVE_PATH: bool = true;

    /// Seconds to wait for trackers to acknowledge the stop event on shutdown
    pub const STOP_TRACKER_TIMEOUT: u32 = 1;

    /// Release feed polled by the update checker
    pub const UPDATE_URL: &str =
        "https://api.github.com/repos/picotorrent/picotorrent/releases/latest";
}
