//! Named settings with their built-in defaults

use std::path::{Path, PathBuf};

use crate::constants::defaults;

use super::error::{Result, SettingsError};
use super::options::{CloseAction, ProxyType};
use super::paths::default_download_dir;
use super::store::Settings;
use super::value::SettingValue;

/// Keys as written to the settings file
pub mod keys {
    pub const ALERT_QUEUE_SIZE: &str = "alert_queue_size";
    pub const CLOSE_ACTION: &str = "close_action";
    pub const CHECK_FOR_UPDATES: &str = "check_for_updates";
    pub const DEFAULT_SAVE_PATH: &str = "default_save_path";
    pub const IGNORED_UPDATE: &str = "ignored_update";
    pub const LISTEN_ADDRESS: &str = "listen_address";
    pub const LISTEN_PORT: &str = "listen_port";
    pub const PROMPT_FOR_REMOVE_DATA: &str = "prompt_for_remove_data";
    pub const PROMPT_FOR_SAVE_PATH: &str = "prompt_for_save_path";
    pub const PROXY_TYPE: &str = "proxy_type";
    pub const STOP_TRACKER_TIMEOUT: &str = "stop_tracker_timeout";
    pub const UPDATE_URL: &str = "update_url";
}

impl Settings {
    pub fn alert_queue_size(&self) -> Result<u32> {
        self.get_or_default(keys::ALERT_QUEUE_SIZE, defaults::ALERT_QUEUE_SIZE)
    }

    pub fn set_alert_queue_size(&mut self, size: u32) {
        self.set(keys::ALERT_QUEUE_SIZE, size);
    }

    pub fn close_action(&self) -> Result<CloseAction> {
        self.get_or_default(keys::CLOSE_ACTION, CloseAction::default())
    }

    pub fn set_close_action(&mut self, action: CloseAction) {
        self.set(keys::CLOSE_ACTION, action);
    }

    pub fn check_for_updates(&self) -> Result<bool> {
        self.get_or_default(keys::CHECK_FOR_UPDATES, defaults::CHECK_FOR_UPDATES)
    }

    pub fn set_check_for_updates(&mut self, value: bool) {
        self.set(keys::CHECK_FOR_UPDATES, value);
    }

    /// Where new torrents are saved; falls back to the user's downloads folder
    pub fn default_save_path(&self) -> Result<PathBuf> {
        match self.raw(keys::DEFAULT_SAVE_PATH) {
            Some(stored) => String::decode(keys::DEFAULT_SAVE_PATH, stored).map(PathBuf::from),
            None => Ok(default_download_dir()),
        }
    }

    /// Stored as a UTF-8 string; paths that are not valid UTF-8 are refused
    pub fn set_default_save_path(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let text = path.to_str().ok_or_else(|| SettingsError::NonUtf8Path {
            key: keys::DEFAULT_SAVE_PATH.to_string(),
            path: path.to_path_buf(),
        })?;
        self.set(keys::DEFAULT_SAVE_PATH, text.to_string());
        Ok(())
    }

    pub fn ignored_update(&self) -> Result<String> {
        self.get_or_default(keys::IGNORED_UPDATE, defaults::IGNORED_UPDATE.to_string())
    }

    pub fn set_ignored_update(&mut self, version: impl Into<String>) {
        self.set(keys::IGNORED_UPDATE, version.into());
    }

    pub fn listen_address(&self) -> Result<String> {
        self.get_or_default(keys::LISTEN_ADDRESS, defaults::LISTEN_ADDRESS.to_string())
    }

    pub fn set_listen_address(&mut self, address: impl Into<String>) {
        self.set(keys::LISTEN_ADDRESS, address.into());
    }

    pub fn listen_port(&self) -> Result<u16> {
        self.get_or_default(keys::LISTEN_PORT, defaults::LISTEN_PORT)
    }

    pub fn set_listen_port(&mut self, port: u16) {
        self.set(keys::LISTEN_PORT, port);
    }

    pub fn prompt_for_remove_data(&self) -> Result<bool> {
        self.get_or_default(keys::PROMPT_FOR_REMOVE_DATA, defaults::PROMPT_FOR_REMOVE_DATA)
    }

    pub fn set_prompt_for_remove_data(&mut self, value: bool) {
        self.set(keys::PROMPT_FOR_REMOVE_DATA, value);
    }

    pub fn prompt_for_save_path(&self) -> Result<bool> {
        self.get_or_default(keys::PROMPT_FOR_SAVE_PATH, defaults::PROMPT_FOR_SAVE_PATH)
    }

    pub fn set_prompt_for_save_path(&mut self, value: bool) {
        self.set(keys::PROMPT_FOR_SAVE_PATH, value);
    }

    pub fn proxy_type(&self) -> Result<ProxyType> {
        self.get_or_default(keys::PROXY_TYPE, ProxyType::default())
    }

    pub fn set_proxy_type(&mut self, proxy: ProxyType) {
        self.set(keys::PROXY_TYPE, proxy);
    }

    /// Seconds to wait for trackers on shutdown
    pub fn stop_tracker_timeout(&self) -> Result<u32> {
        self.get_or_default(keys::STOP_TRACKER_TIMEOUT, defaults::STOP_TRACKER_TIMEOUT)
    }

    pub fn set_stop_tracker_timeout(&mut self, seconds: u32) {
        self.set(keys::STOP_TRACKER_TIMEOUT, seconds);
    }

    pub fn update_url(&self) -> Result<String> {
        self.get_or_default(keys::UPDATE_URL, defaults::UPDATE_URL.to_string())
    }

    pub fn set_update_url(&mut self, url: impl Into<String>) {
        self.set(keys::UPDATE_URL, url.into());
    }
}
