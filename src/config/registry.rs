//! Table of every named setting, for generic listing and editing
//!
//! Typed callers use the accessors on [`Settings`]; this module is for
//! front ends that only have a setting name and a string.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::accessors::keys;
use super::error::{Result, SettingsError};
use super::options::{CloseAction, ProxyType};
use super::store::Settings;

/// Value shape of a named setting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingKind {
    Integer { min: i64, max: i64 },
    Boolean,
    Text,
    Path,
    /// Integer code with named variants
    Enum { names: &'static [&'static str] },
}

impl SettingKind {
    fn describe(self) -> String {
        match self {
            Self::Integer { min, max } => format!("an integer in {min}..={max}"),
            Self::Boolean => "true or false".to_string(),
            Self::Text => "text".to_string(),
            Self::Path => "a UTF-8 path".to_string(),
            Self::Enum { names } => format!("one of {}", names.join(", ")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingKey {
    AlertQueueSize,
    CloseAction,
    CheckForUpdates,
    DefaultSavePath,
    IgnoredUpdate,
    ListenAddress,
    ListenPort,
    PromptForRemoveData,
    PromptForSavePath,
    ProxyType,
    StopTrackerTimeout,
    UpdateUrl,
}

const CLOSE_ACTION_NAMES: &[&str] = &["exit", "minimize_to_tray", "prompt"];
const PROXY_TYPE_NAMES: &[&str] = &[
    "none", "socks4", "socks5", "socks5_pw", "http", "http_pw", "i2p",
];

impl SettingKey {
    pub const ALL: &'static [Self] = &[
        Self::AlertQueueSize,
        Self::CloseAction,
        Self::CheckForUpdates,
        Self::DefaultSavePath,
        Self::IgnoredUpdate,
        Self::ListenAddress,
        Self::ListenPort,
        Self::PromptForRemoveData,
        Self::PromptForSavePath,
        Self::ProxyType,
        Self::StopTrackerTimeout,
        Self::UpdateUrl,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::AlertQueueSize => keys::ALERT_QUEUE_SIZE,
            Self::CloseAction => keys::CLOSE_ACTION,
            Self::CheckForUpdates => keys::CHECK_FOR_UPDATES,
            Self::DefaultSavePath => keys::DEFAULT_SAVE_PATH,
            Self::IgnoredUpdate => keys::IGNORED_UPDATE,
            Self::ListenAddress => keys::LISTEN_ADDRESS,
            Self::ListenPort => keys::LISTEN_PORT,
            Self::PromptForRemoveData => keys::PROMPT_FOR_REMOVE_DATA,
            Self::PromptForSavePath => keys::PROMPT_FOR_SAVE_PATH,
            Self::ProxyType => keys::PROXY_TYPE,
            Self::StopTrackerTimeout => keys::STOP_TRACKER_TIMEOUT,
            Self::UpdateUrl => keys::UPDATE_URL,
        }
    }

    pub fn kind(self) -> SettingKind {
        match self {
            Self::AlertQueueSize | Self::StopTrackerTimeout => SettingKind::Integer {
                min: 0,
                max: i64::from(u32::MAX),
            },
            Self::ListenPort => SettingKind::Integer {
                min: 0,
                max: i64::from(u16::MAX),
            },
            Self::CheckForUpdates | Self::PromptForRemoveData | Self::PromptForSavePath => {
                SettingKind::Boolean
            }
            Self::IgnoredUpdate | Self::ListenAddress | Self::UpdateUrl => SettingKind::Text,
            Self::DefaultSavePath => SettingKind::Path,
            Self::CloseAction => SettingKind::Enum {
                names: CLOSE_ACTION_NAMES,
            },
            Self::ProxyType => SettingKind::Enum {
                names: PROXY_TYPE_NAMES,
            },
        }
    }
}

impl fmt::Display for SettingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SettingKey {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|key| key.name() == s)
            .ok_or_else(|| {
                let names: Vec<&str> = Self::ALL.iter().map(|k| k.name()).collect();
                format!("unknown setting '{s}', expected one of: {}", names.join(", "))
            })
    }
}

/// Effective value of one setting, rendered for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SettingDisplay {
    pub name: &'static str,
    pub value: String,
    /// False when the built-in default is in effect
    pub stored: bool,
}

impl Settings {
    /// Current value of `key` (stored or default) as text
    pub fn effective(&self, key: SettingKey) -> Result<SettingDisplay> {
        let value = match key {
            SettingKey::AlertQueueSize => self.alert_queue_size()?.to_string(),
            SettingKey::CloseAction => self.close_action()?.to_string(),
            SettingKey::CheckForUpdates => self.check_for_updates()?.to_string(),
            SettingKey::DefaultSavePath => self.default_save_path()?.display().to_string(),
            SettingKey::IgnoredUpdate => self.ignored_update()?,
            SettingKey::ListenAddress => self.listen_address()?,
            SettingKey::ListenPort => self.listen_port()?.to_string(),
            SettingKey::PromptForRemoveData => self.prompt_for_remove_data()?.to_string(),
            SettingKey::PromptForSavePath => self.prompt_for_save_path()?.to_string(),
            SettingKey::ProxyType => self.proxy_type()?.to_string(),
            SettingKey::StopTrackerTimeout => self.stop_tracker_timeout()?.to_string(),
            SettingKey::UpdateUrl => self.update_url()?,
        };

        Ok(SettingDisplay {
            name: key.name(),
            value,
            stored: self.contains(key.name()),
        })
    }

    /// Parse `input` for `key`'s kind and store it
    pub fn set_from_str(&mut self, key: SettingKey, input: &str) -> Result<()> {
        let invalid = || SettingsError::InvalidInput {
            key: key.name().to_string(),
            input: input.to_string(),
            expected: key.kind().describe(),
        };

        match key {
            SettingKey::AlertQueueSize => {
                self.set_alert_queue_size(input.trim().parse().map_err(|_| invalid())?)
            }
            SettingKey::StopTrackerTimeout => {
                self.set_stop_tracker_timeout(input.trim().parse().map_err(|_| invalid())?)
            }
            SettingKey::ListenPort => {
                self.set_listen_port(input.trim().parse().map_err(|_| invalid())?)
            }
            SettingKey::CheckForUpdates => {
                self.set_check_for_updates(parse_bool(input).ok_or_else(invalid)?)
            }
            SettingKey::PromptForRemoveData => {
                self.set_prompt_for_remove_data(parse_bool(input).ok_or_else(invalid)?)
            }
            SettingKey::PromptForSavePath => {
                self.set_prompt_for_save_path(parse_bool(input).ok_or_else(invalid)?)
            }
            SettingKey::CloseAction => {
                self.set_close_action(input.parse::<CloseAction>().map_err(|_| invalid())?)
            }
            SettingKey::ProxyType => {
                self.set_proxy_type(input.parse::<ProxyType>().map_err(|_| invalid())?)
            }
            SettingKey::DefaultSavePath => self.set_default_save_path(input)?,
            SettingKey::IgnoredUpdate => self.set_ignored_update(input),
            SettingKey::ListenAddress => self.set_listen_address(input),
            SettingKey::UpdateUrl => self.set_update_url(input),
        }
        Ok(())
    }
}

fn parse_bool(input: &str) -> Option<bool> {
    match input.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}
