#![forbid(unsafe_code)]

pub mod config;
pub mod constants;

pub use config::{CloseAction, ProxyType, Settings, SettingsError};
