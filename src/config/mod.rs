//! Settings persistence for PicoTorrent
//!
//! - **store**: the JSON document, load/save and generic typed access
//! - **accessors**: one get/set pair per named setting, with defaults
//! - **registry**: name → kind table for front ends working with strings

pub mod accessors;
pub mod error;
pub mod options;
pub mod paths;
pub mod registry;
pub mod store;
pub mod value;

// Re-export commonly used types
pub use accessors::keys;
pub use error::{Result, SettingsError};
pub use options::{CloseAction, ProxyType};
pub use registry::{SettingDisplay, SettingKey, SettingKind};
pub use store::Settings;
pub use value::SettingValue;
