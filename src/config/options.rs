//! Enum-valued settings
//!
//! Stored on disk as their integer code. Decoding rejects codes that do not
//! name a variant instead of reinterpreting them.

use std::fmt;
use std::str::FromStr;

use serde_json::Value;

use super::error::{Result, SettingsError};
use super::value::{decode_wide_integer, SettingValue};

macro_rules! coded_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident ($label:literal) {
            $( $(#[$vmeta:meta])* $variant:ident = $code:literal => $text:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl $name {
            pub const ALL: &'static [Self] = &[ $( Self::$variant, )+ ];

            /// Integer code written to the settings file
            pub fn code(self) -> i64 {
                match self {
                    $( Self::$variant => $code, )+
                }
            }

            pub fn from_code(code: i64) -> Option<Self> {
                match code {
                    $( $code => Some(Self::$variant), )+
                    _ => None,
                }
            }

            pub fn as_str(self) -> &'static str {
                match self {
                    $( Self::$variant => $text, )+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = String;

            /// Accepts the snake_case name or the numeric code
            fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
                let s = s.trim();
                if let Some(found) = Self::ALL.iter().find(|v| v.as_str().eq_ignore_ascii_case(s)) {
                    return Ok(*found);
                }
                s.parse::<i64>()
                    .ok()
                    .and_then(Self::from_code)
                    .ok_or_else(|| {
                        let names: Vec<&str> = Self::ALL.iter().map(|v| v.as_str()).collect();
                        format!("one of {}", names.join(", "))
                    })
            }
        }

        impl SettingValue for $name {
            const KIND: &'static str = $label;

            fn decode(key: &str, value: &Value) -> Result<Self> {
                let code = decode_wide_integer(key, value)?;
                i64::try_from(code)
                    .ok()
                    .and_then(Self::from_code)
                    .ok_or_else(|| SettingsError::UnknownVariant {
                        key: key.to_string(),
                        code,
                        setting: $label,
                    })
            }

            fn encode(self) -> Value {
                Value::from(self.code())
            }
        }
    };
}

coded_enum! {
    /// What closing the main window does
    #[derive(Default)]
    pub enum CloseAction ("close action") {
        Exit = 0 => "exit",
        MinimizeToTray = 1 => "minimize_to_tray",
        /// Ask the user every time
        #[default]
        Prompt = 2 => "prompt",
    }
}

coded_enum! {
    /// Proxy used for peer and tracker connections
    ///
    /// Codes follow the session library's proxy type numbering.
    #[derive(Default)]
    pub enum ProxyType ("proxy type") {
        #[default]
        None = 0 => "none",
        Socks4 = 1 => "socks4",
        Socks5 = 2 => "socks5",
        /// SOCKS5 with username/password authentication
        Socks5Password = 3 => "socks5_pw",
        Http = 4 => "http",
        HttpPassword = 5 => "http_pw",
        I2p = 6 => "i2p",
    }
}

impl ProxyType {
    /// True when the proxy needs credentials configured alongside it
    pub fn requires_auth(self) -> bool {
        matches!(self, Self::Socks5Password | Self::HttpPassword)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_codes_are_stable() {
        assert_eq!(CloseAction::Exit.code(), 0);
        assert_eq!(CloseAction::MinimizeToTray.code(), 1);
        assert_eq!(CloseAction::Prompt.code(), 2);
        assert_eq!(ProxyType::None.code(), 0);
        assert_eq!(ProxyType::I2p.code(), 6);
    }

    #[test]
    fn test_decode_known_code() {
        assert_eq!(
            CloseAction::decode("close_action", &json!(1)).unwrap(),
            CloseAction::MinimizeToTray
        );
        assert_eq!(
            ProxyType::decode("proxy_type", &json!(3)).unwrap(),
            ProxyType::Socks5Password
        );
    }

    #[test]
    fn test_decode_unknown_code_is_rejected() {
        let err = CloseAction::decode("close_action", &json!(9)).unwrap_err();
        match err {
            SettingsError::UnknownVariant { key, code, setting } => {
                assert_eq!(key, "close_action");
                assert_eq!(code, 9);
                assert_eq!(setting, "close action");
            }
            other => panic!("expected UnknownVariant, got {other:?}"),
        }

        assert!(matches!(
            ProxyType::decode("proxy_type", &json!(-1)),
            Err(SettingsError::UnknownVariant { .. })
        ));
    }

    #[test]
    fn test_decode_wrong_kind() {
        assert!(matches!(
            ProxyType::decode("proxy_type", &json!("socks5")),
            Err(SettingsError::TypeMismatch { .. })
        ));
    }

    #[test]
    fn test_from_str_by_name_or_code() {
        assert_eq!("minimize_to_tray".parse::<CloseAction>().unwrap(), CloseAction::MinimizeToTray);
        assert_eq!("HTTP".parse::<ProxyType>().unwrap(), ProxyType::Http);
        assert_eq!("2".parse::<ProxyType>().unwrap(), ProxyType::Socks5);

        let err = "bogus".parse::<CloseAction>().unwrap_err();
        assert_eq!(err, "one of exit, minimize_to_tray, prompt");
    }

    #[test]
    fn test_defaults() {
        assert_eq!(CloseAction::default(), CloseAction::Prompt);
        assert_eq!(ProxyType::default(), ProxyType::None);
        assert!(ProxyType::HttpPassword.requires_auth());
        assert!(!ProxyType::Socks5.requires_auth());
    }
}
