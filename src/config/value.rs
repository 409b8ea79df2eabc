//! Typed encode/decode between JSON scalars and accessor types
//!
//! One [`SettingValue`] impl per scalar kind. Integers are stored as 64-bit
//! JSON integers and range-checked when narrowed to the accessor's width.

use serde_json::Value;

use super::error::{Result, SettingsError};

/// A type that can be stored under a settings key
pub trait SettingValue: Sized {
    /// Human-readable kind used in mismatch errors
    const KIND: &'static str;

    fn decode(key: &str, value: &Value) -> Result<Self>;

    fn encode(self) -> Value;
}

/// Name of the JSON kind held by `value`, for error messages
pub fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(_) => "integer",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

pub(crate) fn mismatch(key: &str, expected: &'static str, value: &Value) -> SettingsError {
    SettingsError::TypeMismatch {
        key: key.to_string(),
        expected,
        found: kind_name(value),
    }
}

/// Read the stored integer at full width
///
/// Accepts anything serde_json holds as an integer; floats (even `6881.0`)
/// are a kind mismatch.
pub(crate) fn decode_wide_integer(key: &str, value: &Value) -> Result<i128> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .map(i128::from)
            .or_else(|| n.as_u64().map(i128::from))
            .ok_or_else(|| mismatch(key, "integer", value)),
        _ => Err(mismatch(key, "integer", value)),
    }
}

macro_rules! integer_setting {
    ($($ty:ty),* $(,)?) => {
        $(
            impl SettingValue for $ty {
                const KIND: &'static str = "integer";

                fn decode(key: &str, value: &Value) -> Result<Self> {
                    let wide = decode_wide_integer(key, value)?;
                    <$ty>::try_from(wide).map_err(|_| SettingsError::OutOfRange {
                        key: key.to_string(),
                        value: wide,
                        target: stringify!($ty),
                    })
                }

                fn encode(self) -> Value {
                    Value::from(self)
                }
            }
        )*
    };
}

integer_setting!(i64, i32, u32, u16);

impl SettingValue for bool {
    const KIND: &'static str = "boolean";

    fn decode(key: &str, value: &Value) -> Result<Self> {
        value.as_bool().ok_or_else(|| mismatch(key, Self::KIND, value))
    }

    fn encode(self) -> Value {
        Value::Bool(self)
    }
}

impl SettingValue for String {
    const KIND: &'static str = "string";

    fn decode(key: &str, value: &Value) -> Result<Self> {
        value
            .as_str()
            .map(str::to_owned)
            .ok_or_else(|| mismatch(key, Self::KIND, value))
    }

    fn encode(self) -> Value {
        Value::String(self)
    }
}
