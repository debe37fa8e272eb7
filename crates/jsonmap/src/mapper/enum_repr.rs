//! Serde adapter for enum fields whose wire form follows the mapper toggle.
//!
//! Annotate enum-typed fields with
//! `#[serde(with = "jsonmap::mapper::enum_repr")]`. By default the variant's
//! symbolic name is written and read. When the mapper performing the call
//! has `enable_enum_display_string` set, the `Display`/`FromStr` string form
//! is used instead, for both encode and decode.

use std::fmt::Display;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use super::context;

pub fn serialize<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    T: Serialize + Display,
    S: Serializer,
{
    if context::enum_display_enabled() {
        serializer.collect_str(value)
    } else {
        value.serialize(serializer)
    }
}

pub fn deserialize<'de, T, D>(deserializer: D) -> Result<T, D::Error>
where
    T: Deserialize<'de> + FromStr,
    T::Err: Display,
    D: Deserializer<'de>,
{
    if context::enum_display_enabled() {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    } else {
        T::deserialize(deserializer)
    }
}

#[cfg(test)]
mod tests {
    use std::fmt;
    use std::str::FromStr;

    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
    enum Mode {
        ReadOnly,
        ReadWrite,
    }

    impl fmt::Display for Mode {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            let label = match self {
                Mode::ReadOnly => "ro",
                Mode::ReadWrite => "rw",
            };
            f.write_str(label)
        }
    }

    impl FromStr for Mode {
        type Err = String;

        fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
            match s {
                "ro" => Ok(Mode::ReadOnly),
                "rw" => Ok(Mode::ReadWrite),
                other => Err(format!("unknown mode: {other}")),
            }
        }
    }

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Volume {
        #[serde(with = "crate::mapper::enum_repr")]
        mode: Mode,
    }

    // Outside a mapper call the adapter behaves like the plain derive.

    #[test]
    fn symbolic_name_without_context() {
        let text = serde_json::to_string(&Volume {
            mode: Mode::ReadOnly,
        })
        .unwrap();
        assert_eq!(text, r#"{"mode":"ReadOnly"}"#);
    }

    #[test]
    fn symbolic_name_decodes_without_context() {
        let volume: Volume = serde_json::from_str(r#"{"mode":"ReadWrite"}"#).unwrap();
        assert_eq!(volume.mode, Mode::ReadWrite);
    }
}
