//! Serde adapter for `DateTime<Utc>` fields rendered in the mapper's
//! configured timezone.
//!
//! Annotate timestamp fields with
//! `#[serde(with = "jsonmap::mapper::local_time")]`. Encoding writes
//! RFC 3339 text shifted into the calling mapper's offset (UTC outside a
//! mapper call); decoding accepts RFC 3339 with any offset and normalizes
//! back to UTC.

use chrono::{DateTime, Utc};
use serde::{de, Deserialize, Deserializer, Serializer};

use super::context;

pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let shifted = value.with_timezone(&context::timezone());
    serializer.serialize_str(&shifted.to_rfc3339())
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    DateTime::parse_from_rfc3339(&raw)
        .map(|parsed| parsed.with_timezone(&Utc))
        .map_err(de::Error::custom)
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Stamp {
        #[serde(with = "crate::mapper::local_time")]
        at: DateTime<Utc>,
    }

    #[test]
    fn encodes_utc_without_context() {
        let stamp = Stamp {
            at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap(),
        };
        let text = serde_json::to_string(&stamp).unwrap();
        assert_eq!(text, r#"{"at":"2024-05-01T12:30:00+00:00"}"#);
    }

    #[test]
    fn decodes_offset_text_to_utc() {
        let stamp: Stamp =
            serde_json::from_str(r#"{"at":"2024-05-01T20:30:00+08:00"}"#).unwrap();
        assert_eq!(stamp.at, Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap());
    }

    #[test]
    fn rejects_non_rfc3339_text() {
        let result: std::result::Result<Stamp, _> =
            serde_json::from_str(r#"{"at":"yesterday"}"#);
        assert!(result.is_err());
    }
}
