//! Configurable JSON codec facade over `serde_json`.
//!
//! A `JsonMapper` holds an inclusion policy fixed at construction plus two
//! runtime toggles (enum wire form, external key naming) and a default
//! timezone. All conversions go through the instance so the configuration
//! applies uniformly, and every fallible operation returns an explicit
//! `Result` while logging a warning at the boundary.

pub mod enum_repr;
pub mod local_time;
pub mod typed;

mod context;
mod inclusion;
mod merge;
mod naming;

use std::sync::atomic::{AtomicBool, Ordering};

use chrono::{FixedOffset, Local};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::errors::{JsonMapError, Result};

pub use inclusion::Inclusion;
pub use typed::{mapping_of, sequence_of, TypeToken};

/// Fixed replacement text returned by [`JsonMapper::log_json`] when the
/// serialized form exceeds the caller's length limit.
pub const LOG_SIZE_PLACEHOLDER: &str = "omitted: json exceeds log size limit";

/// JSON codec facade with a fixed inclusion policy and runtime toggles.
///
/// Encode/decode operations take `&self` and may be shared across threads.
/// The toggles are atomics, so flipping one mid-traffic is not a data race,
/// but for a uniform wire form they should be set before the first call.
#[derive(Debug)]
pub struct JsonMapper {
    inclusion: Inclusion,
    enum_display: AtomicBool,
    external_naming: AtomicBool,
    timezone: FixedOffset,
}

impl JsonMapper {
    /// Mapper that writes every field and uses the host's local timezone.
    pub fn new() -> Self {
        Self::with_inclusion(Inclusion::Always)
    }

    /// Mapper with an explicit inclusion policy.
    pub fn with_inclusion(inclusion: Inclusion) -> Self {
        Self {
            inclusion,
            enum_display: AtomicBool::new(false),
            external_naming: AtomicBool::new(false),
            timezone: *Local::now().offset(),
        }
    }

    /// Mapper that drops null fields, the usual choice for external-facing
    /// payloads.
    pub fn non_null() -> Self {
        Self::with_inclusion(Inclusion::NonNull)
    }

    /// Mapper that drops default-valued fields, the most compact form, for
    /// internal storage.
    pub fn non_default() -> Self {
        Self::with_inclusion(Inclusion::NonDefault)
    }

    /// Override the default timezone applied by the `local_time` adapter.
    pub fn with_timezone(mut self, timezone: FixedOffset) -> Self {
        self.timezone = timezone;
        self
    }

    /// The inclusion policy this mapper was built with.
    pub fn inclusion(&self) -> Inclusion {
        self.inclusion
    }

    /// The timezone applied to `local_time` fields encoded via this mapper.
    pub fn default_timezone(&self) -> FixedOffset {
        self.timezone
    }

    /// Write and read enums through their `Display`/`FromStr` string instead
    /// of the variant name, for fields annotated with the [`enum_repr`]
    /// adapter. Call before any encode/decode traffic that involves such
    /// fields so the wire form stays uniform.
    pub fn enable_enum_display_string(&self) {
        self.enum_display.store(true, Ordering::SeqCst);
    }

    /// Rename object keys to `camelCase` on encode and back to `snake_case`
    /// on decode, so model structs carry plain Rust field names with no
    /// engine-specific attributes.
    pub fn enable_external_naming(&self) {
        self.external_naming.store(true, Ordering::SeqCst);
    }

    /// Serialize `value` to JSON text under this mapper's configuration.
    ///
    /// `None` encodes to the literal `null` and an empty sequence to `[]`.
    pub fn to_json<T: Serialize>(&self, value: &T) -> Result<String> {
        let _guard = self.enter_call();
        if self.inclusion == Inclusion::Always && !self.external_naming_enabled() {
            return serde_json::to_string(value).map_err(encode_error);
        }
        let tree = self.shape_output(value)?;
        serde_json::to_string(&tree).map_err(encode_error)
    }

    /// Pretty-printed variant of [`to_json`](Self::to_json).
    pub fn to_json_pretty<T: Serialize>(&self, value: &T) -> Result<String> {
        let _guard = self.enter_call();
        if self.inclusion == Inclusion::Always && !self.external_naming_enabled() {
            return serde_json::to_string_pretty(value).map_err(encode_error);
        }
        let tree = self.shape_output(value)?;
        serde_json::to_string_pretty(&tree).map_err(encode_error)
    }

    /// Serialize for a log line: text longer than `limit` bytes is replaced
    /// by [`LOG_SIZE_PLACEHOLDER`]. Text of exactly `limit` bytes passes
    /// through unchanged.
    pub fn log_json<T: Serialize>(&self, value: &T, limit: usize) -> Result<String> {
        let text = self.to_json(value)?;
        if text.len() > limit {
            return Ok(LOG_SIZE_PLACEHOLDER.to_string());
        }
        Ok(text)
    }

    /// Deserialize JSON text into `T`.
    ///
    /// Empty input and the literal `null` return `Ok(None)`, so "no data"
    /// stays distinguishable from a decode failure.
    pub fn from_json<T: DeserializeOwned>(&self, text: &str) -> Result<Option<T>> {
        if text.is_empty() || text == "null" {
            return Ok(None);
        }
        let _guard = self.enter_call();
        if self.external_naming_enabled() {
            let mut tree: Value =
                serde_json::from_str(text).map_err(|e| decode_error(text, e))?;
            naming::rename_keys(&mut tree, naming::Direction::ToInternal);
            return serde_json::from_value(tree)
                .map(Some)
                .map_err(|e| decode_error(text, e));
        }
        serde_json::from_str(text)
            .map(Some)
            .map_err(|e| decode_error(text, e))
    }

    /// Deserialize into a composite target named by a [`TypeToken`] built
    /// with [`sequence_of`] or [`mapping_of`]. Same contract as
    /// [`from_json`](Self::from_json).
    pub fn from_json_typed<T: DeserializeOwned>(
        &self,
        text: &str,
        _target: &TypeToken<T>,
    ) -> Result<Option<T>> {
        self.from_json(text)
    }

    /// Apply the fields present in `text` onto `target`, leaving the rest of
    /// the target as it was.
    ///
    /// Nested objects merge recursively; any other patch value, including an
    /// explicit null, overwrites. Empty or `null` input is a no-op. A patch
    /// that is not a JSON object, or a target that does not serialize to
    /// one, is rejected with [`JsonMapError::UpdateShape`]. The target is
    /// only written on success.
    pub fn update<T>(&self, text: &str, target: &mut T) -> Result<()>
    where
        T: Serialize + DeserializeOwned,
    {
        if text.is_empty() || text == "null" {
            return Ok(());
        }
        let _guard = self.enter_call();
        let mut patch: Value =
            serde_json::from_str(text).map_err(|e| decode_error(text, e))?;
        if self.external_naming_enabled() {
            naming::rename_keys(&mut patch, naming::Direction::ToInternal);
        }
        if !patch.is_object() {
            return Err(JsonMapError::UpdateShape(value_kind(&patch)));
        }
        let mut base = serde_json::to_value(&*target).map_err(encode_error)?;
        if !base.is_object() {
            return Err(JsonMapError::UpdateShape(value_kind(&base)));
        }
        merge::merge_values(&mut base, patch);
        *target = serde_json::from_value(base).map_err(|e| decode_error(text, e))?;
        Ok(())
    }

    /// Wrap the serialized value in a JSONP callback invocation: exactly
    /// `function_name(<json>)`, single line, no trailing semicolon.
    pub fn to_jsonp<T: Serialize>(&self, function_name: &str, value: &T) -> Result<String> {
        let body = self.to_json(value)?;
        Ok(format!("{function_name}({body})"))
    }

    /// Engine-level extension seam: convert to a raw `serde_json::Value`
    /// with this mapper's adapters in effect but no inclusion pruning or key
    /// renaming applied.
    pub fn to_value<T: Serialize>(&self, value: &T) -> Result<Value> {
        let _guard = self.enter_call();
        serde_json::to_value(value).map_err(encode_error)
    }

    /// Engine-level extension seam: decode a raw `serde_json::Value`.
    pub fn from_value<T: DeserializeOwned>(&self, value: Value) -> Result<T> {
        let _guard = self.enter_call();
        serde_json::from_value(value).map_err(|error| {
            tracing::warn!(error = %error, "json value decode failed");
            JsonMapError::Decode(error)
        })
    }

    fn shape_output<T: Serialize>(&self, value: &T) -> Result<Value> {
        let mut tree = serde_json::to_value(value).map_err(encode_error)?;
        inclusion::prune(&mut tree, self.inclusion);
        if self.external_naming_enabled() {
            naming::rename_keys(&mut tree, naming::Direction::ToExternal);
        }
        Ok(tree)
    }

    fn enter_call(&self) -> context::ContextGuard {
        context::enter(context::CallContext {
            enum_display: self.enum_display.load(Ordering::SeqCst),
            timezone: self.timezone,
        })
    }

    fn external_naming_enabled(&self) -> bool {
        self.external_naming.load(Ordering::SeqCst)
    }
}

impl Default for JsonMapper {
    fn default() -> Self {
        Self::new()
    }
}

fn encode_error(error: serde_json::Error) -> JsonMapError {
    tracing::warn!(error = %error, "json encode failed");
    JsonMapError::Encode(error)
}

fn decode_error(input: &str, error: serde_json::Error) -> JsonMapError {
    tracing::warn!(input, error = %error, "json decode failed");
    JsonMapError::Decode(error)
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
