use serde_json::{Map, Value};

use crate::text;

/// Which way object keys are renamed when external naming is enabled.
#[derive(Clone, Copy)]
pub(crate) enum Direction {
    /// Rust `snake_case` fields to external `camelCase` keys.
    ToExternal,
    /// External `camelCase` keys back to Rust `snake_case` fields.
    ToInternal,
}

/// Rename every object key in the tree per `direction`, recursively through
/// nested objects and arrays.
pub(crate) fn rename_keys(value: &mut Value, direction: Direction) {
    match value {
        Value::Object(fields) => {
            let mut renamed = Map::with_capacity(fields.len());
            for (key, mut child) in std::mem::take(fields) {
                rename_keys(&mut child, direction);
                let key = match direction {
                    Direction::ToExternal => text::to_camel_case(&key),
                    Direction::ToInternal => text::to_snake_case(&key),
                };
                renamed.insert(key, child);
            }
            *fields = renamed;
        }
        Value::Array(items) => {
            for item in items {
                rename_keys(item, direction);
            }
        }
        _ => {}
    }
}
