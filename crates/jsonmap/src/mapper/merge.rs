use serde_json::Value;

/// Merge `patch` into `base` for partial updates.
///
/// Object entries merge per key, with nested objects recursing. Any other
/// patch value, including an explicit null, replaces the base value
/// outright. Keys present only in the patch are inserted.
pub(crate) fn merge_values(base: &mut Value, patch: Value) {
    match (base, patch) {
        (Value::Object(base_fields), Value::Object(patch_fields)) => {
            for (key, patch_value) in patch_fields {
                match base_fields.get_mut(&key) {
                    Some(slot) => merge_values(slot, patch_value),
                    None => {
                        base_fields.insert(key, patch_value);
                    }
                }
            }
        }
        (slot, patch) => *slot = patch,
    }
}
