use serde_json::Value;

/// Rule governing which object fields are written to JSON output.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Inclusion {
    /// Write every field regardless of value.
    #[default]
    Always,
    /// Drop fields whose value is null.
    NonNull,
    /// Drop fields whose value is null, false, zero, or an empty
    /// string, array, or object.
    NonDefault,
}

/// Prune object entries from `value` per `inclusion`.
///
/// Children are pruned first so a nested object emptied by pruning is itself
/// droppable under `NonDefault`. Array elements and the top-level value are
/// never dropped, only object entries.
pub(crate) fn prune(value: &mut Value, inclusion: Inclusion) {
    if inclusion == Inclusion::Always {
        return;
    }
    match value {
        Value::Object(fields) => {
            for child in fields.values_mut() {
                prune(child, inclusion);
            }
            match inclusion {
                Inclusion::Always => {}
                Inclusion::NonNull => fields.retain(|_, child| !child.is_null()),
                Inclusion::NonDefault => {
                    fields.retain(|_, child| !is_default_value(child));
                }
            }
        }
        Value::Array(items) => {
            for item in items {
                prune(item, inclusion);
            }
        }
        _ => {}
    }
}

fn is_default_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(flag) => !*flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n == 0.0),
        Value::String(text) => text.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(fields) => fields.is_empty(),
    }
}
