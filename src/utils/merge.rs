//! Recursive merge of JSON documents.

use serde_json::Value;

/// Merge `new` into `old` in place.
///
/// Objects present on both sides are merged key by key; any other value
/// (arrays included) replaces the previous one.
pub fn update_recursive(old: &mut Value, new: Value) {
    match (old, new) {
        (Value::Object(old_map), Value::Object(new_map)) => {
            for (key, value) in new_map {
                match old_map.get_mut(&key) {
                    Some(existing) if existing.is_object() && value.is_object() => {
                        update_recursive(existing, value);
                    }
                    _ => {
                        old_map.insert(key, value);
                    }
                }
            }
        }
        (old, new) => *old = new,
    }
}
