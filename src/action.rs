use std::fmt::Debug;

use serde_json::Value;

/// An action dispatched through the store.
///
/// The adapter only ever reads the action's type identifier; the rest of the
/// payload is handed to the mapping untouched. `Debug` is required so the
/// action can be named in diagnostics.
pub trait Action: Debug {
    /// The identifier used to look the action up in a mapping table.
    fn action_type(&self) -> &str;
}

/// Untyped actions: the `"type"` field of a JSON object.
///
/// A value without a string `"type"` field reports an empty type.
impl Action for Value {
    fn action_type(&self) -> &str {
        self.get("type").and_then(Value::as_str).unwrap_or("")
    }
}

impl<T: Action + ?Sized> Action for &T {
    fn action_type(&self) -> &str {
        (**self).action_type()
    }
}

impl<T: Action + ?Sized> Action for Box<T> {
    fn action_type(&self) -> &str {
        (**self).action_type()
    }
}
