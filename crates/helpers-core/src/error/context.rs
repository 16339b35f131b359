use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Structured annotation naming the input or condition that caused an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorContext {
    pub field: String,
    pub message: String,
}

impl ErrorContext {
    #[must_use]
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Returns the context as a `field` / `message` key-value mapping.
    #[must_use]
    pub fn to_map(&self) -> BTreeMap<&'static str, String> {
        BTreeMap::from([
            ("field", self.field.clone()),
            ("message", self.message.clone()),
        ])
    }
}
