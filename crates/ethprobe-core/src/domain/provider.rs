//! The injected wallet-provider value.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Metadata key carrying the MetaMask capability marker.
pub const METAMASK_MARKER_KEY: &str = "isMetaMask";

/// A wallet-provider object injected by the host agent.
///
/// This is a JSON-shaped bag of host metadata. The detector treats it as
/// opaque except for the optional boolean capability marker; everything else
/// passes through untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProviderObject {
    fields: Map<String, Value>,
}

impl ProviderObject {
    /// Create an empty provider object (no capability marker).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a provider object carrying the MetaMask capability marker.
    #[must_use]
    pub fn metamask() -> Self {
        Self::new().with_field(METAMASK_MARKER_KEY, true)
    }

    /// Set a metadata field, builder-style.
    #[must_use]
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Look up a metadata field.
    #[must_use]
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Whether the provider carries the MetaMask capability marker.
    ///
    /// Absent and non-boolean markers both count as unmarked.
    #[must_use]
    pub fn is_metamask(&self) -> bool {
        matches!(self.field(METAMASK_MARKER_KEY), Some(Value::Bool(true)))
    }
}
