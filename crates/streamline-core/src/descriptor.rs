//! Opaque configuration a transform is constructed from.

use crate::error::{Result, TransformError};
use crate::event::Fields;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Property key holding the defaults of a `merge` transform.
pub const DEFAULTS_PROPERTY: &str = "defaults";

/// Describes one configured transform: a kind tag used for dispatch, an
/// optional label and kind-specific properties.
///
/// ```json
/// {"type": "merge", "name": "fill-units", "properties": {"defaults": {"unit": "C"}}}
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TransformDescriptor {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub properties: BTreeMap<String, Value>,
}

impl TransformDescriptor {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            name: None,
            properties: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_property(mut self, key: impl Into<String>, value: Value) -> Self {
        self.properties.insert(key.into(), value);
        self
    }

    /// Extracts the defaults mapping.
    ///
    /// A missing or `null` entry yields an empty map. Anything other than a
    /// JSON object is rejected; the values themselves are not inspected.
    pub fn defaults(&self) -> Result<Fields> {
        match self.properties.get(DEFAULTS_PROPERTY) {
            None | Some(Value::Null) => Ok(Fields::new()),
            Some(Value::Object(map)) => Ok(map
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect()),
            Some(other) => Err(TransformError::InvalidConfig {
                kind: self.kind.clone(),
                reason: format!("`{DEFAULTS_PROPERTY}` must be an object, found {other}"),
            }),
        }
    }
}
