//! The event record flowing through transform stages.
//!
//! An [`Event`] carries a field map and the identifier of the data source it
//! originated from. Field values are [`serde_json::Value`]s and are copied
//! opaquely by the stages; nothing in this crate interprets them.

use crate::error::{Result, TransformError};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Mapping from field name to an arbitrary value.
pub type Fields = BTreeMap<String, Value>;

/// A record with a field map and a data-source identifier.
///
/// `fields` is optional because upstream producers may hand over an event
/// whose field map is missing altogether (JSON `null` or no key). Stages treat
/// that as a fault, see [`Event::require_fields`]. An empty map is valid.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Field names to values. `None` is the absent map.
    pub fields: Option<Fields>,
    /// Opaque identifier of the event's origin, propagated unchanged.
    pub data_source_id: String,
}

impl Event {
    pub fn new(fields: Fields, data_source_id: impl Into<String>) -> Self {
        Self {
            fields: Some(fields),
            data_source_id: data_source_id.into(),
        }
    }

    /// An event whose field map is absent.
    pub fn without_fields(data_source_id: impl Into<String>) -> Self {
        Self {
            fields: None,
            data_source_id: data_source_id.into(),
        }
    }

    /// Borrows the field map, failing with [`TransformError::InvalidInput`]
    /// when it is absent.
    pub fn require_fields(&self) -> Result<&Fields> {
        self.fields
            .as_ref()
            .ok_or(TransformError::InvalidInput("event has no field map"))
    }

    /// Looks up a single field. Absent map and absent key both yield `None`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.as_ref().and_then(|f| f.get(key))
    }
}
