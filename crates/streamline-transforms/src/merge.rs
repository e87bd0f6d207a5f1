//! Merge transform: fills the gaps of an event's field map from a fixed set
//! of defaults.
//!
//! Fields already present on the event always win. Presence is decided by the
//! key alone, so a field explicitly set to `null` keeps its `null` and the
//! default for that key is not applied.

use std::fmt;

use streamline_core::{Event, Fields, Result, Transform, TransformDescriptor};

/// Kind tag under which [`MergeTransform`] is registered.
pub const KIND: &str = "merge";

/// Produces a new event whose fields are the event's fields merged with the
/// configured defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct MergeTransform {
    defaults: Fields,
}

impl MergeTransform {
    /// Takes ownership of `defaults`; they stay immutable for the lifetime of
    /// the transform.
    #[must_use]
    pub fn new(defaults: Fields) -> Self {
        Self { defaults }
    }

    /// Builds a merge transform from the `defaults` property of a descriptor.
    /// The mapping is copied, so later changes to the descriptor are not seen.
    pub fn from_descriptor(descriptor: &TransformDescriptor) -> Result<Self> {
        descriptor.defaults().map(Self::new)
    }

    #[must_use]
    pub fn defaults(&self) -> &Fields {
        &self.defaults
    }

    fn merge(&self, fields: &Fields) -> Fields {
        let mut merged = fields.clone();
        for (key, value) in &self.defaults {
            if !merged.contains_key(key) {
                merged.insert(key.clone(), value.clone());
            }
        }
        merged
    }
}

impl Transform for MergeTransform {
    /// Always yields exactly one event. Fails only when the input has no
    /// field map.
    fn execute(&self, input: &Event) -> Result<Vec<Event>> {
        let fields = input.require_fields()?;
        Ok(vec![Event::new(
            self.merge(fields),
            input.data_source_id.clone(),
        )])
    }
}

impl fmt::Display for MergeTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MergeTransform{{defaults={{")?;
        for (i, (key, value)) in self.defaults.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{key}={value}")?;
        }
        write!(f, "}}}}")
    }
}
