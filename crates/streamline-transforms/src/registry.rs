//! Kind-tag dispatch from a [`TransformDescriptor`] to a constructed stage.

use std::collections::HashMap;
use std::fmt;

use streamline_core::{Result, Transform, TransformDescriptor, TransformError};

use crate::{identity, merge, IdentityTransform, MergeTransform};

/// Builds a transform from its descriptor.
pub type Constructor = fn(&TransformDescriptor) -> Result<Box<dyn Transform>>;

/// Maps transform-kind tags to their constructors.
#[derive(Default, Clone)]
pub struct TransformRegistry {
    constructors: HashMap<String, Constructor>,
}

impl TransformRegistry {
    /// An empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry with the `merge` and `identity` kinds.
    #[must_use]
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(merge::KIND, create_merge);
        registry.register(identity::KIND, create_identity);
        registry
    }

    /// Registers `constructor` for `kind`, replacing any previous entry.
    pub fn register(&mut self, kind: impl Into<String>, constructor: Constructor) {
        self.constructors.insert(kind.into(), constructor);
    }

    #[must_use]
    pub fn contains(&self, kind: &str) -> bool {
        self.constructors.contains_key(kind)
    }

    /// Registered kind tags in sorted order.
    #[must_use]
    pub fn kinds(&self) -> Vec<&str> {
        let mut kinds: Vec<&str> = self.constructors.keys().map(String::as_str).collect();
        kinds.sort_unstable();
        kinds
    }

    /// Constructs the transform named by `descriptor.kind`.
    pub fn create(&self, descriptor: &TransformDescriptor) -> Result<Box<dyn Transform>> {
        let constructor = self
            .constructors
            .get(&descriptor.kind)
            .ok_or_else(|| TransformError::UnknownKind(descriptor.kind.clone()))?;
        let transform = constructor(descriptor)?;
        #[cfg(feature = "telemetry")]
        tracing::debug!(
            kind = %descriptor.kind,
            name = descriptor.name.as_deref().unwrap_or(""),
            transform = %transform,
            "created transform"
        );
        Ok(transform)
    }
}

impl fmt::Debug for TransformRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransformRegistry")
            .field("kinds", &self.kinds())
            .finish()
    }
}

fn create_merge(descriptor: &TransformDescriptor) -> Result<Box<dyn Transform>> {
    Ok(Box::new(MergeTransform::from_descriptor(descriptor)?))
}

fn create_identity(_descriptor: &TransformDescriptor) -> Result<Box<dyn Transform>> {
    Ok(Box::new(IdentityTransform))
}
