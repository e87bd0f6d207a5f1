#![warn(clippy::unwrap_used, clippy::expect_used)]

//! Core types of the streamline transform stages: the [`Event`] record, the
//! [`Transform`] trait every stage implements and the opaque
//! [`TransformDescriptor`] a stage is built from.

pub mod descriptor;
pub mod error;
pub mod event;

pub use descriptor::TransformDescriptor;
pub use error::{Result, TransformError};
pub use event::{Event, Fields};

/// A stage that maps one input event to zero or more output events.
///
/// Implementations hold no per-call state, so a single instance can be shared
/// between threads and invoked concurrently. `Display` is a human-readable
/// summary of the stage's configuration, used for diagnostics only.
pub trait Transform: std::fmt::Display + Send + Sync {
    fn execute(&self, input: &Event) -> Result<Vec<Event>>;
}
