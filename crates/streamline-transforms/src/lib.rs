#![warn(clippy::unwrap_used, clippy::expect_used)]

//! Stock transform stages for streamline.
//!
//! [`MergeTransform`] fills missing fields of an event from configured
//! defaults, [`IdentityTransform`] passes events through. Both are reachable
//! by kind tag through [`TransformRegistry`] and can be composed with
//! [`TransformChain`].
//!
//! With the `telemetry` feature the registry and chain emit `tracing` events;
//! the stages themselves never log.

pub mod chain;
pub mod identity;
pub mod merge;
pub mod registry;

pub use chain::TransformChain;
pub use identity::IdentityTransform;
pub use merge::MergeTransform;
pub use registry::{Constructor, TransformRegistry};
pub use streamline_core::{Event, Fields, Result, Transform, TransformDescriptor, TransformError};
