//! Ordered composition of transforms.

use std::fmt;

use streamline_core::{Event, Result, Transform, TransformDescriptor};

use crate::TransformRegistry;

/// Runs events through a sequence of transforms.
///
/// Every output of one stage is fed to the next and the results are
/// concatenated in order. An empty chain passes the input through.
#[derive(Default)]
pub struct TransformChain {
    stages: Vec<Box<dyn Transform>>,
}

impl TransformChain {
    #[must_use]
    pub fn new(stages: Vec<Box<dyn Transform>>) -> Self {
        Self { stages }
    }

    /// Builds every descriptor through `registry`, failing on the first one
    /// that cannot be constructed.
    pub fn from_descriptors(
        registry: &TransformRegistry,
        descriptors: &[TransformDescriptor],
    ) -> Result<Self> {
        let stages = descriptors
            .iter()
            .map(|d| registry.create(d))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(stages))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    pub fn stages(&self) -> impl Iterator<Item = &dyn Transform> {
        self.stages
            .iter()
            .map(|stage| -> &dyn Transform { stage.as_ref() })
    }
}

impl Transform for TransformChain {
    fn execute(&self, input: &Event) -> Result<Vec<Event>> {
        let mut events = vec![input.clone()];
        for stage in &self.stages {
            let mut next = Vec::with_capacity(events.len());
            for event in &events {
                next.extend(stage.execute(event)?);
            }
            events = next;
        }
        #[cfg(feature = "telemetry")]
        tracing::trace!(
            stages = self.stages.len(),
            emitted = events.len(),
            "chain executed"
        );
        Ok(events)
    }
}

impl fmt::Display for TransformChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TransformChain[")?;
        for (i, stage) in self.stages.iter().enumerate() {
            if i > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "{stage}")?;
        }
        write!(f, "]")
    }
}

impl fmt::Debug for TransformChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;
    use crate::{IdentityTransform, MergeTransform};
    use serde_json::json;
    use streamline_core::{Fields, TransformError};

    /// Emits every event twice, to check fan-out handling.
    struct Duplicate;

    impl Transform for Duplicate {
        fn execute(&self, input: &Event) -> Result<Vec<Event>> {
            Ok(vec![input.clone(), input.clone()])
        }
    }

    impl fmt::Display for Duplicate {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("Duplicate")
        }
    }

    fn merge(defaults: serde_json::Value) -> Box<dyn Transform> {
        Box::new(MergeTransform::new(
            serde_json::from_value(defaults).expect("defaults fixture must be an object"),
        ))
    }

    #[test]
    fn empty_chain_passes_input_through() {
        let chain = TransformChain::default();
        let input = Event::new(Fields::new(), "src");
        assert!(chain.is_empty());
        assert_eq!(chain.execute(&input).expect("no stages"), vec![input]);
    }

    #[test]
    fn earlier_stage_wins_on_shared_key() {
        let chain = TransformChain::new(vec![
            merge(json!({"unit": "C"})),
            merge(json!({"unit": "F", "site": "north"})),
        ]);
        let out = chain
            .execute(&Event::new(Fields::new(), "src"))
            .expect("chain should succeed");
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].get("unit"), Some(&json!("C")));
        assert_eq!(out[0].get("site"), Some(&json!("north")));
    }

    #[test]
    fn fan_out_feeds_every_event_downstream() {
        let chain = TransformChain::new(vec![
            Box::new(Duplicate),
            merge(json!({"x": 1})),
            Box::new(Duplicate),
        ]);
        let out = chain
            .execute(&Event::new(Fields::new(), "src"))
            .expect("chain should succeed");
        assert_eq!(out.len(), 4);
        assert!(out.iter().all(|e| e.get("x") == Some(&json!(1))));
    }

    #[test]
    fn fault_aborts_chain() {
        let chain = TransformChain::new(vec![Box::new(IdentityTransform), merge(json!({}))]);
        let err = chain.execute(&Event::without_fields("src"));
        assert!(matches!(err, Err(TransformError::InvalidInput(_))));
    }

    #[test]
    fn from_descriptors_stops_at_unknown_kind() {
        let registry = TransformRegistry::with_builtins();
        let descriptors = vec![
            TransformDescriptor::new("identity"),
            TransformDescriptor::new("projection"),
        ];
        let err = TransformChain::from_descriptors(&registry, &descriptors)
            .err()
            .expect("projection is not registered");
        assert_eq!(err, TransformError::UnknownKind("projection".into()));
    }

    #[test]
    fn display_joins_stages() {
        let chain = TransformChain::new(vec![Box::new(IdentityTransform), merge(json!({"a": 1}))]);
        assert_eq!(chain.len(), 2);
        assert_eq!(
            chain.to_string(),
            "TransformChain[IdentityTransform -> MergeTransform{defaults={a=1}}]"
        );
    }
}
