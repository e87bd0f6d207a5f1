use std::fmt;

use streamline_core::{Event, Result, Transform};

/// Kind tag under which [`IdentityTransform`] is registered.
pub const KIND: &str = "identity";

/// Passes every event through as a fresh copy, field map absent or not.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IdentityTransform;

impl Transform for IdentityTransform {
    fn execute(&self, input: &Event) -> Result<Vec<Event>> {
        Ok(vec![input.clone()])
    }
}

impl fmt::Display for IdentityTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("IdentityTransform")
    }
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn passes_absent_field_map_through() {
        let input = Event::without_fields("src");
        let out = IdentityTransform.execute(&input).expect("identity never fails");
        assert_eq!(out, vec![input]);
    }
}
