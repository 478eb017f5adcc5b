//! Immutable step sequences.
//!
//! A [`Trace`] is produced once by an external generator, read for the life of
//! a visualization session and replaced wholesale when inputs change. It is
//! eagerly materialized (never a lazy stream) so the player can step backward
//! freely; traces are small (tens to low hundreds of steps).

use crate::error::{Error, Result};
use crate::vars::VariableBag;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One immutable algorithm-state snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Step {
    pub id: u64,
    #[serde(default)]
    pub description: String,
    /// Opaque per-step snapshot, passed through to render callbacks untouched.
    #[serde(default)]
    pub data: Value,
    #[serde(default)]
    pub variables: VariableBag,
    /// Indices the generator wants emphasized (array cells, matrix cells).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub highlights: Vec<usize>,
}

impl Step {
    pub fn new(id: u64, description: impl Into<String>) -> Self {
        Self {
            id,
            description: description.into(),
            data: Value::Null,
            variables: VariableBag::new(),
            highlights: Vec::new(),
        }
    }

    pub fn with_variables(mut self, variables: VariableBag) -> Self {
        self.variables = variables;
        self
    }

    pub fn with_highlights(mut self, highlights: Vec<usize>) -> Self {
        self.highlights = highlights;
        self
    }
}

/// An ordered, read-only step sequence.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Trace {
    steps: Vec<Step>,
}

impl Trace {
    /// Wraps a generator-produced step vector. No validation happens here:
    /// well-formedness is the generator's responsibility and an empty trace is
    /// representable (the player exposes it as a disabled state).
    pub fn new(steps: Vec<Step>) -> Self {
        Self { steps }
    }

    pub fn from_json_str(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Optional strictness for ingestion boundaries (e.g. the CLI): checks the
    /// monotonic-id invariant generators are supposed to uphold.
    pub fn validate(&self) -> Result<()> {
        let mut prev: Option<u64> = None;
        for (index, step) in self.steps.iter().enumerate() {
            if let Some(prev_id) = prev
                && step.id <= prev_id
            {
                return Err(Error::NonMonotonicIds {
                    index,
                    id: step.id,
                    prev: prev_id,
                });
            }
            prev = Some(step.id);
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Index of the final step, `None` for an empty trace.
    pub fn last_index(&self) -> Option<usize> {
        self.steps.len().checked_sub(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_accepts_monotonic_ids() {
        let trace = Trace::new(vec![Step::new(0, "a"), Step::new(3, "b"), Step::new(7, "c")]);
        assert!(trace.validate().is_ok());
    }

    #[test]
    fn validate_rejects_repeated_ids() {
        let trace = Trace::new(vec![Step::new(1, "a"), Step::new(1, "b")]);
        assert!(matches!(
            trace.validate(),
            Err(Error::NonMonotonicIds { index: 1, .. })
        ));
    }

    #[test]
    fn json_round_trip_keeps_variables() {
        let trace = Trace::new(vec![
            Step::new(0, "start").with_variables(VariableBag::new().with("i", 0)),
        ]);
        let text = trace.to_json_string().expect("serialize");
        let back = Trace::from_json_str(&text).expect("parse");
        assert_eq!(back.len(), 1);
        assert_eq!(back.get(0).unwrap().variables.get_integer("i"), Some(0));
    }
}
