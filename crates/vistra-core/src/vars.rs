//! Per-step variable bag.
//!
//! Trace generators are independently written and each populates only the
//! variables relevant to its own algorithm, so the bag is deliberately
//! dynamically shaped. Accessors return `None` on a missing key *or* a shape
//! mismatch; there is no implicit coercion (`{"x": "5"}` is not a number).

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VariableBag(IndexMap<String, Value>);

impl VariableBag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(name.into(), value.into());
    }

    /// Builder-style `set`, convenient when assembling steps in generators.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(name, value);
        self
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn get_number(&self, name: &str) -> Option<f64> {
        match self.0.get(name)? {
            Value::Number(n) => n.as_f64(),
            _ => None,
        }
    }

    pub fn get_integer(&self, name: &str) -> Option<i64> {
        match self.0.get(name)? {
            Value::Number(n) => n.as_i64(),
            _ => None,
        }
    }

    pub fn get_bool(&self, name: &str) -> Option<bool> {
        self.0.get(name)?.as_bool()
    }

    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.0.get(name)?.as_str()
    }

    pub fn get_array(&self, name: &str) -> Option<&Vec<Value>> {
        match self.0.get(name)? {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    /// All-or-nothing: a single non-numeric element makes the whole array absent.
    pub fn get_number_array(&self, name: &str) -> Option<Vec<f64>> {
        self.get_array(name)?
            .iter()
            .map(|v| match v {
                Value::Number(n) => n.as_f64(),
                _ => None,
            })
            .collect()
    }

    pub fn get_string_array(&self, name: &str) -> Option<Vec<String>> {
        self.get_array(name)?
            .iter()
            .map(|v| v.as_str().map(str::to_string))
            .collect()
    }

    pub fn get_object(&self, name: &str) -> Option<&serde_json::Map<String, Value>> {
        self.0.get(name)?.as_object()
    }
}

impl FromIterator<(String, Value)> for VariableBag {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}
