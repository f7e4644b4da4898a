//! Submitted request parameters and value resolution.
//!
//! The host framework owns request parsing. Helpers only read from a
//! [`ParamSource`] so any mapping the host already has can be plugged in.

use std::collections::{BTreeMap, HashMap};

use serde::Deserialize;
use tracing::trace;

/// A submitted parameter value.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    /// A single scalar value.
    Text(String),
    /// Repeated values, e.g. from `person[colors][]`.
    List(Vec<String>),
    /// Nested values keyed by field name, e.g. from `person[first_name]`.
    Map(BTreeMap<String, ParamValue>),
}

impl ParamValue {
    /// Returns the string form of a scalar value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::List(_) | Self::Map(_) => None,
        }
    }

    /// Looks up a nested value by field name.
    pub fn get(&self, field: &str) -> Option<&ParamValue> {
        match self {
            Self::Map(map) => map.get(field),
            Self::Text(_) | Self::List(_) => None,
        }
    }

    /// Returns whether this value selects `id`: a scalar equal to it, or a
    /// list containing it.
    pub fn includes(&self, id: &str) -> bool {
        match self {
            Self::Text(s) => s == id,
            Self::List(items) => items.iter().any(|item| item == id),
            Self::Map(_) => false,
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Vec<String>> for ParamValue {
    fn from(values: Vec<String>) -> Self {
        Self::List(values)
    }
}

impl<K: Into<String>, V: Into<ParamValue>> FromIterator<(K, V)> for ParamValue {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::Map(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// Read access to submitted parameters, keyed by object name.
pub trait ParamSource {
    /// Returns the value submitted under `key`, if any.
    fn param(&self, key: &str) -> Option<&ParamValue>;
}

impl ParamSource for HashMap<String, ParamValue> {
    fn param(&self, key: &str) -> Option<&ParamValue> {
        self.get(key)
    }
}

impl ParamSource for BTreeMap<String, ParamValue> {
    fn param(&self, key: &str) -> Option<&ParamValue> {
        self.get(key)
    }
}

/// Submitted parameters keyed by object name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Params {
    params: BTreeMap<String, ParamValue>,
}

impl Params {
    /// Creates empty parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a parameter.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) {
        self.params.insert(key.into(), value.into());
    }

    /// Builder method to insert a parameter.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Builds parameters from a JSON object such as a decoded request body.
    pub fn from_json(value: serde_json::Value) -> serde_json::Result<Self> {
        serde_json::from_value(value)
    }

    /// Returns whether no parameters were submitted.
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}

impl ParamSource for Params {
    fn param(&self, key: &str) -> Option<&ParamValue> {
        self.params.get(key)
    }
}

/// Resolves the value to pre-populate a field with.
///
/// With a field, looks up `params[object][field]`; without one, looks up
/// `params[object]`. Falls back to `default` when nothing was submitted.
/// A submitted empty string is a resolved value, not a miss.
pub fn resolve_value<P>(
    params: &P,
    object: &str,
    field: Option<&str>,
    default: Option<ParamValue>,
) -> Option<ParamValue>
where
    P: ParamSource + ?Sized,
{
    let submitted = params.param(object);
    let found = match field {
        Some(field) => submitted.and_then(|value| value.get(field)),
        None => submitted,
    };
    match found {
        Some(value) => Some(value.clone()),
        None => {
            trace!(object, field, "no submitted value, using default");
            default
        }
    }
}
