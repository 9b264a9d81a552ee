use std::time::Duration;

use serde::Serialize;
use serde_json::{Map, Value};

use super::{
    dimensions::{Dimensions, LoadWaitDuration},
    schema::{ConfigSchema, DEFAULT_LOAD_WAIT_MS, DEFAULT_TIMEOUT_MS, names},
};

/// Configuration forwarded into the child frame.
///
/// Only produced by [`project`](crate::project::project). It owns its values,
/// so it never aliases the [`FullConfiguration`](super::full::FullConfiguration)
/// it was projected from. Its keys are always a subset of the schema minus
/// `childFrameUrl`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ChildConfiguration {
    values: Map<String, Value>,
}

impl ChildConfiguration {
    pub(crate) fn from_projected(values: Map<String, Value>) -> Self {
        Self { values }
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Keys in schema order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.values
    }

    /// Take the projected values as a plain map.
    pub fn into_map(self) -> Map<String, Value> {
        self.values
    }

    pub fn nft_url(&self) -> Option<&str> {
        self.get(names::NFT_URL).and_then(Value::as_str)
    }

    /// Per-phase load timeout, falling back to [`DEFAULT_TIMEOUT_MS`].
    pub fn timeout(&self) -> Duration {
        let ms = self
            .get(names::TIMEOUT_MS)
            .and_then(Value::as_u64)
            .unwrap_or(DEFAULT_TIMEOUT_MS);
        Duration::from_millis(ms)
    }

    /// Wait before size calculation, falling back to 500 ms.
    pub fn load_wait_duration(&self) -> Duration {
        self.get(names::LOAD_WAIT_DURATION)
            .and_then(|v| serde_json::from_value::<LoadWaitDuration>(v.clone()).ok())
            .map(|d| d.as_duration())
            .unwrap_or(Duration::from_millis(DEFAULT_LOAD_WAIT_MS))
    }

    /// A boolean option, falling back to the schema default.
    ///
    /// Unknown or non-boolean options read as `false`.
    pub fn flag(&self, name: &str) -> bool {
        if let Some(b) = self.get(name).and_then(Value::as_bool) {
            return b;
        }
        ConfigSchema::global()
            .option(name)
            .and_then(|opt| opt.default.as_ref())
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }

    pub fn min(&self) -> Option<Dimensions> {
        self.dimensions(names::MIN)
    }

    pub fn max(&self) -> Option<Dimensions> {
        self.dimensions(names::MAX)
    }

    fn dimensions(&self, name: &str) -> Option<Dimensions> {
        self.get(name)
            .and_then(|v| serde_json::from_value(v.clone()).ok())
    }
}
