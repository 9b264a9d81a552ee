use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{ConfigError, Result};

use super::schema::{ConfigSchema, names};

/// Caller-facing configuration: option name to value.
///
/// Every required option has a key. Optional keys may be absent (use the
/// default) or hold `null`, the "not set" sentinel that is forwarded as is.
/// Unrecognized keys are kept here and dropped by projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>", into = "Map<String, Value>")]
pub struct FullConfiguration {
    values: Map<String, Value>,
}

impl FullConfiguration {
    /// Start a configuration for the NFT at `nft_url`.
    pub fn new(nft_url: impl Into<String>) -> Self {
        let mut values = Map::new();
        values.insert(names::NFT_URL.to_string(), Value::String(nft_url.into()));
        Self { values }
    }

    /// Set `name` to `value`, replacing any previous value.
    ///
    /// Unrecognized names are accepted, they simply never reach the child.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.values.insert(name.into(), value.into());
        self
    }

    /// Builder form of [`FullConfiguration::set`].
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(name, value);
        self
    }

    /// Remove an optional key. Required keys stay in place.
    pub fn remove(&mut self, name: &str) -> Option<Value> {
        let schema = ConfigSchema::global();
        if schema.required_option_names().iter().any(|&req| req == name) {
            return None;
        }
        self.values.remove(name)
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn nft_url(&self) -> Option<&str> {
        self.get(names::NFT_URL).and_then(Value::as_str)
    }

    /// The child frame override URL, if set to a string.
    ///
    /// Only the embedding widget reads this, to pick the frame source.
    pub fn child_frame_url(&self) -> Option<&str> {
        self.get(names::CHILD_FRAME_URL).and_then(Value::as_str)
    }

    /// Keys the schema does not recognize.
    pub fn unrecognized_keys(&self) -> impl Iterator<Item = &str> {
        let schema = ConfigSchema::global();
        self.values
            .keys()
            .map(String::as_str)
            .filter(move |key| !schema.is_known(key))
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.values
    }

    pub fn into_map(self) -> Map<String, Value> {
        self.values
    }

    fn check_required(values: &Map<String, Value>) -> Result<()> {
        for &name in ConfigSchema::global().required_option_names() {
            match values.get(name) {
                None | Some(Value::Null) => return Err(ConfigError::MissingRequired { name }),
                Some(_) => {}
            }
        }
        Ok(())
    }
}

impl TryFrom<Map<String, Value>> for FullConfiguration {
    type Error = ConfigError;

    /// Fails fast when a required option is missing or `null`.
    fn try_from(values: Map<String, Value>) -> Result<Self> {
        Self::check_required(&values)?;
        Ok(Self { values })
    }
}

impl From<FullConfiguration> for Map<String, Value> {
    fn from(full: FullConfiguration) -> Self {
        full.values
    }
}

impl TryFrom<Value> for FullConfiguration {
    type Error = ConfigError;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Object(map) => Self::try_from(map),
            other => Err(ConfigError::NotAnObject {
                actual: other.to_string(),
            }),
        }
    }
}
