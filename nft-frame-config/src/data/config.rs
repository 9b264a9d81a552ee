//! Typed view of the frame configuration.
//!
//! [`NftFrameConfig`] makes the required `nftUrl` a non-optional field, so a
//! configuration built in Rust cannot omit it. Both structs serialize to the
//! same camelCase keys the [`ConfigSchema`](super::schema::ConfigSchema)
//! describes; unknown keys are ignored when deserializing.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{error::Result, project::project};

use super::{
    dimensions::{Dimensions, LoadWaitDuration},
    full::FullConfiguration,
};

/// Full frame configuration as supplied by the embedding page.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NftFrameConfig {
    /// URL of the NFT to display.
    pub nft_url: String,
    /// URL of the child NFT frame. The host's own frame is used when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub child_frame_url: Option<String>,
    /// Max size constraints which the NFT is resized to fit within.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<Dimensions>,
    /// Min size constraints which the NFT is resized to fit within.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<Dimensions>,
    /// How long to wait for the NFT to load before calculating size.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub load_wait_duration: Option<LoadWaitDuration>,
    /// Hard-coded final NFT size. Setting this can cause distortions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forced_final_nft_size: Option<Dimensions>,
    /// Forced original NFT size instead of detecting it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forced_original_nft_size: Option<Dimensions>,
    /// HTML interpolated into the child frame.
    ///
    /// Work that must run before size calculation goes in a global
    /// `executeBeforeSize` function inside a `<script>` element.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra_html: Option<String>,
    /// Query selector used to determine an HTML result's size.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html_size_query_selector: Option<String>,
    /// Prevent videos from auto playing. Audio is always muted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_auto_play: Option<bool>,
    /// Block interaction with NFTs, even on HTML pages.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_interaction: Option<bool>,
    /// Allow scrolling of text and HTML NFTs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_scrolling: Option<bool>,
    /// Disable lazy loading.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eager_loading: Option<bool>,
    /// Timeout for each loading phase in milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_ms: Option<u64>,
    /// Bypass the cache that outlives a single session.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_persistent_cache: Option<bool>,
    /// Keep console method calls inside the child frame.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_console_logs: Option<bool>,
    /// Hide load errors.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hide_error: Option<bool>,
}

/// The part of [`NftFrameConfig`] the child frame receives.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChildNftConfig {
    pub nft_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<Dimensions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<Dimensions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub load_wait_duration: Option<LoadWaitDuration>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forced_final_nft_size: Option<Dimensions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forced_original_nft_size: Option<Dimensions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra_html: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html_size_query_selector: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_auto_play: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_interaction: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_scrolling: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eager_loading: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_ms: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_persistent_cache: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_console_logs: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hide_error: Option<bool>,
}

impl NftFrameConfig {
    pub fn new(nft_url: impl Into<String>) -> Self {
        Self {
            nft_url: nft_url.into(),
            ..Default::default()
        }
    }

    /// JSON Schema (draft 2020-12) describing the configuration.
    pub fn json_schema() -> serde_json::Value {
        serde_json::to_value(schemars::schema_for!(NftFrameConfig)).unwrap_or_default()
    }

    /// Convert into the map form used by projection and the widget.
    ///
    /// # Errors
    ///
    /// Fails only if serialization fails, which the field types rule out in
    /// practice.
    pub fn to_full(&self) -> Result<FullConfiguration> {
        FullConfiguration::try_from(serde_json::to_value(self)?)
    }

    /// Project into the child-facing typed configuration.
    ///
    /// Goes through [`project`] so typed and untyped callers share the same
    /// allow-list.
    pub fn to_child(&self) -> Result<ChildNftConfig> {
        let child = project(&self.to_full()?);
        Ok(serde_json::from_value(serde_json::Value::Object(child.into_map()))?)
    }
}

impl TryFrom<&FullConfiguration> for NftFrameConfig {
    type Error = crate::error::ConfigError;

    fn try_from(full: &FullConfiguration) -> Result<Self> {
        Ok(serde_json::from_value(serde_json::Value::Object(full.as_map().clone()))?)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::data::schema::ConfigSchema;

    #[test]
    fn test_json_schema_matches_descriptors() {
        let schema = NftFrameConfig::json_schema();
        let properties = schema["properties"].as_object().unwrap();
        let mut props: Vec<_> = properties.keys().map(String::as_str).collect();
        let mut names: Vec<_> = ConfigSchema::global().all_option_names().collect();
        props.sort_unstable();
        names.sort_unstable();
        assert_eq!(props, names);
        assert_eq!(schema["required"], json!(["nftUrl"]));
    }

    #[test]
    fn test_child_json_schema_excludes_child_frame_url() {
        let schema = serde_json::to_value(schemars::schema_for!(ChildNftConfig)).unwrap();
        let properties = schema["properties"].as_object().unwrap();
        assert!(!properties.contains_key("childFrameUrl"));
        let forwardable = ConfigSchema::global()
            .all_option_names()
            .filter(|name| ConfigSchema::global().is_forwardable(name))
            .count();
        assert_eq!(properties.len(), forwardable);
    }

    #[test]
    fn test_to_full_skips_unset() {
        let config = NftFrameConfig {
            timeout_ms: Some(3000),
            ..NftFrameConfig::new("assets/9")
        };
        let full = config.to_full().unwrap();
        assert_eq!(
            full.as_map(),
            json!({"nftUrl": "assets/9", "timeoutMs": 3000}).as_object().unwrap()
        );
    }

    #[test]
    fn test_to_child_drops_child_frame_url() {
        let config = NftFrameConfig {
            child_frame_url: Some("https://internal/override".into()),
            block_persistent_cache: Some(true),
            min: Some(Dimensions::new(200.0, 200.0)),
            ..NftFrameConfig::new("assets/123")
        };
        let child = config.to_child().unwrap();
        assert_eq!(
            child,
            ChildNftConfig {
                nft_url: "assets/123".into(),
                block_persistent_cache: Some(true),
                min: Some(Dimensions::new(200.0, 200.0)),
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_from_full_ignores_unknown_keys() {
        let full = FullConfiguration::new("a").with("bogusKey", 1).with("hideError", true);
        let typed = NftFrameConfig::try_from(&full).unwrap();
        assert_eq!(typed.hide_error, Some(true));
        assert_eq!(typed.nft_url, "a");
    }
}
