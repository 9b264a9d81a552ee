//! The embedding widget and its seam to the rendering engine.

use serde::Serialize;

use crate::{
    data::{ChildConfiguration, FullConfiguration},
    error::Result,
    project::project,
    validate::validate,
};

/// What the widget hands to the rendering engine for one render.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameRequest {
    /// Override URL for the child frame; `None` means the host's own frame.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frame_url: Option<String>,
    /// Configuration the child frame receives.
    pub config: ChildConfiguration,
}

/// Rendering engine that loads, sizes and caches the NFT in a child frame.
pub trait FrameRenderer {
    /// Result of one render, e.g. a mounted element or a markup string.
    type Output;

    fn render(&mut self, request: FrameRequest) -> Self::Output;
}

/// Widget that embeds one NFT preview.
#[derive(Debug, Clone, PartialEq)]
pub struct NftFrame {
    config: FullConfiguration,
}

impl NftFrame {
    pub fn new(config: FullConfiguration) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FullConfiguration {
        &self.config
    }

    /// Replace the configuration used by the next render.
    pub fn set_config(&mut self, config: FullConfiguration) {
        self.config = config;
    }

    /// Build the request for the renderer.
    ///
    /// Validates first, then projects exactly once. `childFrameUrl` is read
    /// only to select the frame source and never reaches the child.
    pub fn request(&self) -> Result<FrameRequest> {
        validate(&self.config)?;

        let ignored: Vec<_> = self.config.unrecognized_keys().collect();
        if !ignored.is_empty() {
            log::debug!("not forwarding unrecognized options {ignored:?}");
        }

        let request = FrameRequest {
            frame_url: self.config.child_frame_url().map(str::to_string),
            config: project(&self.config),
        };
        log::debug!(
            "frame request for {:?}: {} option(s) forwarded",
            request.config.nft_url(),
            request.config.len()
        );
        Ok(request)
    }

    /// Render through `renderer`.
    pub fn render<R: FrameRenderer>(&self, renderer: &mut R) -> Result<R::Output> {
        let request = self.request()?;
        Ok(renderer.render(request))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::error::ConfigError;

    #[derive(Default)]
    struct Recorder {
        requests: Vec<FrameRequest>,
    }

    impl FrameRenderer for Recorder {
        type Output = usize;

        fn render(&mut self, request: FrameRequest) -> usize {
            self.requests.push(request);
            self.requests.len()
        }
    }

    #[test]
    fn test_render_projects_once() {
        let frame = NftFrame::new(
            FullConfiguration::new("assets/1")
                .with("childFrameUrl", "https://frames.test/child")
                .with("timeoutMs", 2000),
        );
        let mut recorder = Recorder::default();
        assert_eq!(frame.render(&mut recorder).unwrap(), 1);

        let request = &recorder.requests[0];
        assert_eq!(request.frame_url.as_deref(), Some("https://frames.test/child"));
        assert!(!request.config.contains_key("childFrameUrl"));
        assert_eq!(request.config.get("timeoutMs"), Some(&json!(2000)));
    }

    #[test]
    fn test_render_rejects_invalid() {
        let frame = NftFrame::new(FullConfiguration::new("a").with("blockAutoPlay", "yes"));
        let mut recorder = Recorder::default();
        let err = frame.render(&mut recorder).unwrap_err();
        assert!(matches!(err, ConfigError::TypeMismatch { .. }));
        assert!(recorder.requests.is_empty());
    }

    #[test]
    fn test_request_serializes_without_frame_url() {
        let frame = NftFrame::new(FullConfiguration::new("a"));
        let value = serde_json::to_value(frame.request().unwrap()).unwrap();
        assert_eq!(value, json!({"config": {"nftUrl": "a"}}));
    }
}
