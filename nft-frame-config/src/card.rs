//! Demo card: an NFT preview with a link to the asset.

use serde::Serialize;
use serde_json::json;

use crate::{
    data::{Dimensions, FullConfiguration, names},
    error::Result,
    frame::{FrameRenderer, NftFrame},
};

/// Size every card NFT is fitted to.
pub const CARD_NFT_DIMENSIONS: Dimensions = Dimensions::new(200.0, 200.0);

/// Link shown above the preview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardLink {
    pub href: String,
    pub text: String,
}

/// A rendered card: the link plus whatever the renderer produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardView<T> {
    pub link: CardLink,
    pub frame: T,
}

/// Card showing one NFT from `nft_origin`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoCard {
    /// Path of the NFT relative to its origin.
    pub nft_url: String,
    /// Origin the NFT is served from.
    pub nft_origin: String,
}

impl DemoCard {
    pub fn new(nft_url: impl Into<String>, nft_origin: impl Into<String>) -> Self {
        Self {
            nft_url: nft_url.into(),
            nft_origin: nft_origin.into(),
        }
    }

    /// `origin/url`, joined with a single `/` and no normalization.
    pub fn link(&self) -> CardLink {
        CardLink {
            href: [self.nft_origin.as_str(), self.nft_url.as_str()].join("/"),
            text: self.nft_url.clone(),
        }
    }

    /// The configuration the card passes to its frame.
    pub fn frame_config(&self) -> FullConfiguration {
        let dims = json!({
            "width": CARD_NFT_DIMENSIONS.width,
            "height": CARD_NFT_DIMENSIONS.height,
        });
        FullConfiguration::new(self.nft_url.clone())
            .with(names::BLOCK_PERSISTENT_CACHE, true)
            .with(names::MIN, dims.clone())
            .with(names::MAX, dims)
    }

    pub fn render<R: FrameRenderer>(&self, renderer: &mut R) -> Result<CardView<R::Output>> {
        let frame = NftFrame::new(self.frame_config()).render(renderer)?;
        Ok(CardView {
            link: self.link(),
            frame,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::FrameRequest;

    struct Passthrough;

    impl FrameRenderer for Passthrough {
        type Output = FrameRequest;

        fn render(&mut self, request: FrameRequest) -> FrameRequest {
            request
        }
    }

    #[test]
    fn test_link() {
        let card = DemoCard::new("assets/123", "https://nfts.example");
        assert_eq!(
            card.link(),
            CardLink {
                href: "https://nfts.example/assets/123".into(),
                text: "assets/123".into(),
            }
        );
    }

    #[test]
    fn test_render() {
        let card = DemoCard::new("assets/123", "https://nfts.example");
        let view = card.render(&mut Passthrough).unwrap();
        assert_eq!(view.link.href, "https://nfts.example/assets/123");
        assert_eq!(view.frame.frame_url, None);
        assert_eq!(view.frame.config.min(), Some(CARD_NFT_DIMENSIONS));
        assert_eq!(view.frame.config.max(), Some(CARD_NFT_DIMENSIONS));
        assert!(view.frame.config.flag(names::BLOCK_PERSISTENT_CACHE));
        assert_eq!(
            view.frame.config.keys().collect::<Vec<_>>(),
            ["nftUrl", "max", "min", "blockPersistentCache"]
        );
    }
}
