//! # nft-frame-config
//!
//! Configuration contract for the sandboxed NFT preview frame.
//!
//! An NFT preview is rendered inside a child frame driven by a single
//! configuration object. This crate owns that object: which options exist,
//! which are required, which defaults the child applies, and how the
//! caller-facing configuration is narrowed before it crosses into the child.
//!
//! ## Features
//!
//! - Enumerable option schema with required/optional sets built once
//! - Allow-list projection that never forwards `childFrameUrl`
//! - Typed configuration structs with a generated JSON Schema
//! - Fail-fast validation for loosely typed input
//! - JSON and TOML configuration loading
//!
//! ## Quick Start
//!
//! ```rust
//! use nft_frame_config::{FullConfiguration, project};
//!
//! let full = FullConfiguration::new("assets/123")
//!     .with("blockPersistentCache", true)
//!     .with("childFrameUrl", "https://frames.example/child");
//!
//! let child = project(&full);
//! assert!(child.contains_key("blockPersistentCache"));
//! assert!(!child.contains_key("childFrameUrl"));
//! ```
//!
//! ## Modules
//!
//! - [`data`] - Option schema and configuration structures
//! - [`project`] - Child-facing projection
//! - [`validate`] - Schema validation
//! - [`load`] - File loading
//! - [`frame`] - Embedding widget and renderer seam
//! - [`card`] - Demo card composing a link and a frame

/// Option schema and configuration structures.
pub mod data;

/// Error types and result definitions.
pub mod error;

/// Child-facing projection.
pub mod project;

/// Schema validation for loosely typed configurations.
pub mod validate;

/// Configuration file loading.
pub mod load;

/// Embedding widget and rendering seam.
pub mod frame;

pub mod card;

pub use card::DemoCard;
pub use data::{
    ChildConfiguration, ChildNftConfig, ConfigSchema, DEFAULT_TIMEOUT_MS, Dimensions,
    FullConfiguration, NftFrameConfig,
};
pub use error::{ConfigError, Result};
pub use frame::{FrameRenderer, FrameRequest, NftFrame};
pub use load::{load_from_path, load_from_str};
pub use project::project;
pub use validate::validate;
