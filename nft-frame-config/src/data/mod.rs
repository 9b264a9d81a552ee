//! Configuration data structures and the option schema.
//!
//! This module provides the data side of the frame configuration contract:
//!
//! - The option descriptors and the process-wide schema built from them
//! - The caller-facing and child-facing configuration maps
//! - Typed structs mirroring both maps
//!
//! ## Architecture
//!
//! - [`option`] - Option descriptors and value types
//! - [`schema`] - The schema, option names and default constants
//! - [`dimensions`] - Size and duration values
//! - [`full`] - Caller-facing configuration map
//! - [`child`] - Child-facing configuration map
//! - [`config`] - Typed configuration structs

/// Option descriptors and semantic value types.
pub mod option;

/// The process-wide option schema.
pub mod schema;

/// Size and duration value types.
pub mod dimensions;

/// Caller-facing configuration.
pub mod full;

/// Child-facing configuration.
pub mod child;

/// Typed configuration structs.
pub mod config;

pub use child::ChildConfiguration;
pub use config::{ChildNftConfig, NftFrameConfig};
pub use dimensions::{Dimensions, LoadWaitDuration};
pub use full::FullConfiguration;
pub use option::{ConfigOption, ValueType};
pub use schema::{ConfigSchema, DEFAULT_LOAD_WAIT_MS, DEFAULT_TIMEOUT_MS, names};
