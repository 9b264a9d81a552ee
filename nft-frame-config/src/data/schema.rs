use std::sync::LazyLock;

use serde_json::json;

use super::option::{ConfigOption, ValueType};

/// Timeout the child frame applies to each loading phase when `timeoutMs`
/// is absent.
///
/// Callers size retry budgets from this value; changing it is a breaking
/// change.
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Wait before measuring a loaded NFT when `loadWaitDuration` is absent.
pub const DEFAULT_LOAD_WAIT_MS: u64 = 500;

/// Option names as they appear on the wire.
pub mod names {
    pub const NFT_URL: &str = "nftUrl";
    pub const CHILD_FRAME_URL: &str = "childFrameUrl";
    pub const MAX: &str = "max";
    pub const MIN: &str = "min";
    pub const LOAD_WAIT_DURATION: &str = "loadWaitDuration";
    pub const FORCED_FINAL_NFT_SIZE: &str = "forcedFinalNftSize";
    pub const FORCED_ORIGINAL_NFT_SIZE: &str = "forcedOriginalNftSize";
    pub const EXTRA_HTML: &str = "extraHtml";
    pub const HTML_SIZE_QUERY_SELECTOR: &str = "htmlSizeQuerySelector";
    pub const BLOCK_AUTO_PLAY: &str = "blockAutoPlay";
    pub const BLOCK_INTERACTION: &str = "blockInteraction";
    pub const ALLOW_SCROLLING: &str = "allowScrolling";
    pub const EAGER_LOADING: &str = "eagerLoading";
    pub const TIMEOUT_MS: &str = "timeoutMs";
    pub const BLOCK_PERSISTENT_CACHE: &str = "blockPersistentCache";
    pub const ALLOW_CONSOLE_LOGS: &str = "allowConsoleLogs";
    pub const HIDE_ERROR: &str = "hideError";
}

static SCHEMA: LazyLock<ConfigSchema> = LazyLock::new(ConfigSchema::build);

/// The set of recognized configuration options.
///
/// Built once per process and never mutated. The option order is the
/// projection order, so adding an option only means adding a descriptor here.
#[derive(Debug)]
pub struct ConfigSchema {
    options: Vec<ConfigOption>,
    required: Vec<&'static str>,
    optional: Vec<&'static str>,
}

impl ConfigSchema {
    /// The process-wide schema.
    pub fn global() -> &'static ConfigSchema {
        &SCHEMA
    }

    fn build() -> Self {
        use self::names::*;

        let options = vec![
            ConfigOption::required(NFT_URL, ValueType::String, "URL of the NFT to display."),
            ConfigOption::optional(
                CHILD_FRAME_URL,
                ValueType::String,
                "URL of the child NFT frame. The host's own frame is used when unset.",
            )
            .caller_only(),
            ConfigOption::optional(
                MAX,
                ValueType::Dimensions,
                "Max size constraints which the NFT is resized to fit within.",
            ),
            ConfigOption::optional(
                MIN,
                ValueType::Dimensions,
                "Min size constraints which the NFT is resized to fit within.",
            ),
            ConfigOption::optional(
                LOAD_WAIT_DURATION,
                ValueType::Duration,
                "How long to wait for the NFT to load before calculating size.",
            )
            .with_default(json!({ "milliseconds": DEFAULT_LOAD_WAIT_MS })),
            ConfigOption::optional(
                FORCED_FINAL_NFT_SIZE,
                ValueType::Dimensions,
                "Hard-coded final NFT size. Setting this can cause distortions.",
            ),
            ConfigOption::optional(
                FORCED_ORIGINAL_NFT_SIZE,
                ValueType::Dimensions,
                "Forced original NFT size instead of detecting it.",
            ),
            ConfigOption::optional(
                EXTRA_HTML,
                ValueType::Markup,
                "HTML interpolated into the child frame.",
            ),
            ConfigOption::optional(
                HTML_SIZE_QUERY_SELECTOR,
                ValueType::OptionalString,
                "Query selector used to determine an HTML result's size.",
            ),
            ConfigOption::optional(
                BLOCK_AUTO_PLAY,
                ValueType::Boolean,
                "Prevent videos from auto playing.",
            )
            .with_default(json!(false)),
            ConfigOption::optional(
                BLOCK_INTERACTION,
                ValueType::Boolean,
                "Block interaction with NFTs, even on HTML pages.",
            )
            .with_default(json!(false)),
            ConfigOption::optional(
                ALLOW_SCROLLING,
                ValueType::Boolean,
                "Allow scrolling of text and HTML NFTs.",
            )
            .with_default(json!(false)),
            ConfigOption::optional(EAGER_LOADING, ValueType::Boolean, "Disable lazy loading.")
                .with_default(json!(false)),
            ConfigOption::optional(
                TIMEOUT_MS,
                ValueType::Milliseconds,
                "Timeout for each loading phase in milliseconds.",
            )
            .with_default(json!(DEFAULT_TIMEOUT_MS)),
            ConfigOption::optional(
                BLOCK_PERSISTENT_CACHE,
                ValueType::Boolean,
                "Bypass the cache that outlives a single session.",
            )
            .with_default(json!(false)),
            ConfigOption::optional(
                ALLOW_CONSOLE_LOGS,
                ValueType::Boolean,
                "Keep console method calls inside the child frame.",
            )
            .with_default(json!(false)),
            ConfigOption::optional(HIDE_ERROR, ValueType::Boolean, "Hide load errors.")
                .with_default(json!(false)),
        ];

        let (required, optional) = options.iter().fold(
            (Vec::new(), Vec::new()),
            |(mut required, mut optional), opt| {
                if opt.required {
                    required.push(opt.name);
                } else {
                    optional.push(opt.name);
                }
                (required, optional)
            },
        );

        Self {
            options,
            required,
            optional,
        }
    }

    /// Every option descriptor in schema order.
    pub fn options(&self) -> &[ConfigOption] {
        &self.options
    }

    /// Names of options every configuration must carry.
    pub fn required_option_names(&self) -> &[&'static str] {
        &self.required
    }

    /// Names of options that may be omitted.
    pub fn optional_option_names(&self) -> &[&'static str] {
        &self.optional
    }

    /// Every recognized option name in schema order.
    pub fn all_option_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.options.iter().map(|opt| opt.name)
    }

    /// Look up a descriptor by name.
    pub fn option(&self, name: &str) -> Option<&ConfigOption> {
        self.options.iter().find(|opt| opt.name == name)
    }

    /// Whether `name` is a recognized option.
    pub fn is_known(&self, name: &str) -> bool {
        self.option(name).is_some()
    }

    /// Whether `name` may be forwarded into the child frame.
    ///
    /// Unknown names are never forwardable.
    pub fn is_forwardable(&self, name: &str) -> bool {
        self.option(name).is_some_and(|opt| opt.forward_to_child)
    }
}
