use serde_json::Value;

/// Semantic type of a configuration option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueType {
    /// Plain string.
    String,
    /// `true` / `false`.
    Boolean,
    /// Non-negative integer count of milliseconds.
    Milliseconds,
    /// Duration object of the form `{ "milliseconds": n }`.
    Duration,
    /// `{ "width": w, "height": h }` pair.
    Dimensions,
    /// HTML fragment interpolated into the child frame.
    Markup,
    /// String that is frequently left unset.
    OptionalString,
}

impl ValueType {
    /// Human readable name used in error messages and listings.
    pub fn describe(&self) -> &'static str {
        match self {
            ValueType::String => "string",
            ValueType::Boolean => "boolean",
            ValueType::Milliseconds => "integer milliseconds",
            ValueType::Duration => "duration object",
            ValueType::Dimensions => "dimensions",
            ValueType::Markup => "markup fragment",
            ValueType::OptionalString => "string or undefined",
        }
    }

    /// Whether `value` has the JSON shape of this type.
    ///
    /// `null` never matches; callers decide whether the undefined sentinel
    /// is acceptable for an option.
    pub fn accepts(&self, value: &Value) -> bool {
        match self {
            ValueType::String | ValueType::Markup | ValueType::OptionalString => value.is_string(),
            ValueType::Boolean => value.is_boolean(),
            ValueType::Milliseconds => value.is_u64(),
            ValueType::Duration => value
                .as_object()
                .and_then(|obj| obj.get("milliseconds"))
                .is_some_and(Value::is_u64),
            ValueType::Dimensions => value.as_object().is_some_and(|obj| {
                obj.get("width").is_some_and(Value::is_number)
                    && obj.get("height").is_some_and(Value::is_number)
            }),
        }
    }
}

/// Descriptor of one recognized configuration option.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigOption {
    /// Wire name of the option.
    pub name: &'static str,
    /// Semantic value type.
    pub value_type: ValueType,
    /// Whether every configuration must carry a non-null value for it.
    pub required: bool,
    /// Default the child frame applies when the option is absent.
    pub default: Option<Value>,
    /// Whether the option may be forwarded into the child frame.
    pub forward_to_child: bool,
    /// One-line description.
    pub description: &'static str,
}

impl ConfigOption {
    /// A required option; required options never carry a default.
    pub fn required(name: &'static str, value_type: ValueType, description: &'static str) -> Self {
        Self {
            name,
            value_type,
            required: true,
            default: None,
            forward_to_child: true,
            description,
        }
    }

    /// An optional option without a default.
    pub fn optional(name: &'static str, value_type: ValueType, description: &'static str) -> Self {
        Self {
            required: false,
            ..Self::required(name, value_type, description)
        }
    }

    /// Attach the default the child applies when the option is absent.
    ///
    /// Ignored for required options.
    pub fn with_default(mut self, default: Value) -> Self {
        if !self.required {
            self.default = Some(default);
        }
        self
    }

    /// Keep the option on the caller side of the frame boundary.
    pub fn caller_only(mut self) -> Self {
        self.forward_to_child = false;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_required_option_has_no_default() {
        let opt = ConfigOption::required("nftUrl", ValueType::String, "")
            .with_default(json!("ignored"));
        assert!(opt.required);
        assert_eq!(opt.default, None);
        assert!(opt.forward_to_child);
    }

    #[test]
    fn test_caller_only() {
        let opt = ConfigOption::optional("childFrameUrl", ValueType::String, "").caller_only();
        assert!(!opt.required);
        assert!(!opt.forward_to_child);
    }

    #[test]
    fn test_accepts() {
        assert!(ValueType::Milliseconds.accepts(&json!(10_000)));
        assert!(!ValueType::Milliseconds.accepts(&json!(-1)));
        assert!(!ValueType::Milliseconds.accepts(&json!("10")));
        assert!(ValueType::Duration.accepts(&json!({"milliseconds": 500})));
        assert!(!ValueType::Duration.accepts(&json!(500)));
        assert!(ValueType::Dimensions.accepts(&json!({"width": 200, "height": 200.5})));
        assert!(!ValueType::Dimensions.accepts(&json!({"width": 200})));
        assert!(ValueType::Markup.accepts(&json!("<script></script>")));
        assert!(!ValueType::OptionalString.accepts(&Value::Null));
        assert!(!ValueType::Boolean.accepts(&json!(1)));
    }
}
