//! Fail-fast checks for configurations coming from loosely typed sources.

use serde_json::Value;

use crate::{
    data::{ConfigSchema, Dimensions, FullConfiguration, ValueType},
    error::{ConfigError, Result},
};

/// Check `full` against the schema.
///
/// Required options must be present and non-null. Recognized options that
/// are set must have the shape of their value type. `null` on an optional
/// option and unrecognized keys are both accepted.
pub fn validate(full: &FullConfiguration) -> Result<()> {
    let schema = ConfigSchema::global();

    for opt in schema.options() {
        let value = match full.get(opt.name) {
            None | Some(Value::Null) if opt.required => {
                return Err(ConfigError::MissingRequired { name: opt.name });
            }
            None | Some(Value::Null) => continue,
            Some(value) => value,
        };

        if !opt.value_type.accepts(value) {
            return Err(ConfigError::TypeMismatch {
                name: opt.name.to_string(),
                expected: opt.value_type.describe(),
                actual: value.to_string(),
            });
        }

        if opt.value_type == ValueType::Dimensions {
            let dims: Dimensions = serde_json::from_value(value.clone())?;
            if let Some(reason) = dims.invalid_reason() {
                return Err(ConfigError::InvalidDimensions {
                    name: opt.name.to_string(),
                    reason,
                });
            }
        }
    }

    Ok(())
}
