//! Narrowing a caller configuration into what the child frame may see.

use serde_json::Map;

use crate::data::{ChildConfiguration, ConfigSchema, FullConfiguration};

/// Project `full` into the configuration forwarded to the child frame.
///
/// Walks the schema's option names in order and copies each forwardable
/// option that has a key in `full`, `null` included. Keys the schema does not
/// know are dropped and `childFrameUrl` is never copied. Values are cloned
/// unchanged; no defaults are filled in.
///
/// Required options are not checked here. Configurations built through
/// [`FullConfiguration::new`] or [`FullConfiguration::try_from`] already
/// carry them.
pub fn project(full: &FullConfiguration) -> ChildConfiguration {
    let schema = ConfigSchema::global();
    let mut values = Map::new();
    for name in schema.all_option_names() {
        if !schema.is_forwardable(name) {
            continue;
        }
        if let Some(value) = full.get(name) {
            values.insert(name.to_string(), value.clone());
        }
    }
    ChildConfiguration::from_projected(values)
}
