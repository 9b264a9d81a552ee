//! Loading configurations from `.json` and `.toml` files.

use std::{fs, path::Path};

use crate::{
    data::FullConfiguration,
    error::{ConfigError, Result},
};

/// Parse `content` according to the file extension `ext`.
///
/// TOML documents are converted to JSON values first. TOML has no `null`, so
/// options can only be left unset by omitting them.
pub fn load_from_str(content: &str, ext: &str) -> Result<FullConfiguration> {
    let value: serde_json::Value = match ext {
        "json" => serde_json::from_str(content)?,
        "toml" | "tml" => {
            let v: toml::Value = toml::from_str(content)?;
            serde_json::to_value(v)?
        }
        _ => {
            return Err(ConfigError::UnsupportedExtension {
                ext: ext.to_string(),
            });
        }
    };

    let full = FullConfiguration::try_from(value)?;
    for key in full.unrecognized_keys() {
        log::warn!("ignoring unrecognized option {key:?}");
    }
    Ok(full)
}

/// Read and parse the configuration file at `path`.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<FullConfiguration> {
    let path = path.as_ref();
    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("");
    log::debug!("loading frame configuration from {}", path.display());
    let content = fs::read_to_string(path)?;
    load_from_str(&content, ext)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use serde_json::json;

    use super::*;

    #[test]
    fn test_load_toml() {
        let content = r#"
nftUrl = "assets/123"
blockPersistentCache = true

[min]
width = 200
height = 200
"#;
        let full = load_from_str(content, "toml").unwrap();
        assert_eq!(
            full.as_map(),
            json!({
                "nftUrl": "assets/123",
                "blockPersistentCache": true,
                "min": {"width": 200, "height": 200},
            })
            .as_object()
            .unwrap()
        );
    }

    #[test]
    fn test_load_json_missing_nft_url() {
        let err = load_from_str(r#"{"timeoutMs": 5}"#, "json").unwrap_err();
        assert_eq!(err.to_string(), r#"missing required option "nftUrl""#);
    }

    #[test]
    fn test_unsupported_extension() {
        let err = load_from_str("nftUrl: a", "yaml").unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedExtension { ref ext } if ext == "yaml"));
    }

    #[test]
    fn test_load_from_path() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"{{"nftUrl": "assets/7", "hideError": true}}"#).unwrap();
        let full = load_from_path(file.path()).unwrap();
        assert_eq!(full.nft_url(), Some("assets/7"));
        assert_eq!(full.get("hideError"), Some(&json!(true)));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_from_path(dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
