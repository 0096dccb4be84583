use serde::Deserialize;
use std::path::Path;

use crate::utils::error::Result;

/// Optional run-settings file. Column mapping never lives here; alias
/// tables are compiled in.
#[derive(Debug, Clone, Deserialize)]
pub struct TomlConfig {
    pub source: Option<SourceSection>,
    pub store: Option<StoreSection>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SourceSection {
    pub skip_rows: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StoreSection {
    pub endpoint: Option<String>,
}

impl TomlConfig {
    pub fn from_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_full() {
        let config = TomlConfig::from_str(
            r#"
[source]
skip_rows = 8

[store]
endpoint = "https://roster.example.com/clients/insert-batch"
"#,
        )
        .unwrap();

        assert_eq!(config.source.unwrap().skip_rows, Some(8));
        assert_eq!(
            config.store.unwrap().endpoint.as_deref(),
            Some("https://roster.example.com/clients/insert-batch")
        );
    }

    #[test]
    fn test_from_str_sections_optional() {
        let config = TomlConfig::from_str("").unwrap();
        assert!(config.source.is_none());
        assert!(config.store.is_none());
    }

    #[test]
    fn test_from_str_rejects_malformed_toml() {
        assert!(TomlConfig::from_str("[source\nskip_rows = 8").is_err());
    }
}
