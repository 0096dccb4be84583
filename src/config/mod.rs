pub mod toml_config;

use clap::{Parser, Subcommand};

use crate::utils::error::{ImportError, Result};
use crate::utils::validation::{validate_path, validate_range, validate_url, Validate};

pub use toml_config::TomlConfig;

#[derive(Debug, Parser)]
#[command(name = "roster-import")]
#[command(about = "Bulk client roster importer for spreadsheet exports")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show detected columns and the first rows without importing anything
    Preview {
        file: String,

        #[arg(long, help = "Banner rows to skip before the header")]
        skip_rows: Option<usize>,
    },
    /// Run the import pipeline and commit the batch to the record store
    Import {
        file: String,

        #[arg(long, help = "Banner rows to skip before the header")]
        skip_rows: Option<usize>,

        #[arg(long, help = "insertBatch endpoint of the record store")]
        store_endpoint: Option<String>,

        #[arg(long, help = "TOML file with run settings (CLI flags win)")]
        config: Option<String>,

        #[arg(long, help = "Import against an in-memory store, nothing persisted")]
        dry_run: bool,

        #[arg(long, help = "Skip the confirmation prompt")]
        yes: bool,
    },
}

/// Fully resolved settings for one import run: CLI flags layered over the
/// optional TOML file, defaults last.
#[derive(Debug, Clone)]
pub struct ImportSettings {
    pub file: String,
    pub skip_rows: usize,
    pub store_endpoint: Option<String>,
    pub dry_run: bool,
    pub yes: bool,
}

impl ImportSettings {
    pub fn resolve(
        file: String,
        skip_rows: Option<usize>,
        store_endpoint: Option<String>,
        config: Option<&TomlConfig>,
        dry_run: bool,
        yes: bool,
    ) -> Self {
        let file_skip = config.and_then(|c| c.source.as_ref()).and_then(|s| s.skip_rows);
        let file_endpoint = config
            .and_then(|c| c.store.as_ref())
            .and_then(|s| s.endpoint.clone());

        Self {
            file,
            skip_rows: skip_rows.or(file_skip).unwrap_or(0),
            store_endpoint: store_endpoint.or(file_endpoint),
            dry_run,
            yes,
        }
    }
}

impl Validate for ImportSettings {
    fn validate(&self) -> Result<()> {
        validate_path("file", &self.file)?;
        validate_range("skip_rows", self.skip_rows, 0, 1000)?;

        if self.dry_run {
            return Ok(());
        }

        match &self.store_endpoint {
            Some(endpoint) => validate_url("store_endpoint", endpoint),
            None => Err(ImportError::MissingConfigError {
                field: "store_endpoint".to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_cli_wins_over_file() {
        let toml = TomlConfig::from_str(
            r#"
[source]
skip_rows = 8

[store]
endpoint = "https://roster.example.com/insert"
"#,
        )
        .unwrap();

        let settings = ImportSettings::resolve(
            "clientes.csv".to_string(),
            Some(2),
            None,
            Some(&toml),
            false,
            false,
        );

        assert_eq!(settings.skip_rows, 2);
        assert_eq!(
            settings.store_endpoint.as_deref(),
            Some("https://roster.example.com/insert")
        );
    }

    #[test]
    fn test_resolve_defaults_without_config() {
        let settings =
            ImportSettings::resolve("clientes.csv".to_string(), None, None, None, true, true);
        assert_eq!(settings.skip_rows, 0);
        assert!(settings.store_endpoint.is_none());
    }

    #[test]
    fn test_validate_requires_endpoint_unless_dry_run() {
        let mut settings =
            ImportSettings::resolve("clientes.csv".to_string(), None, None, None, false, false);
        assert!(matches!(
            settings.validate(),
            Err(ImportError::MissingConfigError { .. })
        ));

        settings.dry_run = true;
        assert!(settings.validate().is_ok());

        settings.dry_run = false;
        settings.store_endpoint = Some("https://roster.example.com/insert".to_string());
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_endpoint() {
        let settings = ImportSettings::resolve(
            "clientes.csv".to_string(),
            None,
            Some("not a url".to_string()),
            None,
            false,
            false,
        );
        assert!(settings.validate().is_err());
    }
}
