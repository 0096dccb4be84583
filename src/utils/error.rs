use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImportError {
    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Store request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Config file error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Spreadsheet processing error: {0}")]
    SpreadsheetError(#[from] calamine::Error),

    #[error("Source file not found: {path}")]
    SourceNotFoundError { path: String },

    #[error("Source file is empty: {path}")]
    SourceEmptyError { path: String },

    #[error("Unsupported source format '{extension}' for {path} (supported: csv, tsv, xls, xlsx)")]
    UnsupportedFormatError { path: String, extension: String },

    #[error("Store rejected the batch: {message}")]
    StoreCommitError { message: String },

    #[error("Invalid value for {field} ('{value}'): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

pub type Result<T> = std::result::Result<T, ImportError>;
