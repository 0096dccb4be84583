pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::config::{Cli, Command, ImportSettings};
pub use crate::core::importer::BatchImporter;
pub use crate::domain::model::{ClientRecord, ClientStatus, ImportReport, RawRow};
pub use crate::utils::error::{ImportError, Result};
