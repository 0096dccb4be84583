pub mod columns;
pub mod importer;
pub mod normalize;
pub mod status;
pub mod synthesize;

pub use crate::domain::model::{ClientRecord, RawRow};
pub use crate::domain::ports::{ConfirmGate, RecordStore, RowSource};
pub use crate::utils::error::Result;
