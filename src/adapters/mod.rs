pub mod confirm;
pub mod csv_source;
pub mod http_store;
pub mod memory_store;
pub mod xlsx_source;

pub use confirm::{AutoConfirm, StdinConfirm};
pub use csv_source::CsvSource;
pub use http_store::HttpStore;
pub use memory_store::MemoryStore;
pub use xlsx_source::XlsxSource;

use std::path::PathBuf;

use crate::domain::ports::RowSource;

/// Picks the source adapter for the file's extension. Excel workbooks are
/// read natively; everything else goes through the delimited-text path,
/// which reports genuinely unreadable formats itself.
pub fn open_source(path: impl Into<PathBuf>, skip_rows: usize) -> Box<dyn RowSource> {
    let path = path.into();
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    match extension.as_str() {
        "xlsx" | "xls" | "xlsb" | "ods" => Box::new(XlsxSource::new(path, skip_rows)),
        _ => Box::new(CsvSource::new(path, skip_rows)),
    }
}
