//! Workbook-backed row source. Partner exports arrive as Excel files with a
//! banner preamble; the first sheet is read in full and then handled like
//! the CSV path: skip rows, fold the header, carry cells through.

use std::collections::HashMap;
use std::path::PathBuf;

use calamine::{open_workbook_auto, Data, Reader};

use crate::domain::model::RawRow;
use crate::domain::ports::RowSource;
use crate::utils::error::{ImportError, Result};

#[derive(Debug, Clone)]
pub struct XlsxSource {
    path: PathBuf,
    skip_rows: usize,
}

impl XlsxSource {
    pub fn new(path: impl Into<PathBuf>, skip_rows: usize) -> Self {
        Self {
            path: path.into(),
            skip_rows,
        }
    }
}

fn cell_value(cell: &Data) -> serde_json::Value {
    match cell {
        Data::Empty => serde_json::Value::Null,
        Data::String(s) => serde_json::Value::String(s.clone()),
        Data::Float(f) => serde_json::Value::from(*f),
        Data::Int(i) => serde_json::Value::from(*i),
        Data::Bool(b) => serde_json::Value::Bool(*b),
        // Date cells flow through as text the date parser already accepts.
        Data::DateTime(dt) => match dt.as_datetime() {
            Some(dt) => serde_json::Value::String(dt.format("%Y-%m-%d %H:%M:%S").to_string()),
            None => serde_json::Value::Null,
        },
        Data::DateTimeIso(s) | Data::DurationIso(s) => serde_json::Value::String(s.clone()),
        Data::Error(_) => serde_json::Value::Null,
    }
}

fn header_key(cell: &Data) -> String {
    match cell_value(cell) {
        serde_json::Value::String(s) => s.trim().to_lowercase(),
        serde_json::Value::Null => String::new(),
        other => other.to_string().trim().to_lowercase(),
    }
}

impl RowSource for XlsxSource {
    fn read_rows(&self) -> Result<Vec<RawRow>> {
        if !self.path.exists() {
            return Err(ImportError::SourceNotFoundError {
                path: self.path.display().to_string(),
            });
        }

        let mut workbook = open_workbook_auto(&self.path)?;
        let range = match workbook.worksheet_range_at(0) {
            Some(range) => range?,
            None => {
                return Err(ImportError::SourceEmptyError {
                    path: self.path.display().to_string(),
                })
            }
        };

        let mut sheet_rows = range.rows().skip(self.skip_rows);
        let header = match sheet_rows.next() {
            Some(header) => header,
            None => {
                return Err(ImportError::SourceEmptyError {
                    path: self.path.display().to_string(),
                })
            }
        };
        let keys: Vec<String> = header.iter().map(header_key).collect();
        tracing::debug!("detected columns: {:?}", keys);

        let mut rows = Vec::new();
        for (index, sheet_row) in sheet_rows.enumerate() {
            let mut data = HashMap::new();
            for (key, cell) in keys.iter().zip(sheet_row.iter()) {
                // Blank workbook cells stay absent, like short CSV rows.
                if key.is_empty() || matches!(cell, Data::Empty) {
                    continue;
                }
                data.insert(key.clone(), cell_value(cell));
            }
            rows.push(RawRow::new(index, data));
        }

        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_value_strings_and_numbers() {
        assert_eq!(
            cell_value(&Data::String("Ana".to_string())),
            serde_json::json!("Ana")
        );
        assert_eq!(cell_value(&Data::Float(43501792.0)), serde_json::json!(43501792.0));
        assert_eq!(cell_value(&Data::Int(7)), serde_json::json!(7));
        assert_eq!(cell_value(&Data::Bool(true)), serde_json::json!(true));
        assert_eq!(cell_value(&Data::Empty), serde_json::Value::Null);
    }

    #[test]
    fn test_header_key_folds_case_and_trims() {
        assert_eq!(header_key(&Data::String(" Nome ".to_string())), "nome");
        assert_eq!(
            header_key(&Data::String("ID do Consultor".to_string())),
            "id do consultor"
        );
        assert_eq!(header_key(&Data::Empty), "");
    }

    #[test]
    fn test_missing_workbook_is_distinct_error() {
        let err = XlsxSource::new("no-such-file.xlsx", 0).read_rows().unwrap_err();
        assert!(matches!(err, ImportError::SourceNotFoundError { .. }));
    }
}
