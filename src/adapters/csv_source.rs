//! File-backed row source. Reads CSV/TSV exports, skips operator-supplied
//! banner rows, folds header names to lower-case and carries cells through
//! as strings. No schema is assumed on input.

use std::collections::HashMap;
use std::path::PathBuf;

use crate::domain::model::RawRow;
use crate::domain::ports::RowSource;
use crate::utils::error::{ImportError, Result};

#[derive(Debug, Clone)]
pub struct CsvSource {
    path: PathBuf,
    /// Header/banner rows before the real header, e.g. the 8-row preamble
    /// some partner exports carry.
    skip_rows: usize,
}

impl CsvSource {
    pub fn new(path: impl Into<PathBuf>, skip_rows: usize) -> Self {
        Self {
            path: path.into(),
            skip_rows,
        }
    }

    fn delimiter(&self) -> Result<u8> {
        let extension = self
            .path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match extension.as_str() {
            "csv" | "txt" => Ok(b','),
            "tsv" => Ok(b'\t'),
            _ => Err(ImportError::UnsupportedFormatError {
                path: self.path.display().to_string(),
                extension,
            }),
        }
    }
}

impl RowSource for CsvSource {
    fn read_rows(&self) -> Result<Vec<RawRow>> {
        let delimiter = self.delimiter()?;

        if !self.path.exists() {
            return Err(ImportError::SourceNotFoundError {
                path: self.path.display().to_string(),
            });
        }

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .delimiter(delimiter)
            .from_path(&self.path)?;

        let mut records = Vec::new();
        for record in reader.records() {
            records.push(record?);
        }

        if records.len() <= self.skip_rows {
            return Err(ImportError::SourceEmptyError {
                path: self.path.display().to_string(),
            });
        }

        let mut remaining = records.into_iter().skip(self.skip_rows);
        // First surviving record is the header.
        let header = match remaining.next() {
            Some(header) => header,
            None => {
                return Err(ImportError::SourceEmptyError {
                    path: self.path.display().to_string(),
                })
            }
        };
        let keys: Vec<String> = header.iter().map(|h| h.trim().to_lowercase()).collect();
        tracing::debug!("detected columns: {:?}", keys);

        let mut rows = Vec::new();
        for (index, record) in remaining.enumerate() {
            let mut data = HashMap::new();
            for (key, cell) in keys.iter().zip(record.iter()) {
                data.insert(
                    key.clone(),
                    serde_json::Value::String(cell.to_string()),
                );
            }
            rows.push(RawRow::new(index, data));
        }

        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_read_rows_folds_header_case() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "clientes.csv", "Nome,Email\nAna,a@b.com\nBia,b@b.com\n");

        let rows = CsvSource::new(path, 0).read_rows().unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].index, 0);
        assert_eq!(rows[0].data.get("nome").unwrap().as_str().unwrap(), "Ana");
        assert_eq!(rows[1].data.get("email").unwrap().as_str().unwrap(), "b@b.com");
    }

    #[test]
    fn test_read_rows_skips_banner_rows() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            &dir,
            "export.csv",
            "Relatório de Clientes,\nGerado em 2025,\nNome,Status\nAna,PB15\n",
        );

        let rows = CsvSource::new(path, 2).read_rows().unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].data.get("nome").unwrap().as_str().unwrap(), "Ana");
        assert_eq!(rows[0].data.get("status").unwrap().as_str().unwrap(), "PB15");
    }

    #[test]
    fn test_read_rows_tsv_delimiter() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "clientes.tsv", "nome\temail\nAna\ta@b.com\n");

        let rows = CsvSource::new(path, 0).read_rows().unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].data.get("email").unwrap().as_str().unwrap(), "a@b.com");
    }

    #[test]
    fn test_missing_file_is_distinct_error() {
        let err = CsvSource::new("no-such-file.csv", 0).read_rows().unwrap_err();
        assert!(matches!(err, ImportError::SourceNotFoundError { .. }));
    }

    #[test]
    fn test_empty_file_is_distinct_error() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "empty.csv", "");

        let err = CsvSource::new(path, 0).read_rows().unwrap_err();
        assert!(matches!(err, ImportError::SourceEmptyError { .. }));
    }

    #[test]
    fn test_header_only_file_yields_zero_rows() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "header.csv", "nome,email\n");

        let rows = CsvSource::new(path, 0).read_rows().unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_unknown_extension_is_unsupported() {
        let err = CsvSource::new("clientes.pdf", 0).read_rows().unwrap_err();
        match err {
            ImportError::UnsupportedFormatError { extension, .. } => {
                assert_eq!(extension, "pdf");
            }
            other => panic!("expected unsupported format, got {}", other),
        }
    }

    #[test]
    fn test_short_row_leaves_trailing_fields_absent() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "ragged.csv", "nome,email,telefone\nAna,a@b.com\n");

        let rows = CsvSource::new(path, 0).read_rows().unwrap();

        assert_eq!(rows.len(), 1);
        assert!(rows[0].data.get("telefone").is_none());
    }
}
