//! Input dispatch: one entry point from a file path to cards.

use std::path::Path;

use crate::builder::{build_cards, build_cards_from_text, Ingestion};
use crate::decode::decode_text;
use crate::error::{IngestError, Result};
use crate::spreadsheet::read_workbook_rows;

/// Default field delimiter for text input.
pub const DEFAULT_DELIMITER: char = ',';

const SPREADSHEET_EXTENSIONS: &[&str] = &["xlsx", "xlsm", "xls", "ods"];

/// Ingest one file, dispatching on its extension.
///
/// Spreadsheet extensions go through the workbook reader; everything
/// else is treated as delimited text and decoded first. The whole
/// input is read before any row is processed.
pub fn ingest_path(path: &Path, delimiter: char, id_offset: i64) -> Result<Ingestion> {
    if is_spreadsheet(path) {
        let rows = read_workbook_rows(path)?;
        return Ok(build_cards(rows, id_offset));
    }

    let bytes = std::fs::read(path).map_err(|source| IngestError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let (text, encoding) = decode_text(&bytes);
    tracing::debug!(path = %path.display(), encoding, "decoded text input");
    Ok(build_cards_from_text(&text, delimiter, id_offset))
}

fn is_spreadsheet(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            SPREADSHEET_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn text_file_ingests_cards() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Animals,cat,a feline").unwrap();
        writeln!(file, "Animals,dog,a canine").unwrap();

        let run = ingest_path(file.path(), DEFAULT_DELIMITER, 0).unwrap();
        assert_eq!(run.cards.len(), 2);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let result = ingest_path(Path::new("does-not-exist.csv"), ',', 0);
        assert!(matches!(result, Err(IngestError::Io { .. })));
    }

    #[test]
    fn extension_dispatch() {
        assert!(is_spreadsheet(Path::new("cards.xlsx")));
        assert!(is_spreadsheet(Path::new("cards.XLSX")));
        assert!(is_spreadsheet(Path::new("cards.ods")));
        assert!(!is_spreadsheet(Path::new("cards.csv")));
        assert!(!is_spreadsheet(Path::new("cards")));
    }
}
