//! Spreadsheet reading on top of calamine.

use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader};

use crate::error::{IngestError, Result};
use crate::tokenizer::coerce_cells;

/// Read the first worksheet of a workbook into a row grid.
///
/// Cells are coerced to strings (missing cells become empty strings,
/// trailing empties are dropped). A corrupt or unsupported file is a
/// run-level error, distinct from a readable workbook that yields no
/// cards.
pub fn read_workbook_rows(path: &Path) -> Result<Vec<Vec<String>>> {
    let mut workbook = open_workbook_auto(path).map_err(|e| IngestError::Spreadsheet {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| IngestError::EmptySheet {
            path: path.to_path_buf(),
        })?
        .map_err(|e| IngestError::Spreadsheet {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    Ok(range
        .rows()
        .map(|row| coerce_cells(row.iter().map(cell_to_string).collect()))
        .collect())
}

fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn corrupt_file_is_a_spreadsheet_error() {
        let mut file = tempfile::Builder::new()
            .suffix(".xlsx")
            .tempfile()
            .unwrap();
        file.write_all(b"this is not a workbook").unwrap();

        let result = read_workbook_rows(file.path());
        assert!(matches!(result, Err(IngestError::Spreadsheet { .. })));
    }

    #[test]
    fn missing_file_is_a_spreadsheet_error() {
        let result = read_workbook_rows(Path::new("does-not-exist.xlsx"));
        assert!(result.is_err());
    }

    #[test]
    fn cell_coercion_rules() {
        assert_eq!(cell_to_string(&Data::Empty), "");
        assert_eq!(cell_to_string(&Data::String("cat".to_string())), "cat");
        assert_eq!(cell_to_string(&Data::Int(7)), "7");
        assert_eq!(cell_to_string(&Data::Bool(true)), "true");
    }
}
