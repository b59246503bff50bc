//! Delimited-line tokenization and spreadsheet cell coercion.

/// Split one line of delimited text into trimmed fields.
///
/// Double quotes wrap fields that contain the delimiter; a doubled
/// double-quote inside a quoted field stands for one literal quote, and
/// any other double-quote toggles quote mode. Unbalanced quotes never
/// fail: whatever accumulated is returned.
pub fn split_delimited(line: &str, delimiter: char) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '"' {
            if in_quotes && chars.peek() == Some(&'"') {
                current.push('"');
                chars.next();
            } else {
                in_quotes = !in_quotes;
            }
        } else if c == delimiter && !in_quotes {
            fields.push(current.trim().to_string());
            current.clear();
        } else {
            current.push(c);
        }
    }

    fields.push(current.trim().to_string());
    fields
}

/// Normalize a row of already-stringified spreadsheet cells.
///
/// Trailing empty cells are dropped; interior empties are kept so
/// column positions still line up.
pub fn coerce_cells(mut cells: Vec<String>) -> Vec<String> {
    while cells.last().is_some_and(|c| c.trim().is_empty()) {
        cells.pop();
    }
    cells
}
