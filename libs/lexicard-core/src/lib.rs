//! Core vocabulary-card ingestion library.
//!
//! Converts tabular vocabulary data (delimited text or spreadsheet
//! rows) into normalized card records with typed back-text sections.
//!
//! Provides:
//! - Quote-aware tokenizer for delimited lines
//! - Row classification (header/blank skip, continuation merge, column
//!   mapping)
//! - Back-text section parsing with a fixed bracketed-tag vocabulary
//! - Byte decoding with a UTF-8 → Big5 → lossy fallback chain
//! - Spreadsheet reading via calamine

pub mod builder;
pub mod decode;
pub mod error;
pub mod rows;
pub mod sections;
pub mod source;
pub mod spreadsheet;
pub mod tokenizer;
pub mod types;

pub use builder::{build_cards, build_cards_from_text, Ingestion};
pub use decode::decode_text;
pub use error::{IngestError, Result};
pub use rows::{classify_row, RowShape};
pub use sections::derive_parsed;
pub use source::{ingest_path, DEFAULT_DELIMITER};
pub use spreadsheet::read_workbook_rows;
pub use tokenizer::{coerce_cells, split_delimited};
pub use types::{Card, ParsedBack, Section, SectionKind};
