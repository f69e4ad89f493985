//! Format decoders.
//!
//! All parsing is delegated to external crates; this module only shapes the
//! decoded output into small immutable documents the verifier can run
//! field-path assertions against.

use std::io::Cursor;

use calamine::{Data, DataType as _, Range, Reader as _, Xlsx};
use serde::de::DeserializeOwned;

use crate::error::Error;

/// Ordered rows of ordered string fields, as decoded by the `csv` crate.
///
/// Headers are not special: row 0 is data like any other row. Field
/// whitespace is preserved.
#[derive(Debug, Clone)]
pub struct CsvDocument {
    rows: Vec<Vec<String>>,
}

impl CsvDocument {
    /// Decode the whole byte stream into rows.
    ///
    /// # Errors
    ///
    /// Returns `Error::Csv` when the stream is not tokenizable as CSV.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(bytes);
        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            rows.push(record.iter().map(ToOwned::to_owned).collect());
        }
        Ok(Self { rows })
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    #[must_use]
    pub fn row(&self, index: usize) -> Option<&[String]> {
        self.rows.get(index).map(Vec::as_slice)
    }
}

/// Multi-sheet workbook with typed cell access, backed by `calamine`.
///
/// Sheets are addressed by zero-based index in workbook order; cells by
/// zero-based `(row, column)`.
pub struct Workbook {
    names: Vec<String>,
    sheets: Vec<Range<Data>>,
}

impl Workbook {
    /// Decode an XLSX byte stream into fully materialized sheet ranges.
    ///
    /// # Errors
    ///
    /// Returns `Error::Spreadsheet` when the stream is not a readable
    /// workbook.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        let mut xlsx: Xlsx<_> = Xlsx::new(Cursor::new(bytes.to_vec()))?;
        let names = xlsx.sheet_names();
        // One range per name, in workbook order, so sheet indexes and names
        // stay aligned even if a sheet has no readable range.
        let mut sheets = Vec::with_capacity(names.len());
        for index in 0..names.len() {
            let range = match xlsx.worksheet_range_at(index) {
                Some(range) => range?,
                None => Range::empty(),
            };
            sheets.push(range);
        }
        Ok(Self { names, sheets })
    }

    #[must_use]
    pub fn sheet_count(&self) -> usize {
        self.sheets.len()
    }

    #[must_use]
    pub fn sheet_name(&self, sheet: usize) -> Option<&str> {
        self.names.get(sheet).map(String::as_str)
    }

    #[must_use]
    pub fn cell(&self, sheet: usize, row: u32, column: u32) -> Option<&Data> {
        self.sheets.get(sheet)?.get_value((row, column))
    }

    /// String content of a cell, `None` for missing or non-string cells.
    #[must_use]
    pub fn cell_str(&self, sheet: usize, row: u32, column: u32) -> Option<&str> {
        self.cell(sheet, row, column)?.get_string()
    }

    /// Numeric cell coerced to an integer, `None` for missing or
    /// non-numeric cells.
    #[must_use]
    pub fn cell_int(&self, sheet: usize, row: u32, column: u32) -> Option<i64> {
        self.cell(sheet, row, column)?.as_i64()
    }
}

impl std::fmt::Debug for Workbook {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Workbook")
            .field("names", &self.names)
            .field("sheet_count", &self.sheets.len())
            .finish()
    }
}

/// Flattened view of a PDF: page count, extractable plain text, and the
/// optional author metadata field, backed by `lopdf`.
#[derive(Debug, Clone)]
pub struct PdfDocument {
    page_count: usize,
    text: String,
    author: Option<String>,
}

impl PdfDocument {
    /// Decode a PDF byte stream and extract the text of every page.
    ///
    /// # Errors
    ///
    /// Returns `Error::Pdf` when the stream cannot be loaded as a PDF or its
    /// text cannot be extracted.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        let document = lopdf::Document::load_mem(bytes)?;
        let pages: Vec<u32> = document.get_pages().keys().copied().collect();
        let text = document.extract_text(&pages)?;
        let author = author_of(&document);
        Ok(Self {
            page_count: pages.len(),
            text,
            author,
        })
    }

    #[must_use]
    pub fn page_count(&self) -> usize {
        self.page_count
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Author from the document information dictionary, `None` when the
    /// dictionary or the field is absent.
    #[must_use]
    pub fn author(&self) -> Option<&str> {
        self.author.as_deref()
    }
}

fn author_of(document: &lopdf::Document) -> Option<String> {
    let info = document.trailer.get(b"Info").ok()?;
    let dict = info
        .as_reference()
        .ok()
        .and_then(|id| document.get_object(id).ok())
        .unwrap_or(info)
        .as_dict()
        .ok()?;
    let author = dict.get(b"Author").ok()?.as_str().ok()?;
    Some(String::from_utf8_lossy(author).into_owned())
}

/// Deserialize a whole JSON fixture body into a typed record graph.
///
/// # Errors
///
/// Returns `Error::Json` when the bytes do not match the declared schema.
pub fn from_json_slice<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, Error> {
    Ok(serde_json::from_slice(bytes)?)
}
