//! Workbook decoding and structural validation.
//!
//! Owns the uploaded document for the duration of one import call. The
//! sheet-presence check runs before any header or row work so a workbook
//! missing a required sheet is rejected before anything is assembled.

use std::collections::HashMap;
use std::io::Cursor;

use calamine::{Data, Range, Reader, Xlsx};

use crate::error::{ImportError, ImportResult};
use crate::schema::{SheetSchema, REQUIRED_SHEETS};

/// The uploaded spreadsheet, decoded in memory and discarded when the
/// import call returns.
pub struct Workbook {
    inner: Xlsx<Cursor<Vec<u8>>>,
}

impl Workbook {
    /// Decode the uploaded bytes as an `.xlsx` container. The extension
    /// check upstream is advisory only; an undecodable payload fails here.
    pub fn from_bytes(bytes: Vec<u8>) -> ImportResult<Self> {
        let inner = Xlsx::new(Cursor::new(bytes))?;
        Ok(Self { inner })
    }

    /// Verify all registered sheets are present (case-insensitive names),
    /// reporting every absent sheet in one error.
    pub fn require_sheets(&self) -> ImportResult<()> {
        let missing: Vec<String> = REQUIRED_SHEETS
            .iter()
            .filter(|schema| self.find_sheet(schema.name).is_none())
            .map(|schema| schema.name.to_string())
            .collect();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(ImportError::MissingSheets(missing))
        }
    }

    /// Used range of a registered sheet, bounded by the sheet's last used
    /// row and column.
    pub fn sheet_range(&mut self, schema: &SheetSchema) -> ImportResult<Range<Data>> {
        let actual = self
            .find_sheet(schema.name)
            .ok_or_else(|| ImportError::MissingSheets(vec![schema.name.to_string()]))?;
        Ok(self.inner.worksheet_range(&actual)?)
    }

    fn find_sheet(&self, name: &str) -> Option<String> {
        self.inner
            .sheet_names()
            .iter()
            .find(|sheet| sheet.eq_ignore_ascii_case(name))
            .cloned()
    }
}

/// Maps each canonical column of one schema to its physical position in
/// the sheet's header row.
#[derive(Debug)]
pub struct HeaderMap {
    positions: Vec<usize>,
}

impl HeaderMap {
    /// Resolve every canonical column against the header row, trimming
    /// header cells and matching case-insensitively. Unresolved columns
    /// are collected and reported together, not one at a time.
    pub fn resolve(
        sheet: &str,
        header_row: &[Data],
        schema: &SheetSchema,
    ) -> ImportResult<Self> {
        let mut by_name: HashMap<String, usize> = HashMap::new();
        for (position, cell) in header_row.iter().enumerate() {
            let header = header_text(cell);
            if !header.is_empty() {
                by_name.insert(header.to_lowercase(), position);
            }
        }

        let mut positions = Vec::with_capacity(schema.columns.len());
        let mut missing = Vec::new();
        for canonical in schema.columns {
            match by_name.get(&canonical.to_lowercase()) {
                Some(&position) => positions.push(position),
                None => missing.push((*canonical).to_string()),
            }
        }

        if !missing.is_empty() {
            return Err(ImportError::MissingColumns {
                sheet: sheet.to_string(),
                columns: missing,
            });
        }
        Ok(Self { positions })
    }

    /// Physical column position of the canonical column at `column_index`
    /// in schema order.
    pub fn position(&self, column_index: usize) -> usize {
        self.positions[column_index]
    }
}

fn header_text(cell: &Data) -> String {
    match cell {
        Data::String(text) => text.trim().to_string(),
        Data::Empty => String::new(),
        other => other.to_string().trim().to_string(),
    }
}
