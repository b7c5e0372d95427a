use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::schema::SheetSchema;

/// One coerced cell.
///
/// Replaces the loosely-typed cell objects the spreadsheet reader yields
/// with an explicit sum type, so the assembler and loader never inspect
/// runtime types.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Null,
    /// Calendar timestamp with no timezone attached.
    Date(NaiveDateTime),
    /// Fixed-point quantity.
    Number(Decimal),
    /// Trimmed, non-empty text.
    Text(String),
}

impl CellValue {
    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }
}

/// Column-typed row set handed to the persistence sink as a single unit.
///
/// `columns` carries the schema's canonical names in schema order; every
/// row holds exactly one value per column, in the same order. The sink
/// keys its own mapping both by name and by position, so neither may drift.
#[derive(Debug, Clone)]
pub struct SheetTable {
    pub sheet: &'static str,
    pub columns: &'static [&'static str],
    pub rows: Vec<Vec<CellValue>>,
}

impl SheetTable {
    pub fn empty(schema: &'static SheetSchema) -> Self {
        Self {
            sheet: schema.name,
            columns: schema.columns,
            rows: Vec::new(),
        }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

/// Per-sheet count of rows accepted into the bulk load.
///
/// Serializes as `{"ME2N": n, "ME5A": n, "ZMM013R": n}` so the HTTP host
/// can return it verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ImportOutcome {
    #[serde(rename = "ME2N")]
    pub me2n: usize,
    #[serde(rename = "ME5A")]
    pub me5a: usize,
    #[serde(rename = "ZMM013R")]
    pub zmm013r: usize,
}

impl ImportOutcome {
    /// Counts in the fixed reporting order.
    pub fn counts(&self) -> [(&'static str, usize); 3] {
        [
            ("ME2N", self.me2n),
            ("ME5A", self.me5a),
            ("ZMM013R", self.zmm013r),
        ]
    }
}
