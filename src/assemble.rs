//! Row assembly: one schema-ordered value row per spreadsheet row.

use calamine::{Data, Range};

use crate::clean::clean_cell;
use crate::error::ImportResult;
use crate::schema::SheetSchema;
use crate::types::{CellValue, SheetTable};
use crate::workbook::HeaderMap;

const EMPTY_CELL: Data = Data::Empty;

/// Build the tabular buffer for one sheet.
///
/// Iterates every data row after the header through the last used row,
/// coercing the cell at each canonical column's mapped position. Rows
/// whose every value coerces to null are dropped — trailing blank rows in
/// exported reports must not become phantom records. Emitted rows carry
/// exactly one value per schema column, in schema order.
pub fn assemble_rows(
    range: &Range<Data>,
    headers: &HeaderMap,
    schema: &'static SheetSchema,
) -> ImportResult<SheetTable> {
    let mut table = SheetTable::empty(schema);
    for row in range.rows().skip(1) {
        let mut values = Vec::with_capacity(schema.columns.len());
        let mut all_null = true;
        for (index, column) in schema.columns.iter().enumerate() {
            let cell = row.get(headers.position(index)).unwrap_or(&EMPTY_CELL);
            let value = clean_cell(column, cell, schema)?;
            all_null = all_null && value.is_null();
            values.push(value);
        }
        if all_null {
            continue;
        }
        table.rows.push(values);
    }
    Ok(table)
}
