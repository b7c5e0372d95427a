//! Per-cell type coercion.
//!
//! Converts one raw spreadsheet cell into the [`CellValue`] its column
//! demands. Dates are best-effort (unparsable dates become null); numeric
//! columns are strict (unparsable non-blank text fails the whole import,
//! since quantity columns drive downstream reporting and silently nulling
//! them would hide a malformed export).

use calamine::Data;
use chrono::{Duration, NaiveDate, NaiveDateTime};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;

use crate::error::{ImportError, ImportResult};
use crate::schema::{ColumnKind, SheetSchema};
use crate::types::CellValue;

/// Serial date epoch: day 0 of the 1900 date system.
const SERIAL_EPOCH: (i32, u32, u32) = (1899, 12, 30);

/// Serial for 9999-12-31; anything at or past it is not a date.
const SERIAL_MAX: f64 = 2_958_466.0;

/// Floats this close to an integer render without a fractional part in
/// generic columns (spreadsheets store integers as floats).
const INTEGRAL_EPSILON: f64 = 1e-7;

/// Coerce one cell to the value its column's kind demands.
///
/// Pure; the only failure is [`ImportError::InvalidNumericValue`] for
/// non-blank garbage in a numeric column. Spreadsheet error values
/// (`#N/A`, `#DIV/0!`…) count as blank in every column kind.
pub fn clean_cell(column: &str, cell: &Data, schema: &SheetSchema) -> ImportResult<CellValue> {
    if matches!(cell, Data::Empty | Data::Error(_)) {
        return Ok(CellValue::Null);
    }
    match schema.column_kind(column) {
        ColumnKind::Date => Ok(clean_date(cell)),
        ColumnKind::Numeric => clean_numeric(column, cell),
        ColumnKind::Generic => Ok(clean_generic(cell)),
    }
}

fn clean_date(cell: &Data) -> CellValue {
    let parsed = match cell {
        Data::DateTime(dt) => dt.as_datetime(),
        Data::Float(serial) => from_date_serial(*serial),
        Data::Int(serial) => from_date_serial(*serial as f64),
        Data::String(text) | Data::DateTimeIso(text) => parse_date_text(text.trim()),
        _ => None,
    };
    parsed.map(CellValue::Date).unwrap_or(CellValue::Null)
}

fn clean_numeric(column: &str, cell: &Data) -> ImportResult<CellValue> {
    let text = match cell {
        Data::Int(value) => return Ok(CellValue::Number(Decimal::from(*value))),
        Data::Float(value) => {
            // from_f64 refuses NaN and infinities; those become null.
            return Ok(Decimal::from_f64(*value)
                .map(CellValue::Number)
                .unwrap_or(CellValue::Null));
        }
        Data::String(value) => value.trim(),
        // A date-formatted cell in a declared-numeric column is the same
        // format mismatch as garbage text.
        Data::DateTime(value) => {
            return Err(ImportError::InvalidNumericValue {
                column: column.to_string(),
                value: value.to_string(),
            });
        }
        other => return clean_numeric_text(column, other.to_string().trim()),
    };
    clean_numeric_text(column, text)
}

fn clean_numeric_text(column: &str, text: &str) -> ImportResult<CellValue> {
    if text.is_empty() {
        return Ok(CellValue::Null);
    }
    parse_decimal_text(text)
        .map(CellValue::Number)
        .ok_or_else(|| ImportError::InvalidNumericValue {
            column: column.to_string(),
            value: text.to_string(),
        })
}

fn clean_generic(cell: &Data) -> CellValue {
    match cell {
        Data::DateTime(dt) => dt
            .as_datetime()
            .map(CellValue::Date)
            .unwrap_or(CellValue::Null),
        Data::DateTimeIso(text) => parse_date_text(text.trim())
            .map(CellValue::Date)
            .unwrap_or_else(|| trimmed_text(text)),
        Data::Float(value) => {
            if !value.is_finite() {
                CellValue::Null
            } else if (value % 1.0).abs() < INTEGRAL_EPSILON {
                CellValue::Text(format!("{}", *value as i64))
            } else {
                CellValue::Text(value.to_string())
            }
        }
        Data::Int(value) => CellValue::Text(value.to_string()),
        Data::Bool(value) => CellValue::Text(value.to_string()),
        Data::String(text) | Data::DurationIso(text) => trimmed_text(text),
        Data::Empty | Data::Error(_) => CellValue::Null,
    }
}

fn trimmed_text(text: &str) -> CellValue {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        CellValue::Null
    } else {
        CellValue::Text(trimmed.to_string())
    }
}

/// Convert a 1900-system date serial: whole days since 1899-12-30, with the
/// fractional part as time of day.
fn from_date_serial(serial: f64) -> Option<NaiveDateTime> {
    if !serial.is_finite() || serial < 0.0 || serial >= SERIAL_MAX {
        return None;
    }
    let days = serial.floor();
    let seconds = ((serial - days) * 86_400.0).round() as i64;
    let (year, month, day) = SERIAL_EPOCH;
    NaiveDate::from_ymd_opt(year, month, day)?
        .and_hms_opt(0, 0, 0)?
        .checked_add_signed(Duration::days(days as i64))?
        .checked_add_signed(Duration::seconds(seconds))
}

const DATE_TIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S"];

// Invariant calendar form first, then the slash/dot forms the ERP emits
// under regional settings.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y", "%d/%m/%Y", "%d.%m.%Y"];

fn parse_date_text(text: &str) -> Option<NaiveDateTime> {
    if text.is_empty() {
        return None;
    }
    for format in DATE_TIME_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(text, format) {
            return Some(parsed);
        }
    }
    for format in DATE_FORMATS {
        if let Ok(parsed) = NaiveDate::parse_from_str(text, format) {
            return parsed.and_hms_opt(0, 0, 0);
        }
    }
    None
}

/// Parse numeric text the way the export's consumers expect: invariant
/// form first (`.` decimal point, `,` group separator), then the
/// comma-decimal form, then scientific notation.
fn parse_decimal_text(text: &str) -> Option<Decimal> {
    if let Ok(parsed) = text.parse::<Decimal>() {
        return Some(parsed);
    }
    let has_dot = text.contains('.');
    let has_comma = text.contains(',');
    let normalized = match (has_dot, has_comma) {
        // Both separators present: the later one is the decimal point.
        (true, true) => {
            if text.rfind('.') > text.rfind(',') {
                text.replace(',', "")
            } else {
                text.replace('.', "").replace(',', ".")
            }
        }
        // Invariant reading: bare commas group thousands.
        (false, true) => text.replace(',', ""),
        _ => return Decimal::from_scientific(text).ok(),
    };
    normalized
        .parse::<Decimal>()
        .ok()
        .or_else(|| Decimal::from_scientific(text).ok())
}
