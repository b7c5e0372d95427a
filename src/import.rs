//! Import entry point.
//!
//! Linear pipeline per upload: re-validate the file, decode the workbook,
//! verify sheets and headers, assemble all three row sets, then hand them
//! to the sink in one call. Every failure before the sink call leaves the
//! store untouched; the sink call itself is atomic by contract.

use tracing::{debug, info};

use crate::assemble::assemble_rows;
use crate::error::{ImportError, ImportResult};
use crate::schema::{SheetSchema, ME2N, ME5A, ZMM013R};
use crate::sink::TransactionSink;
use crate::types::{ImportOutcome, SheetTable};
use crate::workbook::{HeaderMap, Workbook};

/// Orchestrates one purchase order transaction import per call.
///
/// Holds no per-request state; a single instance is safe to share across
/// concurrent uploads. The import future is cooperatively cancellable:
/// dropping it before the load is dispatched performs no persistence work.
pub struct PurchaseOrderImporter<S> {
    sink: S,
}

impl<S: TransactionSink> PurchaseOrderImporter<S> {
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    /// Import one uploaded workbook and return the per-sheet row counts.
    ///
    /// The caller's extension check is not trusted: the upload is
    /// re-validated here, and the payload must decode as a real workbook.
    pub async fn import(&self, file_name: &str, bytes: &[u8]) -> ImportResult<ImportOutcome> {
        check_upload(file_name, bytes)?;

        let mut workbook = Workbook::from_bytes(bytes.to_vec())?;
        workbook.require_sheets()?;

        let me2n = build_sheet(&mut workbook, &ME2N)?;
        let me5a = build_sheet(&mut workbook, &ME5A)?;
        let zmm = build_sheet(&mut workbook, &ZMM013R)?;

        debug!(
            me2n = me2n.row_count(),
            me5a = me5a.row_count(),
            zmm013r = zmm.row_count(),
            "rows assembled, dispatching bulk load"
        );
        self.sink
            .load_purchase_order_transactions(&me2n, &me5a, &zmm)
            .await
            .map_err(ImportError::Persistence)?;

        let outcome = ImportOutcome {
            me2n: me2n.row_count(),
            me5a: me5a.row_count(),
            zmm013r: zmm.row_count(),
        };
        info!(
            file = file_name,
            me2n = outcome.me2n,
            me5a = outcome.me5a,
            zmm013r = outcome.zmm013r,
            "purchase order transactions imported"
        );
        Ok(outcome)
    }
}

fn check_upload(file_name: &str, bytes: &[u8]) -> ImportResult<()> {
    if file_name.trim().is_empty() {
        return Err(ImportError::UnsupportedFile("file is required".to_string()));
    }
    if !file_name.to_lowercase().ends_with(".xlsx") {
        return Err(ImportError::UnsupportedFile(
            "file must be an .xlsx Excel file".to_string(),
        ));
    }
    if bytes.is_empty() {
        return Err(ImportError::UnsupportedFile("file is empty".to_string()));
    }
    Ok(())
}

fn build_sheet(workbook: &mut Workbook, schema: &'static SheetSchema) -> ImportResult<SheetTable> {
    let range = workbook.sheet_range(schema)?;

    // The header must sit in physical row 1. A sheet with no used cells,
    // or whose used range starts below row 1, imports as zero rows; only a
    // present header with unresolved columns is a validation failure.
    let header_in_row_one = range.start().map(|(row, _)| row == 0).unwrap_or(false);
    let header_row = if header_in_row_one {
        range.rows().next()
    } else {
        None
    };
    let Some(header_row) = header_row else {
        debug!(sheet = schema.name, "sheet has no header row");
        return Ok(SheetTable::empty(schema));
    };
    let headers = HeaderMap::resolve(schema.name, header_row, schema)?;

    let table = assemble_rows(&range, &headers, schema)?;
    debug!(sheet = schema.name, rows = table.row_count(), "sheet assembled");
    Ok(table)
}
