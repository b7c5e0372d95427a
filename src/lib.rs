//! Purchase order transaction import pipeline.
//!
//! Takes an uploaded ERP spreadsheet export (`.xlsx` with the `ME2N`,
//! `ME5A` and `ZMM013R` report sheets), validates it against the static
//! sheet schemas, coerces every cell to its column's type, and hands three
//! schema-ordered tabular buffers to a [`TransactionSink`] in one call the
//! sink applies atomically.
//!
//! # Guarantees
//!
//! - Structural problems (missing sheets, unresolved columns) and numeric
//!   garbage in quantity columns reject the upload before the sink is
//!   invoked; a failed import never half-loads.
//! - Missing sheets and missing columns are reported all at once, so one
//!   re-upload fixes everything found.
//! - Rows whose every cell coerces to null are dropped.
//!
//! # Example
//!
//! ```no_run
//! use po_import::{PurchaseOrderImporter, SheetTable, TransactionSink};
//!
//! struct StoredProcedureSink;
//!
//! #[async_trait::async_trait]
//! impl TransactionSink for StoredProcedureSink {
//!     async fn load_purchase_order_transactions(
//!         &self,
//!         me2n: &SheetTable,
//!         me5a: &SheetTable,
//!         zmm: &SheetTable,
//!     ) -> anyhow::Result<()> {
//!         // Bind the three buffers as table parameters of one
//!         // stored-procedure call here.
//!         let _ = (me2n, me5a, zmm);
//!         Ok(())
//!     }
//! }
//!
//! # async fn run() -> anyhow::Result<()> {
//! let bytes = std::fs::read("transactions.xlsx")?;
//! let importer = PurchaseOrderImporter::new(StoredProcedureSink);
//! let outcome = importer.import("transactions.xlsx", &bytes).await?;
//! println!("ME2N rows accepted: {}", outcome.me2n);
//! # Ok(())
//! # }
//! ```

pub mod assemble;
pub mod clean;
pub mod error;
pub mod import;
pub mod schema;
pub mod sink;
pub mod types;
pub mod workbook;

// Re-export commonly used types
pub use error::{ImportError, ImportResult};
pub use import::PurchaseOrderImporter;
pub use schema::{ColumnKind, SheetSchema, REQUIRED_SHEETS};
pub use sink::TransactionSink;
pub use types::{CellValue, ImportOutcome, SheetTable};
