//! Outbound persistence seam.

use async_trait::async_trait;

use crate::types::SheetTable;

/// Destination for one bulk load of purchase order transactions.
///
/// The three buffers form a single unit of work: an implementation must
/// commit all rows from all three sheets or none of them — typically by
/// handing them to one stored-procedure call that owns the transaction.
/// Column names and order in each buffer match the sheet schemas exactly;
/// implementations may key their parameter mapping by either.
///
/// The pipeline performs exactly one call per import and never retries a
/// failed load: re-sending could duplicate rows if a failed attempt had
/// partially committed despite the atomicity contract. Failures propagate
/// to the caller verbatim.
#[async_trait]
pub trait TransactionSink: Send + Sync {
    async fn load_purchase_order_transactions(
        &self,
        me2n: &SheetTable,
        me5a: &SheetTable,
        zmm: &SheetTable,
    ) -> anyhow::Result<()>;
}
