//! Static column contracts for the three accepted ERP report sheets.
//!
//! Each uploaded workbook must carry one sheet per registered report type
//! (`ME2N`, `ME5A`, `ZMM013R`). The schema fixes the canonical column names,
//! their output order, and which columns carry dates or quantities. The
//! column order here is the positional contract of the buffers handed to the
//! persistence sink, so it must not be reordered.

/// Which coercion a column receives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    /// Calendar date, timezone-free.
    Date,
    /// Fixed-point quantity.
    Numeric,
    /// Trimmed text passthrough.
    Generic,
}

/// Column contract for one source sheet.
#[derive(Debug)]
pub struct SheetSchema {
    /// Canonical sheet name, matched case-insensitively against the workbook.
    pub name: &'static str,
    /// Canonical column names in output order.
    pub columns: &'static [&'static str],
    /// Columns coerced to calendar dates. Disjoint from `numeric_columns`.
    pub date_columns: &'static [&'static str],
    /// Columns coerced to fixed-point decimals.
    pub numeric_columns: &'static [&'static str],
}

pub const ME2N: SheetSchema = SheetSchema {
    name: "ME2N",
    columns: &[
        "Purchase Requisition",
        "Item of requisition",
        "Purchasing Document",
        "Item",
        "Document Date",
        "Delivery date",
        "Purchasing Doc. Type",
        "Purchasing Group",
        "Short Text",
        "Material",
        "Name of Supplier",
        "Quantity Received",
        "Still to be delivered (qty)",
        "Plant",
        "Storage location",
    ],
    date_columns: &["Document Date", "Delivery date"],
    numeric_columns: &["Quantity Received", "Still to be delivered (qty)"],
};

pub const ME5A: SheetSchema = SheetSchema {
    name: "ME5A",
    columns: &[
        "Order",
        "Changed On",
        "Purchase order",
        "Purchase Requisition",
        "Item of requisition",
        "Material",
        "Purchase Order Date",
        "Created by",
    ],
    date_columns: &["Changed On", "Purchase Order Date"],
    numeric_columns: &[],
};

pub const ZMM013R: SheetSchema = SheetSchema {
    name: "ZMM013R",
    columns: &[
        "Purchase Order",
        "Purchase Requisition",
        "Purchase Order Item",
        "GR Created Date",
    ],
    date_columns: &["GR Created Date"],
    numeric_columns: &[],
};

/// The registered sheets, in processing and reporting order.
pub const REQUIRED_SHEETS: [&SheetSchema; 3] = [&ME2N, &ME5A, &ZMM013R];

impl SheetSchema {
    /// Case-insensitive registry lookup. Sheets outside the registry are
    /// not processed.
    pub fn for_sheet(name: &str) -> Option<&'static SheetSchema> {
        REQUIRED_SHEETS
            .iter()
            .copied()
            .find(|schema| schema.name.eq_ignore_ascii_case(name.trim()))
    }

    /// Coercion kind for a canonical column, matched case-insensitively.
    pub fn column_kind(&self, column: &str) -> ColumnKind {
        if contains_ignore_case(self.date_columns, column) {
            ColumnKind::Date
        } else if contains_ignore_case(self.numeric_columns, column) {
            ColumnKind::Numeric
        } else {
            ColumnKind::Generic
        }
    }
}

fn contains_ignore_case(names: &[&str], needle: &str) -> bool {
    names.iter().any(|name| name.eq_ignore_ascii_case(needle))
}
