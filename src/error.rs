use thiserror::Error;

pub type ImportResult<T> = Result<T, ImportError>;

#[derive(Error, Debug)]
pub enum ImportError {
    #[error("unsupported upload: {0}")]
    UnsupportedFile(String),

    #[error("failed to read workbook: {0}")]
    Workbook(#[from] calamine::XlsxError),

    #[error("excel file must contain sheets: {}", .0.join(", "))]
    MissingSheets(Vec<String>),

    #[error("sheet '{sheet}' is missing column(s): {}", .columns.join(", "))]
    MissingColumns { sheet: String, columns: Vec<String> },

    #[error("invalid numeric value for column '{column}': {value}")]
    InvalidNumericValue { column: String, value: String },

    #[error("failed to load purchase order transactions: {0}")]
    Persistence(anyhow::Error),
}

impl ImportError {
    /// Whether the failure is the uploader's to fix (bad file) rather than
    /// a backend fault. The HTTP host maps this to 4xx vs 5xx.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, ImportError::Persistence(_))
    }
}
