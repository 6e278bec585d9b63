use thiserror::Error;

#[derive(Debug, Error)]
pub enum BatchError {
    #[error("CSV must contain 'text1' and 'text2' columns (missing '{column}')")]
    MissingColumn { column: &'static str },

    #[error("line {line}: row has {found} fields but the header has {expected}")]
    RaggedRow {
        line: u64,
        expected: usize,
        found: usize,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
