/// Failures at the storage-decoding boundary
///
/// The expansion stages themselves are total; only turning raw bytes into
/// records can fail.
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Parse error on line {line}: {source}")]
    Line {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("No records found")]
    Empty,
}

pub type Result<T> = std::result::Result<T, RecordError>;
