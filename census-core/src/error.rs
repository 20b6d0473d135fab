use thiserror::Error;

/// Failures while talking to the statistics API.
///
/// Payloads are plain strings so the error can live inside UI state, which
/// must be `Clone + PartialEq`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("unexpected HTTP status {0}")]
    Status(u16),

    #[error("malformed response body: {0}")]
    Malformed(String),

    #[error("unrecognized response message: {0:?}")]
    UnexpectedMessage(String),

    #[error("no response within {0} ms")]
    Timeout(u64),
}

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("failed to parse catalog csv: {0}")]
    Csv(#[from] csv::Error),

    #[error("catalog row {row} is missing the {column} column")]
    MissingColumn { row: usize, column: &'static str },

    #[error("catalog has no cities")]
    Empty,
}
