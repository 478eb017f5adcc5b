pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Trace JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Step ids must be monotonically increasing: step {index} has id {id} after {prev}")]
    NonMonotonicIds { index: usize, id: u64, prev: u64 },
}
