use thiserror::Error;

/// Errors that can occur when reading a block tree.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum BlockError {
    /// The block parser's output was not valid block JSON.
    #[error("Could not parse block JSON: {0}")]
    Json(#[from] serde_json::Error),
}
