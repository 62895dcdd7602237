/// Persistence-layer errors for the file-backed stores.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("store file corrupt at {path}: {reason}")]
    Corrupt { path: String, reason: String },
}
