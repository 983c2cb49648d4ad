use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// No entry exists for the requested short key
    #[error("Short key not found: {0}")]
    NotFound(String),
}
