use thiserror::Error;

#[derive(Error, Debug)]
pub enum LruError {
    #[error("Invalid capacity {0}, must be a non-negative integer that fits in usize")]
    InvalidCapacity(i128),

    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),
}
