use thiserror::Error;

#[derive(Error, Debug)]
pub enum VerdictError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Invalid test result '{input}': {reason}")]
    InvalidResult { input: String, reason: String },
}

impl VerdictError {
    pub fn invalid_result(input: impl Into<String>, reason: impl Into<String>) -> Self {
        VerdictError::InvalidResult {
            input: input.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, VerdictError>;
