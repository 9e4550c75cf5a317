// file: src/error.rs
// description: Custom error types and result type aliases
// reference: https://docs.rs/thiserror

use thiserror::Error;

pub type Result<T> = std::result::Result<T, BenchError>;

#[derive(Error, Debug)]
pub enum BenchError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{backend} setup failed: {message}")]
    SetupFailed { backend: String, message: String },

    #[error("{backend} indexing failed: {message}")]
    IndexFailed { backend: String, message: String },

    #[error("{backend} search failed: {message}")]
    SearchFailed { backend: String, message: String },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl BenchError {
    pub fn setup(backend: &str, message: impl ToString) -> Self {
        Self::SetupFailed {
            backend: backend.to_string(),
            message: message.to_string(),
        }
    }

    pub fn index(backend: &str, message: impl ToString) -> Self {
        Self::IndexFailed {
            backend: backend.to_string(),
            message: message.to_string(),
        }
    }

    pub fn search(backend: &str, message: impl ToString) -> Self {
        Self::SearchFailed {
            backend: backend.to_string(),
            message: message.to_string(),
        }
    }
}

impl From<serde_json::Error> for BenchError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_errors_name_backend_and_operation() {
        let err = BenchError::setup("postgres", "connection refused");
        assert_eq!(err.to_string(), "postgres setup failed: connection refused");

        let err = BenchError::index("elasticsearch", "status 400");
        assert_eq!(err.to_string(), "elasticsearch indexing failed: status 400");

        let err = BenchError::search("memory", "boom");
        assert_eq!(err.to_string(), "memory search failed: boom");
    }
}
