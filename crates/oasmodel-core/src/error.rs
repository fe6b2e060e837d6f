//! Error types.

/// Errors raised by document operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A method name that is not one of the nine HTTP methods a path item can hold.
    #[error("unsupported HTTP method {0:?}")]
    UnsupportedMethod(String),

    #[error("invalid regular expression {pattern:?}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("failed to encode document")]
    Json(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
