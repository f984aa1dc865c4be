/// Provider Error Types
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// Stored identity does not match `project_key/slug`
    #[error("{0}")]
    Format(String),

    /// Payload encode/decode errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Transport failures and non-success HTTP outcomes
    #[error("Request error: {0}")]
    Request(String),

    /// Response body could not be read
    #[error("Failed to read response body: {0}")]
    BodyRead(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// URL parsing errors
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),
}

impl ProviderError {
    pub fn format<S: Into<String>>(msg: S) -> Self {
        ProviderError::Format(msg.into())
    }

    pub fn request<S: Into<String>>(msg: S) -> Self {
        ProviderError::Request(msg.into())
    }

    pub fn body_read<S: Into<String>>(msg: S) -> Self {
        ProviderError::BodyRead(msg.into())
    }

    pub fn config<S: Into<String>>(msg: S) -> Self {
        ProviderError::Config(msg.into())
    }

    pub fn validation<S: Into<String>>(msg: S) -> Self {
        ProviderError::Validation(msg.into())
    }

    pub fn bitbucket_api(method: &str, path: &str, status: u16, message: &str) -> Self {
        ProviderError::Request(format!(
            "{method} {path} failed with status {status}: {message}"
        ))
    }

    pub fn invalid_id() -> Self {
        ProviderError::format("Incorrect ID format, should match `project_key/slug`")
    }
}

pub type Result<T> = std::result::Result<T, ProviderError>;
