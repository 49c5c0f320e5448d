use thiserror::Error;

#[derive(Error, Debug)]
pub enum ViralscriptError {
    #[error("{field} must not be empty")]
    EmptyInput { field: &'static str },

    #[error("a generation request is already in flight")]
    Busy,

    #[error("Missing API key: {env_var} environment variable is not set")]
    MissingApiKey { env_var: &'static str },

    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Service returned HTTP {status}: {reason}")]
    ServiceFailure { status: u16, reason: String },

    #[error("No data returned from the model")]
    EmptyResponse,

    #[error("Model response did not match the expected script shape: {reason}")]
    MalformedResponse { reason: String },

    #[error("Generation was cancelled")]
    Cancelled,
}

pub type Result<T> = std::result::Result<T, ViralscriptError>;
