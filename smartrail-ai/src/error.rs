use thiserror::Error;

/// Internal failure modes of the parsing call. None of these escape the
/// public client surface; they are collapsed into a generic invalid-query
/// response at the boundary.
#[derive(Debug, Error)]
pub enum ParserError {
    #[error("Missing GEMINI_API_KEY environment variable")]
    MissingApiKey,

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Model API error (status {status}): {message}")]
    ApiError { status: u16, message: String },

    #[error("Unusable model payload: {0}")]
    InvalidPayload(String),
}
