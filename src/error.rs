use thiserror::Error;
use wasm_bindgen::JsValue;

/// Client-side error taxonomy. Every backend call resolves to one of these;
/// the `Display` text is what the UI shows the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Transport-level failure: fetch rejected, response unreadable, etc.
    #[error("Network error: {0}")]
    Network(String),

    /// Non-success response; carries the server's `detail` message when the
    /// body provides one.
    #[error("{0}")]
    Backend(String),

    /// Missing or malformed local input, caught before any network call.
    #[error("{0}")]
    Validation(String),
}

impl From<JsValue> for ApiError {
    fn from(value: JsValue) -> Self {
        ApiError::Network(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}
