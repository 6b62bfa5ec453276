//! Custom error types for the theme runtime.
//!
//! - [`FetchError`] - Network/fetch-related errors for the page index
//! - [`SetupError`] - Structural errors while attaching to the host DOM
//! - [`ConfigError`] - Malformed bundled site configuration
//!
//! Neither kind is ever shown in-page: fetch errors are logged to the
//! console and setup errors disable the affected component.

use thiserror::Error;

/// Network/fetch-related errors for HTTP requests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Browser window not available
    #[error("Browser window not available")]
    NoWindow,
    /// Failed to create HTTP request
    #[error("Failed to create request")]
    RequestCreationFailed,
    /// Network request failed (CORS, offline, etc.)
    #[error("Network error: {0}")]
    NetworkError(String),
    /// HTTP error response (non-2xx status)
    #[error("HTTP error: {0}")]
    HttpError(u16),
    /// Failed to read response body
    #[error("Failed to read response")]
    ResponseReadFailed,
    /// Invalid response content (not text)
    #[error("Invalid response content")]
    InvalidContent,
    /// JSON parsing error
    #[error("JSON parse error: {0}")]
    JsonParseError(String),
    /// Request timed out
    #[error("Request timed out")]
    Timeout,
}

/// Host DOM does not match the expected structure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SetupError {
    /// Browser document not available
    #[error("Document not available")]
    NoDocument,
    /// The component root is not on this page
    #[error("Component root `.{0}` not found")]
    MissingRoot(&'static str),
    /// A required region inside the component root is missing
    #[error("Required region `.{0}` not found")]
    MissingRegion(&'static str),
}

/// Bundled site configuration could not be read.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid site configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(FetchError::HttpError(404).to_string(), "HTTP error: 404");
        assert_eq!(
            SetupError::MissingRegion("custom-explorer__panel").to_string(),
            "Required region `.custom-explorer__panel` not found"
        );
    }
}
