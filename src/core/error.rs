use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
#[derive(Debug, Error)]
pub enum FinError {
    /// An error occurred during an HTTP request.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// A response body could not be decoded as JSON.
    #[error("JSON decode error: {0}")]
    Json(#[from] serde_json::Error),

    /// The server returned an unexpected or unsuccessful HTTP status code.
    #[error("Unexpected response status: {status} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
    },

    /// A requested projection field is not one of the accepted quote fields.
    ///
    /// This is a caller error: the request must be corrected, not retried.
    #[error("field not accepted for quote projection: {0}")]
    InvalidField(String),

    /// A news feed query returned zero entries.
    #[error("no news found for the requested symbol")]
    NoNewsFound,

    /// A removal was requested for a ticker that is not in the group.
    #[error("ticker not in group: {0}")]
    TickerNotInGroup(String),

    /// The provider reported an error, returned mismatched data, or a
    /// parameter failed pre-flight validation.
    #[error("data request failed: {0}")]
    DataRequest(String),
}
