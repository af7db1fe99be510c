use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
#[derive(Debug, Error)]
pub enum TdError {
    /// A required builder argument was missing or invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// Credentials required by the endpoint are missing.
    #[error("auth error: {0}")]
    Auth(String),

    /// An error occurred during an HTTP request.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The server returned an unsuccessful HTTP status code.
    #[error("HTTP response {status}: {body}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The raw response body.
        body: String,
    },

    /// A legacy endpoint answered HTTP 200 but its envelope reported a
    /// non-OK result.
    #[error("upstream request failed: result {result:?}")]
    Upstream {
        /// The `result` value reported inside the envelope.
        result: String,
    },

    /// The data received from the API was in an unexpected format or was
    /// missing a required field.
    #[error("Data format unexpected or missing field: {0}")]
    Data(String),

    /// A JSON response body failed to decode.
    #[error("JSON decode error: {0}")]
    Json(#[from] serde_json::Error),

    /// A legacy XML envelope failed to decode.
    #[error("XML decode error: {0}")]
    Xml(#[from] quick_xml::DeError),

    /// An invalid date range was provided (start must not be after end).
    #[error("invalid date range: start must be before end")]
    InvalidDates,
}
