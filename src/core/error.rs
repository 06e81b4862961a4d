use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
#[derive(Debug, Error)]
pub enum KlineError {
    /// An error occurred during an HTTP request (includes timeouts).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The server returned an unexpected or unsuccessful HTTP status code.
    #[error("Unexpected response status: {status} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
    },

    /// The data received from the API was in an unexpected format or was missing a required field.
    #[error("Data format unexpected or missing field: {0}")]
    Data(String),

    /// The ticker code did not match the accepted `sh`/`sz` + 6 digits shape.
    #[error("invalid ticker code: {0:?} (expected e.g. sz000001 / sh601006)")]
    InvalidSymbol(String),

    /// The provider answered successfully but returned zero bars.
    #[error("provider returned no bars")]
    EmptyResult,
}
