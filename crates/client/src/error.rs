/// Errors from the HTTP client layer.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The HTTP request itself failed (connection refused, DNS, TLS, or a
    /// body that could not be decoded).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered with a non-2xx status.
    #[error("{message} ({status})")]
    Api {
        /// HTTP status code.
        status: u16,
        /// The server's `error` text, or the raw body when it has none.
        message: String,
    },
}
