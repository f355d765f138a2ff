use thiserror::Error;

/// Errors returned by the WhatsApp Cloud API client.
#[derive(Debug, Error)]
pub enum WhatsAppError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The Cloud API answered with a non-2xx status. `body` is the upstream
    /// error document, compact JSON when it parsed, raw text otherwise.
    #[error("WhatsApp API Error: {body}")]
    Api { status: u16, body: String },

    /// A 2xx response body was not valid JSON.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid WhatsApp base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}
