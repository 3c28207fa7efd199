use thiserror::Error;

#[derive(Debug, Error)]
pub enum SanityError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// The query API rejected the request and explained why, e.g. a GROQ
    /// parse error or an unknown dataset.
    #[error("Sanity API error (HTTP {status}): {description}")]
    Api { status: u16, description: String },

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("invalid Sanity base URL \"{base_url}\": {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },
}
