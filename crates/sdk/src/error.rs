//! Error types for the Shopify client.

/// Result type for client operations.
pub type ShopifyResult<T> = Result<T, ShopifyError>;

/// Error types that can occur when talking to the Admin API.
#[derive(Debug, thiserror::Error)]
pub enum ShopifyError {
    /// HTTP request failed before a response was received.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The Admin API returned a non-2xx status. The raw body is carried
    /// unmodified; no Shopify-specific error codes are interpreted.
    #[error("upstream error (status {status}): {body}")]
    Upstream { status: u16, body: String },

    /// Invalid client configuration.
    #[error("configuration error: {0}")]
    Config(String),

    /// Serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// URL parsing error.
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl ShopifyError {
    /// The upstream HTTP status, if this error carries one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Upstream { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_error_preserves_status_and_body() {
        let err = ShopifyError::Upstream {
            status: 422,
            body: r#"{"errors":{"asset":["Invalid key"]}}"#.to_string(),
        };
        assert_eq!(err.status(), Some(422));
        let msg = err.to_string();
        assert!(msg.contains("422"));
        assert!(msg.contains("Invalid key"));
    }
}
