//! Error types for CMS access.

use thiserror::Error;

/// Failure while talking to the GraphQL endpoint.
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("CMS responded with status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("GraphQL error: {}", .0.join("; "))]
    GraphQl(Vec<String>),

    #[error("GraphQL response carried no data")]
    EmptyResponse,

    #[error("failed to decode CMS response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Errors surfaced by a [`CatalogSource`](crate::CatalogSource).
#[derive(Error, Debug)]
pub enum CmsError {
    #[error("HYGRAPH_API_URL não está configurada.")]
    MissingApiUrl,

    #[error("invalid CMS endpoint '{url}': {reason}")]
    InvalidApiUrl { url: String, reason: String },

    /// Localized message for the UI, transport failure kept as the source.
    #[error("{message}")]
    Fetch {
        message: String,
        #[source]
        source: TransportError,
    },

    #[error("failed to load catalog fixture '{path}': {reason}")]
    Fixture { path: String, reason: String },
}

impl CmsError {
    pub(crate) fn fetch(message: impl Into<String>, source: TransportError) -> Self {
        Self::Fetch {
            message: message.into(),
            source,
        }
    }

    /// True for configuration problems, which should stop startup.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::MissingApiUrl | Self::InvalidApiUrl { .. } | Self::Fixture { .. }
        )
    }
}
