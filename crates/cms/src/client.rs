//! Minimal GraphQL-over-HTTP client.

use std::time::Duration;

use reqwest::{header, Client, Url};
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::error::{CmsError, TransportError};

const MAX_ERROR_BODY: usize = 512;

#[derive(Serialize)]
struct GraphQlRequest<'a> {
    query: &'a str,
    variables: serde_json::Value,
}

#[derive(Deserialize)]
struct GraphQlResponse<T> {
    data: Option<T>,
    #[serde(default)]
    errors: Vec<GraphQlErrorEntry>,
}

#[derive(Deserialize)]
struct GraphQlErrorEntry {
    message: String,
}

/// Posts queries to a single GraphQL endpoint.
#[derive(Debug, Clone)]
pub struct GraphQlClient {
    http: Client,
    endpoint: Url,
    auth_token: Option<String>,
}

impl GraphQlClient {
    pub fn new(
        endpoint: &str,
        auth_token: Option<String>,
        timeout: Duration,
    ) -> Result<Self, CmsError> {
        let endpoint = Url::parse(endpoint).map_err(|e| CmsError::InvalidApiUrl {
            url: endpoint.to_string(),
            reason: e.to_string(),
        })?;

        let http = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("vitrine/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| CmsError::InvalidApiUrl {
                url: endpoint.to_string(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            http,
            endpoint,
            auth_token: auth_token.filter(|t| !t.trim().is_empty()),
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Run `query` and decode its `data` member.
    ///
    /// A non-empty `errors` array fails the request even when `data` is present.
    pub async fn request<T: DeserializeOwned>(
        &self,
        query: &str,
        variables: serde_json::Value,
    ) -> Result<T, TransportError> {
        let mut request = self
            .http
            .post(self.endpoint.clone())
            .header(header::ACCEPT, "application/json")
            .json(&GraphQlRequest { query, variables });

        if let Some(token) = &self.auth_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(TransportError::Status {
                status: status.as_u16(),
                body: truncate(&body, MAX_ERROR_BODY),
            });
        }

        let envelope: GraphQlResponse<T> = serde_json::from_str(&body)?;
        if !envelope.errors.is_empty() {
            return Err(TransportError::GraphQl(
                envelope.errors.into_iter().map(|e| e.message).collect(),
            ));
        }

        envelope.data.ok_or(TransportError::EmptyResponse)
    }
}

fn truncate(body: &str, max: usize) -> String {
    match body.char_indices().nth(max) {
        Some((idx, _)) => format!("{}…", &body[..idx]),
        None => body.to_string(),
    }
}
