//! The GraphQL request executor.
//!
//! [`GithubClient`] owns one [`reqwest::Client`] carrying the fixed headers
//! and issues exactly one HTTPS POST per operation. Every wrapper in
//! [`crate::projects`] and [`crate::repos`] is a call site of
//! [`GithubClient::query`] with a fixed document and a fixed variable set.

use reqwest::header::{self, HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use board::BoardError;

use crate::config::GithubConfig;

/// Accept header selecting GitHub's JSON media type.
const ACCEPT_MEDIA_TYPE: &str = "application/vnd.github+json";

// ---------------------------------------------------------------------------
// Wire envelopes
// ---------------------------------------------------------------------------

/// Top-level shape of every GraphQL response body.
#[derive(Debug, Deserialize)]
struct GraphQlResponse {
    #[serde(default)]
    data: Option<Value>,
    #[serde(default)]
    errors: Option<Vec<Value>>,
}

/// A `{ nodes: [...] }` connection page, as returned by every `first: N`
/// list query.
#[derive(Debug, Deserialize)]
pub(crate) struct NodeList<T> {
    pub(crate) nodes: Vec<T>,
}

/// A `{ node: ... }` lookup result. The inner type is non-optional: the
/// service returning `null` (unknown id, no permission) is a shape failure
/// for the caller.
#[derive(Debug, Deserialize)]
pub(crate) struct NodeLookup<T> {
    pub(crate) node: T,
}

// ---------------------------------------------------------------------------
// Client
// ---------------------------------------------------------------------------

/// GraphQL client for GitHub's project/issue management surface.
///
/// Holds the fixed headers (`Authorization: Bearer <token>`,
/// `Accept: application/vnd.github+json`) and the endpoint from the
/// [`GithubConfig`] it was built with. Cloning shares the underlying
/// connection pool.
#[derive(Debug, Clone)]
pub struct GithubClient {
    http: reqwest::Client,
    endpoint: String,
}

impl GithubClient {
    /// Builds a client from an explicit configuration.
    ///
    /// Fails with [`BoardError::Configuration`] if the token cannot form a
    /// valid `Authorization` header value.
    pub fn new(config: GithubConfig) -> Result<Self, BoardError> {
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", config.token().as_str()))
            .map_err(|e| {
                BoardError::configuration(format!("access token is not a valid header value: {e}"))
            })?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, auth);
        headers.insert(header::ACCEPT, HeaderValue::from_static(ACCEPT_MEDIA_TYPE));

        let http = reqwest::Client::builder()
            .user_agent(concat!("board_works/", env!("CARGO_PKG_VERSION")))
            .default_headers(headers)
            .build()
            .map_err(|e| BoardError::configuration(e.to_string()))?;

        Ok(Self {
            http,
            endpoint: config.endpoint().to_owned(),
        })
    }

    /// Builds a client from the `GITHUB_TOKEN` environment variable.
    pub fn from_env() -> Result<Self, BoardError> {
        Self::new(GithubConfig::from_env()?)
    }

    /// Sends one GraphQL request and returns the raw `data` payload.
    ///
    /// - Transport failure or a non-success status → [`BoardError::Transport`].
    /// - A non-empty `errors` list → [`BoardError::Api`] carrying the list
    ///   verbatim, whether or not `data` was also present.
    /// - Otherwise the `data` member is returned unmodified.
    ///
    /// Exactly one request per call; no retry, no added timeout.
    pub async fn execute(&self, document: &str, variables: Value) -> Result<Value, BoardError> {
        let body = serde_json::json!({
            "query": document,
            "variables": variables,
        });

        tracing::debug!(endpoint = %self.endpoint, "sending GraphQL request");
        let response = self
            .http
            .post(&self.endpoint)
            .json(&body)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| BoardError::Transport {
                message: e.to_string(),
            })?;

        let text = response.text().await.map_err(|e| BoardError::Transport {
            message: e.to_string(),
        })?;
        let parsed: GraphQlResponse = serde_json::from_str(&text)
            .map_err(|e| BoardError::shape(format!("response body is not valid JSON: {e}")))?;

        if let Some(errors) = parsed.errors {
            if !errors.is_empty() {
                tracing::debug!(count = errors.len(), "service returned GraphQL errors");
                return Err(BoardError::Api { errors });
            }
        }

        parsed
            .data
            .ok_or_else(|| BoardError::shape("response carried neither data nor errors"))
    }

    /// Sends one GraphQL request and decodes the `data` payload into `T`.
    ///
    /// A decode mismatch — a missing key path, a `null` entity, a wrong
    /// value type — fails with [`BoardError::Shape`].
    pub async fn query<T>(&self, document: &str, variables: Value) -> Result<T, BoardError>
    where
        T: DeserializeOwned,
    {
        let data = self.execute(document, variables).await?;
        serde_json::from_value(data).map_err(|e| BoardError::shape(e.to_string()))
    }
}
