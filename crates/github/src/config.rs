//! Client configuration.
//!
//! The configuration is an explicit value constructed once and handed to
//! [`crate::GithubClient`]; there is no ambient global token or header state.
//! Validation happens here, at construction time, so an invalid configuration
//! can never reach the network.

use std::fmt;

use board::BoardError;

/// The never-changing URL to POST to for any GraphQL request.
pub const GRAPHQL_ENDPOINT: &str = "https://api.github.com/graphql";

/// Environment variable [`GithubConfig::from_env`] reads the token from.
pub const TOKEN_ENV_VAR: &str = "GITHUB_TOKEN";

/// GitHub tokens are at least this long; anything shorter is rejected as a
/// paste error rather than sent to the API.
const MIN_TOKEN_LEN: usize = 40;

// ---------------------------------------------------------------------------
// Access token
// ---------------------------------------------------------------------------

/// A GitHub access token.
///
/// The `Debug` implementation is redacted so a token can never leak through
/// error output or tracing events.
#[derive(Clone)]
pub struct AccessToken(String);

impl AccessToken {
    /// Wraps a token string, rejecting values too short to be a real token.
    pub fn new(value: impl Into<String>) -> Result<Self, BoardError> {
        let value = value.into();
        if value.len() < MIN_TOKEN_LEN {
            return Err(BoardError::configuration(format!(
                "access token is too short ({} characters, expected at least {MIN_TOKEN_LEN})",
                value.len()
            )));
        }
        Ok(Self(value))
    }

    /// Returns the raw token for header construction.
    pub(crate) fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(***)")
    }
}

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Configuration for a [`crate::GithubClient`]: the access token and the
/// GraphQL endpoint.
///
/// The endpoint defaults to [`GRAPHQL_ENDPOINT`] and is overridable for tests
/// that point the client at a local mock server.
#[derive(Debug, Clone)]
pub struct GithubConfig {
    token: AccessToken,
    endpoint: String,
}

impl GithubConfig {
    /// Creates a configuration with the default endpoint.
    pub fn new(token: AccessToken) -> Self {
        Self {
            token,
            endpoint: GRAPHQL_ENDPOINT.to_owned(),
        }
    }

    /// Reads the token from the [`TOKEN_ENV_VAR`] environment variable.
    ///
    /// Fails with [`BoardError::Configuration`] if the variable is unset or
    /// the value is implausibly short. No network call is ever attempted
    /// before this check passes.
    pub fn from_env() -> Result<Self, BoardError> {
        let raw = std::env::var(TOKEN_ENV_VAR).map_err(|_| {
            BoardError::configuration(format!("{TOKEN_ENV_VAR} is not set in the environment"))
        })?;
        Ok(Self::new(AccessToken::new(raw)?))
    }

    /// Replaces the endpoint. Used by tests to target a mock server.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Returns the configured GraphQL endpoint.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub(crate) fn token(&self) -> &AccessToken {
        &self.token
    }
}
