//! Shared helpers for the integration tests.

#![allow(dead_code)]

use github::{AccessToken, GithubClient, GithubConfig};
use wiremock::MockServer;

/// A syntactically plausible token; never sent to a real endpoint.
pub fn test_token() -> AccessToken {
    AccessToken::new("x".repeat(40)).expect("test token length")
}

/// Builds a client pointed at the mock server's `/graphql` route.
pub fn client_for(server: &MockServer) -> GithubClient {
    init_tracing();
    let config =
        GithubConfig::new(test_token()).with_endpoint(format!("{}/graphql", server.uri()));
    GithubClient::new(config).expect("client construction")
}

/// Installs a test subscriber once per process; `RUST_LOG` controls verbosity.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
