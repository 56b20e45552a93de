//! board_works GitHub infrastructure adapter.
//!
//! Implements the port traits defined in the [`board`] crate
//! ([`board::ProjectBoard`], [`board::IssueTracker`]) over GitHub's GraphQL
//! API.
//!
//! ## Architectural Layer
//!
//! **Infrastructure.** This crate must not contain domain rules. All GraphQL
//! API details (endpoint, headers, request bodies, response decoding) are
//! handled here; the [`board`] crate never sees them.
//!
//! ## Shape
//!
//! One generic request executor ([`GithubClient::execute`] /
//! [`GithubClient::query`]) plus a wrapper per remote operation, each binding
//! a fixed GraphQL document and a fixed variable set. Every call is one HTTP
//! round trip: no retry, no caching, no pagination beyond the fixed page
//! sizes in the document text.
//!
//! ```no_run
//! use board::{Login, ProjectBoard};
//! use github::GithubClient;
//!
//! # async fn demo() -> Result<(), board::BoardError> {
//! let client = GithubClient::from_env()?;
//! let login = Login::new("octocat").expect("non-empty login");
//! for project in client.projects_for_user(&login).await? {
//!     println!("{} (#{})", project.title, project.number);
//! }
//! # Ok(())
//! # }
//! ```

mod client;
mod config;
mod projects;
mod repos;

pub use client::GithubClient;
pub use config::{AccessToken, GithubConfig, GRAPHQL_ENDPOINT, TOKEN_ENV_VAR};
