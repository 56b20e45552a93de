//! Port trait definitions.
//!
//! These traits name every remote operation the domain needs; infrastructure
//! crates implement them and callers hold `dyn` references, so nothing above
//! this crate depends on how the requests are made. Each method performs
//! exactly one remote call and returns a decoded snapshot or a
//! [`BoardError`]; no method retries, caches, or paginates.

use async_trait::async_trait;

use crate::{
    BoardError, FieldId, FieldOptionId, Issue, IssueId, IssueNumber, Login, Project, ProjectField,
    ProjectId, ProjectItem, ProjectItemId, Repository, RepositoryId,
};

// ---------------------------------------------------------------------------
// ProjectV2 boards
// ---------------------------------------------------------------------------

/// Read and modify ProjectV2 boards.
///
/// The two mutations differ in remote idempotency: adding an issue twice
/// creates two items (unless the service deduplicates), while setting the
/// same field value twice leaves the same end state.
#[async_trait]
pub trait ProjectBoard {
    /// Adds an existing issue (or pull request) to a board and returns the
    /// identifier of the newly created item.
    async fn add_issue_to_project(
        &self,
        project: &ProjectId,
        issue: &IssueId,
    ) -> Result<ProjectItemId, BoardError>;

    /// Sets a single-select field of a board item to the given option and
    /// returns the item identifier.
    ///
    /// Only single-select values are supported; other field data types have
    /// no setter here.
    async fn set_field_value(
        &self,
        project: &ProjectId,
        item: &ProjectItemId,
        field: &FieldId,
        option: &FieldOptionId,
    ) -> Result<ProjectItemId, BoardError>;

    /// Lists a user's boards (first 10; no pagination).
    async fn projects_for_user(&self, login: &Login) -> Result<Vec<Project>, BoardError>;

    /// Fetches one board by node identifier.
    async fn project_by_id(&self, project: &ProjectId) -> Result<Project, BoardError>;

    /// Lists the fields configured on a board (first 20; no pagination).
    /// Single-select fields carry their option lists.
    async fn project_fields(&self, project: &ProjectId)
        -> Result<Vec<ProjectField>, BoardError>;

    /// Lists the items on a board (first 20; no pagination).
    async fn project_items(&self, project: &ProjectId) -> Result<Vec<ProjectItem>, BoardError>;
}

// ---------------------------------------------------------------------------
// Repositories and issues
// ---------------------------------------------------------------------------

/// Read repositories and issues, and resolve human-facing issue coordinates
/// to opaque node identifiers.
#[async_trait]
pub trait IssueTracker {
    /// Resolves `(owner, repo, number)` to the issue's opaque node
    /// identifier.
    async fn issue_node_id(
        &self,
        owner: &Login,
        repo: &str,
        number: IssueNumber,
    ) -> Result<IssueId, BoardError>;

    /// Lists a user's repositories (first 10; no pagination).
    async fn repositories_for_user(&self, login: &Login)
        -> Result<Vec<Repository>, BoardError>;

    /// Fetches one repository by node identifier.
    async fn repository_by_id(&self, repo: &RepositoryId) -> Result<Repository, BoardError>;

    /// Lists a repository's issues (first 10; no pagination).
    async fn repository_issues(&self, repo: &RepositoryId) -> Result<Vec<Issue>, BoardError>;
}
