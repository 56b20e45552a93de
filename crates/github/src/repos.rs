//! Repository and issue operations.
//!
//! Same shape as [`crate::projects`]: one fixed document, one fixed variable
//! set, one decoded path per operation. `issue_node_id` is the bridge from
//! human-facing coordinates (`owner`, `repo`, issue number) to the opaque
//! node identifier every other operation works with.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use board::{
    BoardError, Issue, IssueId, IssueNumber, IssueTracker, Login, Repository, RepositoryId,
};

use crate::client::{GithubClient, NodeList, NodeLookup};

const ISSUE_NODE_ID_QUERY: &str = r#"
    query IssueNodeId($owner: String!, $repo: String!, $issueNumber: Int!) {
        repository(owner: $owner, name: $repo) {
            issue(number: $issueNumber) {
                id
            }
        }
    }
"#;

const USER_REPOSITORIES_QUERY: &str = r#"
    query UserRepositories($login: String!) {
        user(login: $login) {
            repositories(first: 10) {
                nodes {
                    id
                    name
                    url
                }
            }
        }
    }
"#;

const REPOSITORY_QUERY: &str = r#"
    query RepositoryById($repoId: ID!) {
        node(id: $repoId) {
            ... on Repository {
                id
                name
                url
            }
        }
    }
"#;

const REPOSITORY_ISSUES_QUERY: &str = r#"
    query RepositoryIssues($repoId: ID!) {
        node(id: $repoId) {
            ... on Repository {
                issues(first: 10) {
                    nodes {
                        id
                        title
                        url
                    }
                }
            }
        }
    }
"#;

#[async_trait]
impl IssueTracker for GithubClient {
    async fn issue_node_id(
        &self,
        owner: &Login,
        repo: &str,
        number: IssueNumber,
    ) -> Result<IssueId, BoardError> {
        #[derive(Deserialize)]
        struct Data {
            repository: Repo,
        }
        #[derive(Deserialize)]
        struct Repo {
            issue: IssueRef,
        }
        #[derive(Deserialize)]
        struct IssueRef {
            id: IssueId,
        }

        let data: Data = self
            .query(
                ISSUE_NODE_ID_QUERY,
                json!({
                    "owner": owner,
                    "repo": repo,
                    "issueNumber": number,
                }),
            )
            .await?;
        Ok(data.repository.issue.id)
    }

    async fn repositories_for_user(
        &self,
        login: &Login,
    ) -> Result<Vec<Repository>, BoardError> {
        #[derive(Deserialize)]
        struct Data {
            user: User,
        }
        #[derive(Deserialize)]
        struct User {
            repositories: NodeList<Repository>,
        }

        let data: Data = self
            .query(USER_REPOSITORIES_QUERY, json!({ "login": login }))
            .await?;
        Ok(data.user.repositories.nodes)
    }

    async fn repository_by_id(&self, repo: &RepositoryId) -> Result<Repository, BoardError> {
        let data: NodeLookup<Repository> = self
            .query(REPOSITORY_QUERY, json!({ "repoId": repo }))
            .await?;
        Ok(data.node)
    }

    async fn repository_issues(&self, repo: &RepositoryId) -> Result<Vec<Issue>, BoardError> {
        #[derive(Deserialize)]
        struct RepoNode {
            issues: NodeList<Issue>,
        }

        let data: NodeLookup<RepoNode> = self
            .query(REPOSITORY_ISSUES_QUERY, json!({ "repoId": repo }))
            .await?;
        Ok(data.node.issues.nodes)
    }
}
