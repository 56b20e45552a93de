//! ProjectV2 board operations.
//!
//! Each operation pairs one fixed GraphQL document with one fixed variable
//! set and decodes one nested path out of the response. Page sizes are fixed
//! in the document text; no cursor is ever sent, so callers see at most one
//! page.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use board::{
    BoardError, FieldId, FieldOptionId, IssueId, Login, Project, ProjectBoard, ProjectField,
    ProjectId, ProjectItem, ProjectItemId,
};

use crate::client::{GithubClient, NodeList, NodeLookup};

const ADD_ITEM_MUTATION: &str = r#"
    mutation AddIssueToProject($projectId: ID!, $contentId: ID!) {
        addProjectV2ItemById(input: {projectId: $projectId, contentId: $contentId}) {
            item {
                id
            }
        }
    }
"#;

const SET_FIELD_VALUE_MUTATION: &str = r#"
    mutation SetProjectFieldValue($input: UpdateProjectV2ItemFieldValueInput!) {
        updateProjectV2ItemFieldValue(input: $input) {
            projectV2Item {
                id
            }
        }
    }
"#;

const USER_PROJECTS_QUERY: &str = r#"
    query UserProjects($login: String!) {
        user(login: $login) {
            projectsV2(first: 10) {
                nodes {
                    id
                    title
                    number
                    url
                }
            }
        }
    }
"#;

const PROJECT_QUERY: &str = r#"
    query ProjectById($projectId: ID!) {
        node(id: $projectId) {
            ... on ProjectV2 {
                id
                title
                number
                url
            }
        }
    }
"#;

const PROJECT_FIELDS_QUERY: &str = r#"
    query ProjectFields($projectId: ID!) {
        node(id: $projectId) {
            ... on ProjectV2 {
                fields(first: 20) {
                    nodes {
                        id
                        name
                        dataType
                        ... on ProjectV2SingleSelectField {
                            options {
                                id
                                name
                            }
                        }
                    }
                }
            }
        }
    }
"#;

// The inner fragment always matches; it is kept so the item selection reads
// the same way as the field selection above.
const PROJECT_ITEMS_QUERY: &str = r#"
    query ProjectItems($projectId: ID!) {
        node(id: $projectId) {
            ... on ProjectV2 {
                items(first: 20) {
                    nodes {
                        id
                        ... on ProjectV2Item {
                            title
                            url
                        }
                    }
                }
            }
        }
    }
"#;

#[async_trait]
impl ProjectBoard for GithubClient {
    async fn add_issue_to_project(
        &self,
        project: &ProjectId,
        issue: &IssueId,
    ) -> Result<ProjectItemId, BoardError> {
        #[derive(Deserialize)]
        struct Data {
            #[serde(rename = "addProjectV2ItemById")]
            add_item: Payload,
        }
        #[derive(Deserialize)]
        struct Payload {
            item: Item,
        }
        #[derive(Deserialize)]
        struct Item {
            id: ProjectItemId,
        }

        let data: Data = self
            .query(
                ADD_ITEM_MUTATION,
                json!({
                    "projectId": project,
                    "contentId": issue,
                }),
            )
            .await?;
        Ok(data.add_item.item.id)
    }

    async fn set_field_value(
        &self,
        project: &ProjectId,
        item: &ProjectItemId,
        field: &FieldId,
        option: &FieldOptionId,
    ) -> Result<ProjectItemId, BoardError> {
        #[derive(Deserialize)]
        struct Data {
            #[serde(rename = "updateProjectV2ItemFieldValue")]
            update: Payload,
        }
        #[derive(Deserialize)]
        struct Payload {
            #[serde(rename = "projectV2Item")]
            item: Item,
        }
        #[derive(Deserialize)]
        struct Item {
            id: ProjectItemId,
        }

        let data: Data = self
            .query(
                SET_FIELD_VALUE_MUTATION,
                json!({
                    "input": {
                        "projectId": project,
                        "itemId": item,
                        "fieldId": field,
                        "singleSelectOptionId": option,
                    },
                }),
            )
            .await?;
        Ok(data.update.item.id)
    }

    async fn projects_for_user(&self, login: &Login) -> Result<Vec<Project>, BoardError> {
        #[derive(Deserialize)]
        struct Data {
            user: User,
        }
        #[derive(Deserialize)]
        struct User {
            #[serde(rename = "projectsV2")]
            projects: NodeList<Project>,
        }

        let data: Data = self
            .query(USER_PROJECTS_QUERY, json!({ "login": login }))
            .await?;
        Ok(data.user.projects.nodes)
    }

    async fn project_by_id(&self, project: &ProjectId) -> Result<Project, BoardError> {
        let data: NodeLookup<Project> = self
            .query(PROJECT_QUERY, json!({ "projectId": project }))
            .await?;
        Ok(data.node)
    }

    async fn project_fields(
        &self,
        project: &ProjectId,
    ) -> Result<Vec<ProjectField>, BoardError> {
        #[derive(Deserialize)]
        struct ProjectNode {
            fields: NodeList<ProjectField>,
        }

        let data: NodeLookup<ProjectNode> = self
            .query(PROJECT_FIELDS_QUERY, json!({ "projectId": project }))
            .await?;
        Ok(data.node.fields.nodes)
    }

    async fn project_items(&self, project: &ProjectId) -> Result<Vec<ProjectItem>, BoardError> {
        #[derive(Deserialize)]
        struct ProjectNode {
            items: NodeList<ProjectItem>,
        }

        let data: NodeLookup<ProjectNode> = self
            .query(PROJECT_ITEMS_QUERY, json!({ "projectId": project }))
            .await?;
        Ok(data.node.items.nodes)
    }
}
