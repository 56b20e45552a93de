//! ProjectV2 board operation tests.

mod support;

use board::{
    BoardError, FieldDataType, FieldId, FieldOptionId, IssueId, Login, ProjectBoard, ProjectId,
    ProjectItemId,
};
use serde_json::{json, Value};
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn project_id(value: &str) -> ProjectId {
    ProjectId::new(value).expect("non-empty project id")
}

#[tokio::test]
async fn projects_for_user_decodes_a_single_page() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(body_partial_json(json!({ "variables": { "login": "octocat" } })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "user": {
                    "projectsV2": {
                        "nodes": [
                            { "id": "P1", "title": "Board", "number": 1, "url": "u" }
                        ]
                    }
                }
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = support::client_for(&server);
    let login = Login::new("octocat").expect("login");
    let projects = client.projects_for_user(&login).await.expect("projects");

    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0].id.as_str(), "P1");
    assert_eq!(projects[0].title, "Board");
    assert_eq!(projects[0].number.as_u64(), 1);
    assert_eq!(projects[0].url, "u");
}

#[tokio::test]
async fn wrapper_surfaces_error_list_payload_verbatim() {
    let errors = json!([ { "message": "Could not resolve to a User" } ]);
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "errors": errors })),
        )
        .mount(&server)
        .await;

    let client = support::client_for(&server);
    let login = Login::new("nobody").expect("login");
    match client.projects_for_user(&login).await {
        Err(BoardError::Api { errors: got }) => assert_eq!(Value::Array(got), errors),
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn add_issue_to_project_returns_new_item_id() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(body_partial_json(json!({
            "variables": { "projectId": "P1", "contentId": "I1" }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "addProjectV2ItemById": { "item": { "id": "PVTI_1" } } }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = support::client_for(&server);
    let item = client
        .add_issue_to_project(
            &project_id("P1"),
            &IssueId::new("I1").expect("issue id"),
        )
        .await?;
    assert_eq!(item.as_str(), "PVTI_1");

    let requests = server.received_requests().await.expect("recording enabled");
    let body: Value = requests[0].body_json()?;
    let document = body["query"].as_str().expect("query string");
    assert!(document.contains("addProjectV2ItemById"));
    Ok(())
}

#[tokio::test]
async fn set_field_value_sends_single_select_input_object() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(body_partial_json(json!({
            "variables": {
                "input": {
                    "projectId": "P1",
                    "itemId": "IT1",
                    "fieldId": "F1",
                    "singleSelectOptionId": "O2"
                }
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "updateProjectV2ItemFieldValue": { "projectV2Item": { "id": "IT1" } } }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = support::client_for(&server);
    let item = client
        .set_field_value(
            &project_id("P1"),
            &ProjectItemId::new("IT1").expect("item id"),
            &FieldId::new("F1").expect("field id"),
            &FieldOptionId::new("O2").expect("option id"),
        )
        .await?;
    assert_eq!(item.as_str(), "IT1");
    Ok(())
}

#[tokio::test]
async fn project_by_id_decodes_the_node() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(body_partial_json(json!({ "variables": { "projectId": "P9" } })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "node": { "id": "P9", "title": "Roadmap", "number": 4, "url": "u9" }
            }
        })))
        .mount(&server)
        .await;

    let client = support::client_for(&server);
    let project = client.project_by_id(&project_id("P9")).await.expect("project");
    assert_eq!(project.title, "Roadmap");
    assert_eq!(project.number.as_u64(), 4);
}

#[tokio::test]
async fn project_by_id_null_node_is_a_shape_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "data": { "node": null } })),
        )
        .mount(&server)
        .await;

    let client = support::client_for(&server);
    let result = client.project_by_id(&project_id("P0")).await;
    assert!(matches!(result, Err(BoardError::Shape { .. })));
}

#[tokio::test]
async fn project_fields_decodes_select_and_plain_fields() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "node": {
                    "fields": {
                        "nodes": [
                            {
                                "id": "F1",
                                "name": "Status",
                                "dataType": "SINGLE_SELECT",
                                "options": [
                                    { "id": "O1", "name": "Todo" },
                                    { "id": "O2", "name": "Done" }
                                ]
                            },
                            { "id": "F2", "name": "Title", "dataType": "TEXT" }
                        ]
                    }
                }
            }
        })))
        .mount(&server)
        .await;

    let client = support::client_for(&server);
    let fields = client.project_fields(&project_id("P1")).await.expect("fields");

    assert_eq!(fields.len(), 2);
    assert_eq!(fields[0].data_type, FieldDataType::SingleSelect);
    assert_eq!(fields[0].options.len(), 2);
    assert_eq!(fields[0].options[1].name, "Done");
    assert_eq!(fields[1].data_type, FieldDataType::Text);
    assert!(fields[1].options.is_empty());
}

#[tokio::test]
async fn project_items_decodes_a_single_page() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "node": {
                    "items": {
                        "nodes": [
                            { "id": "IT1", "title": "Fix login", "url": "u1" },
                            { "id": "IT2", "title": "Ship it", "url": "u2" }
                        ]
                    }
                }
            }
        })))
        .mount(&server)
        .await;

    let client = support::client_for(&server);
    let items = client.project_items(&project_id("P1")).await.expect("items");

    assert_eq!(items.len(), 2);
    assert_eq!(items[0].id.as_str(), "IT1");
    assert_eq!(items[1].title, "Ship it");
}
