use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use shiftcal_core::models::shift_template::ShiftTemplate;

use crate::test_utils::{error_message, template_id, test_server, user_id};

#[tokio::test]
async fn test_list_templates_requires_user_id() {
    let server = test_server().await;

    let response = server.get("/api/shift-templates").expect_failure().await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(error_message(&response.json::<Value>()), "User ID is required");
}

#[tokio::test]
async fn test_create_and_list_templates() {
    let server = test_server().await;
    let john = user_id(&server, "John Doe").await;
    let sarah = user_id(&server, "Sarah Smith").await;

    template_id(&server, john, "Night", "22:00", "6:00").await;
    let early = template_id(&server, john, "Early", "6:00", "14:00").await;
    template_id(&server, sarah, "Late", "14:00", "22:00").await;

    let templates: Vec<ShiftTemplate> = server
        .get("/api/shift-templates")
        .add_query_param("userId", john)
        .await
        .json();

    let names: Vec<&str> = templates.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["Early", "Night"]);
    assert_eq!(templates[0].id, early);
    assert_eq!(templates[0].start_time, "06:00");
    assert_eq!(templates[0].end_time, "14:00");
    assert_eq!(templates[1].end_time, "06:00");
}

#[tokio::test]
async fn test_create_template_validation() {
    let server = test_server().await;
    let john = user_id(&server, "John Doe").await;

    let bad_time = server
        .post("/api/shift-templates")
        .json(&json!({
            "userId": john,
            "name": "Early",
            "startTime": "25:00",
            "endTime": "14:00",
        }))
        .expect_failure()
        .await;
    bad_time.assert_status(StatusCode::BAD_REQUEST);

    let same_time = server
        .post("/api/shift-templates")
        .json(&json!({
            "userId": john,
            "name": "Nothing",
            "startTime": "08:00",
            "endTime": "08:00",
        }))
        .expect_failure()
        .await;
    same_time.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        error_message(&same_time.json::<Value>()),
        "Template start and end time must differ"
    );

    server
        .post("/api/shift-templates")
        .json(&json!({
            "userId": 9999,
            "name": "Early",
            "startTime": "06:00",
            "endTime": "14:00",
        }))
        .expect_failure()
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_and_delete_template() {
    let server = test_server().await;
    let mike = user_id(&server, "Mike Johnson").await;
    let id = template_id(&server, mike, "Early", "06:00", "14:00").await;
    let path = format!("/api/shift-templates/{id}");

    server
        .put(&path)
        .json(&json!({ "name": "Earlier", "startTime": "05:30", "endTime": "13:30" }))
        .await
        .assert_status_ok();

    let template: ShiftTemplate = server.get(&path).await.json();
    assert_eq!(template.name, "Earlier");
    assert_eq!(template.start_time, "05:30");
    assert_eq!(template.user_id, mike);

    server.delete(&path).await.assert_status_ok();
    server
        .get(&path)
        .expect_failure()
        .await
        .assert_status(StatusCode::NOT_FOUND);
    server
        .delete(&path)
        .expect_failure()
        .await
        .assert_status(StatusCode::NOT_FOUND);
    server
        .put(&path)
        .json(&json!({ "name": "Gone", "startTime": "05:30", "endTime": "13:30" }))
        .expect_failure()
        .await
        .assert_status(StatusCode::NOT_FOUND);
}
