use axum::http::StatusCode;
use axum_test::TestServer;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use shiftcal_core::models::{CreatedResponse, user::User};

use crate::test_utils::{error_message, template_id, test_server, user_id};

#[tokio::test]
async fn test_list_seeded_users() {
    let server = test_server().await;

    let users: Vec<User> = server.get("/api/users").await.json();
    let names: Vec<&str> = users.iter().map(|u| u.name.as_str()).collect();

    assert_eq!(names, vec!["John Doe", "Mike Johnson", "Sarah Smith"]);
}

#[tokio::test]
async fn test_create_user_listed_once_in_order() {
    let server = test_server().await;

    let response = server
        .post("/api/users")
        .json(&json!({ "name": "Ann", "color": "#3B82F6" }))
        .await;
    response.assert_status_ok();
    let created: CreatedResponse = response.json();
    assert_eq!(created.message, "User created successfully");

    let users: Vec<User> = server.get("/api/users").await.json();
    let names: Vec<&str> = users.iter().map(|u| u.name.as_str()).collect();
    assert_eq!(names, vec!["Ann", "John Doe", "Mike Johnson", "Sarah Smith"]);

    let ann = users.iter().find(|u| u.id == created.id).unwrap();
    assert_eq!(ann.color, "#3B82F6");
    assert!(ann.email.starts_with("ann."));
    assert!(ann.email.ends_with("@family.local"));
}

#[tokio::test]
async fn test_create_user_deduplicates_by_name() {
    let server = test_server().await;

    let first: CreatedResponse = server
        .post("/api/users")
        .json(&json!({ "name": "Ann", "color": "#3B82F6" }))
        .await
        .json();
    let second: CreatedResponse = server
        .post("/api/users")
        .json(&json!({ "name": "Ann", "color": "#3B82F6" }))
        .await
        .json();
    let shouted: CreatedResponse = server
        .post("/api/users")
        .json(&json!({ "name": "ANN", "color": "#EF4444" }))
        .await
        .json();

    assert_eq!(first.id, second.id);
    assert_eq!(first.id, shouted.id);
    assert_eq!(second.message, "User already exists");

    let users: Vec<User> = server.get("/api/users").await.json();
    assert_eq!(users.iter().filter(|u| u.name == "Ann").count(), 1);
}

async fn create_ann(server: &TestServer) -> CreatedResponse {
    let response = server
        .post("/api/users")
        .json(&json!({ "name": "Ann", "color": "#3B82F6" }))
        .await;
    response.assert_status_ok();
    response.json()
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_creates_share_one_user() {
    let server = test_server().await;

    let (a, b, c, d) = tokio::join!(
        create_ann(&server),
        create_ann(&server),
        create_ann(&server),
        create_ann(&server),
    );

    assert!([&b, &c, &d].iter().all(|other| other.id == a.id));
    let created = [&a, &b, &c, &d]
        .iter()
        .filter(|r| r.message == "User created successfully")
        .count();
    assert_eq!(created, 1);

    let users: Vec<User> = server.get("/api/users").await.json();
    assert_eq!(users.iter().filter(|u| u.name == "Ann").count(), 1);
}

#[tokio::test]
async fn test_create_user_matches_seeded_user() {
    let server = test_server().await;
    let id = user_id(&server, "sarah smith").await;

    let user: User = server.get(&format!("/api/users/{id}")).await.json();
    assert_eq!(user.name, "Sarah Smith");
    assert_eq!(user.email, "sarah@example.com");
}

#[tokio::test]
async fn test_create_user_validation() {
    let server = test_server().await;

    let missing_color = server
        .post("/api/users")
        .json(&json!({ "name": "Ann" }))
        .expect_failure()
        .await;
    missing_color.assert_status(StatusCode::BAD_REQUEST);

    let blank_name = server
        .post("/api/users")
        .json(&json!({ "name": "  ", "color": "#3B82F6" }))
        .expect_failure()
        .await;
    blank_name.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        error_message(&blank_name.json::<Value>()),
        "Name and color are required"
    );

    let bad_color = server
        .post("/api/users")
        .json(&json!({ "name": "Ann", "color": "red" }))
        .expect_failure()
        .await;
    bad_color.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_user() {
    let server = test_server().await;
    let id = user_id(&server, "Ann").await;

    server
        .put(&format!("/api/users/{id}"))
        .json(&json!({ "name": "Annie" }))
        .await
        .assert_status_ok();

    let user: User = server.get(&format!("/api/users/{id}")).await.json();
    assert_eq!(user.name, "Annie");
    assert_eq!(user.color, "#3B82F6");
}

#[tokio::test]
async fn test_missing_user_is_not_found() {
    let server = test_server().await;

    server
        .get("/api/users/9999")
        .expect_failure()
        .await
        .assert_status(StatusCode::NOT_FOUND);
    server
        .put("/api/users/9999")
        .json(&json!({ "name": "Ghost", "color": "#3B82F6" }))
        .expect_failure()
        .await
        .assert_status(StatusCode::NOT_FOUND);
    server
        .delete("/api/users/9999")
        .expect_failure()
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_non_numeric_id_is_bad_request() {
    let server = test_server().await;

    let response = server.delete("/api/users/abc").expect_failure().await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let message = response.json::<Value>()["error"].as_str().unwrap().to_string();
    assert!(message.starts_with("Invalid path parameter"), "{message}");
}

#[tokio::test]
async fn test_delete_user_cascades() {
    let server = test_server().await;
    let id = user_id(&server, "Ann").await;
    template_id(&server, id, "Early", "06:00", "14:00").await;
    server
        .post("/api/shifts")
        .json(&json!({
            "userId": id,
            "title": "Early",
            "startTime": "2025-09-22T06:00:00Z",
            "endTime": "2025-09-22T14:00:00Z",
        }))
        .await
        .assert_status_ok();

    server
        .delete(&format!("/api/users/{id}"))
        .await
        .assert_status_ok();

    let shifts: Vec<Value> = server
        .get("/api/shifts")
        .add_query_param("userId", id)
        .await
        .json();
    assert!(shifts.is_empty());

    let templates: Vec<Value> = server
        .get("/api/shift-templates")
        .add_query_param("userId", id)
        .await
        .json();
    assert!(templates.is_empty());
}
