use std::sync::Arc;

use axum_test::TestServer;
use serde_json::{Value, json};
use shiftcal_api::{ApiState, app};
use shiftcal_db::{create_memory_pool, schema::initialize_database};

/// Server backed by a fresh in-memory store holding only the sample users.
pub async fn test_server() -> TestServer {
    let pool = create_memory_pool()
        .await
        .expect("Failed to open in-memory database");
    initialize_database(&pool)
        .await
        .expect("Failed to initialize test database schema");

    TestServer::new(app(Arc::new(ApiState::new(pool))))
        .expect("Failed to start test server")
}

/// Creates (or finds) a user by name and returns the id.
pub async fn user_id(server: &TestServer, name: &str) -> i64 {
    let response = server
        .post("/api/users")
        .json(&json!({ "name": name, "color": "#8B5CF6" }))
        .await;
    response.assert_status_ok();
    response.json::<Value>()["id"].as_i64().expect("id in response")
}

/// Creates a template and returns the id.
pub async fn template_id(server: &TestServer, user_id: i64, name: &str, start: &str, end: &str) -> i64 {
    let response = server
        .post("/api/shift-templates")
        .json(&json!({
            "userId": user_id,
            "name": name,
            "startTime": start,
            "endTime": end,
        }))
        .await;
    response.assert_status_ok();
    response.json::<Value>()["id"].as_i64().expect("id in response")
}

pub fn error_message(body: &Value) -> &str {
    body["error"].as_str().expect("error message in body")
}
