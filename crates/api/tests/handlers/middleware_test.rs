use axum::{body::to_bytes, http::StatusCode, response::Response};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::Value;
use shiftcal_api::middleware::error_handling::{INTERNAL_ERROR_MESSAGE, map_error};
use shiftcal_core::errors::ShiftError;

async fn body_json(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("readable body");
    serde_json::from_slice(&bytes).expect("json body")
}

#[rstest]
#[case(ShiftError::not_found("Shift with ID 7 not found"), StatusCode::NOT_FOUND, "Shift with ID 7 not found")]
#[case(ShiftError::validation("Missing required fields"), StatusCode::BAD_REQUEST, "Missing required fields")]
#[tokio::test]
async fn test_client_errors_keep_their_message(
    #[case] err: ShiftError,
    #[case] status: StatusCode,
    #[case] message: &str,
) {
    let response = map_error(err);

    assert_eq!(response.status(), status);
    assert_eq!(body_json(response).await["error"], message);
}

#[tokio::test]
async fn test_database_error_is_hidden() {
    let response = map_error(ShiftError::Database(eyre::eyre!(
        "UNIQUE constraint failed: users.email"
    )));

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_json(response).await["error"], INTERNAL_ERROR_MESSAGE);
}

#[tokio::test]
async fn test_internal_error_is_hidden() {
    let source: Box<dyn std::error::Error + Send + Sync> = "disk on fire".into();
    let response = map_error(ShiftError::Internal(source));

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_json(response).await["error"], "Internal server error");
}
