use axum::http::StatusCode;
use chrono::{Local, NaiveDate, TimeZone, Utc};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use shiftcal_core::calendar::MonthView;

use crate::test_utils::{test_server, user_id};

#[tokio::test]
async fn test_month_view_places_shift_on_local_day() {
    let server = test_server().await;
    let sarah = user_id(&server, "Sarah Smith").await;
    let start = Local
        .with_ymd_and_hms(2025, 9, 22, 12, 0, 0)
        .unwrap()
        .with_timezone(&Utc);
    let end = Local
        .with_ymd_and_hms(2025, 9, 22, 18, 0, 0)
        .unwrap()
        .with_timezone(&Utc);
    server
        .post("/api/shifts")
        .json(&json!({
            "userId": sarah,
            "title": "Afternoon",
            "startTime": start,
            "endTime": end,
        }))
        .await
        .assert_status_ok();

    let view: MonthView = server.get("/api/calendar/2025/9").await.json();

    assert_eq!((view.year, view.month), (2025, 9));
    assert_eq!(view.weeks.len(), 5);
    assert!(view.weeks.iter().all(|week| week.len() == 7));

    let days_with_shifts: Vec<NaiveDate> = view
        .weeks
        .iter()
        .flatten()
        .filter(|day| !day.shifts.is_empty())
        .map(|day| day.date)
        .collect();
    assert_eq!(
        days_with_shifts,
        vec![NaiveDate::from_ymd_opt(2025, 9, 22).unwrap()]
    );
}

#[tokio::test]
async fn test_month_view_rejects_invalid_month() {
    let server = test_server().await;

    server
        .get("/api/calendar/2025/13")
        .expect_failure()
        .await
        .assert_status(StatusCode::BAD_REQUEST);
    let response = server
        .get("/api/calendar/2025/september")
        .expect_failure()
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let message = response.json::<Value>()["error"].as_str().unwrap().to_string();
    assert!(message.starts_with("Invalid path parameter"), "{message}");
}

#[tokio::test]
async fn test_health_check() {
    let server = test_server().await;

    let response = server.get("/health").await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["status"], "ok");
}
