use axum::{Router, http::StatusCode, routing::post};
use axum_test::TestServer;
use serde_json::json;
use top_africa::api::handlers::submission_handler;

fn server() -> TestServer {
    let app = Router::new().route("/api/submissions", post(submission_handler));

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_submission_decomposes_date() {
    let response = server()
        .post("/api/submissions")
        .json(&json!({
            "country": "cd",
            "continent": "Africa",
            "date": "2024-03-02",
            "access": "mobile-web"
        }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["country"], "CD");
    assert_eq!(json["date"], "2024-03-02");
    assert_eq!(json["access"], "mobile-web");
    assert_eq!(json["year"], "2024");
    assert_eq!(json["month"], "03");
    assert_eq!(json["day"], "02");
    assert_eq!(
        json["location"],
        "/country/CD?year=2024&month=03&day=02&access=mobile-web"
    );
}

#[tokio::test]
async fn test_submission_defaults_access() {
    let response = server()
        .post("/api/submissions")
        .json(&json!({ "country": "KE", "date": "2024-12-31" }))
        .await;

    response.assert_status(StatusCode::CREATED);
    assert_eq!(response.json::<serde_json::Value>()["access"], "all-access");
}

#[tokio::test]
async fn test_submission_requires_country() {
    let response = server()
        .post("/api/submissions")
        .json(&json!({ "country": "", "date": "2024-03-02" }))
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
    assert_eq!(json["error"]["details"]["country"][0], "Country is required");
    assert!(json["error"]["details"].get("date").is_none());
}

#[tokio::test]
async fn test_submission_requires_date() {
    let response = server()
        .post("/api/submissions")
        .json(&json!({ "country": "KE" }))
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["details"]["date"][0], "Date is required");
}

#[tokio::test]
async fn test_submission_rejects_impossible_date() {
    let response = server()
        .post("/api/submissions")
        .json(&json!({ "country": "KE", "date": "2024-02-30" }))
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["details"]["date"][0], "Date must be YYYY-MM-DD");
}
