mod common;

use axum::{Router, http::StatusCode, routing::get};
use axum_test::TestServer;
use top_africa::api::handlers::location_handler;
use top_africa::application::services::JoinPolicy;
use top_africa::state::AppState;

fn server(state: AppState) -> TestServer {
    let app = Router::new()
        .route("/api/location", get(location_handler))
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_location_resolves_country() {
    let state = common::create_test_state(
        common::sample_pageviews(),
        common::StubLocation::resolving("CD"),
        JoinPolicy::AllOrNothing,
    );
    let server = server(state);

    let response = server
        .get("/api/location")
        .add_query_param("lat", "-4.32")
        .add_query_param("lon", "15.31")
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["country"], "CD");
    assert_eq!(json["name"], "Democratic Republic of the Congo");
}

#[tokio::test]
async fn test_location_rejects_out_of_range_coordinates() {
    let server = server(common::default_state());

    let response = server
        .get("/api/location")
        .add_query_param("lat", "123")
        .add_query_param("lon", "15")
        .await;

    response.assert_status_bad_request();
    assert_eq!(
        response.json::<serde_json::Value>()["error"]["code"],
        "validation_error"
    );
}

#[tokio::test]
async fn test_location_lookup_failure_returns_502() {
    let state = common::create_test_state(
        common::sample_pageviews(),
        common::StubLocation::failing(),
        JoinPolicy::AllOrNothing,
    );
    let server = server(state);

    let response = server
        .get("/api/location")
        .add_query_param("lat", "-1.28")
        .add_query_param("lon", "36.82")
        .await;

    response.assert_status(StatusCode::BAD_GATEWAY);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["message"], "Error fetching location data.");
}
