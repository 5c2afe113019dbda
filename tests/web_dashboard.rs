mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use top_africa::application::services::JoinPolicy;
use top_africa::state::AppState;
use top_africa::web;

fn server(state: AppState) -> TestServer {
    let app = web::routes::routes().with_state(state);

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_dashboard_renders_gallery() {
    let server = server(common::default_state());

    let response = server.get("/").add_query_param("date", "2024-03-02").await;

    response.assert_status_ok();

    let html = response.text();
    assert!(html.contains("Top articles in Africa on 02/03/2024"));
    assert!(html.contains("class=\"gallery\""));
    assert!(html.contains("Kenya Article 2"));
    assert!(html.contains("https://en.wikipedia.org/wiki/Kenya_Article_2"));
    assert!(!html.contains("Main Page"));
    assert_eq!(html.matches("class=\"card\"").count(), 12);
    assert!(html.contains("<span class=\"prev disabled\">Previous</span>"));
    assert!(html.contains("href=\"/?date=2024-03-02&#38;access=all-access&#38;view=gallery&#38;page=2\""));
}

#[tokio::test]
async fn test_dashboard_list_view_keeps_page() {
    let server = server(common::default_state());

    let response = server
        .get("/")
        .add_query_param("date", "2024-03-02")
        .add_query_param("view", "list")
        .add_query_param("page", "2")
        .await;

    response.assert_status_ok();

    let html = response.text();
    assert!(html.contains("class=\"list\""));
    assert!(html.contains("<span class=\"next disabled\">Next</span>"));
    assert!(html.contains("<span class=\"page current\">2</span>"));
    assert!(html.contains("Gallery view"));
    assert!(html.contains("view=gallery&#38;page=2"));
}

#[tokio::test]
async fn test_dashboard_without_articles_shows_message() {
    let state = common::create_test_state(
        common::StubPageviews::default(),
        common::StubLocation::resolving("KE"),
        JoinPolicy::AllOrNothing,
    );
    let server = server(state);

    let response = server.get("/").add_query_param("date", "2024-03-02").await;

    response.assert_status_ok();
    assert!(response.text().contains("No Article Post"));
}

#[tokio::test]
async fn test_dashboard_batch_failure_shows_error_only() {
    let state = common::create_test_state(
        common::sample_pageviews().failing("SN"),
        common::StubLocation::resolving("KE"),
        JoinPolicy::AllOrNothing,
    );
    let server = server(state);

    let response = server.get("/").add_query_param("date", "2024-03-02").await;

    response.assert_status(StatusCode::BAD_GATEWAY);

    let html = response.text();
    assert!(html.contains("Error: Failed to fetch data from upstream API"));
    assert!(!html.contains("Kenya Article"));
    assert!(!html.contains("No Article Post"));
}

#[tokio::test]
async fn test_dashboard_invalid_date_is_bad_request() {
    let server = server(common::default_state());

    let response = server.get("/").add_query_param("date", "yesterday").await;

    response.assert_status_bad_request();
    assert!(response.text().contains("Error: "));
}

#[tokio::test]
async fn test_country_page_defaults_to_list() {
    let server = server(common::default_state());

    let response = server
        .get("/country/KE")
        .add_query_param("year", "2024")
        .add_query_param("month", "03")
        .add_query_param("day", "02")
        .add_query_param("access", "desktop")
        .await;

    response.assert_status_ok();

    let html = response.text();
    assert!(html.contains("Top articles in Kenya on 02/03/2024"));
    assert!(html.contains("Access platform: desktop"));
    assert!(html.contains("class=\"list\""));
    assert!(html.contains("Kenya Article 11"));
    assert!(!html.contains("Nigeria Article"));
}
