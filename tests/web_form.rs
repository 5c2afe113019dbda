mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use top_africa::application::services::JoinPolicy;
use top_africa::domain::entities::ReportDate;
use top_africa::state::AppState;
use top_africa::web;

fn server(state: AppState) -> TestServer {
    let app = web::routes::routes().with_state(state);

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_form_defaults() {
    let server = server(common::default_state());

    let response = server.get("/form").await;

    response.assert_status_ok();

    let html = response.text();
    let yesterday = ReportDate::yesterday().to_string();
    assert!(html.contains(&format!("value=\"{yesterday}\"")));
    assert!(html.contains("<option value=\"all-access\" selected>"));
    assert!(html.contains("<option value=\"Africa\" selected>"));
    assert!(html.contains("navigator.geolocation"));
    assert!(html.contains("Geolocation is not supported by this browser."));
}

#[tokio::test]
async fn test_form_prefills_country_from_query() {
    let server = server(common::default_state());

    let response = server.get("/form").add_query_param("country", "sn").await;

    let html = response.text();
    assert!(html.contains("<option value=\"SN\" selected>Senegal</option>"));
    assert!(html.contains("navigator.geolocation"));
}

#[tokio::test]
async fn test_form_geolocation_overrides_prefilled_country() {
    let state = common::create_test_state(
        common::sample_pageviews(),
        common::StubLocation::resolving("KE"),
        JoinPolicy::AllOrNothing,
    );
    let server = server(state);

    let response = server
        .get("/form")
        .add_query_param("country", "SN")
        .add_query_param("lat", "-1.28")
        .add_query_param("lon", "36.82")
        .await;

    response.assert_status_ok();

    let html = response.text();
    assert!(html.contains("<option value=\"KE\" selected>Kenya</option>"));
    assert!(!html.contains(" selected>Senegal"));
    assert!(!html.contains("navigator.geolocation"));
}

#[tokio::test]
async fn test_form_out_of_range_coordinates_notify_lookup_failure() {
    let server = server(common::default_state());

    let response = server
        .get("/form")
        .add_query_param("lat", "200")
        .add_query_param("lon", "0")
        .await;

    response.assert_status_ok();

    let html = response.text();
    assert!(html.contains("notification persistent\">Error fetching location data."));
    assert!(!html.contains("Coordinates out of range"));
    assert!(!html.contains(" selected>Kenya"));
}

#[tokio::test]
async fn test_form_geolocation_selects_country() {
    let state = common::create_test_state(
        common::sample_pageviews(),
        common::StubLocation::resolving("CD"),
        JoinPolicy::AllOrNothing,
    );
    let server = server(state);

    let response = server
        .get("/form")
        .add_query_param("lat", "-4.32")
        .add_query_param("lon", "15.31")
        .await;

    response.assert_status_ok();

    let html = response.text();
    assert!(html.contains("<option value=\"CD\" selected>Democratic Republic of the Congo</option>"));
    assert!(!html.contains("navigator.geolocation"));
}

#[tokio::test]
async fn test_form_geolocation_failure_notifies() {
    let state = common::create_test_state(
        common::sample_pageviews(),
        common::StubLocation::failing(),
        JoinPolicy::AllOrNothing,
    );
    let server = server(state);

    let response = server
        .get("/form")
        .add_query_param("lat", "-1.28")
        .add_query_param("lon", "36.82")
        .await;

    response.assert_status_ok();

    let html = response.text();
    assert!(html.contains("notification persistent\">Error fetching location data."));
    assert!(!html.contains(" selected>Kenya"));
}

#[tokio::test]
async fn test_submit_redirects_to_country_page() {
    let server = server(common::default_state());

    let response = server
        .post("/submit")
        .form(&[
            ("continent", "Africa"),
            ("country", "ke"),
            ("date", "2024-03-02"),
            ("access", "mobile-app"),
        ])
        .await;

    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(
        response.headers()["location"],
        "/country/KE?year=2024&month=03&day=02&access=mobile-app"
    );
}

#[tokio::test]
async fn test_submit_without_country_rerenders_form() {
    let server = server(common::default_state());

    let response = server
        .post("/submit")
        .form(&[("continent", "Africa"), ("country", ""), ("date", "2024-03-02")])
        .await;

    response.assert_status_bad_request();

    let html = response.text();
    assert!(html.contains("<p class=\"field-error\">Country is required</p>"));
    assert!(html.contains("notification transient\">Country is required"));
    assert!(html.contains("value=\"2024-03-02\""));
}

#[tokio::test]
async fn test_submit_without_date_reports_date() {
    let server = server(common::default_state());

    let response = server
        .post("/submit")
        .form(&[("country", "KE"), ("date", "")])
        .await;

    response.assert_status_bad_request();

    let html = response.text();
    assert!(html.contains("<p class=\"field-error\">Date is required</p>"));
    assert!(html.contains("<option value=\"KE\" selected>Kenya</option>"));
}
