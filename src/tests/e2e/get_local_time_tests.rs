// End-to-end tests against the composed router, as the binary serves it.

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use chrono::NaiveDateTime;
use http_body_util::BodyExt;
use regex::Regex;
use rstest::{fixture, rstest};
use std::sync::LazyLock;
use tokio::task::JoinSet;
use tower::ServiceExt;

use crate::modules::localtime::core::current_time::{TIMESTAMP_FORMAT, TimeZoneMode};
use crate::shell::config::DEFAULT_BASE_PATH;
use crate::shell::http::router;
use crate::shell::state::AppState;

#[fixture]
fn app() -> Router {
    router(AppState::new(TimeZoneMode::Local), DEFAULT_BASE_PATH)
}

fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}

fn matches_timestamp_pattern(value: &str) -> bool {
    static PATTERN: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}$").unwrap());
    PATTERN.is_match(value)
}

async fn current_time(app: Router, uri: &str) -> String {
    let response = app.oneshot(get(uri)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "application/json"
    );

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    let object = json.as_object().expect("body is not a JSON object");
    assert_eq!(object.len(), 1, "unexpected keys in {json}");
    object["currentTime"]
        .as_str()
        .expect("currentTime is not a string")
        .to_string()
}

#[rstest]
#[case::trailing_slash("/localtime/")]
#[case::bare_base_path("/localtime")]
#[tokio::test]
async fn it_should_return_the_current_time_on_the_base_path(app: Router, #[case] uri: &str) {
    let value = current_time(app, uri).await;
    assert!(matches_timestamp_pattern(&value), "bad timestamp {value}");
    assert!(NaiveDateTime::parse_from_str(&value, TIMESTAMP_FORMAT).is_ok());
}

#[rstest]
#[case("/")]
#[case("/localtime/extra")]
#[case("/time")]
#[case("/localtimes")]
#[tokio::test]
async fn it_should_return_404_on_any_other_path(app: Router, #[case] uri: &str) {
    let response = app.oneshot(get(uri)).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[rstest]
#[case(Method::POST)]
#[case(Method::PUT)]
#[case(Method::DELETE)]
#[tokio::test]
async fn it_should_return_405_for_non_get_methods(app: Router, #[case] method: Method) {
    let request = Request::builder()
        .method(method)
        .uri("/localtime/")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[rstest]
#[tokio::test]
async fn it_should_serve_under_a_configured_base_path() {
    let app = router(AppState::new(TimeZoneMode::Utc), "api/clock/");

    let value = current_time(app.clone(), "/api/clock/").await;
    assert!(matches_timestamp_pattern(&value));

    let response = app.oneshot(get("/localtime/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[rstest]
#[tokio::test]
async fn it_should_serve_at_the_root_when_the_base_path_is_empty() {
    let app = router(AppState::new(TimeZoneMode::Local), "/");
    let value = current_time(app, "/").await;
    assert!(matches_timestamp_pattern(&value));
}

#[rstest]
#[tokio::test]
async fn it_should_not_go_backwards_between_requests(app: Router) {
    let first = current_time(app.clone(), "/localtime/").await;
    tokio::time::sleep(std::time::Duration::from_millis(1100)).await;
    let second = current_time(app, "/localtime/").await;

    // Fixed-width, zero-padded: lexical order is chronological order.
    assert!(second > first, "{second} is not after {first}");
}

#[rstest]
#[tokio::test]
async fn it_should_answer_concurrent_requests_independently(app: Router) {
    const REQUESTS: usize = 64;

    let mut set = JoinSet::new();
    for _ in 0..REQUESTS {
        let app = app.clone();
        set.spawn(async move { current_time(app, "/localtime/").await });
    }

    let mut answered = 0;
    while let Some(result) = set.join_next().await {
        let value = result.expect("request task panicked");
        assert!(matches_timestamp_pattern(&value), "bad timestamp {value}");
        answered += 1;
    }
    assert_eq!(answered, REQUESTS);
}
