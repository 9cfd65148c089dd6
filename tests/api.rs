// HTTP-level tests that drive the router with tower::ServiceExt::oneshot,
// so no TCP listener is needed.

use std::collections::{BTreeMap, HashSet};

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use snip::{api, state::AppState, store::LinkStore};

fn app() -> Router {
    api::router(AppState::new(LinkStore::new()))
}

fn shorten_request(data: &str) -> Request<Body> {
    let body = format!("data={}", form_encode(data));
    Request::builder()
        .method(Method::PUT)
        .uri("/")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .unwrap()
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

// Enough encoding for the URLs used below.
fn form_encode(value: &str) -> String {
    value
        .replace('%', "%25")
        .replace('&', "%26")
        .replace('=', "%3D")
        .replace('+', "%2B")
        .replace(' ', "+")
}

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn list_all(app: &Router) -> BTreeMap<String, String> {
    let response = app.clone().oneshot(get_request("/all")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    serde_json::from_value(json_body(response).await).unwrap()
}

#[tokio::test]
async fn all_is_empty_initially() {
    let app = app();
    let response = app.clone().oneshot(get_request("/all")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await, serde_json::json!({}));
}

#[tokio::test]
async fn shorten_then_list_and_redirect() {
    let app = app();

    let response = app
        .clone()
        .oneshot(shorten_request("http://www.testurl.com"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["url"], "http://www.testurl.com");
    let url_id = body["url_id"].as_str().unwrap().to_string();
    assert_eq!(url_id.len(), 8);
    assert!(url_id.chars().all(|c| c.is_ascii_uppercase()));

    let links = list_all(&app).await;
    assert_eq!(links.len(), 1);
    assert_eq!(links[&url_id], "http://www.testurl.com");

    let response = app
        .clone()
        .oneshot(get_request(&format!("/{url_id}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(
        response.headers()[header::LOCATION],
        "http://www.testurl.com"
    );
}

#[tokio::test]
async fn redirect_preserves_query_string() {
    let app = app();
    let target = "https://example.com/search?q=rust&page=2";

    let response = app.clone().oneshot(shorten_request(target)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let url_id = json_body(response).await["url_id"]
        .as_str()
        .unwrap()
        .to_string();

    let response = app
        .clone()
        .oneshot(get_request(&format!("/{}", url_id.to_ascii_lowercase())))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(response.headers()[header::LOCATION], target);
}

#[tokio::test]
async fn each_create_adds_one_entry() {
    let app = app();
    for i in 0..5 {
        let response = app
            .clone()
            .oneshot(shorten_request(&format!("https://example.com/{i}")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
    assert_eq!(list_all(&app).await.len(), 5);
}

#[tokio::test]
async fn invalid_urls_are_rejected() {
    let app = app();

    for bad in ["", "not a url", "www.testurl.com", " http://x.com", "http:x.com"] {
        let response = app.clone().oneshot(shorten_request(bad)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "input {bad:?}");
        assert_eq!(json_body(response).await["error"], "not a valid URL");
    }

    assert!(list_all(&app).await.is_empty());
}

#[tokio::test]
async fn missing_form_field_is_rejected() {
    let app = app();
    let request = Request::builder()
        .method(Method::PUT)
        .uri("/")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from("url=http://www.testurl.com"))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(json_body(response).await["error"].is_string());
    assert!(list_all(&app).await.is_empty());
}

#[tokio::test]
async fn unknown_id_is_not_found() {
    let app = app();

    for uri in ["/ZZZZZZZZ", "/not-an-id"] {
        let response = app.clone().oneshot(get_request(uri)).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "uri {uri}");
        assert!(json_body(response).await["error"].is_string());
    }
}

#[tokio::test]
async fn health_check_reports_ok() {
    let response = app()
        .oneshot(get_request("/api/v1/health"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await["status"], "ok");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_creates_get_distinct_ids() {
    const REQUESTS: usize = 10_000;
    let app = app();

    let tasks: Vec<_> = (0..REQUESTS)
        .map(|i| {
            let app = app.clone();
            tokio::spawn(async move {
                let response = app
                    .oneshot(shorten_request(&format!("https://example.com/page/{i}")))
                    .await
                    .unwrap();
                assert_eq!(response.status(), StatusCode::OK);
                json_body(response).await["url_id"]
                    .as_str()
                    .unwrap()
                    .to_string()
            })
        })
        .collect();

    let mut ids = HashSet::new();
    for task in tasks {
        ids.insert(task.await.unwrap());
    }

    assert_eq!(ids.len(), REQUESTS);
    assert_eq!(list_all(&app).await.len(), REQUESTS);
}
