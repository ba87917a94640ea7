use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::app;
use serde_json::{json, Value};
use tower::ServiceExt;

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(String::new())
        .unwrap()
}

// --- records CRUD ---

#[tokio::test]
async fn list_records_starts_empty() {
    let resp = app().oneshot(empty_request("GET", "/records")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let records = body_json(resp).await;
    assert_eq!(records, json!([]));
}

#[tokio::test]
async fn create_record_assigns_id_and_keeps_fields() {
    let resp = app()
        .oneshot(json_request(
            "POST",
            "/records",
            r#"{"title":"Widget","count":2}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let record = body_json(resp).await;
    assert_eq!(record["title"], "Widget");
    assert_eq!(record["count"], 2);
    assert!(record["id"].as_str().is_some());
}

#[tokio::test]
async fn create_record_rejects_non_object_body() {
    let resp = app()
        .oneshot(json_request("POST", "/records", "[1, 2]"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn get_unknown_record_returns_json_error() {
    let resp = app()
        .oneshot(empty_request(
            "GET",
            "/records/00000000-0000-0000-0000-000000000000",
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = body_json(resp).await;
    assert_eq!(body["error"], "not found");
}

#[tokio::test]
async fn update_merges_fields_into_existing_record() {
    let app = app();

    let resp = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/records",
            r#"{"title":"Widget","count":2}"#,
        ))
        .await
        .unwrap();
    let created = body_json(resp).await;
    let id = created["id"].as_str().unwrap().to_string();

    let resp = app
        .oneshot(json_request(
            "PUT",
            &format!("/records/{id}"),
            r#"{"count":9}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let updated = body_json(resp).await;
    assert_eq!(updated["title"], "Widget");
    assert_eq!(updated["count"], 9);
    assert_eq!(updated["id"], json!(id));
}

#[tokio::test]
async fn delete_record_answers_with_deleted_id() {
    let app = app();

    let resp = app
        .clone()
        .oneshot(json_request("POST", "/records", r#"{"title":"Gone"}"#))
        .await
        .unwrap();
    let created = body_json(resp).await;
    let id = created["id"].as_str().unwrap().to_string();

    let resp = app
        .clone()
        .oneshot(empty_request("DELETE", &format!("/records/{id}")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["deleted"], json!(id));

    let resp = app
        .oneshot(empty_request("GET", &format!("/records/{id}")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unknown_route_returns_empty_body() {
    let resp = app().oneshot(empty_request("GET", "/nope")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert!(body_bytes(resp).await.is_empty());
}

// --- echo ---

#[tokio::test]
async fn echo_reflects_method_query_headers_and_body() {
    let resp = app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/echo?a=1&b=2")
                .header(http::header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .header("x-custom", "yes")
                .body("a=1&b=2".to_string())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let reply = body_json(resp).await;
    assert_eq!(reply["method"], "POST");
    assert_eq!(reply["query"], "a=1&b=2");
    assert_eq!(
        reply["headers"]["content-type"],
        "application/x-www-form-urlencoded"
    );
    assert_eq!(reply["headers"]["x-custom"], "yes");
    assert_eq!(reply["body"], "a=1&b=2");
}

#[tokio::test]
async fn echo_answers_get_with_empty_body() {
    let resp = app().oneshot(empty_request("GET", "/echo")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let reply = body_json(resp).await;
    assert_eq!(reply["method"], "GET");
    assert_eq!(reply["query"], "");
    assert_eq!(reply["body"], "");
}
