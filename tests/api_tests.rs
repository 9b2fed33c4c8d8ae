use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::{json, Value};

use video_search::api::{create_router, AppState};
use video_search::middleware::request_id::REQUEST_ID_HEADER;
use video_search::models::{Catalog, VideoRecord};

fn catalog_from(records: Value) -> Catalog {
    let records: Vec<VideoRecord> = serde_json::from_value(records).unwrap();
    Catalog::new(records)
}

fn sample_catalog() -> Catalog {
    catalog_from(json!([
        {
            "id": 1,
            "title": "Action Hero",
            "overview": "A hero fights",
            "genre_ids": [1, 2],
            "vote_average": 7.5
        },
        {
            "id": 2,
            "title": "Drama Night",
            "overview": "A quiet evening",
            "genre_ids": [3]
        }
    ]))
}

fn create_test_server(catalog: Catalog) -> TestServer {
    let app = create_router(AppState::new(catalog));
    TestServer::new(app).unwrap()
}

fn titles(response: &axum_test::TestResponse) -> Vec<String> {
    let records: Vec<Value> = response.json();
    records
        .iter()
        .map(|r| r["title"].as_str().unwrap_or_default().to_string())
        .collect()
}

#[tokio::test]
async fn test_health_check() {
    let server = create_test_server(sample_catalog());
    let response = server.get("/health").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["catalog_size"], 2);
}

#[tokio::test]
async fn test_search_without_params_returns_full_catalog() {
    let server = create_test_server(sample_catalog());
    let response = server.get("/search").await;
    response.assert_status_ok();
    assert_eq!(titles(&response), vec!["Action Hero", "Drama Night"]);
}

#[tokio::test]
async fn test_records_are_returned_unchanged() {
    let server = create_test_server(sample_catalog());
    let response = server.get("/search").add_query_param("title", "hero").await;
    response.assert_status_ok();
    response.assert_json(&json!([
        {
            "id": 1,
            "title": "Action Hero",
            "overview": "A hero fights",
            "genre_ids": [1, 2],
            "vote_average": 7.5
        }
    ]));
}

#[tokio::test]
async fn test_search_by_title() {
    let server = create_test_server(sample_catalog());
    let response = server.get("/search").add_query_param("title", "hero").await;
    response.assert_status_ok();
    assert_eq!(titles(&response), vec!["Action Hero"]);
}

#[tokio::test]
async fn test_search_by_title_is_case_insensitive() {
    let server = create_test_server(sample_catalog());
    let response = server.get("/search").add_query_param("title", "ACTION").await;
    response.assert_status_ok();
    assert_eq!(titles(&response), vec!["Action Hero"]);
}

#[tokio::test]
async fn test_search_by_genre() {
    let server = create_test_server(sample_catalog());
    let response = server.get("/search").add_query_param("genre_ids", 3).await;
    response.assert_status_ok();
    assert_eq!(titles(&response), vec!["Drama Night"]);
}

#[tokio::test]
async fn test_search_with_repeated_genre_ids() {
    let server = create_test_server(sample_catalog());
    let response = server
        .get("/search")
        .add_query_params(&[("genre_ids", "2"), ("genre_ids", "3")])
        .await;
    response.assert_status_ok();
    assert_eq!(titles(&response), vec!["Action Hero", "Drama Night"]);
}

#[tokio::test]
async fn test_filters_are_combined_as_union() {
    let server = create_test_server(sample_catalog());
    let response = server
        .get("/search")
        .add_query_params(&[("description", "evening"), ("genre_ids", "1")])
        .await;
    response.assert_status_ok();
    assert_eq!(titles(&response), vec!["Action Hero", "Drama Night"]);
}

#[tokio::test]
async fn test_empty_title_matches_nothing() {
    let server = create_test_server(sample_catalog());
    let response = server.get("/search").add_query_param("title", "").await;
    response.assert_status_ok();
    assert!(titles(&response).is_empty());
}

#[tokio::test]
async fn test_unknown_param_matches_nothing() {
    let server = create_test_server(sample_catalog());
    let response = server.get("/search").add_query_param("page", 2).await;
    response.assert_status_ok();
    response.assert_json(&json!([]));
}

#[tokio::test]
async fn test_invalid_genre_id_is_bad_request() {
    let server = create_test_server(sample_catalog());
    let response = server
        .get("/search")
        .add_query_params(&[("title", "hero"), ("genre_ids", "x")])
        .expect_failure()
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let body: Value = response.json();
    let message = body["error"].as_str().unwrap();
    assert!(message.contains("genre_ids"));
    assert!(message.contains("'x'"));
}

#[tokio::test]
async fn test_empty_catalog() {
    let server = create_test_server(Catalog::default());
    let response = server.get("/search").await;
    response.assert_status_ok();
    response.assert_json(&json!([]));
}

#[tokio::test]
async fn test_response_carries_request_id() {
    let server = create_test_server(sample_catalog());
    let response = server.get("/search").await;
    let header = response.header(REQUEST_ID_HEADER);
    assert!(uuid::Uuid::parse_str(header.to_str().unwrap()).is_ok());
}

#[tokio::test]
async fn test_incoming_request_id_is_echoed() {
    let server = create_test_server(sample_catalog());
    let id = uuid::Uuid::new_v4().to_string();
    let response = server
        .get("/health")
        .add_header(
            REQUEST_ID_HEADER.parse::<axum::http::HeaderName>().unwrap(),
            id.parse::<axum::http::HeaderValue>().unwrap(),
        )
        .await;
    assert_eq!(response.header(REQUEST_ID_HEADER).to_str().unwrap(), id);
}

#[tokio::test]
async fn test_null_fields_are_returned_as_null() {
    let raw = json!([{ "id": 1, "title": "Heat", "overview": null, "genre_ids": [80] }]);
    let server = create_test_server(catalog_from(raw.clone()));
    let response = server.get("/search").await;
    response.assert_status_ok();
    response.assert_json(&raw);
}

#[tokio::test]
async fn test_out_of_range_genre_id_is_not_an_error() {
    let server = create_test_server(catalog_from(json!([
        { "id": 1, "title": "Heat", "overview": "A crime saga in Los Angeles", "genre_ids": [80] },
        { "id": 2, "title": "Up", "overview": "A balloon adventure", "genre_ids": [16] }
    ])));
    let response = server
        .get("/search")
        .add_query_params(&[("genre_ids", "99999999999999999999"), ("description", "crime")])
        .await;
    response.assert_status_ok();
    assert_eq!(titles(&response), vec!["Heat"]);
}
