use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use company_search::http::handlers::AppState;
use company_search::http::router::build_router;

use crate::support::{hit, search_result, FakeDocumentStore};

fn router_with(store: FakeDocumentStore) -> Router {
    build_router(Arc::new(AppState {
        store: Arc::new(store),
        index_name: "companies".to_string(),
    }))
}

async fn send(router: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, body)
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn health_reports_ok() {
    let request = Request::builder().uri("/health").body(Body::empty()).unwrap();

    let (status, body) = send(router_with(FakeDocumentStore::default()), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok" }));
}

#[tokio::test]
async fn search_companies_returns_projected_page() {
    let store = FakeDocumentStore::with_result(search_result(
        1,
        vec![hit(json!({ "id": 1, "company_name": "Alpha", "main_pipeline": [] }))],
    ));

    let (status, body) = send(
        router_with(store),
        post_json(
            "/search/companies",
            json!({
                "page": 1,
                "size": 20,
                "filter": { "search": { "type": "drug_name", "keyword": "ZL" } },
                "order": [ { "sortBy": "now_stock_price", "sortOrder": "desc" } ]
            }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], json!(1));
    assert_eq!(body["totalPages"], json!(1));
    assert_eq!(body["data"][0]["main_pipeline"], json!([]));
}

#[tokio::test]
async fn search_with_out_of_range_size_is_unprocessable() {
    let (status, body) = send(
        router_with(FakeDocumentStore::default()),
        post_json("/search/companies", json!({ "page": 1, "size": 0 })),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["detail"].as_str().is_some());
}

#[tokio::test]
async fn search_with_unknown_sort_field_is_rejected() {
    let (status, body) = send(
        router_with(FakeDocumentStore::default()),
        post_json(
            "/search/companies",
            json!({ "order": [ { "sortBy": "market_cap" } ] }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["detail"]
        .as_str()
        .unwrap_or_default()
        .contains("market_cap"));
}

#[tokio::test]
async fn malformed_search_body_uses_detail_shape() {
    let request = Request::builder()
        .method("POST")
        .uri("/search/companies")
        .header("content-type", "application/json")
        .body(Body::from("{ not json"))
        .unwrap();

    let (status, body) = send(router_with(FakeDocumentStore::default()), request).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["detail"].as_str().is_some());
}

#[tokio::test]
async fn store_failure_maps_to_server_error_with_detail() {
    let (status, body) = send(
        router_with(FakeDocumentStore::failing("cluster unavailable")),
        post_json("/search/companies", json!({})),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["detail"]
        .as_str()
        .unwrap_or_default()
        .contains("cluster unavailable"));
}

#[tokio::test]
async fn dashboard_total_returns_count() {
    let store = FakeDocumentStore {
        count_result: 42,
        ..Default::default()
    };
    let request = Request::builder()
        .uri("/dashboard/total")
        .body(Body::empty())
        .unwrap();

    let (status, body) = send(router_with(store), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "total": 42 }));
}

#[tokio::test]
async fn dashboard_aggs_omits_unrequested_branches() {
    let store = FakeDocumentStore::with_result(search_result(5, vec![]));

    let (status, body) = send(
        router_with(store),
        post_json(
            "/dashboard/aggs",
            json!({ "include_country": false, "include_year": false }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "total": 5 }));
}

#[tokio::test]
async fn dashboard_aggs_with_empty_body_includes_both_branches() {
    let store = FakeDocumentStore::with_result(search_result(0, vec![]));
    let request = Request::builder()
        .method("POST")
        .uri("/dashboard/aggs")
        .body(Body::empty())
        .unwrap();

    let (status, body) = send(router_with(store), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "total": 0, "country_aggs": [], "year_aggs": [] }));
}
