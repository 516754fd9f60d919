// 목적:
// - HTTP 라우터를 구성한다.
//
// 참조:
// - src_rs/http/handlers.rs
// - src_rs/bin/server.rs

use std::sync::Arc;

use axum::routing::{get, post};
use axum::{Extension, Router};

use crate::http::handlers::{
    handle_aggs, handle_health, handle_search_companies, handle_total_count, AppState,
};

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/search/companies", post(handle_search_companies))
        .route("/dashboard/total", get(handle_total_count))
        .route("/dashboard/aggs", post(handle_aggs))
        .route("/health", get(handle_health))
        .layer(Extension(state))
}
