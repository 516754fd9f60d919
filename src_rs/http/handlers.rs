// 목적:
// - 검색/대시보드 HTTP 핸들러를 제공한다.
//
// 설명:
// - 핸들러는 요청을 파이프라인에 넘기고 결과를 JSON으로 돌려주는 얇은 경계다.
// - 입력 검증 실패는 422, 저장소 실패 등 내부 오류는 500과 {"detail": 메시지}로 응답한다.
//
// 참조:
// - src_rs/core/search_pipeline.rs
// - src_rs/core/aggs_pipeline.rs
// - src_rs/http/router.rs

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Extension, Json};
use serde_json::json;

use crate::core::aggs_pipeline::{execute_aggs, execute_total_count};
use crate::core::errors::CoreError;
use crate::core::search_pipeline::execute_search;
use crate::index::store::DocumentStore;
use crate::schema::aggs::{AggsRequest, AggsResponse, TotalCountResponse};
use crate::schema::search_request::SearchRequest;
use crate::schema::search_response::SearchResponse;

/// 핸들러가 공유하는 저장소 핸들이다. 요청 간 가변 상태는 없다.
pub struct AppState {
    pub store: Arc<dyn DocumentStore>,
    pub index_name: String,
}

pub struct ApiError(CoreError);

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        Self(error)
    }
}

/// 본문 역직렬화 실패도 다른 입력 오류와 같은 `{"detail"}` 형태로 응답한다.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self(CoreError::InvalidInput(rejection.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = if self.0.is_client_error() {
            StatusCode::UNPROCESSABLE_ENTITY
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };
        (status, Json(json!({ "detail": self.0.to_string() }))).into_response()
    }
}

pub async fn handle_search_companies(
    Extension(state): Extension<Arc<AppState>>,
    payload: Result<Json<SearchRequest>, JsonRejection>,
) -> Result<Json<SearchResponse>, ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        tracing::warn!(error = %rejection.body_text(), "[검색] 요청 본문 오류");
        ApiError::from(rejection)
    })?;
    tracing::info!(page = request.page, size = request.size, "[검색] 요청");

    match execute_search(state.store.as_ref(), &state.index_name, &request).await {
        Ok(response) => Ok(Json(response)),
        Err(error) => {
            tracing::error!(error = %error, "[검색] 오류");
            Err(error.into())
        }
    }
}

pub async fn handle_total_count(
    Extension(state): Extension<Arc<AppState>>,
) -> Result<Json<TotalCountResponse>, ApiError> {
    match execute_total_count(state.store.as_ref(), &state.index_name).await {
        Ok(response) => Ok(Json(response)),
        Err(error) => {
            tracing::error!(error = %error, "[집계] 전체 회사 수 조회 오류");
            Err(error.into())
        }
    }
}

/// 본문이 비어 있으면 두 집계를 모두 포함한다.
pub async fn handle_aggs(
    Extension(state): Extension<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<AggsResponse>, ApiError> {
    let request = parse_aggs_request(&body)?;

    match execute_aggs(state.store.as_ref(), &state.index_name, &request).await {
        Ok(response) => Ok(Json(response)),
        Err(error) => {
            tracing::error!(error = %error, "[집계] 오류");
            Err(error.into())
        }
    }
}

fn parse_aggs_request(body: &[u8]) -> Result<AggsRequest, CoreError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(AggsRequest::default());
    }

    serde_json::from_slice(body).map_err(|error| {
        CoreError::InvalidInput(format!("집계 요청 JSON 파싱 실패: {}", error))
    })
}

pub async fn handle_health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}
