// 목적:
// - 회사 검색 작업의 핵심 파이프라인을 실행한다.
//
// 설명:
// - 요청 검증 -> 질의 컴파일 -> 저장소 검색 -> 응답 투영 순서로 처리한다.
// - 저장소 오류는 부분 결과 없이 그대로 호출자에게 전파한다.
//
// 디자인 패턴:
// - 파이프라인(Pipeline).
//
// 참조:
// - src_rs/core/query_compiler.rs
// - src_rs/core/result_projector.rs
// - src_rs/index/store.rs

use std::time::Instant;

use crate::core::errors::CoreResult;
use crate::core::query_compiler::compile_search;
use crate::core::result_projector::project_search;
use crate::index::store::DocumentStore;
use crate::schema::search_request::SearchRequest;
use crate::schema::search_response::SearchResponse;

/// 검색 파이프라인을 실행한다.
pub async fn execute_search(
    store: &dyn DocumentStore,
    index_name: &str,
    request: &SearchRequest,
) -> CoreResult<SearchResponse> {
    request.validate()?;

    let started = Instant::now();
    if let Some(search) = request.keyword() {
        tracing::info!(kind = ?search.kind, keyword = %search.keyword, "검색어 조건");
    }

    let body = compile_search(request).to_json();
    tracing::debug!(query = %body, "검색 쿼리");

    let result = store.search(index_name, &body).await?;
    let response = project_search(&result, request);

    tracing::info!(
        page = request.page,
        size = request.size,
        total = response.total,
        returned = response.data.len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "검색 완료"
    );

    Ok(response)
}
