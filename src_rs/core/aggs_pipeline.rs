// 목적:
// - 대시보드 집계/전체 건수 파이프라인을 실행한다.
//
// 설명:
// - 집계 컴파일 -> 저장소 검색(size=0) -> 버킷 투영 순서로 처리한다.
// - 전체 건수는 저장소 count 능력을 그대로 사용한다.
//
// 디자인 패턴:
// - 파이프라인(Pipeline).
//
// 참조:
// - src_rs/core/aggs_compiler.rs
// - src_rs/core/aggs_projector.rs

use crate::core::aggs_compiler::compile_aggs;
use crate::core::aggs_projector::project_aggs;
use crate::core::errors::CoreResult;
use crate::index::store::DocumentStore;
use crate::schema::aggs::{AggsRequest, AggsResponse, TotalCountResponse};

pub async fn execute_aggs(
    store: &dyn DocumentStore,
    index_name: &str,
    request: &AggsRequest,
) -> CoreResult<AggsResponse> {
    tracing::info!(
        include_country = request.include_country,
        include_year = request.include_year,
        "집계 요청"
    );

    let body = compile_aggs(request).to_json();
    tracing::debug!(query = %body, "집계 쿼리");

    let result = store.search(index_name, &body).await?;
    let response = project_aggs(&result, request);

    tracing::info!(
        total = response.total,
        countries = ?response.country_aggs.as_ref().map(Vec::len),
        years = ?response.year_aggs.as_ref().map(Vec::len),
        "집계 완료"
    );

    Ok(response)
}

pub async fn execute_total_count(
    store: &dyn DocumentStore,
    index_name: &str,
) -> CoreResult<TotalCountResponse> {
    let total = store.count(index_name).await?;
    tracing::info!(total, "전체 회사 수 조회 완료");
    Ok(TotalCountResponse { total })
}
