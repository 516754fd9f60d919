// 목적:
// - 회사 검색/대시보드 집계 코어 라이브러리의 진입점을 제공한다.
//
// 설명:
// - 검색/집계 요청을 OpenSearch 질의로 컴파일하고, 결과 문서를 API 응답 형태로 투영한다.
// - HTTP 서버(src_rs/bin/server.rs)와 Python 브릿지(`python` 기능)가 같은 파이프라인을 사용한다.
//
// 디자인 패턴:
// - 계층형 모듈 구조(api/http/core/index/schema).
//
// 참조:
// - src_rs/core/search_pipeline.rs
// - src_rs/core/aggs_pipeline.rs

#[cfg(feature = "python")]
pub mod api;
pub mod core;
pub mod http;
pub mod index;
pub mod schema;

#[cfg(feature = "python")]
use pyo3::prelude::*;

#[cfg(feature = "python")]
#[pymodule]
fn _company_search(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<api::search_bridge::PySearchBridge>()?;
    m.add_class::<api::dashboard_bridge::PyDashboardBridge>()?;
    m.add_class::<api::ingestion_bridge::PyIngestionBridge>()?;
    Ok(())
}
