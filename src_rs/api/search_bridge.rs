// 목적:
// - Python에서 호출 가능한 검색 브릿지 클래스를 제공한다.
//
// 설명:
// - 저장소 설정(JSON)으로 생성하고, 검색 요청 JSON을 받아 Rust 검색 파이프라인을 실행한 뒤
//   결과를 JSON 문자열로 반환한다.
//
// 디자인 패턴:
// - 파사드(Facade) + 실패 빠르게(Fail Fast).
//
// 참조:
// - src_rs/core/search_pipeline.rs

use pyo3::exceptions::PyRuntimeError;
use pyo3::prelude::*;

use crate::api::{build_repository, create_runtime, to_py_err};
use crate::core::search_pipeline::execute_search;
use crate::index::opensearch_repo::OpenSearchRepository;
use crate::schema::search_request::SearchRequest;

/// Python에 노출되는 검색 브릿지 클래스다.
#[pyclass(name = "SearchBridge")]
pub struct PySearchBridge {
    repository: OpenSearchRepository,
}

#[pymethods]
impl PySearchBridge {
    /// 저장소 설정 JSON으로 검색 브릿지 객체를 생성한다.
    #[new]
    pub fn new(config_json: &str) -> PyResult<Self> {
        Ok(Self {
            repository: build_repository(config_json)?,
        })
    }

    /// 검색 요청(JSON)을 실행하고 결과 JSON을 반환한다.
    pub fn execute(&self, request_json: &str) -> PyResult<String> {
        let request: SearchRequest = serde_json::from_str(request_json).map_err(|error| {
            PyRuntimeError::new_err(format!("검색 요청 JSON 파싱에 실패했습니다: {}", error))
        })?;

        let runtime = create_runtime()?;
        let result = runtime
            .block_on(execute_search(
                &self.repository,
                self.repository.index_name(),
                &request,
            ))
            .map_err(to_py_err)?;

        serde_json::to_string(&result)
            .map_err(|error| PyRuntimeError::new_err(format!("검색 결과 직렬화 실패: {}", error)))
    }
}
