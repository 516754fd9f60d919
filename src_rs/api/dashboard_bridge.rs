// 목적:
// - Python에서 호출 가능한 대시보드 집계 브릿지 클래스를 제공한다.
//
// 참조:
// - src_rs/core/aggs_pipeline.rs

use pyo3::exceptions::PyRuntimeError;
use pyo3::prelude::*;

use crate::api::{build_repository, create_runtime, to_py_err};
use crate::core::aggs_pipeline::{execute_aggs, execute_total_count};
use crate::index::opensearch_repo::OpenSearchRepository;
use crate::schema::aggs::AggsRequest;

#[pyclass(name = "DashboardBridge")]
pub struct PyDashboardBridge {
    repository: OpenSearchRepository,
}

#[pymethods]
impl PyDashboardBridge {
    #[new]
    pub fn new(config_json: &str) -> PyResult<Self> {
        Ok(Self {
            repository: build_repository(config_json)?,
        })
    }

    /// 전체 회사 수 JSON(`{"total": n}`)을 반환한다.
    pub fn total(&self) -> PyResult<String> {
        let runtime = create_runtime()?;
        let result = runtime
            .block_on(execute_total_count(
                &self.repository,
                self.repository.index_name(),
            ))
            .map_err(to_py_err)?;

        serde_json::to_string(&result)
            .map_err(|error| PyRuntimeError::new_err(format!("전체 건수 직렬화 실패: {}", error)))
    }

    /// 집계 요청(JSON)을 실행한다. 빈 문자열이면 두 집계를 모두 포함한다.
    pub fn aggs(&self, request_json: &str) -> PyResult<String> {
        let request = if request_json.trim().is_empty() {
            AggsRequest::default()
        } else {
            serde_json::from_str::<AggsRequest>(request_json).map_err(|error| {
                PyRuntimeError::new_err(format!("집계 요청 JSON 파싱에 실패했습니다: {}", error))
            })?
        };

        let runtime = create_runtime()?;
        let result = runtime
            .block_on(execute_aggs(
                &self.repository,
                self.repository.index_name(),
                &request,
            ))
            .map_err(to_py_err)?;

        serde_json::to_string(&result)
            .map_err(|error| PyRuntimeError::new_err(format!("집계 결과 직렬화 실패: {}", error)))
    }
}
