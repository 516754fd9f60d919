// 목적:
// - Python에서 호출 가능한 인덱스 준비/적재 브릿지 클래스를 제공한다.
//
// 설명:
// - 원천 파일 파싱은 Python 쪽에서 끝낸 뒤 구조화된 회사 문서 목록을 넘긴다.
//
// 참조:
// - src_rs/core/ingestion_pipeline.rs

use pyo3::exceptions::PyRuntimeError;
use pyo3::prelude::*;

use crate::api::{build_repository, create_runtime, to_py_err};
use crate::core::ingestion_pipeline::{execute_ingestion, IngestionRequestPayload};
use crate::index::opensearch_repo::OpenSearchRepository;

#[pyclass(name = "IngestionBridge")]
pub struct PyIngestionBridge {
    repository: OpenSearchRepository,
}

#[pymethods]
impl PyIngestionBridge {
    #[new]
    pub fn new(config_json: &str) -> PyResult<Self> {
        Ok(Self {
            repository: build_repository(config_json)?,
        })
    }

    /// 적재 작업 페이로드(JSON)를 실행하고 결과 JSON을 반환한다.
    pub fn execute(&self, payload_json: &str) -> PyResult<String> {
        let payload: IngestionRequestPayload =
            serde_json::from_str(payload_json).map_err(|error| {
                PyRuntimeError::new_err(format!(
                    "적재 페이로드 JSON 파싱에 실패했습니다: {}",
                    error
                ))
            })?;

        let runtime = create_runtime()?;
        let result = runtime
            .block_on(execute_ingestion(
                &self.repository,
                self.repository.index_name(),
                payload,
            ))
            .map_err(to_py_err)?;

        serde_json::to_string(&result)
            .map_err(|error| PyRuntimeError::new_err(format!("적재 결과 직렬화 실패: {}", error)))
    }
}
