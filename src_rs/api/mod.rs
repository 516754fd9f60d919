// 목적:
// - Python FFI 경계 모듈을 선언한다.
//
// 설명:
// - 검색/대시보드/적재 브릿지를 분리해 Python 계층에서 세 클래스로 사용할 수 있게 한다.
// - 브릿지 공통의 런타임 생성, 저장소 구성, 오류 변환을 제공한다.
//
// 디자인 패턴:
// - 모듈 분리(Module Separation).
//
// 참조:
// - src_rs/api/search_bridge.rs
// - src_rs/api/dashboard_bridge.rs
// - src_rs/api/ingestion_bridge.rs

use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::PyErr;
use tokio::runtime::{Builder, Runtime};

use crate::core::config::OpenSearchConfigPayload;
use crate::core::errors::CoreError;
use crate::index::opensearch_repo::OpenSearchRepository;

pub mod dashboard_bridge;
pub mod ingestion_bridge;
pub mod search_bridge;

fn create_runtime() -> Result<Runtime, PyErr> {
    Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|error| to_py_err(CoreError::Runtime(format!("Tokio 런타임 생성 실패: {}", error))))
}

fn build_repository(config_json: &str) -> Result<OpenSearchRepository, PyErr> {
    let config: OpenSearchConfigPayload = serde_json::from_str(config_json).map_err(|error| {
        PyValueError::new_err(format!("저장소 설정 JSON 파싱에 실패했습니다: {}", error))
    })?;
    OpenSearchRepository::new(config).map_err(to_py_err)
}

fn to_py_err(error: CoreError) -> PyErr {
    match error {
        CoreError::InvalidInput(_) | CoreError::InvalidConfig(_) => {
            PyValueError::new_err(error.to_string())
        }
        _ => PyRuntimeError::new_err(error.to_string()),
    }
}
