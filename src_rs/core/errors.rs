// 목적:
// - Rust 코어 계층의 표준 오류 타입을 정의한다.
//
// 설명:
// - 입력/설정/저장소/직렬화 오류를 명시적으로 구분해 경계 계층(HTTP, Python)에 전달한다.
// - 결과 문서의 필드 누락은 오류가 아니며 투영 단계에서 기본값으로 대체된다.
//
// 디자인 패턴:
// - 도메인 오류 열거형(Domain Error Enum).
//
// 참조:
// - src_rs/core/search_pipeline.rs
// - src_rs/core/aggs_pipeline.rs
// - src_rs/http/handlers.rs

use thiserror::Error;

/// 코어 계층에서 공통으로 사용하는 오류 열거형이다.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("입력값이 유효하지 않습니다: {0}")]
    InvalidInput(String),
    #[error("설정값이 유효하지 않습니다: {0}")]
    InvalidConfig(String),
    #[error("문서 저장소 호출에 실패했습니다: {0}")]
    Store(String),
    #[error("직렬화/역직렬화에 실패했습니다: {0}")]
    Serialization(String),
    #[error("런타임 처리 중 오류가 발생했습니다: {0}")]
    Runtime(String),
}

impl CoreError {
    /// 호출자 입력 문제인지 여부를 반환한다.
    pub fn is_client_error(&self) -> bool {
        matches!(self, CoreError::InvalidInput(_))
    }
}

pub type CoreResult<T> = Result<T, CoreError>;
