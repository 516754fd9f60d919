// 목적:
// - 핵심 런타임 계층 모듈을 선언한다.
//
// 설명:
// - 질의 컴파일러/결과 투영기(순수 함수)와 이를 묶는 파이프라인, 공통 오류/설정 모델을 분리한다.
//
// 디자인 패턴:
// - 명시적 오류 모델(Explicit Error Model) + 파이프라인(Pipeline).
//
// 참조:
// - src_rs/core/errors.rs
// - src_rs/core/search_pipeline.rs
// - src_rs/core/aggs_pipeline.rs

pub mod aggs_compiler;
pub mod aggs_pipeline;
pub mod aggs_projector;
pub mod config;
pub mod errors;
pub mod ingestion_pipeline;
pub mod query_compiler;
pub mod result_projector;
pub mod search_pipeline;
