// 목적:
// - 문서 저장소(OpenSearch) 계층 모듈을 선언한다.
//
// 설명:
// - 저장소 능력 트레이트, REST 구현, 질의 DSL 타입, 인덱스 정의를 분리해 유지보수성을 확보한다.
//
// 디자인 패턴:
// - 저장소 패턴(Repository Pattern).
//
// 참조:
// - src_rs/index/store.rs
// - src_rs/index/opensearch_repo.rs
// - src_rs/index/query_dsl.rs

pub mod fields;
pub mod mappings;
pub mod opensearch_repo;
pub mod query_dsl;
pub mod store;
pub mod wire;
