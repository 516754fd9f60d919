// 목적:
// - 외부 경계(HTTP, Python)와 주고받는 요청/응답 스키마 모듈을 선언한다.
//
// 참조:
// - src_rs/schema/search_request.rs
// - src_rs/schema/search_response.rs
// - src_rs/schema/aggs.rs
// - src_rs/schema/company.rs

pub mod aggs;
pub mod company;
pub mod search_request;
pub mod search_response;
