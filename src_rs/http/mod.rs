// 목적:
// - HTTP 경계 모듈을 선언한다.
//
// 설명:
// - 라우팅과 핸들러만 담당하며 질의 구성/결과 변환 로직은 core 계층에 둔다.
//
// 참조:
// - src_rs/http/router.rs
// - src_rs/http/handlers.rs

pub mod handlers;
pub mod router;
