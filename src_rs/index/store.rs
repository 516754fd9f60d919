// 목적:
// - 코어가 사용하는 문서 저장소 능력(capability)을 정의한다.
//
// 설명:
// - 검색/건수/인덱스 관리만 노출한다. 연결 수명과 재연결 정책은 구현체 책임이다.
// - 코어는 재시도나 백오프를 하지 않는다. 저장소 오류는 CoreError::Store로 그대로 전파된다.
//
// 디자인 패턴:
// - 포트/어댑터(Port & Adapter).
//
// 참조:
// - src_rs/index/opensearch_repo.rs
// - src_rs/core/search_pipeline.rs

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::errors::CoreResult;

/// bulk 적재 결과 요약이다.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkIndexSummary {
    pub indexed: u64,
    pub failed: u64,
}

#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// 질의 문서를 실행하고 원본 결과 문서를 반환한다.
    async fn search(&self, index_name: &str, body: &Value) -> CoreResult<Value>;

    async fn count(&self, index_name: &str) -> CoreResult<u64>;

    async fn ping(&self) -> CoreResult<bool>;

    async fn index_exists(&self, index_name: &str) -> CoreResult<bool>;

    async fn create_index(&self, index_name: &str, body: &Value) -> CoreResult<Value>;

    /// 인덱스가 없으면 아무 작업 없이 acknowledged 응답을 반환한다.
    async fn delete_index(&self, index_name: &str) -> CoreResult<Value>;

    async fn refresh_index(&self, index_name: &str) -> CoreResult<Value>;

    /// (문서 ID, 문서) 목록을 색인한다. 개별 문서 실패는 요약의 failed로 집계된다.
    async fn bulk_index(
        &self,
        index_name: &str,
        documents: &[(String, Value)],
    ) -> CoreResult<BulkIndexSummary>;
}
