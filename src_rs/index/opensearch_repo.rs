// 목적:
// - OpenSearch REST API 기반 문서 저장소 구현을 제공한다.
//
// 설명:
// - 검색/건수/인덱스 생성·삭제·리프레시/bulk 적재를 HTTP로 호출한다.
// - 연결 풀은 reqwest::Client가 관리하며 요청 단위 재시도는 하지 않는다.
// - 인덱스 이름은 URL 경로에 들어가므로 호출 시 검증한다.
//
// 디자인 패턴:
// - 저장소 패턴(Repository Pattern) + 어댑터(Adapter).
//
// 참조:
// - src_rs/index/store.rs
// - src_rs/index/wire.rs
// - src_rs/core/config.rs

use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, StatusCode};
use serde_json::Value;

use crate::core::config::OpenSearchConfigPayload;
use crate::core::errors::{CoreError, CoreResult};
use crate::index::store::{BulkIndexSummary, DocumentStore};
use crate::index::wire::{to_bulk_ndjson, validate_index_name};

#[derive(Clone)]
pub struct OpenSearchRepository {
    client: Client,
    config: OpenSearchConfigPayload,
}

impl OpenSearchRepository {
    pub fn new(config: OpenSearchConfigPayload) -> CoreResult<Self> {
        config.validate()?;

        let client = Client::builder()
            .timeout(std::time::Duration::from_millis(config.timeout_ms))
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .build()
            .map_err(|error| CoreError::Store(format!("HTTP 클라이언트 생성 실패: {}", error)))?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &OpenSearchConfigPayload {
        &self.config
    }

    pub fn index_name(&self) -> &str {
        &self.config.index_name
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}/{}", self.config.url.trim_end_matches('/'), path);
        let builder = self.client.request(method, url);
        match self.config.username.as_deref() {
            Some(username) => builder.basic_auth(username, self.config.password.as_deref()),
            None => builder,
        }
    }

    async fn send_json(&self, builder: RequestBuilder, action: &str) -> CoreResult<Value> {
        let response = builder
            .send()
            .await
            .map_err(|error| CoreError::Store(format!("{} 요청 실패: {}", action, error)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|error| CoreError::Store(format!("{} 본문 읽기 실패: {}", action, error)))?;

        if !status.is_success() {
            return Err(CoreError::Store(format!(
                "{} 상태 오류: status={}, body={}",
                action, status, body
            )));
        }

        serde_json::from_str(&body).map_err(|error| {
            CoreError::Serialization(format!("{} 응답 파싱 실패: {}, body={}", action, error, body))
        })
    }
}

#[async_trait]
impl DocumentStore for OpenSearchRepository {
    async fn search(&self, index_name: &str, body: &Value) -> CoreResult<Value> {
        validate_index_name(index_name, "index_name")?;
        let builder = self
            .request(Method::POST, &format!("{}/_search", index_name))
            .json(body);
        self.send_json(builder, "검색").await
    }

    async fn count(&self, index_name: &str) -> CoreResult<u64> {
        validate_index_name(index_name, "index_name")?;
        let builder = self.request(Method::GET, &format!("{}/_count", index_name));
        let result = self.send_json(builder, "문서 수 조회").await?;

        result.get("count").and_then(Value::as_u64).ok_or_else(|| {
            CoreError::Serialization(format!("문서 수 응답에 count가 없습니다: {}", result))
        })
    }

    async fn ping(&self) -> CoreResult<bool> {
        match self.request(Method::HEAD, "").send().await {
            Ok(response) => Ok(response.status().is_success()),
            Err(error) => {
                tracing::debug!(error = %error, "OpenSearch ping 실패");
                Ok(false)
            }
        }
    }

    async fn index_exists(&self, index_name: &str) -> CoreResult<bool> {
        validate_index_name(index_name, "index_name")?;
        let response = self
            .request(Method::HEAD, index_name)
            .send()
            .await
            .map_err(|error| CoreError::Store(format!("인덱스 존재 확인 실패: {}", error)))?;

        match response.status() {
            status if status.is_success() => Ok(true),
            StatusCode::NOT_FOUND => Ok(false),
            status => Err(CoreError::Store(format!(
                "인덱스 존재 확인 상태 오류: status={}",
                status
            ))),
        }
    }

    async fn create_index(&self, index_name: &str, body: &Value) -> CoreResult<Value> {
        validate_index_name(index_name, "index_name")?;
        let builder = self.request(Method::PUT, index_name).json(body);
        self.send_json(builder, "인덱스 생성").await
    }

    async fn delete_index(&self, index_name: &str) -> CoreResult<Value> {
        if !self.index_exists(index_name).await? {
            return Ok(serde_json::json!({
                "acknowledged": true,
                "message": "Index does not exist",
            }));
        }

        let builder = self.request(Method::DELETE, index_name);
        self.send_json(builder, "인덱스 삭제").await
    }

    async fn refresh_index(&self, index_name: &str) -> CoreResult<Value> {
        validate_index_name(index_name, "index_name")?;
        let builder = self.request(Method::POST, &format!("{}/_refresh", index_name));
        self.send_json(builder, "인덱스 리프레시").await
    }

    async fn bulk_index(
        &self,
        index_name: &str,
        documents: &[(String, Value)],
    ) -> CoreResult<BulkIndexSummary> {
        validate_index_name(index_name, "index_name")?;
        if documents.is_empty() {
            return Ok(BulkIndexSummary::default());
        }

        let body = to_bulk_ndjson(index_name, documents)?;
        let builder = self
            .request(Method::POST, "_bulk")
            .header(reqwest::header::CONTENT_TYPE, "application/x-ndjson")
            .body(body);
        let result = self.send_json(builder, "bulk 적재").await?;

        Ok(summarize_bulk_response(&result, documents.len()))
    }
}

/// bulk 응답의 items를 성공/실패 건수로 요약한다.
pub fn summarize_bulk_response(result: &Value, requested: usize) -> BulkIndexSummary {
    let Some(items) = result.get("items").and_then(Value::as_array) else {
        // items가 없으면 errors 플래그만으로 판단한다.
        let failed_all = result.get("errors").and_then(Value::as_bool).unwrap_or(false);
        let requested = requested as u64;
        return if failed_all {
            BulkIndexSummary {
                indexed: 0,
                failed: requested,
            }
        } else {
            BulkIndexSummary {
                indexed: requested,
                failed: 0,
            }
        };
    };

    let mut summary = BulkIndexSummary::default();
    for item in items {
        let outcome = item.get("index").unwrap_or(item);
        if let Some(error) = outcome.get("error") {
            let doc_id = outcome.get("_id").unwrap_or(&Value::Null);
            tracing::warn!(doc_id = %doc_id, error = %error, "bulk 문서 적재 실패");
            summary.failed += 1;
        } else {
            summary.indexed += 1;
        }
    }
    summary
}
