// 목적:
// - companies 인덱스 준비와 문서 적재 파이프라인을 실행한다.
//
// 설명:
// - create_index: 기존 인덱스를 삭제하고 설정/매핑으로 다시 만든다.
// - upsert_companies: 회사 문서를 id 기준으로 bulk 색인한 뒤 리프레시한다. 인덱스가 없으면 거부한다.
// - delete_index: 인덱스를 삭제한다(없으면 아무 작업도 하지 않는다).
// - 개별 문서 적재 실패는 배치를 중단하지 않고 failed 건수로 보고한다.
//
// 디자인 패턴:
// - 명령 패턴(Command) 기반 분기.
//
// 참조:
// - src_rs/index/store.rs
// - src_rs/index/mappings.rs

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::errors::{CoreError, CoreResult};
use crate::index::mappings::companies_index_body;
use crate::index::store::DocumentStore;
use crate::schema::company::CompanyDocument;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngestionRequestPayload {
    pub operation: String,
    #[serde(default)]
    pub companies: Vec<CompanyDocument>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IngestionResultPayload {
    pub operation: String,
    pub acknowledged: bool,
    pub indexed: u64,
    pub failed: u64,
}

/// 적재 파이프라인을 실행한다.
pub async fn execute_ingestion(
    store: &dyn DocumentStore,
    index_name: &str,
    payload: IngestionRequestPayload,
) -> CoreResult<IngestionResultPayload> {
    if payload.operation.trim().is_empty() {
        return Err(CoreError::InvalidInput(
            "operation은 비어 있을 수 없습니다".to_string(),
        ));
    }

    match payload.operation.as_str() {
        "create_index" => {
            if store.index_exists(index_name).await? {
                store.delete_index(index_name).await?;
                tracing::info!(index_name, "기존 인덱스 삭제");
            }

            let result = store
                .create_index(index_name, &companies_index_body())
                .await?;
            tracing::info!(index_name, "인덱스 생성 완료");

            Ok(IngestionResultPayload {
                operation: payload.operation,
                acknowledged: is_acknowledged(&result),
                ..Default::default()
            })
        }
        "upsert_companies" => {
            // 인덱스가 없으면 동적 매핑으로 자동 생성되어 main_pipeline이 nested가 아니게 된다.
            if !store.index_exists(index_name).await? {
                return Err(CoreError::InvalidInput(format!(
                    "인덱스가 존재하지 않습니다. create_index를 먼저 실행하세요: {}",
                    index_name
                )));
            }

            let documents = payload
                .companies
                .iter()
                .map(to_store_document)
                .collect::<CoreResult<Vec<_>>>()?;

            let summary = store.bulk_index(index_name, &documents).await?;
            if !documents.is_empty() {
                store.refresh_index(index_name).await?;
            }
            tracing::info!(
                index_name,
                indexed = summary.indexed,
                failed = summary.failed,
                "회사 문서 적재 완료"
            );

            Ok(IngestionResultPayload {
                operation: payload.operation,
                acknowledged: summary.failed == 0,
                indexed: summary.indexed,
                failed: summary.failed,
            })
        }
        "delete_index" => {
            let result = store.delete_index(index_name).await?;
            tracing::info!(index_name, "인덱스 삭제 완료");

            Ok(IngestionResultPayload {
                operation: payload.operation,
                acknowledged: is_acknowledged(&result),
                ..Default::default()
            })
        }
        _ => Err(CoreError::InvalidInput(format!(
            "지원하지 않는 operation입니다: {}",
            payload.operation
        ))),
    }
}

/// 형식이 잘못된 설립일은 경고 후 제외하고 나머지 필드는 그대로 적재한다.
fn to_store_document(company: &CompanyDocument) -> CoreResult<(String, Value)> {
    let mut document = company.clone();
    if !document.has_valid_founded_date() {
        tracing::warn!(
            id = document.id,
            founded_date = ?document.founded_date,
            "설립일 형식 오류(yyyy.MM.dd)로 founded_date를 제외합니다"
        );
        document.founded_date = None;
    }

    let value = serde_json::to_value(&document).map_err(|error| {
        CoreError::Serialization(format!("회사 문서 직렬화 실패: id={}, {}", document.id, error))
    })?;
    Ok((document.id.to_string(), value))
}

fn is_acknowledged(result: &Value) -> bool {
    result
        .get("acknowledged")
        .and_then(Value::as_bool)
        .unwrap_or(false)
}
