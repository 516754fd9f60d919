// 목적:
// - 저장소 요청 경계의 공통 유틸리티를 제공한다.
//
// 설명:
// - URL 경로에 들어가는 인덱스 이름 검증, bulk API용 NDJSON 본문 변환을 담당한다.
//
// 디자인 패턴:
// - 가드 함수(Guard Function).
//
// 참조:
// - src_rs/index/opensearch_repo.rs

use serde_json::Value;

use crate::core::errors::{CoreError, CoreResult};

/// 인덱스 이름의 허용 문자를 검증한다.
pub fn validate_index_name(value: &str, field_name: &str) -> CoreResult<()> {
    if value.trim().is_empty() {
        return Err(CoreError::InvalidConfig(format!(
            "{}는 비어 있을 수 없습니다",
            field_name
        )));
    }

    if value.starts_with(['-', '_', '+']) {
        return Err(CoreError::InvalidConfig(format!(
            "{}는 '-', '_', '+'로 시작할 수 없습니다: {}",
            field_name, value
        )));
    }

    let valid = value.chars().all(|ch| {
        ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '_' || ch == '-' || ch == '.'
    });

    if !valid {
        return Err(CoreError::InvalidConfig(format!(
            "{}에는 영문 소문자/숫자/밑줄/하이픈/마침표만 사용할 수 있습니다: {}",
            field_name, value
        )));
    }

    Ok(())
}

/// (문서 ID, 문서) 목록을 bulk index용 NDJSON 문자열로 변환한다.
pub fn to_bulk_ndjson(index_name: &str, documents: &[(String, Value)]) -> CoreResult<String> {
    if documents.is_empty() {
        return Err(CoreError::InvalidInput(
            "bulk 문서는 최소 1개 이상이어야 합니다".to_string(),
        ));
    }

    let mut body = String::new();
    for (doc_id, document) in documents {
        let action = serde_json::json!({
            "index": { "_index": index_name, "_id": doc_id }
        });
        let action_line = serde_json::to_string(&action).map_err(|error| {
            CoreError::Serialization(format!("bulk action 직렬화 실패: {}", error))
        })?;
        let document_line = serde_json::to_string(document).map_err(|error| {
            CoreError::Serialization(format!("bulk 문서 직렬화 실패: id={}, {}", doc_id, error))
        })?;

        body.push_str(&action_line);
        body.push('\n');
        body.push_str(&document_line);
        body.push('\n');
    }

    Ok(body)
}
