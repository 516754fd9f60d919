// 목적:
// - 저장소 검색 결과 문서를 검색 응답으로 변환한다.
//
// 설명:
// - hit 순서는 저장소가 정렬한 순서를 그대로 유지한다.
// - 필드 누락은 오류가 아니다. 문자열은 "", 가격은 0.0, id는 0, 파이프라인은 []로 대체한다.
// - total이 0이면 전체 페이지 수도 0이다(1이 아님).
//
// 디자인 패턴:
// - 순수 투영 함수(Pure Projector).
//
// 참조:
// - src_rs/core/search_pipeline.rs
// - src_rs/core/aggs_projector.rs

use serde_json::Value;

use crate::index::fields;
use crate::schema::search_request::SearchRequest;
use crate::schema::search_response::{CompanyData, PipelineInfo, SearchResponse};

pub fn project_search(result: &Value, request: &SearchRequest) -> SearchResponse {
    let total = extract_total(result);
    let data = result
        .pointer("/hits/hits")
        .and_then(Value::as_array)
        .map(|hits| hits.iter().map(project_hit).collect::<Vec<_>>())
        .unwrap_or_default();

    SearchResponse {
        page: request.page,
        size: request.size,
        total_pages: total_pages(total, request.size),
        total,
        data,
    }
}

/// `hits.total.value`를 읽는다. 구버전 저장소의 숫자형 `hits.total`도 허용한다.
pub fn extract_total(result: &Value) -> u64 {
    match result.pointer("/hits/total") {
        Some(Value::Object(total)) => total.get("value").and_then(Value::as_u64).unwrap_or(0),
        Some(Value::Number(total)) => total.as_u64().unwrap_or(0),
        _ => 0,
    }
}

pub fn total_pages(total: u64, size: u32) -> u64 {
    if total == 0 || size == 0 {
        return 0;
    }
    total.div_ceil(u64::from(size))
}

pub fn project_hit(hit: &Value) -> CompanyData {
    let source = hit.get("_source").unwrap_or(&Value::Null);

    let main_pipeline = source
        .get(fields::MAIN_PIPELINE)
        .and_then(Value::as_array)
        .map(|entries| entries.iter().map(project_pipeline).collect::<Vec<_>>())
        .unwrap_or_default();

    CompanyData {
        id: source
            .get(fields::COMPANY_ID)
            .and_then(Value::as_i64)
            .unwrap_or(0),
        company_name: string_field(source, fields::COMPANY_NAME),
        founded_date: source
            .get(fields::FOUNDED_DATE)
            .and_then(Value::as_str)
            .map(str::to_string),
        country: string_field(source, fields::COUNTRY),
        company_type: string_field(source, fields::COMPANY_TYPE),
        last_week_stock_price: float_field(source, fields::LAST_WEEK_STOCK_PRICE),
        now_stock_price: float_field(source, fields::NOW_STOCK_PRICE),
        main_pipeline,
    }
}

fn project_pipeline(entry: &Value) -> PipelineInfo {
    PipelineInfo {
        drug_name: string_field(entry, fields::DRUG_NAME),
        indication: string_field(entry, fields::INDICATION),
        stage: string_field(entry, fields::STAGE),
    }
}

fn string_field(source: &Value, key: &str) -> String {
    source
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn float_field(source: &Value, key: &str) -> f64 {
    source.get(key).and_then(Value::as_f64).unwrap_or(0.0)
}
