// 목적:
// - 저장소 집계 버킷을 대시보드 집계 응답으로 접는다.
//
// 설명:
// - total 추출은 검색 응답 변환과 같은 경로(extract_total)를 사용한다.
// - 요청하지 않은 분기는 None, 요청했지만 버킷이 없으면 빈 목록이다.
// - 평균값이 없는 국가 버킷(집계 대상 필드 부재)은 0.0으로 대체한다.
//
// 디자인 패턴:
// - 순수 투영 함수(Pure Projector).
//
// 참조:
// - src_rs/core/aggs_compiler.rs
// - src_rs/core/result_projector.rs

use serde_json::Value;

use crate::core::aggs_compiler::{
    COUNTRY_AVG_STOCK, COUNTRY_BRANCH, YEAR_BRANCH, YEAR_TYPE_DISTRIBUTION,
};
use crate::core::result_projector::extract_total;
use crate::schema::aggs::{AggsRequest, AggsResponse, CompanyTypeCount, CountryAggItem, YearAggItem};

pub fn project_aggs(result: &Value, request: &AggsRequest) -> AggsResponse {
    AggsResponse {
        total: extract_total(result),
        country_aggs: request
            .include_country
            .then(|| project_country_buckets(branch_buckets(result, COUNTRY_BRANCH))),
        year_aggs: request
            .include_year
            .then(|| project_year_buckets(branch_buckets(result, YEAR_BRANCH))),
    }
}

fn branch_buckets<'a>(result: &'a Value, branch: &str) -> &'a [Value] {
    result
        .get("aggregations")
        .and_then(|aggregations| aggregations.get(branch))
        .map(buckets_of)
        .unwrap_or_default()
}

fn buckets_of(aggregation: &Value) -> &[Value] {
    aggregation
        .get("buckets")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default()
}

pub fn project_country_buckets(buckets: &[Value]) -> Vec<CountryAggItem> {
    buckets
        .iter()
        .map(|bucket| {
            let avg_last_week_stock = bucket
                .get(COUNTRY_AVG_STOCK)
                .and_then(|avg| avg.get("value"))
                .and_then(Value::as_f64)
                .map(round2)
                .unwrap_or(0.0);

            CountryAggItem {
                country: bucket_key(bucket),
                company_count: doc_count(bucket),
                avg_last_week_stock,
            }
        })
        .collect()
}

/// 연도를 해석할 수 없는 버킷은 건너뛴다.
pub fn project_year_buckets(buckets: &[Value]) -> Vec<YearAggItem> {
    buckets
        .iter()
        .filter_map(|bucket| {
            let Some(year) = bucket_year(bucket) else {
                tracing::warn!(bucket = %bucket, "연도 버킷의 key_as_string을 해석할 수 없어 건너뜁니다");
                return None;
            };

            let company_type_distribution = bucket
                .get(YEAR_TYPE_DISTRIBUTION)
                .map(buckets_of)
                .unwrap_or_default()
                .iter()
                .map(|type_bucket| CompanyTypeCount {
                    company_type: bucket_key(type_bucket),
                    company_count: doc_count(type_bucket),
                })
                .collect();

            Some(YearAggItem {
                year,
                company_count: doc_count(bucket),
                company_type_distribution,
            })
        })
        .collect()
}

fn bucket_year(bucket: &Value) -> Option<i32> {
    bucket
        .get("key_as_string")
        .and_then(Value::as_str)
        .and_then(|raw| raw.trim().parse::<i32>().ok())
}

fn bucket_key(bucket: &Value) -> String {
    match bucket.get("key") {
        Some(Value::String(key)) => key.clone(),
        Some(Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    }
}

fn doc_count(bucket: &Value) -> u64 {
    bucket.get("doc_count").and_then(Value::as_u64).unwrap_or(0)
}

/// 소수점 둘째 자리로 반올림한다.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
