// 목적:
// - 대시보드 집계 요청/응답 스키마를 정의한다.
//
// 설명:
// - 요청하지 않은 집계 분기는 None이며 직렬화 시 키 자체가 생략된다.
//   "요청하지 않음"과 "요청했지만 비어 있음([])"을 호출자가 구분할 수 있어야 한다.
//
// 참조:
// - src_rs/core/aggs_compiler.rs
// - src_rs/core/aggs_projector.rs

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggsRequest {
    #[serde(default = "default_include")]
    pub include_country: bool,
    #[serde(default = "default_include")]
    pub include_year: bool,
}

fn default_include() -> bool {
    true
}

impl Default for AggsRequest {
    fn default() -> Self {
        Self {
            include_country: true,
            include_year: true,
        }
    }
}

impl AggsRequest {
    pub fn total_only() -> Self {
        Self {
            include_country: false,
            include_year: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TotalCountResponse {
    pub total: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryAggItem {
    pub country: String,
    pub company_count: u64,
    pub avg_last_week_stock: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyTypeCount {
    pub company_type: String,
    pub company_count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearAggItem {
    pub year: i32,
    pub company_count: u64,
    pub company_type_distribution: Vec<CompanyTypeCount>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggsResponse {
    pub total: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_aggs: Option<Vec<CountryAggItem>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year_aggs: Option<Vec<YearAggItem>>,
}
