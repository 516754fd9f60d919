// 목적:
// - 회사 검색 응답 스키마를 정의한다.
//
// 참조:
// - src_rs/core/result_projector.rs

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineInfo {
    pub drug_name: String,
    pub indication: String,
    pub stage: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyData {
    pub id: i64,
    pub company_name: String,
    /// yyyy.MM.dd
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub founded_date: Option<String>,
    pub country: String,
    pub company_type: String,
    pub last_week_stock_price: f64,
    pub now_stock_price: f64,
    /// 비어 있어도 항상 `[]`로 직렬화된다.
    #[serde(default)]
    pub main_pipeline: Vec<PipelineInfo>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub page: u32,
    pub size: u32,
    #[serde(rename = "totalPages")]
    pub total_pages: u64,
    pub total: u64,
    pub data: Vec<CompanyData>,
}
