// 목적:
// - companies 인덱스에 저장되는 문서 형태를 정의한다.
//
// 설명:
// - 적재 파이프라인 입력으로 사용한다. 원천 파일(엑셀 등) 파싱은 이 크레이트 범위 밖이다.
//
// 참조:
// - src_rs/core/ingestion_pipeline.rs
// - src_rs/index/mappings.rs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::index::fields::FOUNDED_DATE_PARSE_FORMAT;
use crate::schema::search_response::PipelineInfo;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyDocument {
    pub id: i64,
    pub company_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub founded_date: Option<String>,
    pub country: String,
    pub company_type: String,
    pub last_week_stock_price: f64,
    pub now_stock_price: f64,
    #[serde(default)]
    pub main_pipeline: Vec<PipelineInfo>,
}

impl CompanyDocument {
    /// founded_date가 yyyy.MM.dd 형식의 실제 날짜인지 확인한다. 값이 없으면 통과한다.
    pub fn has_valid_founded_date(&self) -> bool {
        let Some(date) = self.founded_date.as_deref() else {
            return true;
        };

        // chrono의 %Y/%m은 자릿수를 강제하지 않으므로 고정 폭은 따로 확인한다.
        let fixed_width = date.len() == 10
            && date.char_indices().all(|(index, ch)| match index {
                4 | 7 => ch == '.',
                _ => ch.is_ascii_digit(),
            });

        fixed_width && NaiveDate::parse_from_str(date, FOUNDED_DATE_PARSE_FORMAT).is_ok()
    }
}
