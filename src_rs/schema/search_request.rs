// 목적:
// - 회사 검색 요청 스키마를 정의한다.
//
// 설명:
// - 정해진 값 이외의 검색 타입/정렬 필드는 역직렬화 단계에서 거부된다.
// - 페이지/크기 범위 검증은 validate에서 수행한다. 컴파일러는 검증된 요청만 받는다.
//
// 참조:
// - src_rs/core/query_compiler.rs
// - src_rs/http/handlers.rs

use serde::{Deserialize, Serialize};

use crate::core::errors::{CoreError, CoreResult};
pub use crate::index::query_dsl::SortDirection;

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_PAGE_SIZE: u32 = 20;
pub const MAX_PAGE_SIZE: u32 = 100;

/// 일반 검색 대상 종류다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchKind {
    CompanyName,
    DrugName,
    Indication,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchKeyword {
    #[serde(rename = "type")]
    pub kind: SearchKind,
    pub keyword: String,
}

/// 검색 필터. 차원 사이는 AND, 한 차원 안의 값들은 OR로 결합된다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterSchema {
    #[serde(default)]
    pub country: Option<Vec<String>>,
    #[serde(default)]
    pub company_type: Option<Vec<String>>,
    #[serde(default)]
    pub stage: Option<Vec<String>>,
    #[serde(default)]
    pub search: Option<SearchKeyword>,
}

impl FilterSchema {
    pub fn countries(&self) -> &[String] {
        self.country.as_deref().unwrap_or_default()
    }

    pub fn company_types(&self) -> &[String] {
        self.company_type.as_deref().unwrap_or_default()
    }

    pub fn stages(&self) -> &[String] {
        self.stage.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    CompanyName,
    #[serde(alias = "current_stock_price")]
    NowStockPrice,
    LastWeekStockPrice,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderSchema {
    #[serde(rename = "sortBy")]
    pub sort_by: SortField,
    #[serde(rename = "sortOrder", default)]
    pub sort_order: SortDirection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchRequest {
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_page_size")]
    pub size: u32,
    #[serde(default)]
    pub filter: Option<FilterSchema>,
    #[serde(default)]
    pub order: Option<Vec<OrderSchema>>,
}

fn default_page() -> u32 {
    DEFAULT_PAGE
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

impl Default for SearchRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            size: DEFAULT_PAGE_SIZE,
            filter: None,
            order: None,
        }
    }
}

impl SearchRequest {
    pub fn validate(&self) -> CoreResult<()> {
        if self.page < 1 {
            return Err(CoreError::InvalidInput(
                "page는 1 이상이어야 합니다".to_string(),
            ));
        }

        if self.size < 1 || self.size > MAX_PAGE_SIZE {
            return Err(CoreError::InvalidInput(format!(
                "size는 1 이상 {} 이하여야 합니다: {}",
                MAX_PAGE_SIZE, self.size
            )));
        }

        Ok(())
    }

    pub fn keyword(&self) -> Option<&SearchKeyword> {
        self.filter.as_ref().and_then(|filter| filter.search.as_ref())
    }

    pub fn orders(&self) -> &[OrderSchema] {
        self.order.as_deref().unwrap_or_default()
    }
}
