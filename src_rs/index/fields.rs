// 목적:
// - companies 인덱스의 필드 이름을 한곳에서 관리한다.
//
// 참조:
// - src_rs/index/mappings.rs
// - src_rs/index/query_dsl.rs

pub const COMPANY_ID: &str = "id";
pub const COMPANY_NAME: &str = "company_name";
/// 정렬/정확 일치용 비토큰화 필드다.
pub const COMPANY_NAME_EXACT: &str = "company_name.keyword";
pub const FOUNDED_DATE: &str = "founded_date";
pub const COUNTRY: &str = "country";
pub const COMPANY_TYPE: &str = "company_type";
pub const LAST_WEEK_STOCK_PRICE: &str = "last_week_stock_price";
pub const NOW_STOCK_PRICE: &str = "now_stock_price";

pub const MAIN_PIPELINE: &str = "main_pipeline";
pub const PIPELINE_DRUG_NAME: &str = "main_pipeline.drug_name";
pub const PIPELINE_INDICATION: &str = "main_pipeline.indication";
pub const PIPELINE_STAGE: &str = "main_pipeline.stage";

pub const DRUG_NAME: &str = "drug_name";
pub const INDICATION: &str = "indication";
pub const STAGE: &str = "stage";

pub const FOUNDED_DATE_FORMAT: &str = "yyyy.MM.dd";
/// FOUNDED_DATE_FORMAT과 같은 형식의 chrono 표기다.
pub const FOUNDED_DATE_PARSE_FORMAT: &str = "%Y.%m.%d";
