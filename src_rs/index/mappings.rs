// 목적:
// - companies 인덱스의 설정(settings)과 매핑(mappings)을 정의한다.
//
// 설명:
// - company_name은 검색용 text와 정렬용 keyword 하위 필드를 함께 가진다.
// - main_pipeline은 nested 타입이다. 항목 단위로 조건을 묶어 평가하려면 반드시 nested여야 한다.
//
// 참조:
// - src_rs/index/fields.rs
// - src_rs/core/ingestion_pipeline.rs

use serde_json::{json, Value};

use crate::index::fields;

pub fn companies_index_body() -> Value {
    json!({
        "settings": companies_settings(),
        "mappings": companies_mappings(),
    })
}

pub fn companies_settings() -> Value {
    json!({
        "number_of_shards": 1,
        "number_of_replicas": 0,
    })
}

pub fn companies_mappings() -> Value {
    json!({
        "properties": {
            (fields::COMPANY_ID): { "type": "long" },
            (fields::COMPANY_NAME): text_with_keyword(),
            (fields::FOUNDED_DATE): {
                "type": "date",
                "format": fields::FOUNDED_DATE_FORMAT,
            },
            (fields::COUNTRY): { "type": "keyword" },
            (fields::COMPANY_TYPE): { "type": "keyword" },
            (fields::LAST_WEEK_STOCK_PRICE): { "type": "double" },
            (fields::NOW_STOCK_PRICE): { "type": "double" },
            (fields::MAIN_PIPELINE): {
                "type": "nested",
                "properties": {
                    (fields::DRUG_NAME): text_with_keyword(),
                    (fields::INDICATION): text_with_keyword(),
                    (fields::STAGE): { "type": "keyword" },
                }
            }
        }
    })
}

fn text_with_keyword() -> Value {
    json!({
        "type": "text",
        "fields": {
            "keyword": { "type": "keyword", "ignore_above": 256 }
        }
    })
}
