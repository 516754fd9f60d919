use rstest::rstest;
use serde_json::json;

use company_search::core::result_projector::{extract_total, project_hit, project_search, total_pages};
use company_search::schema::search_request::SearchRequest;

use crate::support::{hit, search_result};

#[rstest]
#[case(0, 20, 0)]
#[case(41, 20, 3)]
#[case(40, 20, 2)]
#[case(1, 20, 1)]
#[case(100, 100, 1)]
fn total_pages_rounds_up_and_zero_total_means_zero_pages(
    #[case] total: u64,
    #[case] size: u32,
    #[case] expected: u64,
) {
    assert_eq!(total_pages(total, size), expected);
}

#[test]
fn hits_project_in_store_order() {
    let result = search_result(
        2,
        vec![
            hit(json!({
                "id": 7,
                "company_name": "Zeta Bio",
                "founded_date": "2011.03.02",
                "country": "KR",
                "company_type": "Biotech",
                "last_week_stock_price": 12.5,
                "now_stock_price": 13,
                "main_pipeline": [
                    { "drug_name": "ZL-6129", "indication": "Osteoporosis", "stage": "Phase 3" }
                ]
            })),
            hit(json!({ "id": 3, "company_name": "Alpha Pharma" })),
        ],
    );

    let response = project_search(
        &result,
        &SearchRequest {
            page: 1,
            size: 20,
            ..Default::default()
        },
    );

    assert_eq!(response.total, 2);
    assert_eq!(response.total_pages, 1);
    assert_eq!(response.data.len(), 2);
    assert_eq!(response.data[0].company_name, "Zeta Bio");
    assert_eq!(response.data[0].now_stock_price, 13.0);
    assert_eq!(response.data[0].main_pipeline[0].stage, "Phase 3");
    assert_eq!(response.data[1].company_name, "Alpha Pharma");
}

#[test]
fn missing_fields_degrade_to_defaults() {
    let company = project_hit(&hit(json!({ "company_name": "Partial" })));

    assert_eq!(company.id, 0);
    assert_eq!(company.founded_date, None);
    assert_eq!(company.country, "");
    assert_eq!(company.company_type, "");
    assert_eq!(company.last_week_stock_price, 0.0);
    assert_eq!(company.now_stock_price, 0.0);
    assert!(company.main_pipeline.is_empty());
}

#[test]
fn hit_without_source_does_not_fail() {
    let company = project_hit(&json!({ "_id": "1" }));

    assert_eq!(company.company_name, "");
    assert!(company.main_pipeline.is_empty());
}

#[test]
fn empty_pipeline_serializes_as_empty_list() {
    let company = project_hit(&hit(json!({ "id": 1, "company_name": "Empty", "main_pipeline": [] })));
    let serialized = serde_json::to_value(&company).unwrap();

    assert_eq!(serialized["main_pipeline"], json!([]));

    let missing = project_hit(&hit(json!({ "id": 2 })));
    let serialized = serde_json::to_value(&missing).unwrap();
    assert_eq!(serialized["main_pipeline"], json!([]));
    assert!(serialized.get("founded_date").is_none());
}

#[test]
fn pipeline_entry_missing_fields_default_to_empty_strings() {
    let company = project_hit(&hit(json!({
        "main_pipeline": [ { "drug_name": "DX-4259" } ]
    })));

    assert_eq!(company.main_pipeline[0].drug_name, "DX-4259");
    assert_eq!(company.main_pipeline[0].indication, "");
    assert_eq!(company.main_pipeline[0].stage, "");
}

#[test]
fn empty_result_reports_zero_pages() {
    let response = project_search(&json!({}), &SearchRequest::default());

    assert_eq!(response.total, 0);
    assert_eq!(response.total_pages, 0);
    assert!(response.data.is_empty());
    assert_eq!(response.page, 1);
    assert_eq!(response.size, 20);
}

#[test]
fn total_is_read_from_object_or_legacy_number() {
    assert_eq!(extract_total(&json!({ "hits": { "total": { "value": 41 } } })), 41);
    assert_eq!(extract_total(&json!({ "hits": { "total": 12 } })), 12);
    assert_eq!(extract_total(&json!({ "hits": {} })), 0);
}

#[test]
fn response_uses_camel_case_total_pages_key() {
    let response = project_search(&search_result(41, vec![]), &SearchRequest::default());
    let serialized = serde_json::to_value(&response).unwrap();

    assert_eq!(serialized["totalPages"], json!(3));
    assert_eq!(serialized["total"], json!(41));
}
