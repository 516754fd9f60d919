use serde_json::json;

use company_search::core::errors::CoreError;
use company_search::core::ingestion_pipeline::{execute_ingestion, IngestionRequestPayload};
use company_search::index::mappings::companies_index_body;
use company_search::index::opensearch_repo::summarize_bulk_response;
use company_search::index::wire::to_bulk_ndjson;
use company_search::schema::company::CompanyDocument;

use crate::support::FakeDocumentStore;

fn company(id: i64, founded_date: &str) -> CompanyDocument {
    serde_json::from_value(json!({
        "id": id,
        "company_name": format!("Company {id}"),
        "founded_date": founded_date,
        "country": "KR",
        "company_type": "Biotech",
        "last_week_stock_price": 10.0,
        "now_stock_price": 11.0,
        "main_pipeline": [
            { "drug_name": "ZL-6129", "indication": "Osteoporosis", "stage": "Phase 3" }
        ]
    }))
    .unwrap()
}

#[tokio::test]
async fn create_index_drops_existing_and_recreates() {
    let store = FakeDocumentStore::default();
    *store.index_present.lock().unwrap() = true;

    let result = execute_ingestion(
        &store,
        "companies",
        IngestionRequestPayload {
            operation: "create_index".to_string(),
            companies: vec![],
        },
    )
    .await
    .unwrap();

    assert!(result.acknowledged);
    assert_eq!(*store.deleted.lock().unwrap(), vec!["companies".to_string()]);
    let created = store.created.lock().unwrap();
    assert_eq!(created[0].1, companies_index_body());
}

#[tokio::test]
async fn upsert_indexes_by_id_and_drops_malformed_dates() {
    let store = FakeDocumentStore::default();
    *store.index_present.lock().unwrap() = true;

    let result = execute_ingestion(
        &store,
        "companies",
        IngestionRequestPayload {
            operation: "upsert_companies".to_string(),
            companies: vec![
                company(1, "2011.03.02"),
                company(2, "03/02/2011"),
                company(3, "2011.02.30"),
            ],
        },
    )
    .await
    .unwrap();

    assert_eq!(result.indexed, 3);
    assert_eq!(result.failed, 0);

    let documents = store.bulk_documents.lock().unwrap();
    assert_eq!(documents[0].0, "1");
    assert_eq!(documents[0].1["founded_date"], json!("2011.03.02"));
    assert_eq!(documents[1].0, "2");
    assert!(documents[1].1.get("founded_date").is_none());
    assert!(documents[2].1.get("founded_date").is_none());
    assert_eq!(*store.refreshed.lock().unwrap(), vec!["companies".to_string()]);
}

#[tokio::test]
async fn upsert_without_index_is_rejected_before_bulk() {
    let store = FakeDocumentStore::default();

    let error = execute_ingestion(
        &store,
        "companies",
        IngestionRequestPayload {
            operation: "upsert_companies".to_string(),
            companies: vec![company(1, "2011.03.02")],
        },
    )
    .await
    .unwrap_err();

    assert!(matches!(error, CoreError::InvalidInput(_)));
    assert!(store.bulk_documents.lock().unwrap().is_empty());
    assert!(store.refreshed.lock().unwrap().is_empty());
}

#[tokio::test]
async fn unknown_operation_is_rejected() {
    let store = FakeDocumentStore::default();

    let error = execute_ingestion(
        &store,
        "companies",
        IngestionRequestPayload {
            operation: "reindex".to_string(),
            companies: vec![],
        },
    )
    .await
    .unwrap_err();

    assert!(matches!(error, CoreError::InvalidInput(_)));
}

#[test]
fn pipeline_is_mapped_as_nested_and_name_has_keyword() {
    let body = companies_index_body();
    let properties = &body["mappings"]["properties"];

    assert_eq!(properties["main_pipeline"]["type"], json!("nested"));
    assert_eq!(properties["company_name"]["fields"]["keyword"]["type"], json!("keyword"));
    assert_eq!(properties["founded_date"]["format"], json!("yyyy.MM.dd"));
}

#[test]
fn bulk_body_pairs_action_and_document_lines() {
    let ndjson = to_bulk_ndjson(
        "companies",
        &[("7".to_string(), json!({ "id": 7 }))],
    )
    .unwrap();
    let lines = ndjson.lines().collect::<Vec<_>>();

    assert_eq!(lines.len(), 2);
    assert_eq!(
        serde_json::from_str::<serde_json::Value>(lines[0]).unwrap(),
        json!({ "index": { "_index": "companies", "_id": "7" } })
    );
    assert!(ndjson.ends_with('\n'));
    assert!(to_bulk_ndjson("companies", &[]).is_err());
}

#[test]
fn bulk_summary_counts_item_failures() {
    let response = json!({
        "errors": true,
        "items": [
            { "index": { "_id": "1", "status": 201 } },
            { "index": { "_id": "2", "status": 400, "error": { "type": "mapper_parsing_exception" } } }
        ]
    });

    let summary = summarize_bulk_response(&response, 2);

    assert_eq!(summary.indexed, 1);
    assert_eq!(summary.failed, 1);
}

#[test]
fn bulk_summary_tolerates_failed_item_without_id() {
    let response = json!({
        "errors": true,
        "items": [ { "index": { "status": 400, "error": "rejected" } } ]
    });

    let summary = summarize_bulk_response(&response, 1);

    assert_eq!(summary.indexed, 0);
    assert_eq!(summary.failed, 1);
}
