use rstest::rstest;
use serde_json::json;

use company_search::core::aggs_compiler::{compile_aggs, country_branch, year_branch};
use company_search::schema::aggs::AggsRequest;

#[rstest]
#[case(true, true, &["by_country", "by_founded_year"])]
#[case(true, false, &["by_country"])]
#[case(false, true, &["by_founded_year"])]
#[case(false, false, &[])]
fn toggles_gate_each_branch_independently(
    #[case] include_country: bool,
    #[case] include_year: bool,
    #[case] expected: &[&str],
) {
    let body = compile_aggs(&AggsRequest {
        include_country,
        include_year,
    })
    .to_json();

    let names = body
        .get("aggs")
        .and_then(|aggs| aggs.as_object())
        .map(|aggs| aggs.keys().cloned().collect::<Vec<_>>())
        .unwrap_or_default();
    let mut expected = expected.iter().map(|name| name.to_string()).collect::<Vec<_>>();
    expected.sort();
    let mut names = names;
    names.sort();
    assert_eq!(names, expected);

    assert_eq!(body["size"], json!(0));
    assert_eq!(body["track_total_hits"], json!(true));
    assert_eq!(body["query"], json!({ "match_all": {} }));
    assert!(body.get("sort").is_none());
    assert!(body.get("from").is_none());
}

#[test]
fn country_branch_groups_by_country_with_average_stock() {
    let body = compile_aggs(&AggsRequest {
        include_country: true,
        include_year: false,
    })
    .to_json();

    assert_eq!(
        body["aggs"]["by_country"],
        json!({
            "terms": { "field": "country", "size": 50 },
            "aggs": {
                "avg_last_week_stock": { "avg": { "field": "last_week_stock_price" } }
            }
        })
    );
}

#[test]
fn year_branch_buckets_founded_date_by_calendar_year() {
    let body = compile_aggs(&AggsRequest {
        include_country: false,
        include_year: true,
    })
    .to_json();

    assert_eq!(
        body["aggs"]["by_founded_year"],
        json!({
            "date_histogram": {
                "field": "founded_date",
                "calendar_interval": "year",
                "format": "yyyy",
                "min_doc_count": 1
            },
            "aggs": {
                "company_type_distribution": {
                    "terms": { "field": "company_type", "size": 20 }
                }
            }
        })
    );
}

#[test]
fn stages_return_none_when_not_requested() {
    let request = AggsRequest::total_only();

    assert!(country_branch(&request).is_none());
    assert!(year_branch(&request).is_none());
    assert!(country_branch(&AggsRequest::default()).is_some());
    assert!(year_branch(&AggsRequest::default()).is_some());
}
