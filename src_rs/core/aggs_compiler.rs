// 목적:
// - 대시보드 집계 요청을 size=0 집계 질의로 컴파일한다.
//
// 설명:
// - 국가별/연도별 분기는 각각 독립적인 선택 단계이며 하나의 질의로 합쳐진다.
// - 대시보드 집계는 필터 없이 match_all로 실행하고 항상 정확한 total을 요청한다.
// - 버킷 상한(국가 50, 회사 분류 20)을 넘는 값은 잘려 나간다. 요약 화면 용도이므로 페이지네이션하지 않는다.
//
// 디자인 패턴:
// - 선택적 단계 합성(Optional Stage Composition).
//
// 참조:
// - src_rs/index/query_dsl.rs
// - src_rs/core/aggs_projector.rs

use crate::index::fields;
use crate::index::query_dsl::{Aggregation, NamedAggregation, QueryClause, RootField, SearchBody};
use crate::schema::aggs::AggsRequest;

pub const COUNTRY_BRANCH: &str = "by_country";
pub const COUNTRY_AVG_STOCK: &str = "avg_last_week_stock";
pub const YEAR_BRANCH: &str = "by_founded_year";
pub const YEAR_TYPE_DISTRIBUTION: &str = "company_type_distribution";

pub const COUNTRY_BUCKET_CAP: u32 = 50;
pub const COMPANY_TYPE_BUCKET_CAP: u32 = 20;

type BranchStage = fn(&AggsRequest) -> Option<NamedAggregation>;

const BRANCH_STAGES: [BranchStage; 2] = [country_branch, year_branch];

pub fn compile_aggs(request: &AggsRequest) -> SearchBody {
    SearchBody {
        from: None,
        size: 0,
        track_total_hits: true,
        query: QueryClause::MatchAll,
        sort: Vec::new(),
        aggs: BRANCH_STAGES
            .iter()
            .filter_map(|stage| stage(request))
            .collect(),
    }
}

pub fn country_branch(request: &AggsRequest) -> Option<NamedAggregation> {
    if !request.include_country {
        return None;
    }

    Some(NamedAggregation::new(
        COUNTRY_BRANCH,
        Aggregation::Terms {
            field: RootField::Country,
            size: COUNTRY_BUCKET_CAP,
            sub: vec![NamedAggregation::new(
                COUNTRY_AVG_STOCK,
                Aggregation::Avg {
                    field: fields::LAST_WEEK_STOCK_PRICE,
                },
            )],
        },
    ))
}

pub fn year_branch(request: &AggsRequest) -> Option<NamedAggregation> {
    if !request.include_year {
        return None;
    }

    Some(NamedAggregation::new(
        YEAR_BRANCH,
        Aggregation::DateHistogram {
            field: fields::FOUNDED_DATE,
            calendar_interval: "year",
            format: "yyyy",
            min_doc_count: 1,
            sub: vec![NamedAggregation::new(
                YEAR_TYPE_DISTRIBUTION,
                Aggregation::Terms {
                    field: RootField::CompanyType,
                    size: COMPANY_TYPE_BUCKET_CAP,
                    sub: Vec::new(),
                },
            )],
        },
    ))
}
