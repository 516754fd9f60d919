// 목적:
// - 검색 요청을 저장소 질의 문서로 컴파일한다.
//
// 설명:
// - 페이지 창(from/size), bool 질의(match + filter), 정렬 조건을 순수 함수로 구성한다.
// - 검색어는 점수에 기여하는 유일한 조건이며 필터는 모두 bool.filter에 들어간다.
// - 파이프라인 필드(drug_name, indication, stage)는 nested 범위로 묶인다.
//
// 디자인 패턴:
// - 순수 컴파일러(Pure Compiler) + 닫힌 열거형 분기(Exhaustive Match).
//
// 참조:
// - src_rs/index/query_dsl.rs
// - src_rs/core/search_pipeline.rs

use crate::index::query_dsl::{
    PipelineField, QueryClause, RootField, ScopedClause, ScopedPredicate, SearchBody, SortClause,
    SortDirection, SortKey,
};
use crate::schema::search_request::{
    FilterSchema, OrderSchema, SearchKeyword, SearchKind, SearchRequest, SortField,
};

/// 검증된 검색 요청을 `_search` 본문으로 변환한다.
pub fn compile_search(request: &SearchRequest) -> SearchBody {
    SearchBody {
        from: Some(page_offset(request.page, request.size)),
        size: u64::from(request.size),
        track_total_hits: true,
        query: build_query(request.filter.as_ref()),
        sort: build_sort(request.orders(), request.keyword().is_some()),
        aggs: Vec::new(),
    }
}

pub fn page_offset(page: u32, size: u32) -> u64 {
    u64::from(page.saturating_sub(1)) * u64::from(size)
}

pub fn build_query(filter: Option<&FilterSchema>) -> QueryClause {
    let Some(filter) = filter else {
        return QueryClause::MatchAll;
    };

    let must = filter
        .search
        .as_ref()
        .and_then(build_keyword_clause)
        .into_iter()
        .collect::<Vec<_>>();
    let filters = build_filter_clauses(filter);

    if must.is_empty() && filters.is_empty() {
        return QueryClause::MatchAll;
    }

    QueryClause::Bool {
        must,
        filter: filters,
    }
}

/// 빈 검색어는 match 절을 만들지 않는다.
pub fn build_keyword_clause(search: &SearchKeyword) -> Option<QueryClause> {
    if search.keyword.is_empty() {
        return None;
    }

    let text = search.keyword.clone();
    let clause = match search.kind {
        SearchKind::CompanyName => QueryClause::Match {
            field: RootField::CompanyName,
            text,
        },
        SearchKind::DrugName => pipeline_match(PipelineField::DrugName, text),
        SearchKind::Indication => pipeline_match(PipelineField::Indication, text),
    };
    Some(clause)
}

fn pipeline_match(field: PipelineField, text: String) -> QueryClause {
    QueryClause::Scoped(ScopedClause::new(ScopedPredicate::Match { field, text }))
}

pub fn build_filter_clauses(filter: &FilterSchema) -> Vec<QueryClause> {
    let mut clauses = Vec::new();

    if !filter.countries().is_empty() {
        clauses.push(QueryClause::Terms {
            field: RootField::Country,
            values: filter.countries().to_vec(),
        });
    }

    if !filter.company_types().is_empty() {
        clauses.push(QueryClause::Terms {
            field: RootField::CompanyType,
            values: filter.company_types().to_vec(),
        });
    }

    if !filter.stages().is_empty() {
        clauses.push(QueryClause::Scoped(ScopedClause::new(
            ScopedPredicate::Terms {
                field: PipelineField::Stage,
                values: filter.stages().to_vec(),
            },
        )));
    }

    clauses
}

/// 정렬 우선순위: 명시 정렬 > 검색어 점수 내림차순 > 회사명 오름차순.
pub fn build_sort(orders: &[OrderSchema], has_search: bool) -> Vec<SortClause> {
    if !orders.is_empty() {
        return orders
            .iter()
            .map(|order| SortClause::new(sort_key(order.sort_by), order.sort_order))
            .collect();
    }

    if has_search {
        return vec![SortClause::new(SortKey::Score, SortDirection::Desc)];
    }

    vec![SortClause::new(SortKey::CompanyNameExact, SortDirection::Asc)]
}

fn sort_key(field: SortField) -> SortKey {
    match field {
        // 토큰화된 text 필드로는 정렬할 수 없다.
        SortField::CompanyName => SortKey::CompanyNameExact,
        SortField::NowStockPrice => SortKey::NowStockPrice,
        SortField::LastWeekStockPrice => SortKey::LastWeekStockPrice,
    }
}
