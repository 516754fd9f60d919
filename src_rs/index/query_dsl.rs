// 목적:
// - 저장소 질의 언어(OpenSearch Query DSL)의 타입 표현을 제공한다.
//
// 설명:
// - 컴파일러는 JSON을 직접 조립하지 않고 이 모듈의 타입으로 질의를 구성한 뒤 to_json으로 변환한다.
// - 파이프라인(nested) 필드는 ScopedClause를 통해서만 만들 수 있다.
//   하나의 ScopedClause는 하나의 조건만 담으므로 서로 다른 파이프라인 항목에 걸친 조건이 생기지 않는다.
//
// 디자인 패턴:
// - 타입 기반 질의 빌더(Typed Query Builder).
//
// 참조:
// - src_rs/core/query_compiler.rs
// - src_rs/core/aggs_compiler.rs

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use crate::index::fields;

/// 최상위(비중첩) 문서 필드다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RootField {
    CompanyName,
    Country,
    CompanyType,
}

impl RootField {
    pub fn as_str(self) -> &'static str {
        match self {
            RootField::CompanyName => fields::COMPANY_NAME,
            RootField::Country => fields::COUNTRY,
            RootField::CompanyType => fields::COMPANY_TYPE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NestedPath {
    MainPipeline,
}

impl NestedPath {
    pub fn as_str(self) -> &'static str {
        match self {
            NestedPath::MainPipeline => fields::MAIN_PIPELINE,
        }
    }
}

/// main_pipeline 하위 필드다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineField {
    DrugName,
    Indication,
    Stage,
}

impl PipelineField {
    pub fn as_str(self) -> &'static str {
        match self {
            PipelineField::DrugName => fields::PIPELINE_DRUG_NAME,
            PipelineField::Indication => fields::PIPELINE_INDICATION,
            PipelineField::Stage => fields::PIPELINE_STAGE,
        }
    }

    pub fn path(self) -> NestedPath {
        NestedPath::MainPipeline
    }
}

/// 중첩 범위 안에서 평가되는 단일 조건이다.
#[derive(Debug, Clone, PartialEq)]
pub enum ScopedPredicate {
    Match { field: PipelineField, text: String },
    Terms { field: PipelineField, values: Vec<String> },
}

impl ScopedPredicate {
    fn field(&self) -> PipelineField {
        match self {
            ScopedPredicate::Match { field, .. } | ScopedPredicate::Terms { field, .. } => *field,
        }
    }

    fn to_json(&self) -> Value {
        match self {
            ScopedPredicate::Match { field, text } => json!({
                "match": { (field.as_str()): text }
            }),
            ScopedPredicate::Terms { field, values } => json!({
                "terms": { (field.as_str()): values }
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScopedClause {
    path: NestedPath,
    inner: ScopedPredicate,
}

impl ScopedClause {
    /// 조건 필드가 속한 중첩 경로로 범위를 고정한다.
    pub fn new(inner: ScopedPredicate) -> Self {
        Self {
            path: inner.field().path(),
            inner,
        }
    }

    pub fn path(&self) -> NestedPath {
        self.path
    }

    pub fn inner(&self) -> &ScopedPredicate {
        &self.inner
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum QueryClause {
    MatchAll,
    Match { field: RootField, text: String },
    Terms { field: RootField, values: Vec<String> },
    Scoped(ScopedClause),
    /// `must`는 점수에 기여하고 `filter`는 점수에 영향이 없다.
    Bool {
        must: Vec<QueryClause>,
        filter: Vec<QueryClause>,
    },
}

impl QueryClause {
    pub fn to_json(&self) -> Value {
        match self {
            QueryClause::MatchAll => json!({ "match_all": {} }),
            QueryClause::Match { field, text } => json!({
                "match": { (field.as_str()): text }
            }),
            QueryClause::Terms { field, values } => json!({
                "terms": { (field.as_str()): values }
            }),
            QueryClause::Scoped(scoped) => json!({
                "nested": {
                    "path": scoped.path.as_str(),
                    "query": scoped.inner.to_json(),
                }
            }),
            QueryClause::Bool { must, filter } => {
                let mut body = Map::new();
                if !must.is_empty() {
                    body.insert(
                        "must".to_string(),
                        Value::Array(must.iter().map(QueryClause::to_json).collect()),
                    );
                }
                if !filter.is_empty() {
                    body.insert(
                        "filter".to_string(),
                        Value::Array(filter.iter().map(QueryClause::to_json).collect()),
                    );
                }
                json!({ "bool": body })
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Score,
    CompanyNameExact,
    NowStockPrice,
    LastWeekStockPrice,
}

impl SortKey {
    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Score => "_score",
            SortKey::CompanyNameExact => fields::COMPANY_NAME_EXACT,
            SortKey::NowStockPrice => fields::NOW_STOCK_PRICE,
            SortKey::LastWeekStockPrice => fields::LAST_WEEK_STOCK_PRICE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortClause {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl SortClause {
    pub fn new(key: SortKey, direction: SortDirection) -> Self {
        Self { key, direction }
    }

    pub fn to_json(&self) -> Value {
        json!({ (self.key.as_str()): { "order": self.direction.as_str() } })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Aggregation {
    Terms {
        field: RootField,
        size: u32,
        sub: Vec<NamedAggregation>,
    },
    Avg {
        field: &'static str,
    },
    DateHistogram {
        field: &'static str,
        calendar_interval: &'static str,
        format: &'static str,
        min_doc_count: u64,
        sub: Vec<NamedAggregation>,
    },
}

/// 이름이 붙은 집계 분기다. 결과 문서의 `aggregations.<name>` 키와 대응한다.
#[derive(Debug, Clone, PartialEq)]
pub struct NamedAggregation {
    pub name: &'static str,
    pub aggregation: Aggregation,
}

impl NamedAggregation {
    pub fn new(name: &'static str, aggregation: Aggregation) -> Self {
        Self { name, aggregation }
    }

    fn body_json(&self) -> Value {
        let (mut body, sub) = match &self.aggregation {
            Aggregation::Terms { field, size, sub } => (
                json!({ "terms": { "field": field.as_str(), "size": size } }),
                sub.as_slice(),
            ),
            Aggregation::Avg { field } => (json!({ "avg": { "field": field } }), &[][..]),
            Aggregation::DateHistogram {
                field,
                calendar_interval,
                format,
                min_doc_count,
                sub,
            } => (
                json!({
                    "date_histogram": {
                        "field": field,
                        "calendar_interval": calendar_interval,
                        "format": format,
                        "min_doc_count": min_doc_count,
                    }
                }),
                sub.as_slice(),
            ),
        };

        if !sub.is_empty() {
            body["aggs"] = aggregations_json(sub);
        }
        body
    }
}

pub fn aggregations_json(aggregations: &[NamedAggregation]) -> Value {
    let mut map = Map::new();
    for aggregation in aggregations {
        map.insert(aggregation.name.to_string(), aggregation.body_json());
    }
    Value::Object(map)
}

/// `_search` 요청 본문 전체다.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchBody {
    pub from: Option<u64>,
    pub size: u64,
    pub track_total_hits: bool,
    pub query: QueryClause,
    pub sort: Vec<SortClause>,
    pub aggs: Vec<NamedAggregation>,
}

impl SearchBody {
    pub fn to_json(&self) -> Value {
        let mut body = json!({
            "size": self.size,
            "track_total_hits": self.track_total_hits,
            "query": self.query.to_json(),
        });

        if let Some(from) = self.from {
            body["from"] = json!(from);
        }

        if !self.sort.is_empty() {
            body["sort"] = Value::Array(self.sort.iter().map(SortClause::to_json).collect());
        }

        if !self.aggs.is_empty() {
            body["aggs"] = aggregations_json(&self.aggs);
        }

        body
    }
}
