use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{json, Value};

use company_search::core::errors::{CoreError, CoreResult};
use company_search::index::store::{BulkIndexSummary, DocumentStore};

/// 호출된 질의를 기록하고 미리 정한 결과를 돌려주는 메모리 저장소다.
#[derive(Default)]
pub struct FakeDocumentStore {
    pub search_result: Value,
    pub count_result: u64,
    pub failure: Option<String>,
    pub index_present: Mutex<bool>,
    pub searches: Mutex<Vec<(String, Value)>>,
    pub created: Mutex<Vec<(String, Value)>>,
    pub deleted: Mutex<Vec<String>>,
    pub refreshed: Mutex<Vec<String>>,
    pub bulk_documents: Mutex<Vec<(String, Value)>>,
}

impl FakeDocumentStore {
    pub fn with_result(search_result: Value) -> Self {
        Self {
            search_result,
            ..Default::default()
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            failure: Some(message.to_string()),
            ..Default::default()
        }
    }

    pub fn last_search(&self) -> (String, Value) {
        self.searches
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("search가 호출되지 않았습니다")
    }

    fn check_failure(&self) -> CoreResult<()> {
        match &self.failure {
            Some(message) => Err(CoreError::Store(message.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl DocumentStore for FakeDocumentStore {
    async fn search(&self, index_name: &str, body: &Value) -> CoreResult<Value> {
        self.searches
            .lock()
            .unwrap()
            .push((index_name.to_string(), body.clone()));
        self.check_failure()?;
        Ok(self.search_result.clone())
    }

    async fn count(&self, _index_name: &str) -> CoreResult<u64> {
        self.check_failure()?;
        Ok(self.count_result)
    }

    async fn ping(&self) -> CoreResult<bool> {
        Ok(self.failure.is_none())
    }

    async fn index_exists(&self, _index_name: &str) -> CoreResult<bool> {
        self.check_failure()?;
        Ok(*self.index_present.lock().unwrap())
    }

    async fn create_index(&self, index_name: &str, body: &Value) -> CoreResult<Value> {
        self.check_failure()?;
        self.created
            .lock()
            .unwrap()
            .push((index_name.to_string(), body.clone()));
        *self.index_present.lock().unwrap() = true;
        Ok(json!({ "acknowledged": true, "index": index_name }))
    }

    async fn delete_index(&self, index_name: &str) -> CoreResult<Value> {
        self.check_failure()?;
        self.deleted.lock().unwrap().push(index_name.to_string());
        *self.index_present.lock().unwrap() = false;
        Ok(json!({ "acknowledged": true }))
    }

    async fn refresh_index(&self, index_name: &str) -> CoreResult<Value> {
        self.check_failure()?;
        self.refreshed.lock().unwrap().push(index_name.to_string());
        Ok(json!({ "_shards": { "failed": 0 } }))
    }

    async fn bulk_index(
        &self,
        _index_name: &str,
        documents: &[(String, Value)],
    ) -> CoreResult<BulkIndexSummary> {
        self.check_failure()?;
        self.bulk_documents
            .lock()
            .unwrap()
            .extend(documents.iter().cloned());
        Ok(BulkIndexSummary {
            indexed: documents.len() as u64,
            failed: 0,
        })
    }
}

pub fn hit(source: Value) -> Value {
    json!({ "_index": "companies", "_score": 1.0, "_source": source })
}

pub fn search_result(total: u64, hits: Vec<Value>) -> Value {
    json!({
        "took": 3,
        "timed_out": false,
        "hits": {
            "total": { "value": total, "relation": "eq" },
            "hits": hits,
        }
    })
}
