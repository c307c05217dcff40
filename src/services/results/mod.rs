use std::sync::Arc;
use tracing::debug;

use crate::errors::Result;
use crate::models::results::entities::ExamResult;
use crate::storage::{Record, RecordStore};

/// 成绩服务：只提供列表、查询和创建
#[derive(Clone)]
pub struct ResultService {
    store: Arc<dyn RecordStore<ExamResult>>,
}

impl ResultService {
    pub fn new(store: Arc<dyn RecordStore<ExamResult>>) -> Self {
        Self { store }
    }

    pub async fn list_results(&self) -> Result<Vec<ExamResult>> {
        self.store.find_all().await
    }

    pub async fn get_result(&self, id: i64) -> Result<Option<ExamResult>> {
        self.store.find_by_id(id).await
    }

    pub async fn create_result(&self, result: ExamResult) -> Result<ExamResult> {
        let created = self.store.save(result.with_id(None)).await?;
        debug!("Result created: {:?}", created.id);
        Ok(created)
    }
}
