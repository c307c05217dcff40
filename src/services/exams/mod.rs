use std::sync::Arc;
use tracing::debug;

use crate::errors::Result;
use crate::models::exams::entities::Exam;
use crate::storage::{Record, RecordStore};

/// 考试服务：只提供列表、查询和创建
#[derive(Clone)]
pub struct ExamService {
    store: Arc<dyn RecordStore<Exam>>,
}

impl ExamService {
    pub fn new(store: Arc<dyn RecordStore<Exam>>) -> Self {
        Self { store }
    }

    pub async fn list_exams(&self) -> Result<Vec<Exam>> {
        self.store.find_all().await
    }

    pub async fn get_exam(&self, id: i64) -> Result<Option<Exam>> {
        self.store.find_by_id(id).await
    }

    pub async fn create_exam(&self, exam: Exam) -> Result<Exam> {
        let created = self.store.save(exam.with_id(None)).await?;
        debug!("Exam created: {:?}", created.id);
        Ok(created)
    }
}
