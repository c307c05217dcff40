mod update;

use std::sync::Arc;
use tracing::debug;

use super::UpdateOutcome;
use crate::errors::Result;
use crate::models::courses::entities::Course;
use crate::storage::{Record, RecordStore};

#[derive(Clone)]
pub struct CourseService {
    store: Arc<dyn RecordStore<Course>>,
}

impl CourseService {
    pub fn new(store: Arc<dyn RecordStore<Course>>) -> Self {
        Self { store }
    }

    // 获取课程列表
    pub async fn list_courses(&self) -> Result<Vec<Course>> {
        self.store.find_all().await
    }

    // 根据课程 ID 获取课程
    pub async fn get_course(&self, id: i64) -> Result<Option<Course>> {
        self.store.find_by_id(id).await
    }

    // 创建课程，忽略请求体中的 ID
    pub async fn create_course(&self, course: Course) -> Result<Course> {
        let created = self.store.save(course.with_id(None)).await?;
        debug!("Course created: {:?}", created.id);
        Ok(created)
    }

    // 整体替换课程信息
    pub async fn update_course(&self, id: i64, patch: Course) -> Result<UpdateOutcome<Course>> {
        update::update_course(self, id, patch).await
    }

    // 删除课程，不存在时同样视为成功
    pub async fn delete_course(&self, id: i64) -> Result<()> {
        self.store.delete_by_id(id).await?;
        debug!("Course {} deleted", id);
        Ok(())
    }
}
