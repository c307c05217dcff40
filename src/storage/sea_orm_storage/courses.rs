//! 课程存储操作

use super::SeaOrmStorage;
use crate::entity::courses::Column;
use crate::entity::prelude::{CourseActiveModel, Courses};
use crate::errors::{AcademyError, Result};
use crate::models::courses::entities::Course;
use crate::storage::RecordStore;
use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DbErr, EntityTrait, NotSet, QueryOrder, Set};

#[async_trait]
impl RecordStore<Course> for SeaOrmStorage {
    async fn find_all(&self) -> Result<Vec<Course>> {
        let rows = Courses::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| AcademyError::database_operation(format!("查询课程列表失败: {e}")))?;

        Ok(rows.into_iter().map(|m| m.into_course()).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Course>> {
        let result = Courses::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| AcademyError::database_operation(format!("查询课程失败: {e}")))?;

        Ok(result.map(|m| m.into_course()))
    }

    async fn save(&self, course: Course) -> Result<Course> {
        // ID 不存在时按新记录插入
        let existing = match course.id {
            Some(id) => Courses::find_by_id(id)
                .one(&self.db)
                .await
                .map_err(|e| AcademyError::database_operation(format!("查询课程失败: {e}")))?
                .map(|m| m.id),
            None => None,
        };

        let mut model = CourseActiveModel {
            name: Set(course.name),
            code: Set(course.code),
            description: Set(course.description),
            instructor: Set(course.instructor),
            credits: Set(course.credits),
            ..Default::default()
        };

        let saved = match existing {
            Some(id) => {
                model.id = Set(id);
                match model.clone().update(&self.db).await {
                    Ok(saved) => saved,
                    // 查询后记录已被并发删除，按新记录插入
                    Err(DbErr::RecordNotUpdated) => {
                        model.id = NotSet;
                        model.insert(&self.db).await.map_err(|e| {
                            AcademyError::database_operation(format!("创建课程失败: {e}"))
                        })?
                    }
                    Err(e) => {
                        return Err(AcademyError::database_operation(format!(
                            "更新课程失败: {e}"
                        )));
                    }
                }
            }
            None => model
                .insert(&self.db)
                .await
                .map_err(|e| AcademyError::database_operation(format!("创建课程失败: {e}")))?,
        };

        Ok(saved.into_course())
    }

    async fn delete_by_id(&self, id: i64) -> Result<()> {
        Courses::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| AcademyError::database_operation(format!("删除课程失败: {e}")))?;

        Ok(())
    }
}
