//! 成绩存储操作

use super::SeaOrmStorage;
use crate::entity::prelude::{ResultActiveModel, Results};
use crate::entity::results::Column;
use crate::errors::{AcademyError, Result};
use crate::models::results::entities::ExamResult;
use crate::storage::RecordStore;
use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DbErr, EntityTrait, NotSet, QueryOrder, Set};

#[async_trait]
impl RecordStore<ExamResult> for SeaOrmStorage {
    async fn find_all(&self) -> Result<Vec<ExamResult>> {
        let rows = Results::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| AcademyError::database_operation(format!("查询成绩列表失败: {e}")))?;

        Ok(rows.into_iter().map(|m| m.into_exam_result()).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<ExamResult>> {
        let result = Results::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| AcademyError::database_operation(format!("查询成绩失败: {e}")))?;

        Ok(result.map(|m| m.into_exam_result()))
    }

    async fn save(&self, record: ExamResult) -> Result<ExamResult> {
        let existing = match record.id {
            Some(id) => Results::find_by_id(id)
                .one(&self.db)
                .await
                .map_err(|e| AcademyError::database_operation(format!("查询成绩失败: {e}")))?
                .map(|m| m.id),
            None => None,
        };

        let mut model = ResultActiveModel {
            student_name: Set(record.student_name),
            course_name: Set(record.course_name),
            exam_title: Set(record.exam_title),
            score: Set(record.score),
            grade: Set(record.grade),
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
                            AcademyError::database_operation(format!("创建成绩失败: {e}"))
                        })?
                    }
                    Err(e) => {
                        return Err(AcademyError::database_operation(format!(
                            "更新成绩失败: {e}"
                        )));
                    }
                }
            }
            None => model
                .insert(&self.db)
                .await
                .map_err(|e| AcademyError::database_operation(format!("创建成绩失败: {e}")))?,
        };

        Ok(saved.into_exam_result())
    }

    async fn delete_by_id(&self, id: i64) -> Result<()> {
        Results::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| AcademyError::database_operation(format!("删除成绩失败: {e}")))?;

        Ok(())
    }
}
