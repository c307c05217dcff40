//! 考试存储操作

use super::SeaOrmStorage;
use crate::entity::exams::Column;
use crate::entity::prelude::{ExamActiveModel, Exams};
use crate::errors::{AcademyError, Result};
use crate::models::exams::entities::Exam;
use crate::storage::RecordStore;
use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DbErr, EntityTrait, NotSet, QueryOrder, Set};

#[async_trait]
impl RecordStore<Exam> for SeaOrmStorage {
    async fn find_all(&self) -> Result<Vec<Exam>> {
        let rows = Exams::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| AcademyError::database_operation(format!("查询考试列表失败: {e}")))?;

        Ok(rows.into_iter().map(|m| m.into_exam()).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Exam>> {
        let result = Exams::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| AcademyError::database_operation(format!("查询考试失败: {e}")))?;

        Ok(result.map(|m| m.into_exam()))
    }

    async fn save(&self, exam: Exam) -> Result<Exam> {
        let existing = match exam.id {
            Some(id) => Exams::find_by_id(id)
                .one(&self.db)
                .await
                .map_err(|e| AcademyError::database_operation(format!("查询考试失败: {e}")))?
                .map(|m| m.id),
            None => None,
        };

        let mut model = ExamActiveModel {
            title: Set(exam.title),
            course_name: Set(exam.course_name),
            exam_date: Set(exam.exam_date),
            exam_time: Set(exam.exam_time),
            location: Set(exam.location),
            duration_minutes: Set(exam.duration_minutes),
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
                            AcademyError::database_operation(format!("创建考试失败: {e}"))
                        })?
                    }
                    Err(e) => {
                        return Err(AcademyError::database_operation(format!(
                            "更新考试失败: {e}"
                        )));
                    }
                }
            }
            None => model
                .insert(&self.db)
                .await
                .map_err(|e| AcademyError::database_operation(format!("创建考试失败: {e}")))?,
        };

        Ok(saved.into_exam())
    }

    async fn delete_by_id(&self, id: i64) -> Result<()> {
        Exams::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| AcademyError::database_operation(format!("删除考试失败: {e}")))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::sea_orm_storage::tests::sqlite_memory_storage;

    #[tokio::test]
    async fn test_exams_listed_in_creation_order() {
        let storage = sqlite_memory_storage().await;
        let midterm = storage
            .save(Exam {
                title: Some("Midterm".to_string()),
                course_name: Some("Propulsion".to_string()),
                exam_date: Some("2026-06-15".to_string()),
                location: Some("Hall A".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();
        let final_exam = storage
            .save(Exam {
                title: Some("Final".to_string()),
                duration_minutes: Some(180),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_ne!(midterm.id, final_exam.id);
        let all = RecordStore::<Exam>::find_all(&storage).await.unwrap();
        assert_eq!(all, vec![midterm.clone(), final_exam]);
        assert_eq!(
            RecordStore::<Exam>::find_by_id(&storage, midterm.id.unwrap())
                .await
                .unwrap(),
            Some(midterm)
        );
    }
}
