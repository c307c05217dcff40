//! 复查申请存储操作

use super::SeaOrmStorage;
use crate::entity::prelude::{ReevaluationRequestActiveModel, ReevaluationRequests};
use crate::entity::reevaluation_requests::Column;
use crate::errors::{AcademyError, Result};
use crate::models::reevaluations::entities::ReevaluationRequest;
use crate::storage::RecordStore;
use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DbErr, EntityTrait, NotSet, QueryOrder, Set};

#[async_trait]
impl RecordStore<ReevaluationRequest> for SeaOrmStorage {
    async fn find_all(&self) -> Result<Vec<ReevaluationRequest>> {
        let rows = ReevaluationRequests::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| AcademyError::database_operation(format!("查询复查申请列表失败: {e}")))?;

        Ok(rows.into_iter().map(|m| m.into_reevaluation()).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<ReevaluationRequest>> {
        let result = ReevaluationRequests::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| AcademyError::database_operation(format!("查询复查申请失败: {e}")))?;

        Ok(result.map(|m| m.into_reevaluation()))
    }

    async fn save(&self, request: ReevaluationRequest) -> Result<ReevaluationRequest> {
        let existing = match request.id {
            Some(id) => ReevaluationRequests::find_by_id(id)
                .one(&self.db)
                .await
                .map_err(|e| AcademyError::database_operation(format!("查询复查申请失败: {e}")))?
                .map(|m| m.id),
            None => None,
        };

        let mut model = ReevaluationRequestActiveModel {
            student_name: Set(request.student_name),
            course_name: Set(request.course_name),
            reason: Set(request.reason),
            status: Set(request.status),
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
                            AcademyError::database_operation(format!("创建复查申请失败: {e}"))
                        })?
                    }
                    Err(e) => {
                        return Err(AcademyError::database_operation(format!(
                            "更新复查申请失败: {e}"
                        )));
                    }
                }
            }
            None => model.insert(&self.db).await.map_err(|e| {
                AcademyError::database_operation(format!("创建复查申请失败: {e}"))
            })?,
        };

        Ok(saved.into_reevaluation())
    }

    async fn delete_by_id(&self, id: i64) -> Result<()> {
        ReevaluationRequests::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| AcademyError::database_operation(format!("删除复查申请失败: {e}")))?;

        Ok(())
    }
}
