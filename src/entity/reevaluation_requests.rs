//! 成绩复查申请实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "reevaluation_requests")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub student_name: Option<String>,
    pub course_name: Option<String>,
    pub reason: Option<String>,
    pub status: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_reevaluation(self) -> crate::models::reevaluations::entities::ReevaluationRequest {
        use crate::models::reevaluations::entities::ReevaluationRequest;

        ReevaluationRequest {
            id: Some(self.id),
            student_name: self.student_name,
            course_name: self.course_name,
            reason: self.reason,
            status: self.status,
        }
    }
}
