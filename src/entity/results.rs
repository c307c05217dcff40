//! 成绩实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "results")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub student_name: Option<String>,
    pub course_name: Option<String>,
    pub exam_title: Option<String>,
    pub score: Option<f64>,
    pub grade: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_exam_result(self) -> crate::models::results::entities::ExamResult {
        use crate::models::results::entities::ExamResult;

        ExamResult {
            id: Some(self.id),
            student_name: self.student_name,
            course_name: self.course_name,
            exam_title: self.exam_title,
            score: self.score,
            grade: self.grade,
        }
    }
}
