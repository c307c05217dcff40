//! 考试实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "exams")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub title: Option<String>,
    pub course_name: Option<String>,
    pub exam_date: Option<String>,
    pub exam_time: Option<String>,
    pub location: Option<String>,
    pub duration_minutes: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_exam(self) -> crate::models::exams::entities::Exam {
        use crate::models::exams::entities::Exam;

        Exam {
            id: Some(self.id),
            title: self.title,
            course_name: self.course_name,
            exam_date: self.exam_date,
            exam_time: self.exam_time,
            location: self.location,
            duration_minutes: self.duration_minutes,
        }
    }
}
