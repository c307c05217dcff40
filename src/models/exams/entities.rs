use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::storage::Record;

/// 考试安排，创建后只读
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/exam.ts")]
pub struct Exam {
    pub id: Option<i64>,
    pub title: Option<String>,
    // 所属课程，按名称或代码引用
    pub course_name: Option<String>,
    pub exam_date: Option<String>,
    pub exam_time: Option<String>,
    pub location: Option<String>,
    pub duration_minutes: Option<i32>,
}

impl Record for Exam {
    fn id(&self) -> Option<i64> {
        self.id
    }

    fn with_id(self, id: Option<i64>) -> Self {
        Self { id, ..self }
    }
}
