use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::storage::Record;

/// 考试成绩，创建后只读
///
/// 学生、课程、考试均按名称引用，存储层不校验引用是否存在。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/result.ts")]
pub struct ExamResult {
    pub id: Option<i64>,
    pub student_name: Option<String>,
    pub course_name: Option<String>,
    pub exam_title: Option<String>,
    pub score: Option<f64>,
    // 等级，如 A+、B-
    pub grade: Option<String>,
}

impl Record for ExamResult {
    fn id(&self) -> Option<i64> {
        self.id
    }

    fn with_id(self, id: Option<i64>) -> Self {
        Self { id, ..self }
    }
}
