use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::storage::Record;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
pub struct Course {
    // 课程ID，创建时由存储层分配
    pub id: Option<i64>,
    // 课程名称
    pub name: Option<String>,
    // 课程代码，如 CS101
    pub code: Option<String>,
    // 课程描述
    pub description: Option<String>,
    // 授课教师
    pub instructor: Option<String>,
    // 学分
    pub credits: Option<i32>,
}

impl Record for Course {
    fn id(&self) -> Option<i64> {
        self.id
    }

    fn with_id(self, id: Option<i64>) -> Self {
        Self { id, ..self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_deserializes_without_id() {
        let course: Course =
            serde_json::from_str(r#"{"name":"Orbital Mechanics","code":"AE301"}"#).unwrap();
        assert_eq!(course.id, None);
        assert_eq!(course.name.as_deref(), Some("Orbital Mechanics"));
        assert_eq!(course.code.as_deref(), Some("AE301"));
        assert_eq!(course.credits, None);
    }
}
