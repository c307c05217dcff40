use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::storage::Record;

/// 成绩复查申请
///
/// `status` 为自由文本（如 PENDING、APPROVED），不做状态机约束。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/reevaluation.ts")]
pub struct ReevaluationRequest {
    pub id: Option<i64>,
    pub student_name: Option<String>,
    pub course_name: Option<String>,
    pub reason: Option<String>,
    pub status: Option<String>,
}

impl Record for ReevaluationRequest {
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
    fn test_reevaluation_uses_camel_case_fields() {
        let request = ReevaluationRequest {
            id: Some(7),
            student_name: Some("Ada".to_string()),
            course_name: Some("Propulsion".to_string()),
            reason: Some("grading error".to_string()),
            status: Some("PENDING".to_string()),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["studentName"], "Ada");
        assert_eq!(json["courseName"], "Propulsion");
        assert_eq!(json["status"], "PENDING");
        assert!(json.get("student_name").is_none());
    }
}
