// 业务错误码，写入错误响应的 code 字段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ErrorCode {
    // 通用错误 1000-1999
    InvalidPathParameter = 1001,
    InvalidJsonPayload = 1002,
    InternalServerError = 1500,

    // 课程 2000-2999
    CourseNotFound = 2004,

    // 考试 3000-3999
    ExamNotFound = 3004,

    // 成绩 4000-4999
    ResultNotFound = 4004,

    // 复查申请 5000-5999
    ReevaluationNotFound = 5004,
}
