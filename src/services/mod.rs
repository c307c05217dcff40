//! 业务逻辑层
//!
//! 每个服务在构造时显式接收自己的记录存储，不依赖全局状态。

pub mod courses;
pub mod exams;
pub mod reevaluations;
pub mod results;

use std::sync::Arc;

pub use courses::CourseService;
pub use exams::ExamService;
pub use reevaluations::ReevaluationService;
pub use results::ResultService;

use crate::storage::Storage;

/// 更新操作的结果
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateOutcome<T> {
    Updated(T),
    NotFound,
}

/// 全部服务的集合，启动时由存储后端组装
#[derive(Clone)]
pub struct AcademyServices {
    pub courses: CourseService,
    pub exams: ExamService,
    pub results: ResultService,
    pub reevaluations: ReevaluationService,
}

impl AcademyServices {
    pub fn new<S: Storage>(storage: Arc<S>) -> Self {
        Self {
            courses: CourseService::new(storage.clone()),
            exams: ExamService::new(storage.clone()),
            results: ResultService::new(storage.clone()),
            reevaluations: ReevaluationService::new(storage),
        }
    }
}
