//! 业务数据模型
//!
//! 与 `entity` 模块中的 SeaORM 实体分离，用于 HTTP 序列化和服务层。

pub mod common;
pub mod courses;
pub mod exams;
pub mod reevaluations;
pub mod results;

pub use common::{ApiError, ErrorCode};

/// 应用启动时间
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}
