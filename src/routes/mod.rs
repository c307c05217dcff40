pub mod courses;

pub mod exams;

pub mod results;

pub mod reevaluations;

pub use courses::configure_courses_routes;
pub use exams::configure_exams_routes;
pub use reevaluations::configure_reevaluations_routes;
pub use results::configure_results_routes;

use actix_web::{HttpResponse, web};
use tracing::error;

use crate::errors::AcademyError;
use crate::models::{ApiError, ErrorCode};
use crate::services::AcademyServices;
use crate::utils::json_error_handler;

/// 注册服务实例与全部 API 路由
pub fn configure_api(cfg: &mut web::ServiceConfig, services: &AcademyServices) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler)) // 设置JSON错误处理器
        .app_data(web::Data::new(services.courses.clone()))
        .app_data(web::Data::new(services.exams.clone()))
        .app_data(web::Data::new(services.results.clone()))
        .app_data(web::Data::new(services.reevaluations.clone()))
        .configure(configure_courses_routes) // 配置课程相关路由
        .configure(configure_exams_routes) // 配置考试相关路由
        .configure(configure_results_routes) // 配置成绩相关路由
        .configure(configure_reevaluations_routes); // 配置复查申请相关路由
}

// 记录不存在
pub(crate) fn not_found(code: ErrorCode, message: &str) -> HttpResponse {
    HttpResponse::NotFound().json(ApiError::new(code, message))
}

// 存储层故障统一返回 500，错误详情只写日志
pub(crate) fn store_failure(action: &str, err: AcademyError) -> HttpResponse {
    error!("{} failed: {}", action, err);
    HttpResponse::InternalServerError().json(ApiError::new(
        ErrorCode::InternalServerError,
        format!("{action} failed"),
    ))
}
