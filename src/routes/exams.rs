use actix_web::{HttpResponse, Result as ActixResult, web};

use super::{not_found, store_failure};
use crate::models::{ErrorCode, exams::entities::Exam};
use crate::services::ExamService;
use crate::utils::SafeIdI64;

pub async fn list_exams(service: web::Data<ExamService>) -> ActixResult<HttpResponse> {
    match service.list_exams().await {
        Ok(exams) => Ok(HttpResponse::Ok().json(exams)),
        Err(e) => Ok(store_failure("Listing exams", e)),
    }
}

pub async fn get_exam(
    service: web::Data<ExamService>,
    exam_id: SafeIdI64,
) -> ActixResult<HttpResponse> {
    match service.get_exam(exam_id.0).await {
        Ok(Some(exam)) => Ok(HttpResponse::Ok().json(exam)),
        Ok(None) => Ok(not_found(ErrorCode::ExamNotFound, "Exam not found")),
        Err(e) => Ok(store_failure("Fetching exam", e)),
    }
}

pub async fn create_exam(
    service: web::Data<ExamService>,
    exam: web::Json<Exam>,
) -> ActixResult<HttpResponse> {
    match service.create_exam(exam.into_inner()).await {
        Ok(exam) => Ok(HttpResponse::Ok().json(exam)),
        Err(e) => Ok(store_failure("Creating exam", e)),
    }
}

// 考试创建后只读，不提供 PUT / DELETE
pub fn configure_exams_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/exams")
            .service(
                web::resource("")
                    .route(web::get().to(list_exams))
                    .route(web::post().to(create_exam)),
            )
            .service(web::resource("/{id}").route(web::get().to(get_exam))),
    );
}
