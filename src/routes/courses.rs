use actix_web::{HttpResponse, Result as ActixResult, web};

use super::{not_found, store_failure};
use crate::models::{ErrorCode, courses::entities::Course};
use crate::services::{CourseService, UpdateOutcome};
use crate::utils::SafeIdI64;

// HTTP处理程序
pub async fn list_courses(service: web::Data<CourseService>) -> ActixResult<HttpResponse> {
    match service.list_courses().await {
        Ok(courses) => Ok(HttpResponse::Ok().json(courses)),
        Err(e) => Ok(store_failure("Listing courses", e)),
    }
}

pub async fn get_course(
    service: web::Data<CourseService>,
    course_id: SafeIdI64,
) -> ActixResult<HttpResponse> {
    match service.get_course(course_id.0).await {
        Ok(Some(course)) => Ok(HttpResponse::Ok().json(course)),
        Ok(None) => Ok(not_found(ErrorCode::CourseNotFound, "Course not found")),
        Err(e) => Ok(store_failure("Fetching course", e)),
    }
}

pub async fn create_course(
    service: web::Data<CourseService>,
    course: web::Json<Course>,
) -> ActixResult<HttpResponse> {
    match service.create_course(course.into_inner()).await {
        Ok(course) => Ok(HttpResponse::Ok().json(course)),
        Err(e) => Ok(store_failure("Creating course", e)),
    }
}

pub async fn update_course(
    service: web::Data<CourseService>,
    course_id: SafeIdI64,
    patch: web::Json<Course>,
) -> ActixResult<HttpResponse> {
    match service.update_course(course_id.0, patch.into_inner()).await {
        Ok(UpdateOutcome::Updated(course)) => Ok(HttpResponse::Ok().json(course)),
        Ok(UpdateOutcome::NotFound) => Ok(not_found(ErrorCode::CourseNotFound, "Course not found")),
        Err(e) => Ok(store_failure("Updating course", e)),
    }
}

pub async fn delete_course(
    service: web::Data<CourseService>,
    course_id: SafeIdI64,
) -> ActixResult<HttpResponse> {
    match service.delete_course(course_id.0).await {
        Ok(()) => Ok(HttpResponse::Ok().finish()),
        Err(e) => Ok(store_failure("Deleting course", e)),
    }
}

// 配置路由
pub fn configure_courses_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/courses")
            .service(
                web::resource("")
                    .route(web::get().to(list_courses))
                    .route(web::post().to(create_course)),
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_course))
                    .route(web::put().to(update_course))
                    .route(web::delete().to(delete_course)),
            ),
    );
}

#[cfg(test)]
mod tests {
    use actix_web::{App, http::StatusCode, test};
    use serde_json::json;

    use super::*;
    use crate::errors::{AcademyError, Result};
    use crate::models::ApiError;
    use crate::routes::{configure_api, test_support::memory_services};
    use crate::storage::RecordStore;

    /// 每次调用都失败的存储
    struct UnavailableStore;

    #[async_trait::async_trait]
    impl RecordStore<Course> for UnavailableStore {
        async fn find_all(&self) -> Result<Vec<Course>> {
            Err(AcademyError::database_operation("connection refused by db-01"))
        }

        async fn find_by_id(&self, _id: i64) -> Result<Option<Course>> {
            Err(AcademyError::database_operation("connection refused by db-01"))
        }

        async fn save(&self, _record: Course) -> Result<Course> {
            Err(AcademyError::database_operation("connection refused by db-01"))
        }

        async fn delete_by_id(&self, _id: i64) -> Result<()> {
            Err(AcademyError::database_operation("connection refused by db-01"))
        }
    }

    #[actix_web::test]
    async fn test_course_lifecycle() {
        let services = memory_services();
        let app =
            test::init_service(App::new().configure(|cfg| configure_api(cfg, &services))).await;

        // 创建
        let req = test::TestRequest::post()
            .uri("/api/courses")
            .set_json(json!({ "name": "Orbital Mechanics" }))
            .to_request();
        let created: Course = test::call_and_read_body_json(&app, req).await;
        assert_eq!(created.id, Some(1));
        assert_eq!(created.name.as_deref(), Some("Orbital Mechanics"));

        // 列表
        let req = test::TestRequest::get().uri("/api/courses").to_request();
        let listed: Vec<Course> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(listed, vec![created.clone()]);

        // 更新
        let req = test::TestRequest::put()
            .uri("/api/courses/1")
            .set_json(json!({ "name": "Orbital Mechanics II" }))
            .to_request();
        let updated: Course = test::call_and_read_body_json(&app, req).await;
        assert_eq!(updated.id, Some(1));
        assert_eq!(updated.name.as_deref(), Some("Orbital Mechanics II"));

        // 删除后查询返回 404
        let req = test::TestRequest::delete().uri("/api/courses/1").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert!(test::read_body(resp).await.is_empty());

        let req = test::TestRequest::get().uri("/api/courses/1").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: ApiError = test::read_body_json(resp).await;
        assert_eq!(body.code, ErrorCode::CourseNotFound as i32);
    }

    #[actix_web::test]
    async fn test_update_missing_course_returns_not_found() {
        let services = memory_services();
        let app =
            test::init_service(App::new().configure(|cfg| configure_api(cfg, &services))).await;

        let req = test::TestRequest::put()
            .uri("/api/courses/8")
            .set_json(json!({ "name": "Nowhere" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let req = test::TestRequest::get().uri("/api/courses").to_request();
        let listed: Vec<Course> = test::call_and_read_body_json(&app, req).await;
        assert!(listed.is_empty());
    }

    #[actix_web::test]
    async fn test_delete_missing_course_is_ok() {
        let services = memory_services();
        let app =
            test::init_service(App::new().configure(|cfg| configure_api(cfg, &services))).await;

        let req = test::TestRequest::delete().uri("/api/courses/3").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn test_invalid_id_and_body_are_rejected() {
        let services = memory_services();
        let app =
            test::init_service(App::new().configure(|cfg| configure_api(cfg, &services))).await;

        let req = test::TestRequest::get().uri("/api/courses/abc").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: ApiError = test::read_body_json(resp).await;
        assert_eq!(body.code, ErrorCode::InvalidPathParameter as i32);

        let req = test::TestRequest::get().uri("/api/courses/0").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let req = test::TestRequest::post()
            .uri("/api/courses")
            .insert_header(("content-type", "application/json"))
            .set_payload("{ not json")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: ApiError = test::read_body_json(resp).await;
        assert_eq!(body.code, ErrorCode::InvalidJsonPayload as i32);
    }

    #[actix_web::test]
    async fn test_store_failure_returns_internal_error() {
        let service = CourseService::new(std::sync::Arc::new(UnavailableStore));
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(service))
                .configure(configure_courses_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/courses").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: ApiError = test::read_body_json(resp).await;
        assert_eq!(body.code, ErrorCode::InternalServerError as i32);
        assert_eq!(body.message, "Listing courses failed");
        assert!(!body.message.contains("db-01"));

        let req = test::TestRequest::delete().uri("/api/courses/1").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
