use actix_web::{HttpResponse, Result as ActixResult, web};

use super::{not_found, store_failure};
use crate::models::{ErrorCode, results::entities::ExamResult};
use crate::services::ResultService;
use crate::utils::SafeIdI64;

pub async fn list_results(service: web::Data<ResultService>) -> ActixResult<HttpResponse> {
    match service.list_results().await {
        Ok(results) => Ok(HttpResponse::Ok().json(results)),
        Err(e) => Ok(store_failure("Listing results", e)),
    }
}

pub async fn get_result(
    service: web::Data<ResultService>,
    result_id: SafeIdI64,
) -> ActixResult<HttpResponse> {
    match service.get_result(result_id.0).await {
        Ok(Some(result)) => Ok(HttpResponse::Ok().json(result)),
        Ok(None) => Ok(not_found(ErrorCode::ResultNotFound, "Result not found")),
        Err(e) => Ok(store_failure("Fetching result", e)),
    }
}

pub async fn create_result(
    service: web::Data<ResultService>,
    result: web::Json<ExamResult>,
) -> ActixResult<HttpResponse> {
    match service.create_result(result.into_inner()).await {
        Ok(result) => Ok(HttpResponse::Ok().json(result)),
        Err(e) => Ok(store_failure("Creating result", e)),
    }
}

pub fn configure_results_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/results")
            .service(
                web::resource("")
                    .route(web::get().to(list_results))
                    .route(web::post().to(create_result)),
            )
            .service(web::resource("/{id}").route(web::get().to(get_result))),
    );
}

#[cfg(test)]
mod tests {
    use actix_web::{App, http::StatusCode, test};
    use serde_json::json;

    use super::*;
    use crate::routes::{configure_api, test_support::memory_services};

    #[actix_web::test]
    async fn test_create_and_fetch_result() {
        let services = memory_services();
        let app =
            test::init_service(App::new().configure(|cfg| configure_api(cfg, &services))).await;

        let req = test::TestRequest::post()
            .uri("/api/results")
            .set_json(json!({
                "id": 50,
                "studentName": "Alice Johnson",
                "courseName": "CS101",
                "score": 88.0,
                "grade": "B+"
            }))
            .to_request();
        let created: ExamResult = test::call_and_read_body_json(&app, req).await;
        assert_eq!(created.id, Some(1));
        assert_eq!(created.grade.as_deref(), Some("B+"));

        let req = test::TestRequest::get().uri("/api/results/1").to_request();
        let fetched: ExamResult = test::call_and_read_body_json(&app, req).await;
        assert_eq!(fetched, created);

        let req = test::TestRequest::get().uri("/api/results/50").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
