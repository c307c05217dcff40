use actix_web::{HttpResponse, Result as ActixResult, web};

use super::{not_found, store_failure};
use crate::models::{ErrorCode, reevaluations::entities::ReevaluationRequest};
use crate::services::{ReevaluationService, UpdateOutcome};
use crate::utils::SafeIdI64;

pub async fn list_reevaluations(
    service: web::Data<ReevaluationService>,
) -> ActixResult<HttpResponse> {
    match service.list_requests().await {
        Ok(requests) => Ok(HttpResponse::Ok().json(requests)),
        Err(e) => Ok(store_failure("Listing reevaluation requests", e)),
    }
}

pub async fn get_reevaluation(
    service: web::Data<ReevaluationService>,
    request_id: SafeIdI64,
) -> ActixResult<HttpResponse> {
    match service.get_request(request_id.0).await {
        Ok(Some(request)) => Ok(HttpResponse::Ok().json(request)),
        Ok(None) => Ok(not_found(
            ErrorCode::ReevaluationNotFound,
            "Reevaluation request not found",
        )),
        Err(e) => Ok(store_failure("Fetching reevaluation request", e)),
    }
}

pub async fn create_reevaluation(
    service: web::Data<ReevaluationService>,
    request: web::Json<ReevaluationRequest>,
) -> ActixResult<HttpResponse> {
    match service.create_request(request.into_inner()).await {
        Ok(request) => Ok(HttpResponse::Ok().json(request)),
        Err(e) => Ok(store_failure("Creating reevaluation request", e)),
    }
}

pub async fn update_reevaluation(
    service: web::Data<ReevaluationService>,
    request_id: SafeIdI64,
    patch: web::Json<ReevaluationRequest>,
) -> ActixResult<HttpResponse> {
    match service
        .update_request(request_id.0, patch.into_inner())
        .await
    {
        Ok(UpdateOutcome::Updated(request)) => Ok(HttpResponse::Ok().json(request)),
        Ok(UpdateOutcome::NotFound) => Ok(not_found(
            ErrorCode::ReevaluationNotFound,
            "Reevaluation request not found",
        )),
        Err(e) => Ok(store_failure("Updating reevaluation request", e)),
    }
}

pub async fn delete_reevaluation(
    service: web::Data<ReevaluationService>,
    request_id: SafeIdI64,
) -> ActixResult<HttpResponse> {
    match service.delete_request(request_id.0).await {
        Ok(()) => Ok(HttpResponse::Ok().finish()),
        Err(e) => Ok(store_failure("Deleting reevaluation request", e)),
    }
}

pub fn configure_reevaluations_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/reevaluations")
            .service(
                web::resource("")
                    .route(web::get().to(list_reevaluations))
                    .route(web::post().to(create_reevaluation)),
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_reevaluation))
                    .route(web::put().to(update_reevaluation))
                    .route(web::delete().to(delete_reevaluation)),
            ),
    );
}
