use actix_web::{Error, HttpRequest, HttpResponse, error::InternalError, error::JsonPayloadError};
use tracing::debug;

use crate::models::{ApiError, ErrorCode};

/// JSON 请求体解析失败时返回统一格式的 400
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> Error {
    let message = format!("Invalid JSON payload: {err}");
    debug!("{} {}: {}", req.method(), req.path(), message);

    let response =
        HttpResponse::BadRequest().json(ApiError::new(ErrorCode::InvalidJsonPayload, message));
    InternalError::from_response(err, response).into()
}
