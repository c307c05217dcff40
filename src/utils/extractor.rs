//! 路径参数提取器
//!
//! 非正整数的 ID 直接返回 400，不进入服务层。

use actix_web::{FromRequest, HttpRequest, HttpResponse, dev::Payload, error::InternalError};
use std::future::{Ready, ready};

use crate::models::{ApiError, ErrorCode};

/// 从路径 `{id}` 中解析的正整数 ID
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SafeIdI64(pub i64);

impl SafeIdI64 {
    fn parse(raw: Option<&str>) -> Result<Self, String> {
        let raw = raw.ok_or_else(|| "Missing path parameter: id".to_string())?;
        match raw.parse::<i64>() {
            Ok(id) if id > 0 => Ok(Self(id)),
            _ => Err(format!("Invalid id '{raw}': expected a positive integer")),
        }
    }
}

impl FromRequest for SafeIdI64 {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(Self::parse(req.match_info().get("id")).map_err(|message| {
            let response = HttpResponse::BadRequest()
                .json(ApiError::new(ErrorCode::InvalidPathParameter, &message));
            let err: actix_web::Error = InternalError::from_response(message, response).into();
            err
        }))
    }
}
