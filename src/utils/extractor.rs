//! 路径参数安全提取器
//!
//! 解析失败时返回统一的 400 响应，避免 actix 默认的纯文本错误。

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};
use futures_util::future::{Ready, ready};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::{ApiResponse, ErrorCode};

static TOKEN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9-]{8,64}$").expect("Invalid token regex"));

fn bad_request(message: &str) -> actix_web::Error {
    actix_web::error::InternalError::from_response(
        message.to_string(),
        actix_web::HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::BadRequest, message)),
    )
    .into()
}

/// 路径中的 {id}，必须为正整数
pub struct SafeIDI64(pub i64);

impl FromRequest for SafeIDI64 {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let result = req
            .match_info()
            .get("id")
            .and_then(|raw| raw.parse::<i64>().ok())
            .filter(|id| *id > 0)
            .map(SafeIDI64)
            .ok_or_else(|| bad_request("Invalid ID in path"));
        ready(result)
    }
}

/// 路径中的 {token}，下载令牌格式校验
pub struct SafeFileToken(pub String);

impl FromRequest for SafeFileToken {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let result = req
            .match_info()
            .get("token")
            .filter(|raw| TOKEN_RE.is_match(raw))
            .map(|raw| SafeFileToken(raw.to_string()))
            .ok_or_else(|| bad_request("Invalid file token in path"));
        ready(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_regex() {
        assert!(TOKEN_RE.is_match("550e8400-e29b-41d4-a716-446655440000"));
        assert!(TOKEN_RE.is_match("abcdef123456"));
        assert!(!TOKEN_RE.is_match("short"));
        assert!(!TOKEN_RE.is_match("../../etc/passwd"));
    }
}
