use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::LeaveService;
use crate::middlewares::RequireJWT;
use crate::models::{ApiResponse, ErrorCode};

/// 本人请假历史，按申请时间倒序
/// GET /leaves/my
pub async fn handle_my_history(
    service: &LeaveService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let Some(user) = RequireJWT::extract_user(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "未登录",
        )));
    };

    match storage.list_leave_applications_by_student(user.id).await {
        Ok(rows) => Ok(HttpResponse::Ok().json(ApiResponse::success(rows, "查询成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询请假历史失败: {e}"),
            )),
        ),
    }
}

/// 本人特殊请假历史
/// GET /leaves/special/my
pub async fn handle_my_special_history(
    service: &LeaveService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let Some(user) = RequireJWT::extract_user(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "未登录",
        )));
    };

    match storage.list_special_leave_requests_by_student(user.id).await {
        Ok(rows) => Ok(HttpResponse::Ok().json(ApiResponse::success(rows, "查询成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询特殊请假历史失败: {e}"),
            )),
        ),
    }
}
