use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::LeaveService;
use crate::middlewares::RequireJWT;
use crate::models::{ApiResponse, ErrorCode};

/// 本人当前学期余额，不存在时按默认额度建档
/// GET /leaves/my/balance
pub async fn handle_my_balance(
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

    let semester = user.semester.unwrap_or(1);

    match storage.ensure_leave_balance(user.id, semester).await {
        Ok(balance) => Ok(HttpResponse::Ok().json(ApiResponse::success(balance, "查询成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询请假余额失败: {e}"),
            )),
        ),
    }
}
