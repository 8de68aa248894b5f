use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::LeaveService;
use crate::middlewares::RequireJWT;
use crate::models::leaves::{requests::SpecialLeaveRequestBody, responses::ApplyLeaveResponse};
use crate::models::{ApiResponse, ErrorCode};

/// 提交特殊请假申请
/// POST /leaves/special
///
/// 额度用尽后的申请通道，不做余额预检，审批通过也不扣减余额。
pub async fn handle_apply_special(
    service: &LeaveService,
    request: &HttpRequest,
    body: SpecialLeaveRequestBody,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let Some(user) = RequireJWT::extract_user(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "未登录",
        )));
    };

    if body.reason.trim().is_empty() || body.explanation.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "申请原因和详细说明不能为空",
        )));
    }

    match storage.create_special_leave_request(user.id, body).await {
        Ok(req) => {
            tracing::info!(
                "Student {} submitted special leave request {}",
                user.identifier,
                req.id
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                ApplyLeaveResponse {
                    application_id: req.id,
                },
                "特殊请假申请已提交",
            )))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("提交特殊请假申请失败: {e}"),
            )),
        ),
    }
}
