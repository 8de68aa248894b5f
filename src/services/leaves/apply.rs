use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::LeaveService;
use crate::middlewares::RequireJWT;
use crate::models::leaves::{
    entities::{LeaveType, day_span},
    requests::ApplyLeaveRequest,
    responses::ApplyLeaveResponse,
};
use crate::models::{ApiResponse, ErrorCode};

/// 提交请假申请
/// POST /leaves
///
/// 全天假在提交时做余额预检：无余额或天数超出剩余额度直接拒绝，
/// 提示走特殊请假通道。半天假不占余额，但必须指明时段。
pub async fn handle_apply(
    service: &LeaveService,
    request: &HttpRequest,
    body: ApplyLeaveRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let Some(user) = RequireJWT::extract_user(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "未登录",
        )));
    };

    if body.reason.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "请假原因不能为空",
        )));
    }

    if let Some(end_date) = body.end_date
        && end_date < body.start_date
    {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::LeaveDateRangeInvalid,
            "结束日期不能早于开始日期",
        )));
    }

    match body.leave_type {
        LeaveType::Half => {
            if body.half_day_session.is_none() {
                return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                    ErrorCode::BadRequest,
                    "半天假必须指定上午或下午",
                )));
            }
        }
        LeaveType::Full => {
            // 余额预检
            let semester = user.semester.unwrap_or(1);
            let balance = match storage.ensure_leave_balance(user.id, semester).await {
                Ok(balance) => balance,
                Err(e) => {
                    return Ok(HttpResponse::InternalServerError().json(
                        ApiResponse::error_empty(
                            ErrorCode::InternalServerError,
                            format!("查询请假余额失败: {e}"),
                        ),
                    ));
                }
            };

            if balance.remaining <= 0 {
                return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                    ErrorCode::LeaveBalanceExhausted,
                    "请假额度已用完，请提交特殊请假申请",
                )));
            }

            let days = day_span(body.start_date, body.end_date);
            if days > balance.remaining as i64 {
                return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                    ErrorCode::LeaveBalanceInsufficient,
                    format!("剩余额度不足，当前仅剩 {} 天", balance.remaining),
                )));
            }
        }
    }

    match storage.create_leave_application(user.id, body).await {
        Ok(application) => {
            tracing::info!(
                "Student {} submitted leave application {}",
                user.identifier,
                application.id
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                ApplyLeaveResponse {
                    application_id: application.id,
                },
                "请假申请已提交",
            )))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("提交请假申请失败: {e}"),
            )),
        ),
    }
}
