use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::LeaveService;
use crate::middlewares::RequireJWT;
use crate::models::leaves::{entities::LeaveTransition, requests::RejectLeaveRequest};
use crate::models::{ApiResponse, ErrorCode};

/// 把状态转移结果映射为 HTTP 响应
fn transition_response(transition: LeaveTransition, success_message: &str) -> HttpResponse {
    match transition {
        LeaveTransition::Applied => {
            HttpResponse::Ok().json(ApiResponse::success_empty(success_message))
        }
        LeaveTransition::NotFound => HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::LeaveNotFound,
            "申请不存在",
        )),
        LeaveTransition::AlreadyProcessed => {
            HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::LeaveAlreadyProcessed,
                "申请已被处理，请勿重复操作",
            ))
        }
    }
}

/// 审批通过请假申请
/// POST /leaves/{id}/approve
///
/// 状态转移与余额扣减由存储层在一个事务内完成；
/// 重复审批返回 409 而不是二次扣减。
pub async fn handle_approve(
    service: &LeaveService,
    request: &HttpRequest,
    id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let Some(user) = RequireJWT::extract_user(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "未登录",
        )));
    };

    match storage.approve_leave_application(id, &user.identifier).await {
        Ok(transition) => {
            if transition == LeaveTransition::Applied {
                tracing::info!("HOD {} approved leave application {}", user.identifier, id);
            }
            Ok(transition_response(transition, "请假申请已批准"))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("审批失败: {e}"),
            )),
        ),
    }
}

/// 驳回请假申请
/// POST /leaves/{id}/reject
pub async fn handle_reject(
    service: &LeaveService,
    request: &HttpRequest,
    id: i64,
    body: RejectLeaveRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let Some(user) = RequireJWT::extract_user(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "未登录",
        )));
    };

    match storage
        .reject_leave_application(id, &user.identifier, body.rejection_reason)
        .await
    {
        Ok(transition) => {
            if transition == LeaveTransition::Applied {
                tracing::info!("HOD {} rejected leave application {}", user.identifier, id);
            }
            Ok(transition_response(transition, "请假申请已驳回"))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("驳回失败: {e}"),
            )),
        ),
    }
}

/// 审批通过特殊请假
/// POST /leaves/special/{id}/approve
pub async fn handle_approve_special(
    service: &LeaveService,
    request: &HttpRequest,
    id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let Some(user) = RequireJWT::extract_user(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "未登录",
        )));
    };

    match storage
        .approve_special_leave_request(id, &user.identifier)
        .await
    {
        Ok(transition) => Ok(transition_response(transition, "特殊请假申请已批准")),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("审批失败: {e}"),
            )),
        ),
    }
}

/// 驳回特殊请假
/// POST /leaves/special/{id}/reject
pub async fn handle_reject_special(
    service: &LeaveService,
    request: &HttpRequest,
    id: i64,
    body: RejectLeaveRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let Some(user) = RequireJWT::extract_user(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "未登录",
        )));
    };

    match storage
        .reject_special_leave_request(id, &user.identifier, body.rejection_reason)
        .await
    {
        Ok(transition) => Ok(transition_response(transition, "特殊请假申请已驳回")),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("驳回失败: {e}"),
            )),
        ),
    }
}
