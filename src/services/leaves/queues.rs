use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::LeaveService;
use crate::models::{ApiResponse, ErrorCode};

/// 待审批申请，附学生信息，按申请时间正序
/// GET /leaves/pending
pub async fn handle_pending(
    service: &LeaveService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_pending_leave_applications().await {
        Ok(rows) => Ok(HttpResponse::Ok().json(ApiResponse::success(rows, "查询成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询待审批申请失败: {e}"),
            )),
        ),
    }
}

/// 近期已处理申请，按处理时间倒序，数量受配置上限约束
/// GET /leaves/processed
pub async fn handle_processed(
    service: &LeaveService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let limit = service.get_config().leave.processed_list_limit;

    match storage.list_processed_leave_applications(limit).await {
        Ok(rows) => Ok(HttpResponse::Ok().json(ApiResponse::success(rows, "查询成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询已处理申请失败: {e}"),
            )),
        ),
    }
}

/// 待审批特殊请假
/// GET /leaves/special/pending
pub async fn handle_special_pending(
    service: &LeaveService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_pending_special_leave_requests().await {
        Ok(rows) => Ok(HttpResponse::Ok().json(ApiResponse::success(rows, "查询成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询待审批特殊请假失败: {e}"),
            )),
        ),
    }
}
