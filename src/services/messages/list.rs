use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::MessageService;
use crate::middlewares::RequireJWT;
use crate::models::auth::entities::UserRole;
use crate::models::messages::responses::UnreadCountResponse;
use crate::models::{ApiResponse, ErrorCode};

/// 消息列表
/// GET /messages
///
/// 学生只能看到与自己相关的消息，系主任可以看到全部。
pub async fn handle_list(
    service: &MessageService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let Some(user) = RequireJWT::extract_user(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "未登录",
        )));
    };

    let result = match user.role {
        UserRole::Student => storage.list_messages_for_student(user.id).await,
        UserRole::Hod => storage.list_all_messages().await,
    };

    match result {
        Ok(rows) => Ok(HttpResponse::Ok().json(ApiResponse::success(rows, "查询成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询消息失败: {e}"),
            )),
        ),
    }
}

/// 未读数
/// GET /messages/unread-count
pub async fn handle_unread_count(
    service: &MessageService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let Some(user) = RequireJWT::extract_user(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "未登录",
        )));
    };

    match storage.count_unread_messages(user.id, &user.role).await {
        Ok(unread) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            UnreadCountResponse { unread },
            "查询成功",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("统计未读消息失败: {e}"),
            )),
        ),
    }
}
