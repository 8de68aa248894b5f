use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::MessageService;
use crate::middlewares::RequireJWT;
use crate::models::auth::entities::UserRole;
use crate::models::messages::{requests::SendMessageRequest, responses::SendMessageResponse};
use crate::models::{ApiResponse, ErrorCode};

/// 发送消息
/// POST /messages
pub async fn handle_send(
    service: &MessageService,
    request: &HttpRequest,
    body: SendMessageRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let Some(user) = RequireJWT::extract_user(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "未登录",
        )));
    };

    if body.subject.trim().is_empty() || body.body.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "消息主题和正文不能为空",
        )));
    }

    // 收件人必须存在
    let receiver_exists = match body.receiver_role {
        UserRole::Student => storage
            .get_student_by_id(body.receiver_id)
            .await
            .map(|opt| opt.is_some()),
        UserRole::Hod => storage
            .get_hod_by_id(body.receiver_id)
            .await
            .map(|opt| opt.is_some()),
    };

    match receiver_exists {
        Ok(true) => {}
        Ok(false) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::NotFound,
                "收件人不存在",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询收件人失败: {e}"),
                )),
            );
        }
    }

    match storage.create_message(user.id, &user.role, body).await {
        Ok(message) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            SendMessageResponse {
                message_id: message.id,
            },
            "消息已发送",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::MessageSendFailed,
                format!("发送消息失败: {e}"),
            )),
        ),
    }
}
