use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::middlewares::RequireJWT;
use crate::models::auth::entities::UserRole;
use crate::models::auth::requests::{
    ChangePasswordRequest, ForgotPasswordRequest, ResetPasswordRequest, ValidateResetTokenRequest,
};
use crate::models::auth::responses::ForgotPasswordResponse;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::password::{hash_password, verify_password};
use crate::utils::random_code::generate_random_token;
use crate::utils::validate::validate_password_simple;

use super::AuthService;

/// 修改密码：验证当前密码，校验新密码策略，拒绝复用
pub async fn handle_change_password(
    service: &AuthService,
    change_request: ChangePasswordRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let Some(user) = RequireJWT::extract_user(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Not logged in",
        )));
    };

    if change_request.current_password == change_request.new_password {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::PasswordReuse,
            "New password must be different from current password",
        )));
    }

    if let Err(msg) = validate_password_simple(&change_request.new_password) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::PasswordPolicyViolation, msg)));
    }

    // 取当前密码哈希
    let current_hash = match user.role {
        UserRole::Student => match storage.get_student_by_id(user.id).await {
            Ok(Some(student)) => student.password_hash,
            Ok(None) => {
                return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                    ErrorCode::StudentNotFound,
                    "Student not found",
                )));
            }
            Err(e) => {
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        format!("查询用户失败: {e}"),
                    )),
                );
            }
        },
        UserRole::Hod => match storage.get_hod_by_id(user.id).await {
            Ok(Some(hod)) => hod.password_hash,
            Ok(None) => {
                return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                    ErrorCode::NotFound,
                    "HOD not found",
                )));
            }
            Err(e) => {
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        format!("查询用户失败: {e}"),
                    )),
                );
            }
        },
    };

    if !verify_password(&change_request.current_password, &current_hash) {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::AuthFailed,
            "Current password is incorrect",
        )));
    }

    let new_hash = match hash_password(&change_request.new_password) {
        Ok(hash) => hash,
        Err(e) => {
            tracing::error!("Password hash failed: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to update password",
                )),
            );
        }
    };

    let updated = match user.role {
        UserRole::Student => storage.update_student_password(user.id, &new_hash).await,
        UserRole::Hod => storage.update_hod_password(user.id, &new_hash).await,
    };

    match updated {
        Ok(true) => {
            tracing::info!("{} {} changed password", user.role, user.identifier);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Password changed")))
        }
        Ok(false) => Ok(HttpResponse::NotFound()
            .json(ApiResponse::error_empty(ErrorCode::NotFound, "User not found"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("更新密码失败: {e}"),
            )),
        ),
    }
}

/// 忘记密码：身份标识与邮箱匹配时签发重置令牌
///
/// 未接入邮件服务，令牌写日志；开发环境下随响应返回。
pub async fn handle_forgot_password(
    service: &AuthService,
    forgot_request: ForgotPasswordRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let config = service.get_config();

    if forgot_request.email.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Email is required",
        )));
    }

    // 身份标识 + 邮箱必须同时匹配
    let user = match forgot_request.user_type {
        UserRole::Student => match storage.get_student_by_usn(&forgot_request.identifier).await {
            Ok(Some(student)) if student.email.as_deref() == Some(forgot_request.email.as_str()) => {
                Some((student.id, student.usn))
            }
            Ok(_) => None,
            Err(e) => {
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        format!("查询用户失败: {e}"),
                    )),
                );
            }
        },
        UserRole::Hod => match storage.get_hod_by_eid(&forgot_request.identifier).await {
            Ok(Some(hod)) if hod.email.as_deref() == Some(forgot_request.email.as_str()) => {
                Some((hod.id, hod.eid))
            }
            Ok(_) => None,
            Err(e) => {
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        format!("查询用户失败: {e}"),
                    )),
                );
            }
        },
    };

    let Some((user_id, identifier)) = user else {
        return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::NotFound,
            "No account found with the provided identifier and email address",
        )));
    };

    let token = generate_random_token(32);
    let expires_at = (chrono::Utc::now()
        + chrono::Duration::minutes(config.jwt.reset_token_expiry))
    .timestamp();

    if let Err(e) = storage
        .set_reset_token(&forgot_request.user_type, user_id, &token, expires_at)
        .await
    {
        return Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("写入重置令牌失败: {e}"),
            )),
        );
    }

    tracing::warn!(
        "Password reset token issued for {} {}: {}",
        forgot_request.user_type,
        identifier,
        token
    );

    let response = ForgotPasswordResponse {
        reset_token: config.is_development().then_some(token),
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        response,
        "Password reset instructions have been issued",
    )))
}

/// 校验重置令牌是否有效且未过期
pub async fn handle_validate_reset_token(
    service: &AuthService,
    validate_request: ValidateResetTokenRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage
        .find_user_by_reset_token(&validate_request.user_type, &validate_request.token)
        .await
    {
        Ok(Some((_, expires_at))) => {
            if expires_at < chrono::Utc::now().timestamp() {
                Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                    ErrorCode::ResetTokenExpired,
                    "Reset token has expired",
                )))
            } else {
                Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Reset token is valid")))
            }
        }
        Ok(None) => Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ResetTokenInvalid,
            "Invalid reset token",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("校验重置令牌失败: {e}"),
            )),
        ),
    }
}

/// 用重置令牌设置新密码，成功后令牌作废
pub async fn handle_reset_password(
    service: &AuthService,
    reset_request: ResetPasswordRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Err(msg) = validate_password_simple(&reset_request.new_password) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::PasswordPolicyViolation, msg)));
    }

    let user_id = match storage
        .find_user_by_reset_token(&reset_request.user_type, &reset_request.token)
        .await
    {
        Ok(Some((user_id, expires_at))) => {
            if expires_at < chrono::Utc::now().timestamp() {
                return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                    ErrorCode::ResetTokenExpired,
                    "Reset token has expired",
                )));
            }
            user_id
        }
        Ok(None) => {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::ResetTokenInvalid,
                "Invalid reset token",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("校验重置令牌失败: {e}"),
                )),
            );
        }
    };

    let new_hash = match hash_password(&reset_request.new_password) {
        Ok(hash) => hash,
        Err(e) => {
            tracing::error!("Password hash failed: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to reset password",
                )),
            );
        }
    };

    let updated = match reset_request.user_type {
        UserRole::Student => storage.update_student_password(user_id, &new_hash).await,
        UserRole::Hod => storage.update_hod_password(user_id, &new_hash).await,
    };

    if let Err(e) = updated {
        return Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("更新密码失败: {e}"),
            )),
        );
    }

    // 令牌一次性使用
    let _ = storage
        .clear_reset_token(&reset_request.user_type, user_id)
        .await;

    tracing::info!(
        "Password reset completed for {} user {}",
        reset_request.user_type,
        user_id
    );

    Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Password has been reset")))
}
