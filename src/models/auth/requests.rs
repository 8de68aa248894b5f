use serde::Deserialize;
use ts_rs::TS;

use super::entities::UserRole;

// 用户登录请求（来自HTTP请求）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/auth.ts")]
pub struct LoginRequest {
    /// 登录身份：student 或 hod
    pub user_type: UserRole,
    /// 学生 USN 或系主任 EID
    pub identifier: String,
    /// 密码
    pub password: String,
    /// 是否记住我
    #[serde(default)]
    pub remember_me: bool,
}

// 修改密码请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/auth.ts")]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}

// 忘记密码请求：身份标识和邮箱必须同时匹配
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/auth.ts")]
pub struct ForgotPasswordRequest {
    pub user_type: UserRole,
    pub identifier: String,
    pub email: String,
}

// 重置令牌校验请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/auth.ts")]
pub struct ValidateResetTokenRequest {
    pub user_type: UserRole,
    pub token: String,
}

// 重置密码请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/auth.ts")]
pub struct ResetPasswordRequest {
    pub user_type: UserRole,
    pub token: String,
    pub new_password: String,
}
