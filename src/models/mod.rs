//! 数据模型定义
//!
//! 业务实体与请求/响应 DTO，按资源分模块。数据库实体见 entity 模块。

pub mod academics;
pub mod attachments;
pub mod auth;
pub mod common;
pub mod leaves;
pub mod messages;
pub mod students;

pub use common::pagination::{PaginatedResponse, PaginationInfo, PaginationQuery};
pub use common::response::ApiResponse;

use serde::{Deserialize, Serialize};

/// 程序启动时间（用于运行状态上报）
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}

/// 业务错误码，随 ApiResponse 返回
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,

    // 通用
    BadRequest = 1000,
    Unauthorized = 1001,
    Forbidden = 1002,
    NotFound = 1003,
    InternalServerError = 1004,
    RateLimitExceeded = 1005,

    // 认证
    AuthFailed = 2000,
    ResetTokenInvalid = 2001,
    ResetTokenExpired = 2002,
    PasswordPolicyViolation = 2003,
    PasswordReuse = 2004,

    // 学生
    StudentNotFound = 3000,
    StudentUpdateFailed = 3001,
    StudentEmailInvalid = 3002,

    // 请假
    LeaveNotFound = 4000,
    LeaveBalanceExhausted = 4001,
    LeaveBalanceInsufficient = 4002,
    LeaveAlreadyProcessed = 4003,
    LeaveDateRangeInvalid = 4004,
    LeaveBalanceNotFound = 4005,

    // 学业记录
    SubjectNotFound = 5000,
    MarkInvalid = 5001,
    AttendanceInvalid = 5002,

    // 消息
    MessageNotFound = 6000,
    MessageSendFailed = 6001,

    // 附件
    FileNotFound = 7000,
    FileUploadFailed = 7001,
    FileTypeNotAllowed = 7002,
    FileSizeExceeded = 7003,
    MultifileUploadNotAllowed = 7004,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_values() {
        assert_eq!(ErrorCode::Success as i32, 0);
        assert_eq!(ErrorCode::Unauthorized as i32, 1001);
        assert_eq!(ErrorCode::LeaveAlreadyProcessed as i32, 4003);
    }
}
