use serde::Deserialize;
use ts_rs::TS;

use crate::models::auth::entities::UserRole;

// 发送消息请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/message.ts")]
pub struct SendMessageRequest {
    pub receiver_id: i64,
    pub receiver_role: UserRole,
    pub subject: String,
    pub body: String,
}
