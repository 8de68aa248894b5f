use serde::Serialize;
use ts_rs::TS;

// 发送消息响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/message.ts")]
pub struct SendMessageResponse {
    pub message_id: i64,
}

// 未读数响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/message.ts")]
pub struct UnreadCountResponse {
    pub unread: u64,
}
