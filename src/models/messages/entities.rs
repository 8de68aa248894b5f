use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::auth::entities::UserRole;

// 站内消息实体
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/message.ts")]
pub struct Message {
    pub id: i64,
    pub sender_id: i64,
    pub sender_role: UserRole,
    pub receiver_id: i64,
    pub receiver_role: UserRole,
    pub subject: String,
    pub body: String,
    pub is_read: bool,
    pub sent_at: chrono::DateTime<chrono::Utc>,
    pub read_at: Option<chrono::DateTime<chrono::Utc>>,
    /// 列表展示用，查询时联表填充
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receiver_name: Option<String>,
}
