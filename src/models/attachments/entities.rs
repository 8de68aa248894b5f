use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 附件实体
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attachment.ts")]
pub struct Attachment {
    pub id: i64,
    pub download_token: String,
    pub original_name: String,
    /// 磁盘上的实际文件名，不对外暴露
    #[serde(skip_serializing, default)]
    #[ts(skip)]
    pub stored_name: String,
    pub file_size: i64,
    pub file_type: String,
    pub uploader_id: i64,
    pub uploader_role: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
