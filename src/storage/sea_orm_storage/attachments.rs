use super::SeaOrmStorage;
use crate::entity::attachments::{ActiveModel, Column};
use crate::entity::prelude::Attachments;
use crate::errors::{LeaveSystemError, Result};
use crate::models::attachments::entities::Attachment;
use crate::models::auth::entities::UserRole;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};

impl SeaOrmStorage {
    /// 登记上传的附件
    #[allow(clippy::too_many_arguments)]
    pub async fn create_attachment_impl(
        &self,
        download_token: &str,
        original_name: &str,
        stored_name: &str,
        file_size: i64,
        file_type: &str,
        uploader_id: i64,
        uploader_role: &UserRole,
    ) -> Result<Attachment> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            download_token: Set(download_token.to_string()),
            original_name: Set(original_name.to_string()),
            stored_name: Set(stored_name.to_string()),
            file_size: Set(file_size),
            file_type: Set(file_type.to_string()),
            uploader_id: Set(uploader_id),
            uploader_role: Set(uploader_role.to_string()),
            created_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| LeaveSystemError::database_operation(format!("登记附件失败: {e}")))?;

        Ok(result.into_attachment())
    }

    /// 通过下载令牌获取附件信息
    pub async fn get_attachment_by_token_impl(&self, token: &str) -> Result<Option<Attachment>> {
        let result = Attachments::find()
            .filter(Column::DownloadToken.eq(token))
            .one(&self.db)
            .await
            .map_err(|e| LeaveSystemError::database_operation(format!("查询附件失败: {e}")))?;

        Ok(result.map(|m| m.into_attachment()))
    }
}
