use super::SeaOrmStorage;
use crate::entity::messages::{ActiveModel, Column};
use crate::entity::prelude::{Hods, Messages, Students};
use crate::errors::{LeaveSystemError, Result};
use crate::models::auth::entities::UserRole;
use crate::models::messages::{entities::Message, requests::SendMessageRequest};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};
use std::collections::HashMap;

impl SeaOrmStorage {
    /// 发送消息
    pub async fn create_message_impl(
        &self,
        sender_id: i64,
        sender_role: &UserRole,
        req: SendMessageRequest,
    ) -> Result<Message> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            sender_id: Set(sender_id),
            sender_role: Set(sender_role.to_string()),
            receiver_id: Set(req.receiver_id),
            receiver_role: Set(req.receiver_role.to_string()),
            subject: Set(req.subject),
            body: Set(req.body),
            is_read: Set(false),
            sent_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| LeaveSystemError::database_operation(format!("发送消息失败: {e}")))?;

        Ok(result.into_message())
    }

    /// 学生相关消息（收+发），按发送时间倒序
    pub async fn list_messages_for_student_impl(&self, student_id: i64) -> Result<Vec<Message>> {
        let student_role = UserRole::Student.to_string();
        let rows = Messages::find()
            .filter(
                Condition::any()
                    .add(
                        Condition::all()
                            .add(Column::ReceiverId.eq(student_id))
                            .add(Column::ReceiverRole.eq(student_role.clone())),
                    )
                    .add(
                        Condition::all()
                            .add(Column::SenderId.eq(student_id))
                            .add(Column::SenderRole.eq(student_role)),
                    ),
            )
            .order_by_desc(Column::SentAt)
            .all(&self.db)
            .await
            .map_err(|e| LeaveSystemError::database_operation(format!("查询消息失败: {e}")))?;

        self.fill_display_names(rows).await
    }

    /// 全部消息（系主任视图），按发送时间倒序
    pub async fn list_all_messages_impl(&self) -> Result<Vec<Message>> {
        let rows = Messages::find()
            .order_by_desc(Column::SentAt)
            .all(&self.db)
            .await
            .map_err(|e| LeaveSystemError::database_operation(format!("查询消息失败: {e}")))?;

        self.fill_display_names(rows).await
    }

    /// 收件人标记已读，read_at 只写一次
    pub async fn mark_message_read_impl(
        &self,
        message_id: i64,
        receiver_id: i64,
        receiver_role: &UserRole,
    ) -> Result<bool> {
        let now = chrono::Utc::now().timestamp();

        let result = Messages::update_many()
            .col_expr(Column::IsRead, sea_orm::sea_query::Expr::value(true))
            .col_expr(Column::ReadAt, sea_orm::sea_query::Expr::value(now))
            .filter(Column::Id.eq(message_id))
            .filter(Column::ReceiverId.eq(receiver_id))
            .filter(Column::ReceiverRole.eq(receiver_role.to_string()))
            .filter(Column::IsRead.eq(false))
            .exec(&self.db)
            .await
            .map_err(|e| LeaveSystemError::database_operation(format!("标记已读失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 收件人未读数
    pub async fn count_unread_messages_impl(
        &self,
        receiver_id: i64,
        receiver_role: &UserRole,
    ) -> Result<u64> {
        let count = Messages::find()
            .filter(Column::ReceiverId.eq(receiver_id))
            .filter(Column::ReceiverRole.eq(receiver_role.to_string()))
            .filter(Column::IsRead.eq(false))
            .count(&self.db)
            .await
            .map_err(|e| LeaveSystemError::database_operation(format!("统计未读消息失败: {e}")))?;

        Ok(count)
    }

    /// 批量填充收发双方的显示名
    async fn fill_display_names(
        &self,
        rows: Vec<crate::entity::messages::Model>,
    ) -> Result<Vec<Message>> {
        let mut student_ids = Vec::new();
        let mut hod_ids = Vec::new();
        for row in &rows {
            for (id, role) in [
                (row.sender_id, row.sender_role.as_str()),
                (row.receiver_id, row.receiver_role.as_str()),
            ] {
                if role == UserRole::STUDENT {
                    student_ids.push(id);
                } else {
                    hod_ids.push(id);
                }
            }
        }

        let mut student_names: HashMap<i64, String> = HashMap::new();
        if !student_ids.is_empty() {
            let students = Students::find()
                .filter(crate::entity::students::Column::Id.is_in(student_ids))
                .all(&self.db)
                .await
                .map_err(|e| LeaveSystemError::database_operation(format!("查询学生失败: {e}")))?;
            for s in students {
                student_names.insert(s.id, s.name);
            }
        }

        let mut hod_names: HashMap<i64, String> = HashMap::new();
        if !hod_ids.is_empty() {
            let hods = Hods::find()
                .filter(crate::entity::hods::Column::Id.is_in(hod_ids))
                .all(&self.db)
                .await
                .map_err(|e| {
                    LeaveSystemError::database_operation(format!("查询系主任失败: {e}"))
                })?;
            for h in hods {
                hod_names.insert(h.id, h.name);
            }
        }

        let lookup = |id: i64, role: &str| -> Option<String> {
            if role == UserRole::STUDENT {
                student_names.get(&id).cloned()
            } else {
                hod_names.get(&id).cloned()
            }
        };

        Ok(rows
            .into_iter()
            .map(|row| {
                let sender_name = lookup(row.sender_id, &row.sender_role);
                let receiver_name = lookup(row.receiver_id, &row.receiver_role);
                let mut message = row.into_message();
                message.sender_name = sender_name;
                message.receiver_name = receiver_name;
                message
            })
            .collect())
    }
}
