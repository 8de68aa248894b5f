//! 站内消息实体
//!
//! 学生与系主任双向通信，不做外键约束：sender/receiver 依据角色指向不同表。

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "messages")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub sender_id: i64,
    pub sender_role: String,
    pub receiver_id: i64,
    pub receiver_role: String,
    pub subject: String,
    pub body: String,
    pub is_read: bool,
    pub sent_at: i64,
    pub read_at: Option<i64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_message(self) -> crate::models::messages::entities::Message {
        use crate::models::auth::entities::UserRole;
        use crate::models::messages::entities::Message;
        use chrono::{DateTime, Utc};

        Message {
            id: self.id,
            sender_id: self.sender_id,
            sender_role: self
                .sender_role
                .parse::<UserRole>()
                .unwrap_or(UserRole::Student),
            receiver_id: self.receiver_id,
            receiver_role: self
                .receiver_role
                .parse::<UserRole>()
                .unwrap_or(UserRole::Student),
            subject: self.subject,
            body: self.body,
            is_read: self.is_read,
            sent_at: DateTime::<Utc>::from_timestamp(self.sent_at, 0).unwrap_or_default(),
            read_at: self
                .read_at
                .map(|ts| DateTime::<Utc>::from_timestamp(ts, 0).unwrap_or_default()),
            sender_name: None,
            receiver_name: None,
        }
    }
}
