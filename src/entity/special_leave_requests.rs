//! 特殊请假申请实体
//!
//! 余额用尽后的走特殊审批通道的申请，不参与余额扣减。

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "special_leave_requests")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub student_id: i64,
    pub reason: String,
    pub explanation: String,
    pub attachment_token: Option<String>,
    pub status: String,
    pub rejection_reason: Option<String>,
    pub applied_at: i64,
    pub processed_at: Option<i64>,
    pub processed_by: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::students::Entity",
        from = "Column::StudentId",
        to = "super::students::Column::Id"
    )]
    Student,
}

impl Related<super::students::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_special_leave_request(self) -> crate::models::leaves::entities::SpecialLeaveRequest {
        use crate::models::leaves::entities::{LeaveStatus, SpecialLeaveRequest};
        use chrono::{DateTime, Utc};

        SpecialLeaveRequest {
            id: self.id,
            student_id: self.student_id,
            reason: self.reason,
            explanation: self.explanation,
            attachment_token: self.attachment_token,
            status: self
                .status
                .parse::<LeaveStatus>()
                .unwrap_or(LeaveStatus::Pending),
            rejection_reason: self.rejection_reason,
            applied_at: DateTime::<Utc>::from_timestamp(self.applied_at, 0).unwrap_or_default(),
            processed_at: self
                .processed_at
                .map(|ts| DateTime::<Utc>::from_timestamp(ts, 0).unwrap_or_default()),
            processed_by: self.processed_by,
        }
    }
}
