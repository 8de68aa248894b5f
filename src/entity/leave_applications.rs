//! 请假申请实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "leave_applications")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub student_id: i64,
    pub leave_type: String,
    pub half_day_session: Option<String>,
    pub start_date: Date,
    pub end_date: Option<Date>,
    pub reason: String,
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

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_leave_application(self) -> crate::models::leaves::entities::LeaveApplication {
        use crate::models::leaves::entities::{
            HalfDaySession, LeaveApplication, LeaveStatus, LeaveType,
        };
        use chrono::{DateTime, Utc};

        LeaveApplication {
            id: self.id,
            student_id: self.student_id,
            leave_type: self
                .leave_type
                .parse::<LeaveType>()
                .unwrap_or(LeaveType::Full),
            half_day_session: self
                .half_day_session
                .and_then(|s| s.parse::<HalfDaySession>().ok()),
            start_date: self.start_date,
            end_date: self.end_date,
            reason: self.reason,
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
