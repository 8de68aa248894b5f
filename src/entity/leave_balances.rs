//! 请假余额实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "leave_balances")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub student_id: i64,
    pub semester: i32,
    pub total_allowed: i32,
    pub taken: i32,
    pub remaining: i32,
    pub updated_at: i64,
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
    pub fn into_leave_balance(self) -> crate::models::leaves::entities::LeaveBalance {
        use crate::models::leaves::entities::LeaveBalance;
        use chrono::{DateTime, Utc};

        LeaveBalance {
            id: self.id,
            student_id: self.student_id,
            semester: self.semester,
            total_allowed: self.total_allowed,
            taken: self.taken,
            remaining: self.remaining,
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
