//! 学生实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "students")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub usn: String,
    pub name: String,
    #[sea_orm(unique)]
    pub email: Option<String>,
    pub phone: Option<String>,
    pub password_hash: String,
    pub semester: i32,
    pub department: String,
    pub cgpa: f64,
    pub reset_token: Option<String>,
    pub reset_expires: Option<i64>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::leave_applications::Entity")]
    LeaveApplications,
    #[sea_orm(has_many = "super::leave_balances::Entity")]
    LeaveBalances,
    #[sea_orm(has_many = "super::special_leave_requests::Entity")]
    SpecialLeaveRequests,
    #[sea_orm(has_many = "super::student_marks::Entity")]
    StudentMarks,
    #[sea_orm(has_many = "super::semester_performance::Entity")]
    SemesterPerformance,
    #[sea_orm(has_many = "super::attendance_records::Entity")]
    AttendanceRecords,
}

impl Related<super::leave_applications::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LeaveApplications.def()
    }
}

impl Related<super::leave_balances::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LeaveBalances.def()
    }
}

impl Related<super::special_leave_requests::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SpecialLeaveRequests.def()
    }
}

impl Related<super::student_marks::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StudentMarks.def()
    }
}

impl Related<super::semester_performance::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SemesterPerformance.def()
    }
}

impl Related<super::attendance_records::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AttendanceRecords.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_student(self) -> crate::models::students::entities::Student {
        use crate::models::students::entities::Student;
        use chrono::{DateTime, Utc};

        Student {
            id: self.id,
            usn: self.usn,
            name: self.name,
            email: self.email,
            phone: self.phone,
            password_hash: self.password_hash,
            semester: self.semester,
            department: self.department,
            cgpa: self.cgpa,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
