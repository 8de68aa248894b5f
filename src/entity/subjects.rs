//! 科目实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "subjects")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub code: String,
    pub name: String,
    pub semester: i32,
    pub department: String,
    pub credits: i32,
    pub total_marks: i32,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::student_marks::Entity")]
    StudentMarks,
    #[sea_orm(has_many = "super::attendance_records::Entity")]
    AttendanceRecords,
}

impl Related<super::student_marks::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StudentMarks.def()
    }
}

impl Related<super::attendance_records::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AttendanceRecords.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_subject(self) -> crate::models::academics::entities::Subject {
        use crate::models::academics::entities::Subject;

        Subject {
            id: self.id,
            code: self.code,
            name: self.name,
            semester: self.semester,
            department: self.department,
            credits: self.credits,
            total_marks: self.total_marks,
        }
    }
}
