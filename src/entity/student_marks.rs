//! 学生成绩实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "student_marks")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub student_id: i64,
    pub subject_id: i64,
    pub semester: i32,
    pub marks_obtained: f64,
    pub total_marks: f64,
    pub grade: String,
    pub grade_points: f64,
    pub exam_type: String,
    pub exam_date: Date,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::students::Entity",
        from = "Column::StudentId",
        to = "super::students::Column::Id"
    )]
    Student,
    #[sea_orm(
        belongs_to = "super::subjects::Entity",
        from = "Column::SubjectId",
        to = "super::subjects::Column::Id"
    )]
    Subject,
}

impl Related<super::students::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl Related<super::subjects::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Subject.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_student_mark(self) -> crate::models::academics::entities::StudentMark {
        use crate::models::academics::entities::{ExamType, StudentMark};

        StudentMark {
            id: self.id,
            student_id: self.student_id,
            subject_id: self.subject_id,
            semester: self.semester,
            marks_obtained: self.marks_obtained,
            total_marks: self.total_marks,
            grade: self.grade,
            grade_points: self.grade_points,
            exam_type: self
                .exam_type
                .parse::<ExamType>()
                .unwrap_or(ExamType::Internal),
            exam_date: self.exam_date,
        }
    }
}
