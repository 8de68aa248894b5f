//! 学期绩点实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "semester_performance")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub student_id: i64,
    pub semester: i32,
    pub sgpa: f64,
    pub cgpa: f64,
    pub total_credits: i32,
    pub earned_credits: i32,
    pub status: String,
    pub academic_year: String,
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
    pub fn into_semester_performance(
        self,
    ) -> crate::models::academics::entities::SemesterPerformance {
        use crate::models::academics::entities::{PerformanceStatus, SemesterPerformance};

        SemesterPerformance {
            id: self.id,
            student_id: self.student_id,
            semester: self.semester,
            sgpa: self.sgpa,
            cgpa: self.cgpa,
            total_credits: self.total_credits,
            earned_credits: self.earned_credits,
            status: self
                .status
                .parse::<PerformanceStatus>()
                .unwrap_or(PerformanceStatus::Pending),
            academic_year: self.academic_year,
        }
    }
}
