//! 系主任实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "hods")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub eid: String,
    pub name: String,
    #[sea_orm(unique)]
    pub email: Option<String>,
    pub password_hash: String,
    pub department: String,
    pub reset_token: Option<String>,
    pub reset_expires: Option<i64>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_hod(self) -> crate::models::students::entities::Hod {
        use crate::models::students::entities::Hod;
        use chrono::{DateTime, Utc};

        Hod {
            id: self.id,
            eid: self.eid,
            name: self.name,
            email: self.email,
            password_hash: self.password_hash,
            department: self.department,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
