use super::SeaOrmStorage;
use crate::entity::hods::{ActiveModel, Column};
use crate::entity::prelude::{Hods, Students};
use crate::entity::students;
use crate::errors::{LeaveSystemError, Result};
use crate::models::auth::entities::UserRole;
use crate::models::students::{entities::Hod, requests::CreateHodRequest};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, Set};

impl SeaOrmStorage {
    /// 创建系主任账号
    pub async fn create_hod_impl(&self, req: CreateHodRequest) -> Result<Hod> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            eid: Set(req.eid),
            name: Set(req.name),
            email: Set(req.email),
            password_hash: Set(req.password),
            department: Set(req.department),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| LeaveSystemError::database_operation(format!("创建系主任失败: {e}")))?;

        Ok(result.into_hod())
    }

    /// 通过 ID 获取系主任
    pub async fn get_hod_by_id_impl(&self, id: i64) -> Result<Option<Hod>> {
        let result = Hods::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| LeaveSystemError::database_operation(format!("查询系主任失败: {e}")))?;

        Ok(result.map(|m| m.into_hod()))
    }

    /// 通过 EID 获取系主任
    pub async fn get_hod_by_eid_impl(&self, eid: &str) -> Result<Option<Hod>> {
        let result = Hods::find()
            .filter(Column::Eid.eq(eid))
            .one(&self.db)
            .await
            .map_err(|e| LeaveSystemError::database_operation(format!("查询系主任失败: {e}")))?;

        Ok(result.map(|m| m.into_hod()))
    }

    /// 统计系主任数量
    pub async fn count_hods_impl(&self) -> Result<u64> {
        let count = Hods::find()
            .count(&self.db)
            .await
            .map_err(|e| LeaveSystemError::database_operation(format!("统计系主任数量失败: {e}")))?;

        Ok(count)
    }

    /// 更新系主任密码
    pub async fn update_hod_password_impl(&self, id: i64, password_hash: &str) -> Result<bool> {
        let now = chrono::Utc::now().timestamp();

        let result = Hods::update_many()
            .col_expr(
                Column::PasswordHash,
                sea_orm::sea_query::Expr::value(password_hash),
            )
            .col_expr(Column::UpdatedAt, sea_orm::sea_query::Expr::value(now))
            .filter(Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                LeaveSystemError::database_operation(format!("更新系主任密码失败: {e}"))
            })?;

        Ok(result.rows_affected > 0)
    }

    /// 写入密码重置令牌（按角色分表）
    pub async fn set_reset_token_impl(
        &self,
        role: &UserRole,
        user_id: i64,
        token: &str,
        expires_at: i64,
    ) -> Result<bool> {
        let rows_affected = match role {
            UserRole::Student => Students::update_many()
                .col_expr(
                    students::Column::ResetToken,
                    sea_orm::sea_query::Expr::value(token),
                )
                .col_expr(
                    students::Column::ResetExpires,
                    sea_orm::sea_query::Expr::value(expires_at),
                )
                .filter(students::Column::Id.eq(user_id))
                .exec(&self.db)
                .await
                .map_err(|e| {
                    LeaveSystemError::database_operation(format!("写入重置令牌失败: {e}"))
                })?
                .rows_affected,
            UserRole::Hod => Hods::update_many()
                .col_expr(Column::ResetToken, sea_orm::sea_query::Expr::value(token))
                .col_expr(
                    Column::ResetExpires,
                    sea_orm::sea_query::Expr::value(expires_at),
                )
                .filter(Column::Id.eq(user_id))
                .exec(&self.db)
                .await
                .map_err(|e| {
                    LeaveSystemError::database_operation(format!("写入重置令牌失败: {e}"))
                })?
                .rows_affected,
        };

        Ok(rows_affected > 0)
    }

    /// 通过重置令牌查找用户，返回 (用户ID, 过期时间)
    pub async fn find_user_by_reset_token_impl(
        &self,
        role: &UserRole,
        token: &str,
    ) -> Result<Option<(i64, i64)>> {
        match role {
            UserRole::Student => {
                let result = Students::find()
                    .filter(students::Column::ResetToken.eq(token))
                    .one(&self.db)
                    .await
                    .map_err(|e| {
                        LeaveSystemError::database_operation(format!("查询重置令牌失败: {e}"))
                    })?;
                Ok(result.and_then(|m| m.reset_expires.map(|exp| (m.id, exp))))
            }
            UserRole::Hod => {
                let result = Hods::find()
                    .filter(Column::ResetToken.eq(token))
                    .one(&self.db)
                    .await
                    .map_err(|e| {
                        LeaveSystemError::database_operation(format!("查询重置令牌失败: {e}"))
                    })?;
                Ok(result.and_then(|m| m.reset_expires.map(|exp| (m.id, exp))))
            }
        }
    }

    /// 清除密码重置令牌
    pub async fn clear_reset_token_impl(&self, role: &UserRole, user_id: i64) -> Result<bool> {
        let none_str: Option<String> = None;
        let none_i64: Option<i64> = None;

        let rows_affected = match role {
            UserRole::Student => Students::update_many()
                .col_expr(
                    students::Column::ResetToken,
                    sea_orm::sea_query::Expr::value(none_str.clone()),
                )
                .col_expr(
                    students::Column::ResetExpires,
                    sea_orm::sea_query::Expr::value(none_i64),
                )
                .filter(students::Column::Id.eq(user_id))
                .exec(&self.db)
                .await
                .map_err(|e| {
                    LeaveSystemError::database_operation(format!("清除重置令牌失败: {e}"))
                })?
                .rows_affected,
            UserRole::Hod => Hods::update_many()
                .col_expr(
                    Column::ResetToken,
                    sea_orm::sea_query::Expr::value(none_str),
                )
                .col_expr(
                    Column::ResetExpires,
                    sea_orm::sea_query::Expr::value(none_i64),
                )
                .filter(Column::Id.eq(user_id))
                .exec(&self.db)
                .await
                .map_err(|e| {
                    LeaveSystemError::database_operation(format!("清除重置令牌失败: {e}"))
                })?
                .rows_affected,
        };

        Ok(rows_affected > 0)
    }
}
