use super::SeaOrmStorage;
use crate::config::AppConfig;
use crate::entity::leave_balances::{ActiveModel, Column};
use crate::entity::prelude::LeaveBalances;
use crate::errors::{LeaveSystemError, Result};
use crate::models::leaves::entities::LeaveBalance;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, Set,
};

impl SeaOrmStorage {
    /// 获取学生某学期余额
    pub async fn get_leave_balance_impl(
        &self,
        student_id: i64,
        semester: i32,
    ) -> Result<Option<LeaveBalance>> {
        let result = LeaveBalances::find()
            .filter(Column::StudentId.eq(student_id))
            .filter(Column::Semester.eq(semester))
            .one(&self.db)
            .await
            .map_err(|e| LeaveSystemError::database_operation(format!("查询请假余额失败: {e}")))?;

        Ok(result.map(|m| m.into_leave_balance()))
    }

    /// 获取余额，不存在时按默认额度建档
    pub async fn ensure_leave_balance_impl(
        &self,
        student_id: i64,
        semester: i32,
    ) -> Result<LeaveBalance> {
        let model = Self::ensure_leave_balance_on(&self.db, student_id, semester).await?;
        Ok(model.into_leave_balance())
    }

    /// 在指定连接（或事务）上获取/建档余额行
    pub(crate) async fn ensure_leave_balance_on<C: ConnectionTrait>(
        conn: &C,
        student_id: i64,
        semester: i32,
    ) -> Result<crate::entity::leave_balances::Model> {
        let existing = LeaveBalances::find()
            .filter(Column::StudentId.eq(student_id))
            .filter(Column::Semester.eq(semester))
            .one(conn)
            .await
            .map_err(|e| LeaveSystemError::database_operation(format!("查询请假余额失败: {e}")))?;

        if let Some(model) = existing {
            return Ok(model);
        }

        let config = AppConfig::get();
        let total = config.leave.default_total_allowed;
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            student_id: Set(student_id),
            semester: Set(semester),
            total_allowed: Set(total),
            taken: Set(0),
            remaining: Set(total),
            updated_at: Set(now),
            ..Default::default()
        };

        model
            .insert(conn)
            .await
            .map_err(|e| LeaveSystemError::database_operation(format!("创建请假余额失败: {e}")))
    }

    /// 在事务内记账请假天数
    ///
    /// remaining 不做增量减法，而是按 total_allowed - taken 重算后写入，
    /// 保证余额不变量不会因部分更新漂移。
    pub(crate) async fn apply_leave_days_on<C: ConnectionTrait>(
        conn: &C,
        student_id: i64,
        semester: i32,
        days: i32,
    ) -> Result<()> {
        let model = Self::ensure_leave_balance_on(conn, student_id, semester).await?;
        let now = chrono::Utc::now().timestamp();

        let taken = model.taken + days;
        let remaining = model.total_allowed - taken;

        let mut active: ActiveModel = model.into();
        active.taken = Set(taken);
        active.remaining = Set(remaining);
        active.updated_at = Set(now);

        active
            .update(conn)
            .await
            .map_err(|e| LeaveSystemError::database_operation(format!("更新请假余额失败: {e}")))?;

        Ok(())
    }
}
