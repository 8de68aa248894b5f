use super::SeaOrmStorage;
use crate::entity::leave_applications::{ActiveModel, Column};
use crate::entity::prelude::{LeaveApplications, Students};
use crate::errors::{LeaveSystemError, Result};
use crate::models::leaves::{
    entities::{LeaveStatus, LeaveTransition, LeaveType, day_span},
    requests::ApplyLeaveRequest,
    responses::LeaveApplicationWithStudent,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, QuerySelect, Set,
    TransactionTrait,
};

impl SeaOrmStorage {
    /// 提交请假申请
    pub async fn create_leave_application_impl(
        &self,
        student_id: i64,
        req: ApplyLeaveRequest,
    ) -> Result<crate::models::leaves::entities::LeaveApplication> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            student_id: Set(student_id),
            leave_type: Set(req.leave_type.to_string()),
            half_day_session: Set(req.half_day_session.map(|s| s.to_string())),
            start_date: Set(req.start_date),
            end_date: Set(req.end_date),
            reason: Set(req.reason),
            attachment_token: Set(req.attachment_token),
            status: Set(LeaveStatus::Pending.to_string()),
            applied_at: Set(now),
            ..Default::default()
        };

        let result = model.insert(&self.db).await.map_err(|e| {
            LeaveSystemError::database_operation(format!("创建请假申请失败: {e}"))
        })?;

        Ok(result.into_leave_application())
    }

    /// 通过 ID 获取请假申请
    pub async fn get_leave_application_by_id_impl(
        &self,
        id: i64,
    ) -> Result<Option<crate::models::leaves::entities::LeaveApplication>> {
        let result = LeaveApplications::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| {
                LeaveSystemError::database_operation(format!("查询请假申请失败: {e}"))
            })?;

        Ok(result.map(|m| m.into_leave_application()))
    }

    /// 学生请假历史，按申请时间倒序
    pub async fn list_leave_applications_by_student_impl(
        &self,
        student_id: i64,
    ) -> Result<Vec<crate::models::leaves::entities::LeaveApplication>> {
        let rows = LeaveApplications::find()
            .filter(Column::StudentId.eq(student_id))
            .order_by_desc(Column::AppliedAt)
            .all(&self.db)
            .await
            .map_err(|e| {
                LeaveSystemError::database_operation(format!("查询请假历史失败: {e}"))
            })?;

        Ok(rows.into_iter().map(|m| m.into_leave_application()).collect())
    }

    /// 待审批申请，附学生信息，按申请时间正序
    pub async fn list_pending_leave_applications_impl(
        &self,
    ) -> Result<Vec<LeaveApplicationWithStudent>> {
        let rows = LeaveApplications::find()
            .filter(Column::Status.eq(LeaveStatus::Pending.to_string()))
            .order_by_asc(Column::AppliedAt)
            .find_also_related(Students)
            .all(&self.db)
            .await
            .map_err(|e| {
                LeaveSystemError::database_operation(format!("查询待审批申请失败: {e}"))
            })?;

        Ok(rows
            .into_iter()
            .map(|(app, student)| {
                let (student_name, student_usn) = student
                    .map(|s| (s.name, s.usn))
                    .unwrap_or_default();
                LeaveApplicationWithStudent {
                    application: app.into_leave_application(),
                    student_name,
                    student_usn,
                }
            })
            .collect())
    }

    /// 近期已处理申请，附学生信息，按处理时间倒序
    pub async fn list_processed_leave_applications_impl(
        &self,
        limit: u64,
    ) -> Result<Vec<LeaveApplicationWithStudent>> {
        let rows = LeaveApplications::find()
            .filter(Column::Status.ne(LeaveStatus::Pending.to_string()))
            .order_by_desc(Column::ProcessedAt)
            .limit(limit)
            .find_also_related(Students)
            .all(&self.db)
            .await
            .map_err(|e| {
                LeaveSystemError::database_operation(format!("查询已处理申请失败: {e}"))
            })?;

        Ok(rows
            .into_iter()
            .map(|(app, student)| {
                let (student_name, student_usn) = student
                    .map(|s| (s.name, s.usn))
                    .unwrap_or_default();
                LeaveApplicationWithStudent {
                    application: app.into_leave_application(),
                    student_name,
                    student_usn,
                }
            })
            .collect())
    }

    /// 审批通过
    ///
    /// pending→approved 的条件更新与全天假的余额扣减放在同一事务中：
    /// WHERE 子句限定 status = 'pending'，并发的第二次审批命中 0 行，
    /// 返回 AlreadyProcessed 而不会二次扣减。
    pub async fn approve_leave_application_impl(
        &self,
        id: i64,
        processed_by: &str,
    ) -> Result<LeaveTransition> {
        let txn = self.db.begin().await.map_err(|e| {
            LeaveSystemError::database_operation(format!("开启审批事务失败: {e}"))
        })?;

        let Some(application) = LeaveApplications::find_by_id(id)
            .one(&txn)
            .await
            .map_err(|e| {
                LeaveSystemError::database_operation(format!("查询请假申请失败: {e}"))
            })?
        else {
            return Ok(LeaveTransition::NotFound);
        };

        let now = chrono::Utc::now().timestamp();

        let update = LeaveApplications::update_many()
            .col_expr(
                Column::Status,
                sea_orm::sea_query::Expr::value(LeaveStatus::Approved.to_string()),
            )
            .col_expr(Column::ProcessedAt, sea_orm::sea_query::Expr::value(now))
            .col_expr(
                Column::ProcessedBy,
                sea_orm::sea_query::Expr::value(processed_by),
            )
            .filter(Column::Id.eq(id))
            .filter(Column::Status.eq(LeaveStatus::Pending.to_string()))
            .exec(&txn)
            .await
            .map_err(|e| {
                LeaveSystemError::database_operation(format!("更新申请状态失败: {e}"))
            })?;

        if update.rows_affected == 0 {
            return Ok(LeaveTransition::AlreadyProcessed);
        }

        // 全天假扣减当前学期余额；半天假不动余额
        if application.leave_type == LeaveType::Full.to_string() {
            let days = day_span(application.start_date, application.end_date) as i32;

            let Some(student) = Students::find_by_id(application.student_id)
                .one(&txn)
                .await
                .map_err(|e| {
                    LeaveSystemError::database_operation(format!("查询学生失败: {e}"))
                })?
            else {
                return Err(LeaveSystemError::not_found(format!(
                    "请假申请 {id} 对应的学生不存在"
                )));
            };

            Self::apply_leave_days_on(&txn, application.student_id, student.semester, days)
                .await?;
        }

        txn.commit().await.map_err(|e| {
            LeaveSystemError::database_operation(format!("提交审批事务失败: {e}"))
        })?;

        Ok(LeaveTransition::Applied)
    }

    /// 驳回
    ///
    /// 同样的条件更新保护，不涉及余额。
    pub async fn reject_leave_application_impl(
        &self,
        id: i64,
        processed_by: &str,
        rejection_reason: Option<String>,
    ) -> Result<LeaveTransition> {
        let exists = LeaveApplications::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| {
                LeaveSystemError::database_operation(format!("查询请假申请失败: {e}"))
            })?;

        if exists.is_none() {
            return Ok(LeaveTransition::NotFound);
        }

        let now = chrono::Utc::now().timestamp();

        let update = LeaveApplications::update_many()
            .col_expr(
                Column::Status,
                sea_orm::sea_query::Expr::value(LeaveStatus::Rejected.to_string()),
            )
            .col_expr(Column::ProcessedAt, sea_orm::sea_query::Expr::value(now))
            .col_expr(
                Column::ProcessedBy,
                sea_orm::sea_query::Expr::value(processed_by),
            )
            .col_expr(
                Column::RejectionReason,
                sea_orm::sea_query::Expr::value(rejection_reason),
            )
            .filter(Column::Id.eq(id))
            .filter(Column::Status.eq(LeaveStatus::Pending.to_string()))
            .exec(&self.db)
            .await
            .map_err(|e| {
                LeaveSystemError::database_operation(format!("更新申请状态失败: {e}"))
            })?;

        if update.rows_affected == 0 {
            return Ok(LeaveTransition::AlreadyProcessed);
        }

        Ok(LeaveTransition::Applied)
    }
}
