use super::SeaOrmStorage;
use crate::entity::prelude::{SpecialLeaveRequests, Students};
use crate::entity::special_leave_requests::{ActiveModel, Column};
use crate::errors::{LeaveSystemError, Result};
use crate::models::leaves::{
    entities::{LeaveStatus, LeaveTransition, SpecialLeaveRequest},
    requests::SpecialLeaveRequestBody,
    responses::SpecialLeaveWithStudent,
};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 提交特殊请假申请
    pub async fn create_special_leave_request_impl(
        &self,
        student_id: i64,
        req: SpecialLeaveRequestBody,
    ) -> Result<SpecialLeaveRequest> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            student_id: Set(student_id),
            reason: Set(req.reason),
            explanation: Set(req.explanation),
            attachment_token: Set(req.attachment_token),
            status: Set(LeaveStatus::Pending.to_string()),
            applied_at: Set(now),
            ..Default::default()
        };

        let result = model.insert(&self.db).await.map_err(|e| {
            LeaveSystemError::database_operation(format!("创建特殊请假申请失败: {e}"))
        })?;

        Ok(result.into_special_leave_request())
    }

    /// 学生特殊请假历史，按申请时间倒序
    pub async fn list_special_leave_requests_by_student_impl(
        &self,
        student_id: i64,
    ) -> Result<Vec<SpecialLeaveRequest>> {
        let rows = SpecialLeaveRequests::find()
            .filter(Column::StudentId.eq(student_id))
            .order_by_desc(Column::AppliedAt)
            .all(&self.db)
            .await
            .map_err(|e| {
                LeaveSystemError::database_operation(format!("查询特殊请假历史失败: {e}"))
            })?;

        Ok(rows
            .into_iter()
            .map(|m| m.into_special_leave_request())
            .collect())
    }

    /// 待审批特殊请假，附学生信息，按申请时间正序
    pub async fn list_pending_special_leave_requests_impl(
        &self,
    ) -> Result<Vec<SpecialLeaveWithStudent>> {
        let rows = SpecialLeaveRequests::find()
            .filter(Column::Status.eq(LeaveStatus::Pending.to_string()))
            .order_by_asc(Column::AppliedAt)
            .find_also_related(Students)
            .all(&self.db)
            .await
            .map_err(|e| {
                LeaveSystemError::database_operation(format!("查询待审批特殊请假失败: {e}"))
            })?;

        Ok(rows
            .into_iter()
            .map(|(req, student)| {
                let (student_name, student_usn) =
                    student.map(|s| (s.name, s.usn)).unwrap_or_default();
                SpecialLeaveWithStudent {
                    request: req.into_special_leave_request(),
                    student_name,
                    student_usn,
                }
            })
            .collect())
    }

    /// 审批通过特殊请假（不扣减余额）
    pub async fn approve_special_leave_request_impl(
        &self,
        id: i64,
        processed_by: &str,
    ) -> Result<LeaveTransition> {
        self.transition_special_leave(id, LeaveStatus::Approved, processed_by, None)
            .await
    }

    /// 驳回特殊请假
    pub async fn reject_special_leave_request_impl(
        &self,
        id: i64,
        processed_by: &str,
        rejection_reason: Option<String>,
    ) -> Result<LeaveTransition> {
        self.transition_special_leave(id, LeaveStatus::Rejected, processed_by, rejection_reason)
            .await
    }

    /// 受保护的 pending→approved/rejected 转移
    async fn transition_special_leave(
        &self,
        id: i64,
        target: LeaveStatus,
        processed_by: &str,
        rejection_reason: Option<String>,
    ) -> Result<LeaveTransition> {
        let exists = SpecialLeaveRequests::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| {
                LeaveSystemError::database_operation(format!("查询特殊请假申请失败: {e}"))
            })?;

        if exists.is_none() {
            return Ok(LeaveTransition::NotFound);
        }

        let now = chrono::Utc::now().timestamp();

        let mut update = SpecialLeaveRequests::update_many()
            .col_expr(
                Column::Status,
                sea_orm::sea_query::Expr::value(target.to_string()),
            )
            .col_expr(Column::ProcessedAt, sea_orm::sea_query::Expr::value(now))
            .col_expr(
                Column::ProcessedBy,
                sea_orm::sea_query::Expr::value(processed_by),
            );

        if target == LeaveStatus::Rejected {
            update = update.col_expr(
                Column::RejectionReason,
                sea_orm::sea_query::Expr::value(rejection_reason),
            );
        }

        let result = update
            .filter(Column::Id.eq(id))
            .filter(Column::Status.eq(LeaveStatus::Pending.to_string()))
            .exec(&self.db)
            .await
            .map_err(|e| {
                LeaveSystemError::database_operation(format!("更新特殊请假状态失败: {e}"))
            })?;

        if result.rows_affected == 0 {
            return Ok(LeaveTransition::AlreadyProcessed);
        }

        Ok(LeaveTransition::Applied)
    }
}
