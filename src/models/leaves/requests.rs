use chrono::NaiveDate;
use serde::Deserialize;
use ts_rs::TS;

use super::entities::{HalfDaySession, LeaveType};

// 请假申请提交请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/leave.ts")]
pub struct ApplyLeaveRequest {
    pub leave_type: LeaveType,
    /// 半天假必填
    pub half_day_session: Option<HalfDaySession>,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub reason: String,
    pub attachment_token: Option<String>,
}

// 特殊请假申请提交请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/leave.ts")]
pub struct SpecialLeaveRequestBody {
    pub reason: String,
    pub explanation: String,
    pub attachment_token: Option<String>,
}

// 驳回请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/leave.ts")]
pub struct RejectLeaveRequest {
    pub rejection_reason: Option<String>,
}
