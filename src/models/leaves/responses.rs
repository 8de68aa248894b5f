use serde::Serialize;
use ts_rs::TS;

use super::entities::{LeaveApplication, SpecialLeaveRequest};

// 待审批条目：申请附带学生姓名与 USN，供系主任列表展示
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/leave.ts")]
pub struct LeaveApplicationWithStudent {
    #[serde(flatten)]
    #[ts(flatten)]
    pub application: LeaveApplication,
    pub student_name: String,
    pub student_usn: String,
}

#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/leave.ts")]
pub struct SpecialLeaveWithStudent {
    #[serde(flatten)]
    #[ts(flatten)]
    pub request: SpecialLeaveRequest,
    pub student_name: String,
    pub student_usn: String,
}

// 申请提交响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/leave.ts")]
pub struct ApplyLeaveResponse {
    pub application_id: i64,
}
