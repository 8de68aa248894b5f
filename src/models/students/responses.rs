use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::entities::Student;
use crate::models::PaginationInfo;
use crate::models::academics::entities::{AttendanceRecord, SemesterPerformance};
use crate::models::academics::responses::SemesterMarksGroup;
use crate::models::leaves::entities::{LeaveApplication, LeaveBalance};

// 带余额的学生条目（列表用）
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct StudentWithBalance {
    #[serde(flatten)]
    #[ts(flatten)]
    pub student: Student,
    pub leave_balance: Option<LeaveBalance>,
}

// 学生列表响应
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct StudentListResponse {
    pub items: Vec<StudentWithBalance>,
    pub pagination: PaginationInfo,
}

// 学生详情响应：档案 + 余额 + 学业记录 + 请假历史
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct StudentDetailResponse {
    #[serde(flatten)]
    #[ts(flatten)]
    pub student: Student,
    pub leave_balance: Option<LeaveBalance>,
    pub semester_marks: Vec<SemesterMarksGroup>,
    pub attendance: Vec<AttendanceRecord>,
    pub performance: Vec<SemesterPerformance>,
    pub leave_history: Vec<LeaveApplication>,
}

// 学生本人档案响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct StudentProfileResponse {
    #[serde(flatten)]
    #[ts(flatten)]
    pub student: Student,
    pub leave_balance: Option<LeaveBalance>,
}
