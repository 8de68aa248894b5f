use chrono::NaiveDate;
use serde::Deserialize;
use ts_rs::TS;

use super::entities::ExamType;

// 成绩录入/更新请求（系主任操作）
// grade 与 grade_points 由服务端按百分比计算，不接受客户端提交
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/academic.ts")]
pub struct UpsertMarkRequest {
    pub subject_id: i64,
    pub semester: i32,
    pub marks_obtained: f64,
    pub total_marks: f64,
    pub exam_type: ExamType,
    pub exam_date: NaiveDate,
}

// 考勤录入/更新请求（系主任操作）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/academic.ts")]
pub struct UpsertAttendanceRequest {
    pub subject_id: i64,
    pub semester: i32,
    pub total_classes: i32,
    pub attended_classes: i32,
    pub month: String,
    pub academic_year: String,
}
