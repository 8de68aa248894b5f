use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 考试类型
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/academic.ts")]
pub enum ExamType {
    Internal,
    External,
    Practical,
}

impl std::fmt::Display for ExamType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExamType::Internal => write!(f, "internal"),
            ExamType::External => write!(f, "external"),
            ExamType::Practical => write!(f, "practical"),
        }
    }
}

impl std::str::FromStr for ExamType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "internal" => Ok(ExamType::Internal),
            "external" => Ok(ExamType::External),
            "practical" => Ok(ExamType::Practical),
            _ => Err(format!("Invalid exam type: {s}")),
        }
    }
}

// 学期结论状态
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/academic.ts")]
pub enum PerformanceStatus {
    Pass,
    Fail,
    Pending,
}

impl std::fmt::Display for PerformanceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PerformanceStatus::Pass => write!(f, "pass"),
            PerformanceStatus::Fail => write!(f, "fail"),
            PerformanceStatus::Pending => write!(f, "pending"),
        }
    }
}

impl std::str::FromStr for PerformanceStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pass" => Ok(PerformanceStatus::Pass),
            "fail" => Ok(PerformanceStatus::Fail),
            "pending" => Ok(PerformanceStatus::Pending),
            _ => Err(format!("Invalid performance status: {s}")),
        }
    }
}

// 科目实体
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/academic.ts")]
pub struct Subject {
    pub id: i64,
    pub code: String,
    pub name: String,
    pub semester: i32,
    pub department: String,
    pub credits: i32,
    pub total_marks: i32,
}

// 学生成绩实体
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/academic.ts")]
pub struct StudentMark {
    pub id: i64,
    pub student_id: i64,
    pub subject_id: i64,
    pub semester: i32,
    pub marks_obtained: f64,
    pub total_marks: f64,
    pub grade: String,
    pub grade_points: f64,
    pub exam_type: ExamType,
    pub exam_date: NaiveDate,
}

// 考勤记录实体
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/academic.ts")]
pub struct AttendanceRecord {
    pub id: i64,
    pub student_id: i64,
    pub subject_id: i64,
    pub semester: i32,
    pub total_classes: i32,
    pub attended_classes: i32,
    pub attendance_percentage: f64,
    pub month: String,
    pub academic_year: String,
}

// 学期绩点实体
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/academic.ts")]
pub struct SemesterPerformance {
    pub id: i64,
    pub student_id: i64,
    pub semester: i32,
    pub sgpa: f64,
    pub cgpa: f64,
    pub total_credits: i32,
    pub earned_credits: i32,
    pub status: PerformanceStatus,
    pub academic_year: String,
}
