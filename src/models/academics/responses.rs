use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::entities::StudentMark;

// 按学期分组的成绩，附 SGPA
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/academic.ts")]
pub struct SemesterMarksGroup {
    pub semester: i32,
    pub marks: Vec<StudentMark>,
    pub sgpa: f64,
}
