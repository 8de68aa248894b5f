use crate::models::common::PaginationQuery;
use serde::Deserialize;
use ts_rs::TS;

// 学生列表查询参数（来自HTTP请求）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct StudentListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub semester: Option<i32>,
    pub search: Option<String>,
}

// 学生列表查询参数（用于存储层）
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct StudentListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub semester: Option<i32>,
    pub search: Option<String>,
}

impl From<StudentListParams> for StudentListQuery {
    fn from(params: StudentListParams) -> Self {
        Self {
            page: Some(params.pagination.page),
            size: Some(params.pagination.size),
            semester: params.semester,
            search: params.search,
        }
    }
}

// 学生建档请求（启动种子与数据导入用）
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct CreateStudentRequest {
    pub usn: String,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    /// 已经过 Argon2 哈希的密码
    pub password: String,
    pub semester: i32,
    pub department: String,
    pub cgpa: f64,
}

// 系主任建档请求（启动种子用）
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct CreateHodRequest {
    pub eid: String,
    pub name: String,
    pub email: Option<String>,
    /// 已经过 Argon2 哈希的密码
    pub password: String,
    pub department: String,
}

// 学生信息更新请求（系主任操作）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct UpdateStudentRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub semester: Option<i32>,
    pub cgpa: Option<f64>,
}
