use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 用户角色
#[derive(Debug, Clone, Serialize, PartialEq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/auth.ts")]
pub enum UserRole {
    Student, // 学生
    Hod,     // 系主任
}

impl UserRole {
    pub const STUDENT: &'static str = "student";
    pub const HOD: &'static str = "hod";

    pub fn hod_roles() -> &'static [&'static UserRole] {
        &[&Self::Hod]
    }
    pub fn student_roles() -> &'static [&'static UserRole] {
        &[&Self::Student]
    }
    pub fn all_roles() -> &'static [&'static UserRole] {
        &[&Self::Student, &Self::Hod]
    }
}

impl<'de> Deserialize<'de> for UserRole {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            UserRole::STUDENT => Ok(UserRole::Student),
            UserRole::HOD => Ok(UserRole::Hod),
            _ => Err(serde::de::Error::custom(format!(
                "无效的用户角色: '{s}'. 支持的角色: student, hod"
            ))),
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserRole::Student => write!(f, "{}", UserRole::STUDENT),
            UserRole::Hod => write!(f, "{}", UserRole::HOD),
        }
    }
}

impl std::str::FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "student" => Ok(UserRole::Student),
            "hod" => Ok(UserRole::Hod),
            _ => Err(format!("Invalid user role: {s}")),
        }
    }
}

// 认证通过的用户，由 RequireJWT 中间件注入请求扩展
// 学生与系主任分表存储，这里统一为一个视图
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/auth.ts")]
pub struct AuthenticatedUser {
    pub id: i64,
    /// 学生为 USN，系主任为 EID
    pub identifier: String,
    pub name: String,
    pub email: Option<String>,
    pub role: UserRole,
    pub department: String,
    /// 仅学生有学期
    pub semester: Option<i32>,
}

impl AuthenticatedUser {
    pub fn from_student(student: &crate::models::students::entities::Student) -> Self {
        Self {
            id: student.id,
            identifier: student.usn.clone(),
            name: student.name.clone(),
            email: student.email.clone(),
            role: UserRole::Student,
            department: student.department.clone(),
            semester: Some(student.semester),
        }
    }

    pub fn from_hod(hod: &crate::models::students::entities::Hod) -> Self {
        Self {
            id: hod.id,
            identifier: hod.eid.clone(),
            name: hod.name.clone(),
            email: hod.email.clone(),
            role: UserRole::Hod,
            department: hod.department.clone(),
            semester: None,
        }
    }

    // 生成 token 对（access + refresh）
    pub async fn generate_token_pair(
        &self,
        refresh_token_expiry: Option<chrono::TimeDelta>,
    ) -> Result<crate::utils::jwt::TokenPair, String> {
        crate::utils::jwt::JwtUtils::generate_token_pair(
            self.id,
            &self.role.to_string(),
            refresh_token_expiry,
        )
        .map_err(|e| format!("生成 token 对失败: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_role_round_trip() {
        assert_eq!(UserRole::from_str("student").unwrap(), UserRole::Student);
        assert_eq!(UserRole::from_str("hod").unwrap(), UserRole::Hod);
        assert_eq!(UserRole::Hod.to_string(), "hod");
        assert!(UserRole::from_str("admin").is_err());
    }
}
