use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 请假类型
#[derive(Debug, Clone, Copy, Serialize, PartialEq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/leave.ts")]
pub enum LeaveType {
    Full, // 全天假，扣减余额
    Half, // 半天假，不扣减余额
}

impl<'de> Deserialize<'de> for LeaveType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            "full" => Ok(LeaveType::Full),
            "half" => Ok(LeaveType::Half),
            _ => Err(serde::de::Error::custom(format!(
                "无效的请假类型: '{s}'. 支持的类型: full, half"
            ))),
        }
    }
}

impl std::fmt::Display for LeaveType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LeaveType::Full => write!(f, "full"),
            LeaveType::Half => write!(f, "half"),
        }
    }
}

impl std::str::FromStr for LeaveType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "full" => Ok(LeaveType::Full),
            "half" => Ok(LeaveType::Half),
            _ => Err(format!("Invalid leave type: {s}")),
        }
    }
}

// 半天假时段
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/leave.ts")]
pub enum HalfDaySession {
    Morning,
    Afternoon,
}

impl std::fmt::Display for HalfDaySession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HalfDaySession::Morning => write!(f, "morning"),
            HalfDaySession::Afternoon => write!(f, "afternoon"),
        }
    }
}

impl std::str::FromStr for HalfDaySession {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "morning" => Ok(HalfDaySession::Morning),
            "afternoon" => Ok(HalfDaySession::Afternoon),
            _ => Err(format!("Invalid half day session: {s}")),
        }
    }
}

// 申请状态
#[derive(Debug, Clone, Copy, Serialize, PartialEq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/leave.ts")]
pub enum LeaveStatus {
    Pending,
    Approved,
    Rejected,
}

impl<'de> Deserialize<'de> for LeaveStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            "pending" => Ok(LeaveStatus::Pending),
            "approved" => Ok(LeaveStatus::Approved),
            "rejected" => Ok(LeaveStatus::Rejected),
            _ => Err(serde::de::Error::custom(format!(
                "无效的申请状态: '{s}'. 支持的状态: pending, approved, rejected"
            ))),
        }
    }
}

impl std::fmt::Display for LeaveStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LeaveStatus::Pending => write!(f, "pending"),
            LeaveStatus::Approved => write!(f, "approved"),
            LeaveStatus::Rejected => write!(f, "rejected"),
        }
    }
}

impl std::str::FromStr for LeaveStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(LeaveStatus::Pending),
            "approved" => Ok(LeaveStatus::Approved),
            "rejected" => Ok(LeaveStatus::Rejected),
            _ => Err(format!("Invalid leave status: {s}")),
        }
    }
}

// 请假申请实体
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/leave.ts")]
pub struct LeaveApplication {
    pub id: i64,
    pub student_id: i64,
    pub leave_type: LeaveType,
    pub half_day_session: Option<HalfDaySession>,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub reason: String,
    pub attachment_token: Option<String>,
    pub status: LeaveStatus,
    pub rejection_reason: Option<String>,
    pub applied_at: chrono::DateTime<chrono::Utc>,
    pub processed_at: Option<chrono::DateTime<chrono::Utc>>,
    pub processed_by: Option<String>,
}

impl LeaveApplication {
    /// 计算申请跨越的天数（首尾均含，无结束日期记 1 天）
    pub fn day_span(&self) -> i64 {
        day_span(self.start_date, self.end_date)
    }
}

/// 首尾均含的天数计算
pub fn day_span(start: NaiveDate, end: Option<NaiveDate>) -> i64 {
    match end {
        Some(end) if end >= start => (end - start).num_days() + 1,
        _ => 1,
    }
}

// 审批/驳回的受保护状态转移结果
// 条件更新只命中 pending 行，重复处理不会二次生效
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LeaveTransition {
    /// 状态已更新
    Applied,
    /// 申请不存在
    NotFound,
    /// 已被处理过，本次操作未生效
    AlreadyProcessed,
}

// 特殊请假申请实体
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/leave.ts")]
pub struct SpecialLeaveRequest {
    pub id: i64,
    pub student_id: i64,
    pub reason: String,
    pub explanation: String,
    pub attachment_token: Option<String>,
    pub status: LeaveStatus,
    pub rejection_reason: Option<String>,
    pub applied_at: chrono::DateTime<chrono::Utc>,
    pub processed_at: Option<chrono::DateTime<chrono::Utc>>,
    pub processed_by: Option<String>,
}

// 请假余额实体
// remaining 始终由 total_allowed - taken 重新计算后写入，不做增量更新
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/leave.ts")]
pub struct LeaveBalance {
    pub id: i64,
    pub student_id: i64,
    pub semester: i32,
    pub total_allowed: i32,
    pub taken: i32,
    pub remaining: i32,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_day_span_inclusive() {
        assert_eq!(day_span(date(2025, 6, 2), Some(date(2025, 6, 2))), 1);
        assert_eq!(day_span(date(2025, 6, 2), Some(date(2025, 6, 4))), 3);
    }

    #[test]
    fn test_day_span_without_end_date() {
        assert_eq!(day_span(date(2025, 6, 2), None), 1);
    }

    #[test]
    fn test_day_span_inverted_range_counts_one() {
        // 结束日期早于开始日期时按单日处理，提交入口已拒绝这种请求
        assert_eq!(day_span(date(2025, 6, 4), Some(date(2025, 6, 2))), 1);
    }

    #[test]
    fn test_status_parsing() {
        use std::str::FromStr;
        assert_eq!(LeaveStatus::from_str("pending").unwrap(), LeaveStatus::Pending);
        assert_eq!(LeaveStatus::from_str("approved").unwrap(), LeaveStatus::Approved);
        assert_eq!(LeaveStatus::from_str("rejected").unwrap(), LeaveStatus::Rejected);
        assert!(LeaveStatus::from_str("cancelled").is_err());
    }

    #[test]
    fn test_leave_type_parsing() {
        use std::str::FromStr;
        assert_eq!(LeaveType::from_str("full").unwrap(), LeaveType::Full);
        assert_eq!(LeaveType::from_str("half").unwrap(), LeaveType::Half);
        assert!(LeaveType::from_str("quarter").is_err());
    }
}
