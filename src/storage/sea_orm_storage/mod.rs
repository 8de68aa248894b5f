//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod academics;
mod attachments;
mod hods;
mod leave_applications;
mod leave_balances;
mod messages;
mod special_leaves;
mod students;

use crate::config::AppConfig;
use crate::errors::{LeaveSystemError, Result};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 创建新的 SeaORM 存储实例
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        Self::new_with_url(&config.database.url).await
    }

    /// 使用指定连接 URL 创建存储实例（集成测试用）
    pub async fn new_with_url(url: &str) -> Result<Self> {
        let config = AppConfig::get();
        let db_url = Self::build_database_url(url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite://") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| LeaveSystemError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| LeaveSystemError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.database.pool_size)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| LeaveSystemError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.database.pool_size)
            .min_connections(5)
            .connect_timeout(Duration::from_secs(config.database.timeout))
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| LeaveSystemError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite://") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") || url == ":memory:" {
            Ok(format!("sqlite://{}?mode=rwc", url))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(LeaveSystemError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

// Storage trait 实现
use crate::models::{
    academics::{
        entities::{AttendanceRecord, SemesterPerformance, StudentMark, Subject},
        requests::{UpsertAttendanceRequest, UpsertMarkRequest},
    },
    attachments::entities::Attachment,
    auth::entities::UserRole,
    leaves::{
        entities::{LeaveApplication, LeaveBalance, LeaveTransition, SpecialLeaveRequest},
        requests::{ApplyLeaveRequest, SpecialLeaveRequestBody},
        responses::{LeaveApplicationWithStudent, SpecialLeaveWithStudent},
    },
    messages::{entities::Message, requests::SendMessageRequest},
    students::{
        entities::{Hod, Student},
        requests::{CreateHodRequest, CreateStudentRequest, StudentListQuery, UpdateStudentRequest},
        responses::StudentListResponse,
    },
};
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 学生模块
    async fn create_student(&self, student: CreateStudentRequest) -> Result<Student> {
        self.create_student_impl(student).await
    }

    async fn get_student_by_id(&self, id: i64) -> Result<Option<Student>> {
        self.get_student_by_id_impl(id).await
    }

    async fn get_student_by_usn(&self, usn: &str) -> Result<Option<Student>> {
        self.get_student_by_usn_impl(usn).await
    }

    async fn list_students_with_pagination(
        &self,
        query: StudentListQuery,
    ) -> Result<StudentListResponse> {
        self.list_students_with_pagination_impl(query).await
    }

    async fn update_student(
        &self,
        id: i64,
        update: UpdateStudentRequest,
    ) -> Result<Option<Student>> {
        self.update_student_impl(id, update).await
    }

    async fn update_student_password(&self, id: i64, password_hash: &str) -> Result<bool> {
        self.update_student_password_impl(id, password_hash).await
    }

    // 系主任模块
    async fn create_hod(&self, hod: CreateHodRequest) -> Result<Hod> {
        self.create_hod_impl(hod).await
    }

    async fn get_hod_by_id(&self, id: i64) -> Result<Option<Hod>> {
        self.get_hod_by_id_impl(id).await
    }

    async fn get_hod_by_eid(&self, eid: &str) -> Result<Option<Hod>> {
        self.get_hod_by_eid_impl(eid).await
    }

    async fn count_hods(&self) -> Result<u64> {
        self.count_hods_impl().await
    }

    async fn update_hod_password(&self, id: i64, password_hash: &str) -> Result<bool> {
        self.update_hod_password_impl(id, password_hash).await
    }

    // 密码重置令牌
    async fn set_reset_token(
        &self,
        role: &UserRole,
        user_id: i64,
        token: &str,
        expires_at: i64,
    ) -> Result<bool> {
        self.set_reset_token_impl(role, user_id, token, expires_at)
            .await
    }

    async fn find_user_by_reset_token(
        &self,
        role: &UserRole,
        token: &str,
    ) -> Result<Option<(i64, i64)>> {
        self.find_user_by_reset_token_impl(role, token).await
    }

    async fn clear_reset_token(&self, role: &UserRole, user_id: i64) -> Result<bool> {
        self.clear_reset_token_impl(role, user_id).await
    }

    // 请假申请模块
    async fn create_leave_application(
        &self,
        student_id: i64,
        request: ApplyLeaveRequest,
    ) -> Result<LeaveApplication> {
        self.create_leave_application_impl(student_id, request)
            .await
    }

    async fn get_leave_application_by_id(&self, id: i64) -> Result<Option<LeaveApplication>> {
        self.get_leave_application_by_id_impl(id).await
    }

    async fn list_leave_applications_by_student(
        &self,
        student_id: i64,
    ) -> Result<Vec<LeaveApplication>> {
        self.list_leave_applications_by_student_impl(student_id)
            .await
    }

    async fn list_pending_leave_applications(&self) -> Result<Vec<LeaveApplicationWithStudent>> {
        self.list_pending_leave_applications_impl().await
    }

    async fn list_processed_leave_applications(
        &self,
        limit: u64,
    ) -> Result<Vec<LeaveApplicationWithStudent>> {
        self.list_processed_leave_applications_impl(limit).await
    }

    async fn approve_leave_application(
        &self,
        id: i64,
        processed_by: &str,
    ) -> Result<LeaveTransition> {
        self.approve_leave_application_impl(id, processed_by).await
    }

    async fn reject_leave_application(
        &self,
        id: i64,
        processed_by: &str,
        rejection_reason: Option<String>,
    ) -> Result<LeaveTransition> {
        self.reject_leave_application_impl(id, processed_by, rejection_reason)
            .await
    }

    // 请假余额模块
    async fn get_leave_balance(
        &self,
        student_id: i64,
        semester: i32,
    ) -> Result<Option<LeaveBalance>> {
        self.get_leave_balance_impl(student_id, semester).await
    }

    async fn ensure_leave_balance(&self, student_id: i64, semester: i32) -> Result<LeaveBalance> {
        self.ensure_leave_balance_impl(student_id, semester).await
    }

    // 特殊请假模块
    async fn create_special_leave_request(
        &self,
        student_id: i64,
        request: SpecialLeaveRequestBody,
    ) -> Result<SpecialLeaveRequest> {
        self.create_special_leave_request_impl(student_id, request)
            .await
    }

    async fn list_special_leave_requests_by_student(
        &self,
        student_id: i64,
    ) -> Result<Vec<SpecialLeaveRequest>> {
        self.list_special_leave_requests_by_student_impl(student_id)
            .await
    }

    async fn list_pending_special_leave_requests(&self) -> Result<Vec<SpecialLeaveWithStudent>> {
        self.list_pending_special_leave_requests_impl().await
    }

    async fn approve_special_leave_request(
        &self,
        id: i64,
        processed_by: &str,
    ) -> Result<LeaveTransition> {
        self.approve_special_leave_request_impl(id, processed_by)
            .await
    }

    async fn reject_special_leave_request(
        &self,
        id: i64,
        processed_by: &str,
        rejection_reason: Option<String>,
    ) -> Result<LeaveTransition> {
        self.reject_special_leave_request_impl(id, processed_by, rejection_reason)
            .await
    }

    // 学业记录模块
    async fn create_subject(&self, subject: Subject) -> Result<Subject> {
        self.create_subject_impl(subject).await
    }

    async fn get_subject_by_id(&self, id: i64) -> Result<Option<Subject>> {
        self.get_subject_by_id_impl(id).await
    }

    async fn upsert_student_mark(
        &self,
        student_id: i64,
        request: UpsertMarkRequest,
        grade: &str,
        grade_points: f64,
    ) -> Result<StudentMark> {
        self.upsert_student_mark_impl(student_id, request, grade, grade_points)
            .await
    }

    async fn list_student_marks(&self, student_id: i64) -> Result<Vec<StudentMark>> {
        self.list_student_marks_impl(student_id).await
    }

    async fn recompute_semester_performance(
        &self,
        student_id: i64,
        semester: i32,
    ) -> Result<SemesterPerformance> {
        self.recompute_semester_performance_impl(student_id, semester)
            .await
    }

    async fn list_semester_performance(&self, student_id: i64) -> Result<Vec<SemesterPerformance>> {
        self.list_semester_performance_impl(student_id).await
    }

    async fn upsert_attendance_record(
        &self,
        student_id: i64,
        request: UpsertAttendanceRequest,
        percentage: f64,
    ) -> Result<AttendanceRecord> {
        self.upsert_attendance_record_impl(student_id, request, percentage)
            .await
    }

    async fn list_attendance_records(&self, student_id: i64) -> Result<Vec<AttendanceRecord>> {
        self.list_attendance_records_impl(student_id).await
    }

    // 消息模块
    async fn create_message(
        &self,
        sender_id: i64,
        sender_role: &UserRole,
        request: SendMessageRequest,
    ) -> Result<Message> {
        self.create_message_impl(sender_id, sender_role, request)
            .await
    }

    async fn list_messages_for_student(&self, student_id: i64) -> Result<Vec<Message>> {
        self.list_messages_for_student_impl(student_id).await
    }

    async fn list_all_messages(&self) -> Result<Vec<Message>> {
        self.list_all_messages_impl().await
    }

    async fn mark_message_read(
        &self,
        message_id: i64,
        receiver_id: i64,
        receiver_role: &UserRole,
    ) -> Result<bool> {
        self.mark_message_read_impl(message_id, receiver_id, receiver_role)
            .await
    }

    async fn count_unread_messages(
        &self,
        receiver_id: i64,
        receiver_role: &UserRole,
    ) -> Result<u64> {
        self.count_unread_messages_impl(receiver_id, receiver_role)
            .await
    }

    // 附件模块
    async fn create_attachment(
        &self,
        download_token: &str,
        original_name: &str,
        stored_name: &str,
        file_size: i64,
        file_type: &str,
        uploader_id: i64,
        uploader_role: &UserRole,
    ) -> Result<Attachment> {
        self.create_attachment_impl(
            download_token,
            original_name,
            stored_name,
            file_size,
            file_type,
            uploader_id,
            uploader_role,
        )
        .await
    }

    async fn get_attachment_by_token(&self, token: &str) -> Result<Option<Attachment>> {
        self.get_attachment_by_token_impl(token).await
    }
}
