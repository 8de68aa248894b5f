use std::sync::Arc;

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

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 学生管理方法
    // 创建学生档案
    async fn create_student(&self, student: CreateStudentRequest) -> Result<Student>;
    // 通过ID获取学生信息
    async fn get_student_by_id(&self, id: i64) -> Result<Option<Student>>;
    // 通过USN获取学生信息
    async fn get_student_by_usn(&self, usn: &str) -> Result<Option<Student>>;
    // 分页列出学生（附当前学期请假余额）
    async fn list_students_with_pagination(
        &self,
        query: StudentListQuery,
    ) -> Result<StudentListResponse>;
    // 更新学生信息
    async fn update_student(
        &self,
        id: i64,
        update: UpdateStudentRequest,
    ) -> Result<Option<Student>>;
    // 更新学生密码
    async fn update_student_password(&self, id: i64, password_hash: &str) -> Result<bool>;

    /// 系主任管理方法
    // 创建系主任账号
    async fn create_hod(&self, hod: CreateHodRequest) -> Result<Hod>;
    // 通过ID获取系主任信息
    async fn get_hod_by_id(&self, id: i64) -> Result<Option<Hod>>;
    // 通过EID获取系主任信息
    async fn get_hod_by_eid(&self, eid: &str) -> Result<Option<Hod>>;
    // 统计系主任数量
    async fn count_hods(&self) -> Result<u64>;
    // 更新系主任密码
    async fn update_hod_password(&self, id: i64, password_hash: &str) -> Result<bool>;

    /// 密码重置令牌方法（按角色分发到对应表）
    // 写入重置令牌及过期时间
    async fn set_reset_token(
        &self,
        role: &UserRole,
        user_id: i64,
        token: &str,
        expires_at: i64,
    ) -> Result<bool>;
    // 通过令牌查找用户，返回 (用户ID, 过期时间)
    async fn find_user_by_reset_token(
        &self,
        role: &UserRole,
        token: &str,
    ) -> Result<Option<(i64, i64)>>;
    // 清除重置令牌
    async fn clear_reset_token(&self, role: &UserRole, user_id: i64) -> Result<bool>;

    /// 请假申请方法
    // 提交请假申请
    async fn create_leave_application(
        &self,
        student_id: i64,
        request: ApplyLeaveRequest,
    ) -> Result<LeaveApplication>;
    // 通过ID获取请假申请
    async fn get_leave_application_by_id(&self, id: i64) -> Result<Option<LeaveApplication>>;
    // 学生请假历史，按申请时间倒序
    async fn list_leave_applications_by_student(
        &self,
        student_id: i64,
    ) -> Result<Vec<LeaveApplication>>;
    // 待审批申请，附学生信息，按申请时间正序
    async fn list_pending_leave_applications(&self) -> Result<Vec<LeaveApplicationWithStudent>>;
    // 近期已处理申请，附学生信息，按处理时间倒序
    async fn list_processed_leave_applications(
        &self,
        limit: u64,
    ) -> Result<Vec<LeaveApplicationWithStudent>>;
    // 审批通过：受保护的 pending→approved 转移，事务内扣减余额
    async fn approve_leave_application(
        &self,
        id: i64,
        processed_by: &str,
    ) -> Result<LeaveTransition>;
    // 驳回：受保护的 pending→rejected 转移，不动余额
    async fn reject_leave_application(
        &self,
        id: i64,
        processed_by: &str,
        rejection_reason: Option<String>,
    ) -> Result<LeaveTransition>;

    /// 请假余额方法
    // 获取学生某学期余额
    async fn get_leave_balance(
        &self,
        student_id: i64,
        semester: i32,
    ) -> Result<Option<LeaveBalance>>;
    // 获取余额，不存在时按默认额度建档
    async fn ensure_leave_balance(&self, student_id: i64, semester: i32) -> Result<LeaveBalance>;

    /// 特殊请假方法
    // 提交特殊请假申请
    async fn create_special_leave_request(
        &self,
        student_id: i64,
        request: SpecialLeaveRequestBody,
    ) -> Result<SpecialLeaveRequest>;
    // 学生特殊请假历史
    async fn list_special_leave_requests_by_student(
        &self,
        student_id: i64,
    ) -> Result<Vec<SpecialLeaveRequest>>;
    // 待审批特殊请假
    async fn list_pending_special_leave_requests(&self) -> Result<Vec<SpecialLeaveWithStudent>>;
    // 审批通过特殊请假（不扣减余额）
    async fn approve_special_leave_request(
        &self,
        id: i64,
        processed_by: &str,
    ) -> Result<LeaveTransition>;
    // 驳回特殊请假
    async fn reject_special_leave_request(
        &self,
        id: i64,
        processed_by: &str,
        rejection_reason: Option<String>,
    ) -> Result<LeaveTransition>;

    /// 学业记录方法
    // 创建科目
    async fn create_subject(&self, subject: Subject) -> Result<Subject>;
    // 通过ID获取科目
    async fn get_subject_by_id(&self, id: i64) -> Result<Option<Subject>>;
    // 录入/更新成绩（等级与绩点由服务层算好传入）
    async fn upsert_student_mark(
        &self,
        student_id: i64,
        request: UpsertMarkRequest,
        grade: &str,
        grade_points: f64,
    ) -> Result<StudentMark>;
    // 学生全部成绩
    async fn list_student_marks(&self, student_id: i64) -> Result<Vec<StudentMark>>;
    // 重算学期绩点并落库
    async fn recompute_semester_performance(
        &self,
        student_id: i64,
        semester: i32,
    ) -> Result<SemesterPerformance>;
    // 学生各学期绩点
    async fn list_semester_performance(&self, student_id: i64) -> Result<Vec<SemesterPerformance>>;
    // 录入/更新考勤（百分比由服务层算好传入）
    async fn upsert_attendance_record(
        &self,
        student_id: i64,
        request: UpsertAttendanceRequest,
        percentage: f64,
    ) -> Result<AttendanceRecord>;
    // 学生全部考勤记录
    async fn list_attendance_records(&self, student_id: i64) -> Result<Vec<AttendanceRecord>>;

    /// 消息方法
    // 发送消息
    async fn create_message(
        &self,
        sender_id: i64,
        sender_role: &UserRole,
        request: SendMessageRequest,
    ) -> Result<Message>;
    // 学生相关消息（收+发），按发送时间倒序
    async fn list_messages_for_student(&self, student_id: i64) -> Result<Vec<Message>>;
    // 全部消息（系主任视图），按发送时间倒序
    async fn list_all_messages(&self) -> Result<Vec<Message>>;
    // 收件人标记已读（只生效一次）
    async fn mark_message_read(
        &self,
        message_id: i64,
        receiver_id: i64,
        receiver_role: &UserRole,
    ) -> Result<bool>;
    // 收件人未读数
    async fn count_unread_messages(
        &self,
        receiver_id: i64,
        receiver_role: &UserRole,
    ) -> Result<u64>;

    /// 附件方法
    // 登记上传的附件
    #[allow(clippy::too_many_arguments)]
    async fn create_attachment(
        &self,
        download_token: &str,
        original_name: &str,
        stored_name: &str,
        file_size: i64,
        file_type: &str,
        uploader_id: i64,
        uploader_role: &UserRole,
    ) -> Result<Attachment>;
    // 通过下载令牌获取附件信息
    async fn get_attachment_by_token(&self, token: &str) -> Result<Option<Attachment>>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
