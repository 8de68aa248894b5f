use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 创建学生表
        manager
            .create_table(
                Table::create()
                    .table(Students::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Students::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Students::Usn).string().not_null().unique_key())
                    .col(ColumnDef::new(Students::Name).string().not_null())
                    .col(ColumnDef::new(Students::Email).string().null().unique_key())
                    .col(ColumnDef::new(Students::Phone).string().null())
                    .col(ColumnDef::new(Students::PasswordHash).string().not_null())
                    .col(ColumnDef::new(Students::Semester).integer().not_null())
                    .col(ColumnDef::new(Students::Department).string().not_null())
                    .col(ColumnDef::new(Students::Cgpa).double().not_null().default(0.0))
                    .col(ColumnDef::new(Students::ResetToken).string().null())
                    .col(ColumnDef::new(Students::ResetExpires).big_integer().null())
                    .col(ColumnDef::new(Students::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Students::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建系主任表
        manager
            .create_table(
                Table::create()
                    .table(Hods::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Hods::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Hods::Eid).string().not_null().unique_key())
                    .col(ColumnDef::new(Hods::Name).string().not_null())
                    .col(ColumnDef::new(Hods::Email).string().null().unique_key())
                    .col(ColumnDef::new(Hods::PasswordHash).string().not_null())
                    .col(ColumnDef::new(Hods::Department).string().not_null())
                    .col(ColumnDef::new(Hods::ResetToken).string().null())
                    .col(ColumnDef::new(Hods::ResetExpires).big_integer().null())
                    .col(ColumnDef::new(Hods::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Hods::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建请假申请表
        manager
            .create_table(
                Table::create()
                    .table(LeaveApplications::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(LeaveApplications::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(LeaveApplications::StudentId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(LeaveApplications::LeaveType).string().not_null())
                    .col(ColumnDef::new(LeaveApplications::HalfDaySession).string().null())
                    .col(ColumnDef::new(LeaveApplications::StartDate).date().not_null())
                    .col(ColumnDef::new(LeaveApplications::EndDate).date().null())
                    .col(ColumnDef::new(LeaveApplications::Reason).text().not_null())
                    .col(ColumnDef::new(LeaveApplications::AttachmentToken).string().null())
                    .col(
                        ColumnDef::new(LeaveApplications::Status)
                            .string()
                            .not_null()
                            .default("pending"),
                    )
                    .col(ColumnDef::new(LeaveApplications::RejectionReason).text().null())
                    .col(
                        ColumnDef::new(LeaveApplications::AppliedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(LeaveApplications::ProcessedAt)
                            .big_integer()
                            .null(),
                    )
                    .col(ColumnDef::new(LeaveApplications::ProcessedBy).string().null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(LeaveApplications::Table, LeaveApplications::StudentId)
                            .to(Students::Table, Students::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建请假余额表
        manager
            .create_table(
                Table::create()
                    .table(LeaveBalances::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(LeaveBalances::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(LeaveBalances::StudentId).big_integer().not_null())
                    .col(ColumnDef::new(LeaveBalances::Semester).integer().not_null())
                    .col(
                        ColumnDef::new(LeaveBalances::TotalAllowed)
                            .integer()
                            .not_null()
                            .default(10),
                    )
                    .col(ColumnDef::new(LeaveBalances::Taken).integer().not_null().default(0))
                    .col(
                        ColumnDef::new(LeaveBalances::Remaining)
                            .integer()
                            .not_null()
                            .default(10),
                    )
                    .col(ColumnDef::new(LeaveBalances::UpdatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(LeaveBalances::Table, LeaveBalances::StudentId)
                            .to(Students::Table, Students::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_leave_balances_student_semester")
                    .table(LeaveBalances::Table)
                    .col(LeaveBalances::StudentId)
                    .col(LeaveBalances::Semester)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // 创建特殊请假申请表
        manager
            .create_table(
                Table::create()
                    .table(SpecialLeaveRequests::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SpecialLeaveRequests::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(SpecialLeaveRequests::StudentId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(SpecialLeaveRequests::Reason).string().not_null())
                    .col(
                        ColumnDef::new(SpecialLeaveRequests::Explanation)
                            .text()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SpecialLeaveRequests::AttachmentToken)
                            .string()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(SpecialLeaveRequests::Status)
                            .string()
                            .not_null()
                            .default("pending"),
                    )
                    .col(
                        ColumnDef::new(SpecialLeaveRequests::RejectionReason)
                            .text()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(SpecialLeaveRequests::AppliedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SpecialLeaveRequests::ProcessedAt)
                            .big_integer()
                            .null(),
                    )
                    .col(ColumnDef::new(SpecialLeaveRequests::ProcessedBy).string().null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(SpecialLeaveRequests::Table, SpecialLeaveRequests::StudentId)
                            .to(Students::Table, Students::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建科目表
        manager
            .create_table(
                Table::create()
                    .table(Subjects::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Subjects::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Subjects::Code).string().not_null().unique_key())
                    .col(ColumnDef::new(Subjects::Name).string().not_null())
                    .col(ColumnDef::new(Subjects::Semester).integer().not_null())
                    .col(ColumnDef::new(Subjects::Department).string().not_null())
                    .col(ColumnDef::new(Subjects::Credits).integer().not_null())
                    .col(
                        ColumnDef::new(Subjects::TotalMarks)
                            .integer()
                            .not_null()
                            .default(100),
                    )
                    .col(ColumnDef::new(Subjects::CreatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建学生成绩表
        manager
            .create_table(
                Table::create()
                    .table(StudentMarks::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(StudentMarks::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(StudentMarks::StudentId).big_integer().not_null())
                    .col(ColumnDef::new(StudentMarks::SubjectId).big_integer().not_null())
                    .col(ColumnDef::new(StudentMarks::Semester).integer().not_null())
                    .col(ColumnDef::new(StudentMarks::MarksObtained).double().not_null())
                    .col(
                        ColumnDef::new(StudentMarks::TotalMarks)
                            .double()
                            .not_null()
                            .default(100.0),
                    )
                    .col(ColumnDef::new(StudentMarks::Grade).string().not_null())
                    .col(ColumnDef::new(StudentMarks::GradePoints).double().not_null())
                    .col(ColumnDef::new(StudentMarks::ExamType).string().not_null())
                    .col(ColumnDef::new(StudentMarks::ExamDate).date().not_null())
                    .col(ColumnDef::new(StudentMarks::CreatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(StudentMarks::Table, StudentMarks::StudentId)
                            .to(Students::Table, Students::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(StudentMarks::Table, StudentMarks::SubjectId)
                            .to(Subjects::Table, Subjects::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_student_marks_student_subject_exam")
                    .table(StudentMarks::Table)
                    .col(StudentMarks::StudentId)
                    .col(StudentMarks::SubjectId)
                    .col(StudentMarks::ExamType)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // 创建学期绩点表
        manager
            .create_table(
                Table::create()
                    .table(SemesterPerformance::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SemesterPerformance::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(SemesterPerformance::StudentId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SemesterPerformance::Semester)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(SemesterPerformance::Sgpa).double().not_null())
                    .col(ColumnDef::new(SemesterPerformance::Cgpa).double().not_null())
                    .col(
                        ColumnDef::new(SemesterPerformance::TotalCredits)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(SemesterPerformance::EarnedCredits)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(SemesterPerformance::Status)
                            .string()
                            .not_null()
                            .default("pending"),
                    )
                    .col(
                        ColumnDef::new(SemesterPerformance::AcademicYear)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SemesterPerformance::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(SemesterPerformance::Table, SemesterPerformance::StudentId)
                            .to(Students::Table, Students::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_semester_performance_student_semester")
                    .table(SemesterPerformance::Table)
                    .col(SemesterPerformance::StudentId)
                    .col(SemesterPerformance::Semester)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // 创建考勤记录表
        manager
            .create_table(
                Table::create()
                    .table(AttendanceRecords::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AttendanceRecords::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(AttendanceRecords::StudentId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AttendanceRecords::SubjectId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AttendanceRecords::Semester)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AttendanceRecords::TotalClasses)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AttendanceRecords::AttendedClasses)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AttendanceRecords::AttendancePercentage)
                            .double()
                            .not_null(),
                    )
                    .col(ColumnDef::new(AttendanceRecords::Month).string().not_null())
                    .col(
                        ColumnDef::new(AttendanceRecords::AcademicYear)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AttendanceRecords::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(AttendanceRecords::Table, AttendanceRecords::StudentId)
                            .to(Students::Table, Students::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(AttendanceRecords::Table, AttendanceRecords::SubjectId)
                            .to(Subjects::Table, Subjects::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_attendance_student_subject_month_year")
                    .table(AttendanceRecords::Table)
                    .col(AttendanceRecords::StudentId)
                    .col(AttendanceRecords::SubjectId)
                    .col(AttendanceRecords::Month)
                    .col(AttendanceRecords::AcademicYear)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // 创建站内消息表
        manager
            .create_table(
                Table::create()
                    .table(Messages::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Messages::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Messages::SenderId).big_integer().not_null())
                    .col(ColumnDef::new(Messages::SenderRole).string().not_null())
                    .col(ColumnDef::new(Messages::ReceiverId).big_integer().not_null())
                    .col(ColumnDef::new(Messages::ReceiverRole).string().not_null())
                    .col(ColumnDef::new(Messages::Subject).string().not_null())
                    .col(ColumnDef::new(Messages::Body).text().not_null())
                    .col(
                        ColumnDef::new(Messages::IsRead)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Messages::SentAt).big_integer().not_null())
                    .col(ColumnDef::new(Messages::ReadAt).big_integer().null())
                    .to_owned(),
            )
            .await?;

        // 创建附件表
        manager
            .create_table(
                Table::create()
                    .table(Attachments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Attachments::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Attachments::DownloadToken)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Attachments::OriginalName).string().not_null())
                    .col(ColumnDef::new(Attachments::StoredName).string().not_null())
                    .col(ColumnDef::new(Attachments::FileSize).big_integer().not_null())
                    .col(ColumnDef::new(Attachments::FileType).string().not_null())
                    .col(ColumnDef::new(Attachments::UploaderId).big_integer().not_null())
                    .col(ColumnDef::new(Attachments::UploaderRole).string().not_null())
                    .col(ColumnDef::new(Attachments::CreatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Attachments::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Messages::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(AttendanceRecords::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(SemesterPerformance::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(StudentMarks::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Subjects::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(SpecialLeaveRequests::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(LeaveBalances::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(LeaveApplications::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Hods::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Students::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Students {
    Table,
    Id,
    Usn,
    Name,
    Email,
    Phone,
    PasswordHash,
    Semester,
    Department,
    Cgpa,
    ResetToken,
    ResetExpires,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Hods {
    Table,
    Id,
    Eid,
    Name,
    Email,
    PasswordHash,
    Department,
    ResetToken,
    ResetExpires,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum LeaveApplications {
    Table,
    Id,
    StudentId,
    LeaveType,
    HalfDaySession,
    StartDate,
    EndDate,
    Reason,
    AttachmentToken,
    Status,
    RejectionReason,
    AppliedAt,
    ProcessedAt,
    ProcessedBy,
}

#[derive(DeriveIden)]
enum LeaveBalances {
    Table,
    Id,
    StudentId,
    Semester,
    TotalAllowed,
    Taken,
    Remaining,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum SpecialLeaveRequests {
    Table,
    Id,
    StudentId,
    Reason,
    Explanation,
    AttachmentToken,
    Status,
    RejectionReason,
    AppliedAt,
    ProcessedAt,
    ProcessedBy,
}

#[derive(DeriveIden)]
enum Subjects {
    Table,
    Id,
    Code,
    Name,
    Semester,
    Department,
    Credits,
    TotalMarks,
    CreatedAt,
}

#[derive(DeriveIden)]
enum StudentMarks {
    Table,
    Id,
    StudentId,
    SubjectId,
    Semester,
    MarksObtained,
    TotalMarks,
    Grade,
    GradePoints,
    ExamType,
    ExamDate,
    CreatedAt,
}

#[derive(DeriveIden)]
enum SemesterPerformance {
    Table,
    Id,
    StudentId,
    Semester,
    Sgpa,
    Cgpa,
    TotalCredits,
    EarnedCredits,
    Status,
    AcademicYear,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum AttendanceRecords {
    Table,
    Id,
    StudentId,
    SubjectId,
    Semester,
    TotalClasses,
    AttendedClasses,
    AttendancePercentage,
    Month,
    AcademicYear,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Messages {
    Table,
    Id,
    SenderId,
    SenderRole,
    ReceiverId,
    ReceiverRole,
    Subject,
    Body,
    IsRead,
    SentAt,
    ReadAt,
}

#[derive(DeriveIden)]
enum Attachments {
    Table,
    Id,
    DownloadToken,
    OriginalName,
    StoredName,
    FileSize,
    FileType,
    UploaderId,
    UploaderRole,
    CreatedAt,
}
