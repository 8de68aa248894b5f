//! 预导入模块，方便使用

pub use super::attachments::{
    ActiveModel as AttachmentActiveModel, Entity as Attachments, Model as AttachmentModel,
};
pub use super::attendance_records::{
    ActiveModel as AttendanceActiveModel, Entity as AttendanceRecords, Model as AttendanceModel,
};
pub use super::hods::{ActiveModel as HodActiveModel, Entity as Hods, Model as HodModel};
pub use super::leave_applications::{
    ActiveModel as LeaveApplicationActiveModel, Entity as LeaveApplications,
    Model as LeaveApplicationModel,
};
pub use super::leave_balances::{
    ActiveModel as LeaveBalanceActiveModel, Entity as LeaveBalances, Model as LeaveBalanceModel,
};
pub use super::messages::{
    ActiveModel as MessageActiveModel, Entity as Messages, Model as MessageModel,
};
pub use super::semester_performance::{
    ActiveModel as SemesterPerformanceActiveModel, Entity as SemesterPerformances,
    Model as SemesterPerformanceModel,
};
pub use super::special_leave_requests::{
    ActiveModel as SpecialLeaveActiveModel, Entity as SpecialLeaveRequests,
    Model as SpecialLeaveModel,
};
pub use super::student_marks::{
    ActiveModel as StudentMarkActiveModel, Entity as StudentMarks, Model as StudentMarkModel,
};
pub use super::students::{
    ActiveModel as StudentActiveModel, Entity as Students, Model as StudentModel,
};
pub use super::subjects::{
    ActiveModel as SubjectActiveModel, Entity as Subjects, Model as SubjectModel,
};
