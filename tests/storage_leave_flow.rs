//! 请假流程的存储层集成测试
//!
//! 覆盖：提交后出现在历史中；审批后状态变更且余额按天数扣减；
//! 重复审批返回冲突且不二次扣减；驳回不动余额。

use chrono::NaiveDate;

use rust_leavesystem::models::leaves::entities::{LeaveStatus, LeaveTransition, LeaveType};
use rust_leavesystem::models::leaves::requests::ApplyLeaveRequest;
use rust_leavesystem::models::students::requests::CreateStudentRequest;
use rust_leavesystem::storage::Storage;
use rust_leavesystem::storage::sea_orm_storage::SeaOrmStorage;

async fn test_storage(name: &str) -> SeaOrmStorage {
    let path = std::env::temp_dir().join(format!(
        "leavesys-{}-{}.db",
        name,
        std::process::id()
    ));
    let _ = std::fs::remove_file(&path);
    SeaOrmStorage::new_with_url(&format!("sqlite://{}?mode=rwc", path.display()))
        .await
        .expect("failed to initialize test storage")
}

async fn seed_student(storage: &SeaOrmStorage, usn: &str) -> i64 {
    let student = storage
        .create_student(CreateStudentRequest {
            usn: usn.to_string(),
            name: "Sourabh Patil".to_string(),
            email: Some(format!("{}@university.edu", usn.to_lowercase())),
            phone: None,
            password: "argon2-hash-placeholder".to_string(),
            semester: 6,
            department: "Computer Science & Design".to_string(),
            cgpa: 8.84,
        })
        .await
        .expect("failed to seed student");
    student.id
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn full_day_request(start: NaiveDate, end: Option<NaiveDate>) -> ApplyLeaveRequest {
    ApplyLeaveRequest {
        leave_type: LeaveType::Full,
        half_day_session: None,
        start_date: start,
        end_date: end,
        reason: "Family function".to_string(),
        attachment_token: None,
    }
}

#[tokio::test]
async fn submitted_application_appears_in_history() {
    let storage = test_storage("history").await;
    let student_id = seed_student(&storage, "4PM22CG047").await;

    let created = storage
        .create_leave_application(
            student_id,
            full_day_request(date(2025, 6, 2), Some(date(2025, 6, 3))),
        )
        .await
        .unwrap();

    assert_eq!(created.status, LeaveStatus::Pending);

    let history = storage
        .list_leave_applications_by_student(student_id)
        .await
        .unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].id, created.id);
    assert_eq!(history[0].leave_type, LeaveType::Full);

    // 待审批队列也能看到这条申请
    let pending = storage.list_pending_leave_applications().await.unwrap();
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].student_usn, "4PM22CG047");
}

#[tokio::test]
async fn approval_flips_status_and_deducts_day_span() {
    let storage = test_storage("approve").await;
    let student_id = seed_student(&storage, "4PM22CG001").await;

    // 6月2日到6月4日，首尾均含 3 天
    let created = storage
        .create_leave_application(
            student_id,
            full_day_request(date(2025, 6, 2), Some(date(2025, 6, 4))),
        )
        .await
        .unwrap();

    let transition = storage
        .approve_leave_application(created.id, "HOD001")
        .await
        .unwrap();
    assert_eq!(transition, LeaveTransition::Applied);

    let approved = storage
        .get_leave_application_by_id(created.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(approved.status, LeaveStatus::Approved);
    assert_eq!(approved.processed_by.as_deref(), Some("HOD001"));
    assert!(approved.processed_at.is_some());

    let balance = storage
        .get_leave_balance(student_id, 6)
        .await
        .unwrap()
        .expect("balance row should exist after approval");
    assert_eq!(balance.taken, 3);
    assert_eq!(balance.remaining, balance.total_allowed - balance.taken);
}

#[tokio::test]
async fn single_day_application_deducts_one_day() {
    let storage = test_storage("single-day").await;
    let student_id = seed_student(&storage, "4PM22CG002").await;

    // 无结束日期按 1 天计
    let created = storage
        .create_leave_application(student_id, full_day_request(date(2025, 6, 2), None))
        .await
        .unwrap();

    storage
        .approve_leave_application(created.id, "HOD001")
        .await
        .unwrap();

    let balance = storage.get_leave_balance(student_id, 6).await.unwrap().unwrap();
    assert_eq!(balance.taken, 1);
    assert_eq!(balance.remaining, balance.total_allowed - 1);
}

#[tokio::test]
async fn double_approval_reports_conflict_without_double_deduction() {
    let storage = test_storage("double-approve").await;
    let student_id = seed_student(&storage, "4PM22CG003").await;

    let created = storage
        .create_leave_application(
            student_id,
            full_day_request(date(2025, 6, 2), Some(date(2025, 6, 3))),
        )
        .await
        .unwrap();

    let first = storage
        .approve_leave_application(created.id, "HOD001")
        .await
        .unwrap();
    assert_eq!(first, LeaveTransition::Applied);

    let second = storage
        .approve_leave_application(created.id, "HOD001")
        .await
        .unwrap();
    assert_eq!(second, LeaveTransition::AlreadyProcessed);

    let balance = storage.get_leave_balance(student_id, 6).await.unwrap().unwrap();
    assert_eq!(balance.taken, 2);
    assert_eq!(balance.remaining, balance.total_allowed - 2);
}

#[tokio::test]
async fn rejection_keeps_balance_untouched() {
    let storage = test_storage("reject").await;
    let student_id = seed_student(&storage, "4PM22CG004").await;

    let created = storage
        .create_leave_application(
            student_id,
            full_day_request(date(2025, 6, 2), Some(date(2025, 6, 6))),
        )
        .await
        .unwrap();

    let transition = storage
        .reject_leave_application(created.id, "HOD001", Some("考试周不批假".to_string()))
        .await
        .unwrap();
    assert_eq!(transition, LeaveTransition::Applied);

    let rejected = storage
        .get_leave_application_by_id(created.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(rejected.status, LeaveStatus::Rejected);
    assert_eq!(rejected.rejection_reason.as_deref(), Some("考试周不批假"));

    // 驳回不建余额档也不扣减
    let balance = storage.get_leave_balance(student_id, 6).await.unwrap();
    assert!(balance.is_none());

    // 驳回后再审批同样拒绝
    let after = storage
        .approve_leave_application(created.id, "HOD001")
        .await
        .unwrap();
    assert_eq!(after, LeaveTransition::AlreadyProcessed);
}

#[tokio::test]
async fn half_day_approval_does_not_touch_balance() {
    let storage = test_storage("half-day").await;
    let student_id = seed_student(&storage, "4PM22CG005").await;

    let created = storage
        .create_leave_application(
            student_id,
            ApplyLeaveRequest {
                leave_type: LeaveType::Half,
                half_day_session: Some(
                    rust_leavesystem::models::leaves::entities::HalfDaySession::Morning,
                ),
                start_date: date(2025, 6, 2),
                end_date: None,
                reason: "Medical checkup".to_string(),
                attachment_token: None,
            },
        )
        .await
        .unwrap();

    storage
        .approve_leave_application(created.id, "HOD001")
        .await
        .unwrap();

    let balance = storage.get_leave_balance(student_id, 6).await.unwrap();
    assert!(balance.is_none());
}

#[tokio::test]
async fn missing_application_reports_not_found() {
    let storage = test_storage("not-found").await;

    let transition = storage
        .approve_leave_application(9999, "HOD001")
        .await
        .unwrap();
    assert_eq!(transition, LeaveTransition::NotFound);
}

#[tokio::test]
async fn ensure_balance_creates_default_allocation() {
    let storage = test_storage("ensure-balance").await;
    let student_id = seed_student(&storage, "4PM22CG006").await;

    let balance = storage.ensure_leave_balance(student_id, 6).await.unwrap();
    assert_eq!(balance.taken, 0);
    assert_eq!(balance.remaining, balance.total_allowed);

    // 再次调用返回同一行
    let again = storage.ensure_leave_balance(student_id, 6).await.unwrap();
    assert_eq!(again.id, balance.id);
}
