//! 学业记录与消息的存储层集成测试

use chrono::NaiveDate;

use rust_leavesystem::models::academics::entities::{ExamType, PerformanceStatus, Subject};
use rust_leavesystem::models::academics::requests::{UpsertAttendanceRequest, UpsertMarkRequest};
use rust_leavesystem::models::auth::entities::UserRole;
use rust_leavesystem::models::messages::requests::SendMessageRequest;
use rust_leavesystem::models::students::requests::{CreateHodRequest, CreateStudentRequest};
use rust_leavesystem::storage::Storage;
use rust_leavesystem::storage::sea_orm_storage::SeaOrmStorage;
use rust_leavesystem::utils::grading;

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
    storage
        .create_student(CreateStudentRequest {
            usn: usn.to_string(),
            name: "Ananya K".to_string(),
            email: Some(format!("{}@university.edu", usn.to_lowercase())),
            phone: None,
            password: "argon2-hash-placeholder".to_string(),
            semester: 6,
            department: "Computer Science & Design".to_string(),
            cgpa: 8.76,
        })
        .await
        .unwrap()
        .id
}

async fn seed_subject(storage: &SeaOrmStorage, code: &str, credits: i32) -> i64 {
    storage
        .create_subject(Subject {
            id: 0,
            code: code.to_string(),
            name: "Database Management Systems".to_string(),
            semester: 6,
            department: "Computer Science & Design".to_string(),
            credits,
            total_marks: 100,
        })
        .await
        .unwrap()
        .id
}

fn mark_request(subject_id: i64, marks: f64, exam_type: ExamType) -> UpsertMarkRequest {
    UpsertMarkRequest {
        subject_id,
        semester: 6,
        marks_obtained: marks,
        total_marks: 100.0,
        exam_type,
        exam_date: NaiveDate::from_ymd_opt(2025, 5, 20).unwrap(),
    }
}

#[tokio::test]
async fn mark_upsert_updates_existing_row() {
    let storage = test_storage("marks").await;
    let student_id = seed_student(&storage, "4PM22CG010").await;
    let subject_id = seed_subject(&storage, "22CG61", 4).await;

    let (grade, points) = grading::grade_and_points(85.0, 100.0);
    let first = storage
        .upsert_student_mark(
            student_id,
            mark_request(subject_id, 85.0, ExamType::External),
            grade,
            points,
        )
        .await
        .unwrap();
    assert_eq!(first.grade, "A+");
    assert_eq!(first.grade_points, 9.0);

    // 同一 (学生, 科目, 考试类型) 再次写入走更新而不是新行
    let (grade, points) = grading::grade_and_points(92.0, 100.0);
    let second = storage
        .upsert_student_mark(
            student_id,
            mark_request(subject_id, 92.0, ExamType::External),
            grade,
            points,
        )
        .await
        .unwrap();
    assert_eq!(second.id, first.id);
    assert_eq!(second.grade, "O");

    let marks = storage.list_student_marks(student_id).await.unwrap();
    assert_eq!(marks.len(), 1);
}

#[tokio::test]
async fn semester_performance_recomputes_sgpa_and_credits() {
    let storage = test_storage("performance").await;
    let student_id = seed_student(&storage, "4PM22CG012").await;
    let dbms = seed_subject(&storage, "22CG62", 4).await;
    let cn = seed_subject(&storage, "22CG63", 3).await;

    // 85% → A+ → 9.0；72% → A → 8.0
    for (subject_id, marks) in [(dbms, 85.0), (cn, 72.0)] {
        let (grade, points) = grading::grade_and_points(marks, 100.0);
        storage
            .upsert_student_mark(
                student_id,
                mark_request(subject_id, marks, ExamType::External),
                grade,
                points,
            )
            .await
            .unwrap();
    }

    let performance = storage
        .recompute_semester_performance(student_id, 6)
        .await
        .unwrap();
    assert_eq!(performance.sgpa, 8.5);
    assert_eq!(performance.cgpa, 8.76);
    assert_eq!(performance.total_credits, 7);
    assert_eq!(performance.earned_credits, 7);
    assert_eq!(performance.status, PerformanceStatus::Pass);

    // 挂科后：学分不计入已得学分，状态转为 fail
    let (grade, points) = grading::grade_and_points(30.0, 100.0);
    storage
        .upsert_student_mark(
            student_id,
            mark_request(cn, 30.0, ExamType::External),
            grade,
            points,
        )
        .await
        .unwrap();

    let failed = storage
        .recompute_semester_performance(student_id, 6)
        .await
        .unwrap();
    assert_eq!(failed.status, PerformanceStatus::Fail);
    assert_eq!(failed.earned_credits, 4);

    let rows = storage.list_semester_performance(student_id).await.unwrap();
    assert_eq!(rows.len(), 1);
}

#[tokio::test]
async fn attendance_upsert_is_keyed_by_month_and_year() {
    let storage = test_storage("attendance").await;
    let student_id = seed_student(&storage, "4PM22CG014").await;
    let subject_id = seed_subject(&storage, "22CG64", 3).await;

    let request = UpsertAttendanceRequest {
        subject_id,
        semester: 6,
        total_classes: 40,
        attended_classes: 36,
        month: "June".to_string(),
        academic_year: "2025-2026".to_string(),
    };
    let first = storage
        .upsert_attendance_record(student_id, request, 90.0)
        .await
        .unwrap();
    assert_eq!(first.attendance_percentage, 90.0);

    // 同月重复录入走更新
    let request = UpsertAttendanceRequest {
        subject_id,
        semester: 6,
        total_classes: 42,
        attended_classes: 40,
        month: "June".to_string(),
        academic_year: "2025-2026".to_string(),
    };
    let updated = storage
        .upsert_attendance_record(student_id, request, 95.24)
        .await
        .unwrap();
    assert_eq!(updated.id, first.id);
    assert_eq!(updated.total_classes, 42);

    // 不同月份新增一行
    let request = UpsertAttendanceRequest {
        subject_id,
        semester: 6,
        total_classes: 38,
        attended_classes: 30,
        month: "July".to_string(),
        academic_year: "2025-2026".to_string(),
    };
    storage
        .upsert_attendance_record(student_id, request, 78.95)
        .await
        .unwrap();

    let records = storage.list_attendance_records(student_id).await.unwrap();
    assert_eq!(records.len(), 2);
}

#[tokio::test]
async fn message_flow_read_once() {
    let storage = test_storage("messages").await;
    let student_id = seed_student(&storage, "4PM22CG015").await;
    let hod = storage
        .create_hod(CreateHodRequest {
            eid: "HOD001".to_string(),
            name: "Head of Department".to_string(),
            email: Some("hod@university.edu".to_string()),
            password: "argon2-hash-placeholder".to_string(),
            department: "Computer Science & Design".to_string(),
        })
        .await
        .unwrap();

    let message = storage
        .create_message(
            hod.id,
            &UserRole::Hod,
            SendMessageRequest {
                receiver_id: student_id,
                receiver_role: UserRole::Student,
                subject: "Leave approved".to_string(),
                body: "Your leave application has been approved.".to_string(),
            },
        )
        .await
        .unwrap();

    let unread = storage
        .count_unread_messages(student_id, &UserRole::Student)
        .await
        .unwrap();
    assert_eq!(unread, 1);

    // 学生视图带发件人姓名
    let inbox = storage.list_messages_for_student(student_id).await.unwrap();
    assert_eq!(inbox.len(), 1);
    assert_eq!(inbox[0].sender_name.as_deref(), Some("Head of Department"));

    // 非收件人无法标记已读
    let wrong = storage
        .mark_message_read(message.id, hod.id, &UserRole::Hod)
        .await
        .unwrap();
    assert!(!wrong);

    let read = storage
        .mark_message_read(message.id, student_id, &UserRole::Student)
        .await
        .unwrap();
    assert!(read);

    // 已读消息不能再次标记
    let again = storage
        .mark_message_read(message.id, student_id, &UserRole::Student)
        .await
        .unwrap();
    assert!(!again);

    let unread = storage
        .count_unread_messages(student_id, &UserRole::Student)
        .await
        .unwrap();
    assert_eq!(unread, 0);
}

#[tokio::test]
async fn reset_token_round_trip() {
    let storage = test_storage("reset-token").await;
    let student_id = seed_student(&storage, "4PM22CG018").await;

    let expires_at = chrono::Utc::now().timestamp() + 3600;
    let set = storage
        .set_reset_token(&UserRole::Student, student_id, "tok-abc123", expires_at)
        .await
        .unwrap();
    assert!(set);

    let found = storage
        .find_user_by_reset_token(&UserRole::Student, "tok-abc123")
        .await
        .unwrap();
    assert_eq!(found, Some((student_id, expires_at)));

    // 角色不匹配查不到
    let wrong_role = storage
        .find_user_by_reset_token(&UserRole::Hod, "tok-abc123")
        .await
        .unwrap();
    assert!(wrong_role.is_none());

    let cleared = storage
        .clear_reset_token(&UserRole::Student, student_id)
        .await
        .unwrap();
    assert!(cleared);

    let gone = storage
        .find_user_by_reset_token(&UserRole::Student, "tok-abc123")
        .await
        .unwrap();
    assert!(gone.is_none());
}
