use super::SeaOrmStorage;
use crate::entity::prelude::{AttendanceRecords, SemesterPerformances, StudentMarks, Students, Subjects};
use crate::entity::{attendance_records, semester_performance, student_marks, subjects};
use crate::errors::{LeaveSystemError, Result};
use crate::models::academics::{
    entities::{AttendanceRecord, PerformanceStatus, SemesterPerformance, StudentMark, Subject},
    requests::{UpsertAttendanceRequest, UpsertMarkRequest},
};
use crate::utils::grading;
use chrono::Datelike;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 创建科目
    pub async fn create_subject_impl(&self, subject: Subject) -> Result<Subject> {
        let now = chrono::Utc::now().timestamp();

        let model = subjects::ActiveModel {
            code: Set(subject.code),
            name: Set(subject.name),
            semester: Set(subject.semester),
            department: Set(subject.department),
            credits: Set(subject.credits),
            total_marks: Set(subject.total_marks),
            created_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| LeaveSystemError::database_operation(format!("创建科目失败: {e}")))?;

        Ok(result.into_subject())
    }

    /// 通过 ID 获取科目
    pub async fn get_subject_by_id_impl(&self, id: i64) -> Result<Option<Subject>> {
        let result = Subjects::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| LeaveSystemError::database_operation(format!("查询科目失败: {e}")))?;

        Ok(result.map(|m| m.into_subject()))
    }

    /// 录入/更新成绩
    ///
    /// 按 (student_id, subject_id, exam_type) 唯一键做 upsert。
    pub async fn upsert_student_mark_impl(
        &self,
        student_id: i64,
        req: UpsertMarkRequest,
        grade: &str,
        grade_points: f64,
    ) -> Result<StudentMark> {
        let existing = StudentMarks::find()
            .filter(student_marks::Column::StudentId.eq(student_id))
            .filter(student_marks::Column::SubjectId.eq(req.subject_id))
            .filter(student_marks::Column::ExamType.eq(req.exam_type.to_string()))
            .one(&self.db)
            .await
            .map_err(|e| LeaveSystemError::database_operation(format!("查询成绩失败: {e}")))?;

        let result = match existing {
            Some(model) => {
                let mut active: student_marks::ActiveModel = model.into();
                active.semester = Set(req.semester);
                active.marks_obtained = Set(req.marks_obtained);
                active.total_marks = Set(req.total_marks);
                active.grade = Set(grade.to_string());
                active.grade_points = Set(grade_points);
                active.exam_date = Set(req.exam_date);
                active
                    .update(&self.db)
                    .await
                    .map_err(|e| LeaveSystemError::database_operation(format!("更新成绩失败: {e}")))?
            }
            None => {
                let now = chrono::Utc::now().timestamp();
                let model = student_marks::ActiveModel {
                    student_id: Set(student_id),
                    subject_id: Set(req.subject_id),
                    semester: Set(req.semester),
                    marks_obtained: Set(req.marks_obtained),
                    total_marks: Set(req.total_marks),
                    grade: Set(grade.to_string()),
                    grade_points: Set(grade_points),
                    exam_type: Set(req.exam_type.to_string()),
                    exam_date: Set(req.exam_date),
                    created_at: Set(now),
                    ..Default::default()
                };
                model
                    .insert(&self.db)
                    .await
                    .map_err(|e| LeaveSystemError::database_operation(format!("录入成绩失败: {e}")))?
            }
        };

        Ok(result.into_student_mark())
    }

    /// 学生全部成绩，按学期、科目排序
    pub async fn list_student_marks_impl(&self, student_id: i64) -> Result<Vec<StudentMark>> {
        let rows = StudentMarks::find()
            .filter(student_marks::Column::StudentId.eq(student_id))
            .order_by_asc(student_marks::Column::Semester)
            .order_by_asc(student_marks::Column::SubjectId)
            .all(&self.db)
            .await
            .map_err(|e| LeaveSystemError::database_operation(format!("查询成绩失败: {e}")))?;

        Ok(rows.into_iter().map(|m| m.into_student_mark()).collect())
    }

    /// 重算学期绩点并落库
    ///
    /// SGPA 取该学期全部成绩绩点的算术平均；CGPA 沿用学生档案上的值；
    /// 学分按科目表累计，挂科（F）不计入已得学分。
    pub async fn recompute_semester_performance_impl(
        &self,
        student_id: i64,
        semester: i32,
    ) -> Result<SemesterPerformance> {
        let marks = StudentMarks::find()
            .filter(student_marks::Column::StudentId.eq(student_id))
            .filter(student_marks::Column::Semester.eq(semester))
            .find_also_related(Subjects)
            .all(&self.db)
            .await
            .map_err(|e| LeaveSystemError::database_operation(format!("查询成绩失败: {e}")))?;

        let points: Vec<f64> = marks.iter().map(|(m, _)| m.grade_points).collect();
        let sgpa = grading::sgpa(&points);

        let mut total_credits = 0;
        let mut earned_credits = 0;
        let mut has_fail = false;
        for (mark, subject) in &marks {
            let credits = subject.as_ref().map(|s| s.credits).unwrap_or(0);
            total_credits += credits;
            if mark.grade == "F" {
                has_fail = true;
            } else {
                earned_credits += credits;
            }
        }

        let status = if marks.is_empty() {
            PerformanceStatus::Pending
        } else if has_fail {
            PerformanceStatus::Fail
        } else {
            PerformanceStatus::Pass
        };

        let student = Students::find_by_id(student_id)
            .one(&self.db)
            .await
            .map_err(|e| LeaveSystemError::database_operation(format!("查询学生失败: {e}")))?
            .ok_or_else(|| LeaveSystemError::not_found(format!("学生 {student_id} 不存在")))?;

        let now = chrono::Utc::now();
        let academic_year = format!("{}-{}", now.year(), now.year() + 1);

        let existing = SemesterPerformances::find()
            .filter(semester_performance::Column::StudentId.eq(student_id))
            .filter(semester_performance::Column::Semester.eq(semester))
            .one(&self.db)
            .await
            .map_err(|e| {
                LeaveSystemError::database_operation(format!("查询学期绩点失败: {e}"))
            })?;

        let result = match existing {
            Some(model) => {
                let mut active: semester_performance::ActiveModel = model.into();
                active.sgpa = Set(sgpa);
                active.cgpa = Set(student.cgpa);
                active.total_credits = Set(total_credits);
                active.earned_credits = Set(earned_credits);
                active.status = Set(status.to_string());
                active.updated_at = Set(now.timestamp());
                active.update(&self.db).await.map_err(|e| {
                    LeaveSystemError::database_operation(format!("更新学期绩点失败: {e}"))
                })?
            }
            None => {
                let model = semester_performance::ActiveModel {
                    student_id: Set(student_id),
                    semester: Set(semester),
                    sgpa: Set(sgpa),
                    cgpa: Set(student.cgpa),
                    total_credits: Set(total_credits),
                    earned_credits: Set(earned_credits),
                    status: Set(status.to_string()),
                    academic_year: Set(academic_year),
                    updated_at: Set(now.timestamp()),
                    ..Default::default()
                };
                model.insert(&self.db).await.map_err(|e| {
                    LeaveSystemError::database_operation(format!("写入学期绩点失败: {e}"))
                })?
            }
        };

        Ok(result.into_semester_performance())
    }

    /// 学生各学期绩点
    pub async fn list_semester_performance_impl(
        &self,
        student_id: i64,
    ) -> Result<Vec<SemesterPerformance>> {
        let rows = SemesterPerformances::find()
            .filter(semester_performance::Column::StudentId.eq(student_id))
            .order_by_asc(semester_performance::Column::Semester)
            .all(&self.db)
            .await
            .map_err(|e| {
                LeaveSystemError::database_operation(format!("查询学期绩点失败: {e}"))
            })?;

        Ok(rows
            .into_iter()
            .map(|m| m.into_semester_performance())
            .collect())
    }

    /// 录入/更新考勤
    ///
    /// 按 (student_id, subject_id, month, academic_year) 唯一键做 upsert。
    pub async fn upsert_attendance_record_impl(
        &self,
        student_id: i64,
        req: UpsertAttendanceRequest,
        percentage: f64,
    ) -> Result<AttendanceRecord> {
        let existing = AttendanceRecords::find()
            .filter(attendance_records::Column::StudentId.eq(student_id))
            .filter(attendance_records::Column::SubjectId.eq(req.subject_id))
            .filter(attendance_records::Column::Month.eq(req.month.clone()))
            .filter(attendance_records::Column::AcademicYear.eq(req.academic_year.clone()))
            .one(&self.db)
            .await
            .map_err(|e| LeaveSystemError::database_operation(format!("查询考勤失败: {e}")))?;

        let now = chrono::Utc::now().timestamp();

        let result = match existing {
            Some(model) => {
                let mut active: attendance_records::ActiveModel = model.into();
                active.semester = Set(req.semester);
                active.total_classes = Set(req.total_classes);
                active.attended_classes = Set(req.attended_classes);
                active.attendance_percentage = Set(percentage);
                active.updated_at = Set(now);
                active
                    .update(&self.db)
                    .await
                    .map_err(|e| LeaveSystemError::database_operation(format!("更新考勤失败: {e}")))?
            }
            None => {
                let model = attendance_records::ActiveModel {
                    student_id: Set(student_id),
                    subject_id: Set(req.subject_id),
                    semester: Set(req.semester),
                    total_classes: Set(req.total_classes),
                    attended_classes: Set(req.attended_classes),
                    attendance_percentage: Set(percentage),
                    month: Set(req.month),
                    academic_year: Set(req.academic_year),
                    updated_at: Set(now),
                    ..Default::default()
                };
                model
                    .insert(&self.db)
                    .await
                    .map_err(|e| LeaveSystemError::database_operation(format!("录入考勤失败: {e}")))?
            }
        };

        Ok(result.into_attendance_record())
    }

    /// 学生全部考勤记录
    pub async fn list_attendance_records_impl(
        &self,
        student_id: i64,
    ) -> Result<Vec<AttendanceRecord>> {
        let rows = AttendanceRecords::find()
            .filter(attendance_records::Column::StudentId.eq(student_id))
            .order_by_asc(attendance_records::Column::Semester)
            .order_by_asc(attendance_records::Column::SubjectId)
            .all(&self.db)
            .await
            .map_err(|e| LeaveSystemError::database_operation(format!("查询考勤失败: {e}")))?;

        Ok(rows
            .into_iter()
            .map(|m| m.into_attendance_record())
            .collect())
    }
}
