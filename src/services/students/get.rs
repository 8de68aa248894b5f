use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::collections::BTreeMap;

use super::StudentService;
use crate::models::academics::responses::SemesterMarksGroup;
use crate::models::students::responses::StudentDetailResponse;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::grading;

/// 学生详情
/// GET /students/{id}
///
/// 档案 + 当前学期余额 + 按学期分组的成绩（带 SGPA）+ 考勤 + 学期绩点 + 请假历史。
pub async fn handle_get_student_detail(
    service: &StudentService,
    request: &HttpRequest,
    student_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let student = match storage.get_student_by_id(student_id).await {
        Ok(Some(student)) => student,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::StudentNotFound,
                "学生不存在",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询学生失败: {e}"),
                )),
            );
        }
    };

    let leave_balance = match storage
        .get_leave_balance(student.id, student.semester)
        .await
    {
        Ok(balance) => balance,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询请假余额失败: {e}"),
                )),
            );
        }
    };

    let marks = match storage.list_student_marks(student.id).await {
        Ok(marks) => marks,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询成绩失败: {e}"),
                )),
            );
        }
    };

    // 按学期分组并计算 SGPA
    let mut grouped: BTreeMap<i32, Vec<_>> = BTreeMap::new();
    for mark in marks {
        grouped.entry(mark.semester).or_default().push(mark);
    }
    let semester_marks = grouped
        .into_iter()
        .map(|(semester, marks)| {
            let points: Vec<f64> = marks.iter().map(|m| m.grade_points).collect();
            SemesterMarksGroup {
                semester,
                sgpa: grading::sgpa(&points),
                marks,
            }
        })
        .collect();

    let attendance = match storage.list_attendance_records(student.id).await {
        Ok(records) => records,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询考勤失败: {e}"),
                )),
            );
        }
    };

    let performance = match storage.list_semester_performance(student.id).await {
        Ok(rows) => rows,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询学期绩点失败: {e}"),
                )),
            );
        }
    };

    let leave_history = match storage.list_leave_applications_by_student(student.id).await {
        Ok(rows) => rows,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询请假历史失败: {e}"),
                )),
            );
        }
    };

    let response = StudentDetailResponse {
        student,
        leave_balance,
        semester_marks,
        attendance,
        performance,
        leave_history,
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(response, "查询成功")))
}
