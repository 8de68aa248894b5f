use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::StudentService;
use crate::models::academics::requests::UpsertMarkRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::grading;
use crate::utils::validate::validate_semester;

/// 录入/更新成绩
/// PUT /students/{id}/marks
///
/// 等级与绩点由服务端按百分比计算；写入后重算该学期绩点。
pub async fn handle_upsert_mark(
    service: &StudentService,
    request: &HttpRequest,
    student_id: i64,
    body: UpsertMarkRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Err(msg) = validate_semester(body.semester) {
        return Ok(
            HttpResponse::BadRequest().json(ApiResponse::error_empty(ErrorCode::BadRequest, msg))
        );
    }

    if body.total_marks <= 0.0
        || body.marks_obtained < 0.0
        || body.marks_obtained > body.total_marks
    {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::MarkInvalid,
            "成绩必须在 0 到满分之间",
        )));
    }

    // 学生与科目都必须存在
    match storage.get_student_by_id(student_id).await {
        Ok(Some(_)) => {}
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
    }

    match storage.get_subject_by_id(body.subject_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::SubjectNotFound,
                "科目不存在",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询科目失败: {e}"),
                )),
            );
        }
    }

    let (grade, grade_points) = grading::grade_and_points(body.marks_obtained, body.total_marks);
    let semester = body.semester;

    let mark = match storage
        .upsert_student_mark(student_id, body, grade, grade_points)
        .await
    {
        Ok(mark) => mark,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("写入成绩失败: {e}"),
                )),
            );
        }
    };

    // 成绩变动后重算学期绩点
    if let Err(e) = storage
        .recompute_semester_performance(student_id, semester)
        .await
    {
        tracing::error!(
            "Failed to recompute semester performance for student {}: {}",
            student_id,
            e
        );
    }

    Ok(HttpResponse::Ok().json(ApiResponse::success(mark, "成绩已更新")))
}
