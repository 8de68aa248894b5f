use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::StudentService;
use crate::models::academics::requests::UpsertAttendanceRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::validate_semester;

/// 录入/更新考勤
/// PUT /students/{id}/attendance
///
/// 出勤率由服务端计算。
pub async fn handle_upsert_attendance(
    service: &StudentService,
    request: &HttpRequest,
    student_id: i64,
    body: UpsertAttendanceRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Err(msg) = validate_semester(body.semester) {
        return Ok(
            HttpResponse::BadRequest().json(ApiResponse::error_empty(ErrorCode::BadRequest, msg))
        );
    }

    if body.total_classes <= 0
        || body.attended_classes < 0
        || body.attended_classes > body.total_classes
    {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::AttendanceInvalid,
            "出勤次数必须在 0 到总课时之间",
        )));
    }

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

    let percentage = body.attended_classes as f64 / body.total_classes as f64 * 100.0;

    match storage
        .upsert_attendance_record(student_id, body, percentage)
        .await
    {
        Ok(record) => Ok(HttpResponse::Ok().json(ApiResponse::success(record, "考勤已更新"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("写入考勤失败: {e}"),
            )),
        ),
    }
}
