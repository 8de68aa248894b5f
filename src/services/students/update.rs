use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::StudentService;
use crate::models::students::requests::UpdateStudentRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::{validate_cgpa, validate_email, validate_semester};

/// 更新学生信息
/// PUT /students/{id}
pub async fn handle_update_student(
    service: &StudentService,
    request: &HttpRequest,
    student_id: i64,
    update: UpdateStudentRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Some(ref email) = update.email
        && let Err(msg) = validate_email(email)
    {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::StudentEmailInvalid, msg)));
    }

    if let Some(semester) = update.semester
        && let Err(msg) = validate_semester(semester)
    {
        return Ok(
            HttpResponse::BadRequest().json(ApiResponse::error_empty(ErrorCode::BadRequest, msg))
        );
    }

    if let Some(cgpa) = update.cgpa
        && let Err(msg) = validate_cgpa(cgpa)
    {
        return Ok(
            HttpResponse::BadRequest().json(ApiResponse::error_empty(ErrorCode::BadRequest, msg))
        );
    }

    match storage.update_student(student_id, update).await {
        Ok(Some(student)) => {
            tracing::info!("Student {} updated", student.usn);
            Ok(HttpResponse::Ok().json(ApiResponse::success(student, "更新成功")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::StudentNotFound,
            "学生不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::StudentUpdateFailed,
                format!("更新学生失败: {e}"),
            )),
        ),
    }
}
