use actix_web::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::path::Path;

use super::AttachmentService;
use crate::config::AppConfig;
use crate::models::{ApiResponse, ErrorCode};

/// 下载附件
/// GET /attachments/{token}/download
pub async fn handle_download(
    service: &AttachmentService,
    request: &HttpRequest,
    token: &str,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let config = AppConfig::get();

    let attachment = match storage.get_attachment_by_token(token).await {
        Ok(Some(attachment)) => attachment,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::FileNotFound,
                "附件不存在",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询附件失败: {e}"),
                )),
            );
        }
    };

    let file_path = Path::new(&config.upload.dir).join(&attachment.stored_name);
    let data = match std::fs::read(&file_path) {
        Ok(data) => data,
        Err(e) => {
            tracing::error!(
                "Attachment {} missing on disk ({}): {}",
                attachment.download_token,
                file_path.display(),
                e
            );
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::FileNotFound,
                "附件文件已丢失",
            )));
        }
    };

    let content_type = if attachment.file_type.is_empty() {
        "application/octet-stream".to_string()
    } else {
        attachment.file_type.clone()
    };

    Ok(HttpResponse::Ok()
        .insert_header((CONTENT_TYPE, content_type))
        .insert_header((
            CONTENT_DISPOSITION,
            format!(
                "attachment; filename=\"{}\"",
                attachment.original_name.replace('"', "")
            ),
        ))
        .body(data))
}
