use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::services::AttachmentService;
use crate::utils::SafeFileToken;

// 懒加载的全局 AttachmentService 实例
static ATTACHMENT_SERVICE: Lazy<AttachmentService> = Lazy::new(AttachmentService::new_lazy);

// 上传附件
pub async fn upload_attachment(req: HttpRequest, payload: Multipart) -> ActixResult<HttpResponse> {
    ATTACHMENT_SERVICE.upload(&req, payload).await
}

// 下载附件
pub async fn download_attachment(
    req: HttpRequest,
    path: SafeFileToken,
) -> ActixResult<HttpResponse> {
    ATTACHMENT_SERVICE.download(&req, &path.0).await
}

// 配置路由
pub fn configure_attachment_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/attachments")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("/upload")
                    .route(web::post().to(upload_attachment))
                    .wrap(middlewares::RateLimit::file_upload()),
            )
            .service(
                web::resource("/{token}/download").route(web::get().to(download_attachment)),
            ),
    );
}
