use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::auth::entities::UserRole;
use crate::models::leaves::requests::{
    ApplyLeaveRequest, RejectLeaveRequest, SpecialLeaveRequestBody,
};
use crate::services::LeaveService;
use crate::utils::SafeIDI64;

// 懒加载的全局 LeaveService 实例
static LEAVE_SERVICE: Lazy<LeaveService> = Lazy::new(LeaveService::new_lazy);

// 提交请假申请
pub async fn apply_leave(
    req: HttpRequest,
    body: web::Json<ApplyLeaveRequest>,
) -> ActixResult<HttpResponse> {
    LEAVE_SERVICE.apply(&req, body.into_inner()).await
}

// 提交特殊请假申请
pub async fn apply_special_leave(
    req: HttpRequest,
    body: web::Json<SpecialLeaveRequestBody>,
) -> ActixResult<HttpResponse> {
    LEAVE_SERVICE.apply_special(&req, body.into_inner()).await
}

// 本人请假历史
pub async fn my_leave_history(req: HttpRequest) -> ActixResult<HttpResponse> {
    LEAVE_SERVICE.my_history(&req).await
}

// 本人特殊请假历史
pub async fn my_special_history(req: HttpRequest) -> ActixResult<HttpResponse> {
    LEAVE_SERVICE.my_special_history(&req).await
}

// 本人当前学期余额
pub async fn my_leave_balance(req: HttpRequest) -> ActixResult<HttpResponse> {
    LEAVE_SERVICE.my_balance(&req).await
}

// 待审批列表
pub async fn pending_leaves(req: HttpRequest) -> ActixResult<HttpResponse> {
    LEAVE_SERVICE.pending(&req).await
}

// 近期已处理列表
pub async fn processed_leaves(req: HttpRequest) -> ActixResult<HttpResponse> {
    LEAVE_SERVICE.processed(&req).await
}

// 待审批特殊请假列表
pub async fn pending_special_leaves(req: HttpRequest) -> ActixResult<HttpResponse> {
    LEAVE_SERVICE.special_pending(&req).await
}

// 审批通过
pub async fn approve_leave(req: HttpRequest, path: SafeIDI64) -> ActixResult<HttpResponse> {
    LEAVE_SERVICE.approve(&req, path.0).await
}

// 驳回
pub async fn reject_leave(
    req: HttpRequest,
    path: SafeIDI64,
    body: web::Json<RejectLeaveRequest>,
) -> ActixResult<HttpResponse> {
    LEAVE_SERVICE.reject(&req, path.0, body.into_inner()).await
}

// 审批通过特殊请假
pub async fn approve_special_leave(req: HttpRequest, path: SafeIDI64) -> ActixResult<HttpResponse> {
    LEAVE_SERVICE.approve_special(&req, path.0).await
}

// 驳回特殊请假
pub async fn reject_special_leave(
    req: HttpRequest,
    path: SafeIDI64,
    body: web::Json<RejectLeaveRequest>,
) -> ActixResult<HttpResponse> {
    LEAVE_SERVICE
        .reject_special(&req, path.0, body.into_inner())
        .await
}

// 配置路由
pub fn configure_leave_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/leaves")
            .wrap(middlewares::RequireJWT)
            // 学生侧
            .service(
                web::resource("")
                    .route(
                        web::post()
                            .to(apply_leave)
                            .wrap(middlewares::RequireRole::new(&UserRole::Student)),
                    ),
            )
            .service(
                web::resource("/special")
                    .route(
                        web::post()
                            .to(apply_special_leave)
                            .wrap(middlewares::RequireRole::new(&UserRole::Student)),
                    ),
            )
            .service(
                web::resource("/my")
                    .route(web::get().to(my_leave_history))
                    .wrap(middlewares::RequireRole::new(&UserRole::Student)),
            )
            .service(
                web::resource("/my/balance")
                    .route(web::get().to(my_leave_balance))
                    .wrap(middlewares::RequireRole::new(&UserRole::Student)),
            )
            .service(
                web::resource("/special/my")
                    .route(web::get().to(my_special_history))
                    .wrap(middlewares::RequireRole::new(&UserRole::Student)),
            )
            // 系主任侧
            .service(
                web::resource("/pending")
                    .route(web::get().to(pending_leaves))
                    .wrap(middlewares::RequireRole::new(&UserRole::Hod)),
            )
            .service(
                web::resource("/processed")
                    .route(web::get().to(processed_leaves))
                    .wrap(middlewares::RequireRole::new(&UserRole::Hod)),
            )
            .service(
                web::resource("/special/pending")
                    .route(web::get().to(pending_special_leaves))
                    .wrap(middlewares::RequireRole::new(&UserRole::Hod)),
            )
            .service(
                web::resource("/special/{id}/approve")
                    .route(web::post().to(approve_special_leave))
                    .wrap(middlewares::RequireRole::new(&UserRole::Hod)),
            )
            .service(
                web::resource("/special/{id}/reject")
                    .route(web::post().to(reject_special_leave))
                    .wrap(middlewares::RequireRole::new(&UserRole::Hod)),
            )
            .service(
                web::resource("/{id}/approve")
                    .route(web::post().to(approve_leave))
                    .wrap(middlewares::RequireRole::new(&UserRole::Hod)),
            )
            .service(
                web::resource("/{id}/reject")
                    .route(web::post().to(reject_leave))
                    .wrap(middlewares::RequireRole::new(&UserRole::Hod)),
            ),
    );
}
