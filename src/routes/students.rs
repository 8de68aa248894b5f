use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::academics::requests::{UpsertAttendanceRequest, UpsertMarkRequest};
use crate::models::auth::entities::UserRole;
use crate::models::students::requests::{StudentListParams, UpdateStudentRequest};
use crate::services::StudentService;
use crate::utils::SafeIDI64;

// 懒加载的全局 StudentService 实例
static STUDENT_SERVICE: Lazy<StudentService> = Lazy::new(StudentService::new_lazy);

// 学生列表
pub async fn list_students(
    req: HttpRequest,
    query: web::Query<StudentListParams>,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE
        .list_students(&req, query.into_inner().into())
        .await
}

// 学生本人档案
pub async fn get_my_profile(req: HttpRequest) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.get_my_profile(&req).await
}

// 学生详情
pub async fn get_student_detail(req: HttpRequest, path: SafeIDI64) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.get_student_detail(&req, path.0).await
}

// 更新学生信息
pub async fn update_student(
    req: HttpRequest,
    path: SafeIDI64,
    body: web::Json<UpdateStudentRequest>,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE
        .update_student(&req, path.0, body.into_inner())
        .await
}

// 录入/更新成绩
pub async fn upsert_mark(
    req: HttpRequest,
    path: SafeIDI64,
    body: web::Json<UpsertMarkRequest>,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE
        .upsert_mark(&req, path.0, body.into_inner())
        .await
}

// 录入/更新考勤
pub async fn upsert_attendance(
    req: HttpRequest,
    path: SafeIDI64,
    body: web::Json<UpsertAttendanceRequest>,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE
        .upsert_attendance(&req, path.0, body.into_inner())
        .await
}

// 学期绩点
pub async fn list_performance(req: HttpRequest, path: SafeIDI64) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.list_performance(&req, path.0).await
}

// 配置路由
pub fn configure_student_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/students")
            .wrap(middlewares::RequireJWT)
            // 学生本人档案 - 仅学生
            .service(
                web::resource("/me")
                    .route(web::get().to(get_my_profile))
                    .wrap(middlewares::RequireRole::new(&UserRole::Student)),
            )
            // 其余全部为系主任操作
            .service(
                web::scope("")
                    .wrap(middlewares::RequireRole::new(&UserRole::Hod))
                    .service(web::resource("").route(web::get().to(list_students)))
                    .service(
                        web::resource("/{id}")
                            .route(web::get().to(get_student_detail))
                            .route(web::put().to(update_student)),
                    )
                    .service(web::resource("/{id}/marks").route(web::put().to(upsert_mark)))
                    .service(
                        web::resource("/{id}/attendance").route(web::put().to(upsert_attendance)),
                    )
                    .service(
                        web::resource("/{id}/performance").route(web::get().to(list_performance)),
                    ),
            ),
    );
}
