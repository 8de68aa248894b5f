pub mod attendance;
pub mod get;
pub mod list;
pub mod marks;
pub mod me;
pub mod performance;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::academics::requests::{UpsertAttendanceRequest, UpsertMarkRequest};
use crate::models::students::requests::{StudentListQuery, UpdateStudentRequest};
use crate::storage::Storage;

pub struct StudentService {
    storage: Option<Arc<dyn Storage>>,
}

impl StudentService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    // 学生列表（系主任）
    pub async fn list_students(
        &self,
        request: &HttpRequest,
        query: StudentListQuery,
    ) -> ActixResult<HttpResponse> {
        list::handle_list_students(self, request, query).await
    }

    // 学生详情（系主任）
    pub async fn get_student_detail(
        &self,
        request: &HttpRequest,
        student_id: i64,
    ) -> ActixResult<HttpResponse> {
        get::handle_get_student_detail(self, request, student_id).await
    }

    // 学生本人档案
    pub async fn get_my_profile(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        me::handle_get_my_profile(self, request).await
    }

    // 更新学生信息（系主任）
    pub async fn update_student(
        &self,
        request: &HttpRequest,
        student_id: i64,
        update: UpdateStudentRequest,
    ) -> ActixResult<HttpResponse> {
        update::handle_update_student(self, request, student_id, update).await
    }

    // 录入/更新成绩（系主任）
    pub async fn upsert_mark(
        &self,
        request: &HttpRequest,
        student_id: i64,
        body: UpsertMarkRequest,
    ) -> ActixResult<HttpResponse> {
        marks::handle_upsert_mark(self, request, student_id, body).await
    }

    // 录入/更新考勤（系主任）
    pub async fn upsert_attendance(
        &self,
        request: &HttpRequest,
        student_id: i64,
        body: UpsertAttendanceRequest,
    ) -> ActixResult<HttpResponse> {
        attendance::handle_upsert_attendance(self, request, student_id, body).await
    }

    // 学期绩点（系主任）
    pub async fn list_performance(
        &self,
        request: &HttpRequest,
        student_id: i64,
    ) -> ActixResult<HttpResponse> {
        performance::handle_list_performance(self, request, student_id).await
    }
}
