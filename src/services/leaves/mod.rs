pub mod apply;
pub mod balance;
pub mod decide;
pub mod history;
pub mod queues;
pub mod special;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::config::AppConfig;
use crate::models::leaves::requests::{
    ApplyLeaveRequest, RejectLeaveRequest, SpecialLeaveRequestBody,
};
use crate::storage::Storage;

pub struct LeaveService {
    storage: Option<Arc<dyn Storage>>,
}

impl LeaveService {
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

    pub(crate) fn get_config(&self) -> &AppConfig {
        AppConfig::get()
    }

    // 提交请假申请（学生）
    pub async fn apply(
        &self,
        request: &HttpRequest,
        body: ApplyLeaveRequest,
    ) -> ActixResult<HttpResponse> {
        apply::handle_apply(self, request, body).await
    }

    // 提交特殊请假申请（学生）
    pub async fn apply_special(
        &self,
        request: &HttpRequest,
        body: SpecialLeaveRequestBody,
    ) -> ActixResult<HttpResponse> {
        special::handle_apply_special(self, request, body).await
    }

    // 本人请假历史（学生）
    pub async fn my_history(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        history::handle_my_history(self, request).await
    }

    // 本人特殊请假历史（学生）
    pub async fn my_special_history(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        history::handle_my_special_history(self, request).await
    }

    // 本人当前学期余额（学生）
    pub async fn my_balance(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        balance::handle_my_balance(self, request).await
    }

    // 待审批列表（系主任）
    pub async fn pending(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        queues::handle_pending(self, request).await
    }

    // 近期已处理列表（系主任）
    pub async fn processed(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        queues::handle_processed(self, request).await
    }

    // 待审批特殊请假列表（系主任）
    pub async fn special_pending(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        queues::handle_special_pending(self, request).await
    }

    // 审批通过（系主任）
    pub async fn approve(&self, request: &HttpRequest, id: i64) -> ActixResult<HttpResponse> {
        decide::handle_approve(self, request, id).await
    }

    // 驳回（系主任）
    pub async fn reject(
        &self,
        request: &HttpRequest,
        id: i64,
        body: RejectLeaveRequest,
    ) -> ActixResult<HttpResponse> {
        decide::handle_reject(self, request, id, body).await
    }

    // 审批通过特殊请假（系主任）
    pub async fn approve_special(
        &self,
        request: &HttpRequest,
        id: i64,
    ) -> ActixResult<HttpResponse> {
        decide::handle_approve_special(self, request, id).await
    }

    // 驳回特殊请假（系主任）
    pub async fn reject_special(
        &self,
        request: &HttpRequest,
        id: i64,
        body: RejectLeaveRequest,
    ) -> ActixResult<HttpResponse> {
        decide::handle_reject_special(self, request, id, body).await
    }
}
