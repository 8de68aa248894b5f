pub mod list;
pub mod read;
pub mod send;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::messages::requests::SendMessageRequest;
use crate::storage::Storage;

pub struct MessageService {
    storage: Option<Arc<dyn Storage>>,
}

impl MessageService {
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

    // 消息列表：学生看自己的，系主任看全部
    pub async fn list(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::handle_list(self, request).await
    }

    // 未读数
    pub async fn unread_count(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::handle_unread_count(self, request).await
    }

    // 发送消息
    pub async fn send(
        &self,
        request: &HttpRequest,
        body: SendMessageRequest,
    ) -> ActixResult<HttpResponse> {
        send::handle_send(self, request, body).await
    }

    // 标记已读
    pub async fn mark_read(&self, request: &HttpRequest, id: i64) -> ActixResult<HttpResponse> {
        read::handle_mark_read(self, request, id).await
    }
}
