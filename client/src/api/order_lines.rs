//! Order line API client
//!
//! The persisted per-order line records, exposed by the backend as their
//! own resource.

use shared::models::{OrderLineRecord, OrderLineRequest};

use crate::error::ClientError;
use crate::http::ApiClient;

#[derive(Debug, Clone)]
pub struct OrderLineApi {
    http: ApiClient,
}

impl OrderLineApi {
    pub fn new(http: ApiClient) -> Self {
        Self { http }
    }

    pub async fn list_for_order(&self, order_id: i32) -> Result<Vec<OrderLineRecord>, ClientError> {
        self.http
            .get(&format!("/api/order-line/order/{}", order_id))
            .await
    }

    pub async fn get(&self, id: i32) -> Result<OrderLineRecord, ClientError> {
        self.http.get(&format!("/api/order-line/{}", id)).await
    }

    pub async fn create(&self, request: &OrderLineRequest) -> Result<OrderLineRecord, ClientError> {
        self.http.post("/api/order-line", request).await
    }

    pub async fn update(
        &self,
        id: i32,
        request: &OrderLineRequest,
    ) -> Result<OrderLineRecord, ClientError> {
        self.http
            .put(&format!("/api/order-line/{}", id), request)
            .await
    }

    pub async fn delete(&self, id: i32) -> Result<(), ClientError> {
        self.http.delete(&format!("/api/order-line/{}", id)).await
    }
}
