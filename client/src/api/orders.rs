//! Order API client

use async_trait::async_trait;

use shared::models::{OrderDetail, OrderRequest, OrderResponse};

use crate::error::ClientError;
use crate::http::ApiClient;
use crate::submit::OrderSink;

#[derive(Debug, Clone)]
pub struct OrderApi {
    http: ApiClient,
}

impl OrderApi {
    pub fn new(http: ApiClient) -> Self {
        Self { http }
    }

    pub async fn list(&self) -> Result<Vec<OrderResponse>, ClientError> {
        self.http.get("/api/order").await
    }

    pub async fn get(&self, id: i32) -> Result<OrderResponse, ClientError> {
        self.http.get(&format!("/api/order/{}", id)).await
    }

    /// Order with its line items resolved for display
    pub async fn detail(&self, id: i32) -> Result<OrderDetail, ClientError> {
        self.http.get(&format!("/api/order/{}/details", id)).await
    }

    /// Create the order; the backend re-validates stock and decrements it
    /// in the same transaction
    pub async fn create(&self, request: &OrderRequest) -> Result<OrderResponse, ClientError> {
        self.http.post("/api/order", request).await
    }

    pub async fn update(
        &self,
        id: i32,
        request: &OrderRequest,
    ) -> Result<OrderResponse, ClientError> {
        self.http.put(&format!("/api/order/{}", id), request).await
    }

    pub async fn delete(&self, id: i32) -> Result<(), ClientError> {
        self.http.delete(&format!("/api/order/{}", id)).await
    }
}

#[async_trait]
impl OrderSink for OrderApi {
    async fn create_order(&self, request: &OrderRequest) -> Result<OrderResponse, ClientError> {
        self.create(request).await
    }
}
