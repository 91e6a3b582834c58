//! Store API client

use shared::models::{Store, StoreRequest};

use crate::error::ClientError;
use crate::http::ApiClient;

#[derive(Debug, Clone)]
pub struct StoreApi {
    http: ApiClient,
}

impl StoreApi {
    pub fn new(http: ApiClient) -> Self {
        Self { http }
    }

    pub async fn list(&self) -> Result<Vec<Store>, ClientError> {
        self.http.get("/api/store").await
    }

    pub async fn get(&self, id: i32) -> Result<Store, ClientError> {
        self.http.get(&format!("/api/store/{}", id)).await
    }

    pub async fn create(&self, request: &StoreRequest) -> Result<Store, ClientError> {
        self.http.post("/api/store", request).await
    }

    pub async fn update(&self, id: i32, request: &StoreRequest) -> Result<Store, ClientError> {
        self.http.put(&format!("/api/store/{}", id), request).await
    }

    pub async fn delete(&self, id: i32) -> Result<(), ClientError> {
        self.http.delete(&format!("/api/store/{}", id)).await
    }
}
