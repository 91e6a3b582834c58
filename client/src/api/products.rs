//! Product catalog API client

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use shared::models::{Product, ProductRequest};

use crate::error::ClientError;
use crate::http::ApiClient;
use crate::submit::CatalogSource;

#[derive(Debug, Clone)]
pub struct ProductApi {
    http: ApiClient,
}

impl ProductApi {
    pub fn new(http: ApiClient) -> Self {
        Self { http }
    }

    pub async fn list(&self) -> Result<Vec<Product>, ClientError> {
        self.http.get("/api/product").await
    }

    pub async fn get(&self, id: i32) -> Result<Product, ClientError> {
        self.http.get(&format!("/api/product/{}", id)).await
    }

    pub async fn create(&self, request: &ProductRequest) -> Result<Product, ClientError> {
        self.http.post("/api/product", request).await
    }

    pub async fn update(&self, id: i32, request: &ProductRequest) -> Result<Product, ClientError> {
        self.http.put(&format!("/api/product/{}", id), request).await
    }

    pub async fn delete(&self, id: i32) -> Result<(), ClientError> {
        self.http.delete(&format!("/api/product/{}", id)).await
    }
}

#[async_trait]
impl CatalogSource for ProductApi {
    async fn fetch_catalog(&self) -> Result<Vec<Product>, ClientError> {
        self.list().await
    }
}

/// Encode raw image bytes for [`ProductRequest::image_base64`]
pub fn encode_image(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}
