//! Invoice API client

use shared::models::{Invoice, InvoiceDetail, InvoiceRequest};

use crate::error::ClientError;
use crate::http::ApiClient;

#[derive(Debug, Clone)]
pub struct InvoiceApi {
    http: ApiClient,
}

impl InvoiceApi {
    pub fn new(http: ApiClient) -> Self {
        Self { http }
    }

    pub async fn list(&self) -> Result<Vec<Invoice>, ClientError> {
        self.http.get("/api/invoice").await
    }

    pub async fn get(&self, id: i32) -> Result<Invoice, ClientError> {
        self.http.get(&format!("/api/invoice/{}", id)).await
    }

    /// Invoice for a given order, with its billed lines resolved
    pub async fn for_order(&self, order_id: i32) -> Result<InvoiceDetail, ClientError> {
        self.http
            .get(&format!("/api/invoice/order/{}", order_id))
            .await
    }

    pub async fn create(&self, request: &InvoiceRequest) -> Result<Invoice, ClientError> {
        self.http.post("/api/invoice", request).await
    }

    pub async fn delete(&self, id: i32) -> Result<(), ClientError> {
        self.http.delete(&format!("/api/invoice/{}", id)).await
    }

    /// Download the rendered invoice PDF. Writing it to disk is left to the
    /// caller.
    pub async fn download_pdf(&self, id: i32) -> Result<Vec<u8>, ClientError> {
        self.http.get_bytes(&format!("/api/invoice/{}/pdf", id)).await
    }
}
