//! Authentication API client

use shared::models::{Credentials, LoginResponse};

use crate::error::ClientError;
use crate::http::ApiClient;

#[derive(Debug, Clone)]
pub struct AuthApi {
    http: ApiClient,
}

impl AuthApi {
    pub fn new(http: ApiClient) -> Self {
        Self { http }
    }

    /// Log in and store the returned bearer token for subsequent requests
    pub async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ClientError> {
        let response: LoginResponse = self.http.post("/api/auth/login", credentials).await?;
        self.http.tokens().save(&response.token);
        Ok(response)
    }

    /// Register a new account; the backend logs it in immediately
    pub async fn register(&self, credentials: &Credentials) -> Result<LoginResponse, ClientError> {
        let response: LoginResponse = self.http.post("/api/auth/register", credentials).await?;
        self.http.tokens().save(&response.token);
        Ok(response)
    }

    /// Forget the stored token
    pub fn logout(&self) {
        self.http.tokens().clear();
    }
}
