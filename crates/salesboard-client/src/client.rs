//! Salesboard HTTP client implementation.

use reqwest::{Client, Response, StatusCode};
use serde::Deserialize;
use std::time::Duration;

use salesboard_core::{Financials, GroupTotal, MonthlyTotal, Sale, SaleDraft, SaleId, SaleUpdate};

use crate::error::ClientError;

/// Options for constructing a [`SalesboardClient`].
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// Request timeout in seconds.
    pub timeout_seconds: u64,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self { timeout_seconds: 30 }
    }
}

/// Health endpoint response.
#[derive(Debug, Clone, Deserialize)]
pub struct HealthStatus {
    /// Service status string ("ok" when healthy).
    pub status: String,
    /// Service name.
    pub service: String,
    /// Service version.
    pub version: String,
}

/// Error body returned by the service.
#[derive(Debug, Deserialize)]
struct ApiErrorResponse {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    code: String,
    message: String,
}

/// Salesboard API client.
///
/// Provides methods for sale CRUD and the reporting endpoints.
#[derive(Debug, Clone)]
pub struct SalesboardClient {
    client: Client,
    base_url: String,
}

impl SalesboardClient {
    /// Create a new salesboard client.
    ///
    /// # Arguments
    ///
    /// * `base_url` - Base URL of the salesboard service
    ///   (e.g., `"http://localhost:5000"`)
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_options(base_url, ClientOptions::default())
    }

    /// Create a new salesboard client with custom options.
    ///
    /// # Panics
    ///
    /// Panics if the HTTP client cannot be built (should not happen with
    /// default settings).
    #[must_use]
    pub fn with_options(base_url: impl Into<String>, options: ClientOptions) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(options.timeout_seconds))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Check service health.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn health(&self) -> Result<HealthStatus, ClientError> {
        let url = format!("{}/health", self.base_url);
        let response = self.client.get(&url).send().await?;
        Self::handle_response(response).await
    }

    /// List every sale record.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn list_sales(&self) -> Result<Vec<Sale>, ClientError> {
        let url = format!("{}/api/sales", self.base_url);
        let response = self.client.get(&url).send().await?;
        Self::handle_response(response).await
    }

    /// Fetch a single sale by id.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::SaleNotFound` if the id does not exist.
    pub async fn get_sale(&self, id: &SaleId) -> Result<Sale, ClientError> {
        let url = format!("{}/api/sales/{id}", self.base_url);
        let response = self.client.get(&url).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(ClientError::SaleNotFound { id: id.to_string() });
        }

        Self::handle_response(response).await
    }

    /// Create a new sale.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the input is rejected.
    pub async fn create_sale(&self, draft: &SaleDraft) -> Result<Sale, ClientError> {
        let url = format!("{}/api/sales", self.base_url);
        let response = self.client.post(&url).json(draft).send().await?;
        Self::handle_response(response).await
    }

    /// Merge a partial update into an existing sale.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::SaleNotFound` if the id does not exist.
    pub async fn update_sale(
        &self,
        id: &SaleId,
        patch: &SaleUpdate,
    ) -> Result<Sale, ClientError> {
        let url = format!("{}/api/sales/{id}", self.base_url);
        let response = self.client.put(&url).json(patch).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(ClientError::SaleNotFound { id: id.to_string() });
        }

        Self::handle_response(response).await
    }

    /// Delete a sale.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::SaleNotFound` if the id does not exist.
    pub async fn delete_sale(&self, id: &SaleId) -> Result<(), ClientError> {
        let url = format!("{}/api/sales/{id}", self.base_url);
        let response = self.client.delete(&url).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(ClientError::SaleNotFound { id: id.to_string() });
        }

        let _: serde_json::Value = Self::handle_response(response).await?;
        Ok(())
    }

    /// Totals grouped by region.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn sales_by_region(&self) -> Result<Vec<GroupTotal>, ClientError> {
        self.get_report("by-region").await
    }

    /// Totals grouped by category.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn sales_by_category(&self) -> Result<Vec<GroupTotal>, ClientError> {
        self.get_report("by-category").await
    }

    /// Top five sales reps by total amount, descending.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn top_sales_reps(&self) -> Result<Vec<GroupTotal>, ClientError> {
        self.get_report("top-sales-reps").await
    }

    /// Monthly totals, ascending by `(year, month)`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn monthly_sales(&self) -> Result<Vec<MonthlyTotal>, ClientError> {
        self.get_report("monthly").await
    }

    /// Whole-collection financial summary.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn financials(&self) -> Result<Financials, ClientError> {
        self.get_report("financials").await
    }

    async fn get_report<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<T, ClientError> {
        let url = format!("{}/api/sales/{path}", self.base_url);
        let response = self.client.get(&url).send().await?;
        Self::handle_response(response).await
    }

    /// Decode a success body, or map an error body to `ClientError::Api`.
    async fn handle_response<T: serde::de::DeserializeOwned>(
        response: Response,
    ) -> Result<T, ClientError> {
        let status = response.status();

        if status.is_success() {
            return Ok(response.json().await?);
        }

        let body = response.text().await.unwrap_or_default();
        match serde_json::from_str::<ApiErrorResponse>(&body) {
            Ok(parsed) => Err(ClientError::Api {
                code: parsed.error.code,
                message: parsed.error.message,
                status: status.as_u16(),
            }),
            Err(_) => Err(ClientError::Api {
                code: "unknown".to_string(),
                message: body,
                status: status.as_u16(),
            }),
        }
    }
}
