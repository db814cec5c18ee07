//! Typed HTTP client for the `/api` endpoints.

use censur_core::types::DbId;
use censur_db::models::hold::HoldWithNames;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::ClientError;
use crate::resource::Resource;

/// Shape of every non-2xx JSON body the server produces.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Payload for `POST /api/hold`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HoldPayload {
    pub deltagere: i32,
    pub termin: String,
    #[serde(rename = "prøve")]
    pub prove: String,
    #[serde(rename = "prøvetype")]
    pub provetype: String,
    #[serde(rename = "låst")]
    pub laast: bool,
    pub sprogcenter_id: Option<DbId>,
    pub censorer_id: Option<DbId>,
}

/// HTTP client for one API server.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// * `base_url` - Server root, e.g. `http://localhost:3001`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api/{}", self.base_url, path)
    }

    /// `GET /api/{R::PATH}`
    pub async fn list<R: Resource>(&self) -> Result<Vec<R::Row>, ClientError> {
        let response = self.client.get(self.url(R::PATH)).send().await?;
        Self::parse_response(response).await
    }

    /// `POST /api/{R::PATH}`, returning the created row as raw JSON.
    ///
    /// Organisations are listed as a narrower projection than they are
    /// created as, so the created body is not decoded into `R::Row`.
    pub async fn create<R: Resource>(
        &self,
        draft: &R::Draft,
    ) -> Result<serde_json::Value, ClientError> {
        let response = self.client.post(self.url(R::PATH)).json(draft).send().await?;
        Self::parse_response(response).await
    }

    /// `DELETE /api/{R::PATH}/{id}`
    pub async fn delete<R: Resource>(&self, id: DbId) -> Result<(), ClientError> {
        let response = self
            .client
            .delete(self.url(&format!("{}/{}", R::PATH, id)))
            .send()
            .await?;
        Self::check_status(response).await
    }

    /// `GET /api/hold`, filtered by term when one is given.
    pub async fn list_hold(&self, termin: Option<&str>) -> Result<Vec<HoldWithNames>, ClientError> {
        let mut request = self.client.get(self.url("hold"));
        if let Some(termin) = termin {
            request = request.query(&[("termin", termin)]);
        }
        Self::parse_response(request.send().await?).await
    }

    /// `POST /api/hold`
    pub async fn create_hold(&self, payload: &HoldPayload) -> Result<HoldWithNames, ClientError> {
        let response = self.client.post(self.url("hold")).json(payload).send().await?;
        Self::parse_response(response).await
    }

    /// `DELETE /api/hold/{id}`
    pub async fn delete_hold(&self, id: DbId) -> Result<(), ClientError> {
        let response = self
            .client
            .delete(self.url(&format!("hold/{id}")))
            .send()
            .await?;
        Self::check_status(response).await
    }

    /// `PATCH /api/hold/{id}/togglelock`
    pub async fn toggle_lock(&self, id: DbId) -> Result<HoldWithNames, ClientError> {
        let response = self
            .client
            .patch(self.url(&format!("hold/{id}/togglelock")))
            .send()
            .await?;
        Self::parse_response(response).await
    }

    /// `GET /api/terminer`
    pub async fn list_terms(&self) -> Result<Vec<String>, ClientError> {
        let response = self.client.get(self.url("terminer")).send().await?;
        Self::parse_response(response).await
    }

    // ---- private helpers ----

    /// Pass a 2xx response through; turn anything else into
    /// [`ClientError::Api`] carrying the server's `error` text.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "<unreadable body>".to_string());
        let message = match serde_json::from_str::<ErrorBody>(&body) {
            Ok(parsed) => parsed.error,
            Err(_) if body.is_empty() => status.to_string(),
            Err(_) => body,
        };
        tracing::debug!(status = status.as_u16(), %message, "API request failed");

        Err(ClientError::Api {
            status: status.as_u16(),
            message,
        })
    }

    async fn parse_response<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ClientError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }

    async fn check_status(response: reqwest::Response) -> Result<(), ClientError> {
        Self::ensure_success(response).await?;
        Ok(())
    }
}
