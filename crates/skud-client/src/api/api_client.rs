use crate::error::{REQUEST_FAILED_MESSAGE, SERVER_ERROR_MESSAGE};
use crate::{ClientError, ClientResult};

use std::time::Duration;

use log::{debug, warn};
use reqwest::{Client as ReqwestClient, Method, RequestBuilder, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use skud_config::ApiConfig;
use skud_core::{
    AbsentResident, ApiMessage, Coordinates, FullName, PresenceStats, PresenceStatus,
    Registration, Resident, StatusSnapshot, StatusUpdate, UserId,
};

const MIN_SEARCH_CHARS: usize = 2;

/// HTTP client for the SKUD REST API
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    client: ReqwestClient,
}

impl ApiClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Server URL (e.g., "http://127.0.0.1:8000")
    /// * `timeout` - Upper bound for each request, including reading the body
    pub fn new(base_url: &str, timeout: Duration) -> ClientResult<Self> {
        let client = ReqwestClient::builder()
            .timeout(timeout)
            .build()
            .map_err(ClientError::network)?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn from_config(config: &ApiConfig) -> ClientResult<Self> {
        Self::new(&config.base_url, config.timeout())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        debug!("{method} {url}");
        self.client.request(method, url)
    }

    /// Send a request and decode a JSON success body.
    ///
    /// Error bodies are expected to look like `{"detail": "..."}`.
    async fn execute<T: DeserializeOwned>(&self, req: RequestBuilder) -> ClientResult<T> {
        let response = req.send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            let message = Self::error_detail(&body);
            warn!("API request failed with {status}: {message}");
            return Err(ClientError::server(status.as_u16(), message));
        }

        Ok(serde_json::from_slice(&body)?)
    }

    fn error_detail(body: &[u8]) -> String {
        match serde_json::from_slice::<Value>(body) {
            Ok(value) => value
                .get("detail")
                .and_then(Value::as_str)
                .unwrap_or(REQUEST_FAILED_MESSAGE)
                .to_string(),
            Err(_) => SERVER_ERROR_MESSAGE.to_string(),
        }
    }

    // =========================================================================
    // Resident Operations
    // =========================================================================

    /// Register a new resident
    pub async fn register(&self, full_name: &FullName) -> ClientResult<Registration> {
        #[derive(Serialize)]
        struct RegisterRequest<'a> {
            full_name: &'a FullName,
        }

        let req = self
            .request(Method::POST, "/api/register")
            .json(&RegisterRequest { full_name });
        self.execute(req).await
    }

    /// Current status of a resident
    pub async fn get_status(&self, user_id: &UserId) -> ClientResult<StatusSnapshot> {
        let req = self.request(Method::GET, &format!("/api/status/{}", user_id));
        self.execute(req)
            .await
            .map_err(ClientError::into_unknown_identity_if_not_found)
    }

    /// Change a resident's status, attaching a position fix when there is one
    pub async fn update_status(
        &self,
        user_id: &UserId,
        status: PresenceStatus,
        coordinates: Option<Coordinates>,
    ) -> ClientResult<StatusSnapshot> {
        let body = StatusUpdate::new(status, coordinates);
        let req = self
            .request(Method::POST, &format!("/api/status/{}", user_id))
            .json(&body);
        self.execute(req)
            .await
            .map_err(ClientError::into_unknown_identity_if_not_found)
    }

    // =========================================================================
    // Duty Officer Operations
    // =========================================================================

    /// Head count per status
    pub async fn stats(&self) -> ClientResult<PresenceStats> {
        let req = self.request(Method::GET, "/api/stats");
        self.execute(req).await
    }

    /// Everyone not inside, with their last known position
    pub async fn absent(&self) -> ClientResult<Vec<AbsentResident>> {
        let req = self.request(Method::GET, "/api/absent");
        self.execute(req).await
    }

    /// All registered residents
    pub async fn list_users(&self) -> ClientResult<Vec<Resident>> {
        let req = self.request(Method::GET, "/api/users");
        self.execute(req).await
    }

    /// Residents whose name contains `query`
    pub async fn search_users(&self, query: &str) -> ClientResult<Vec<Resident>> {
        let query = query.trim();
        if query.chars().count() < MIN_SEARCH_CHARS {
            return Err(ClientError::validation("Минимум 2 символа для поиска"));
        }

        let url = Url::parse_with_params(
            &format!("{}/api/users/search", self.base_url),
            &[("q", query)],
        )
        .map_err(|e| ClientError::validation(format!("invalid search url: {e}")))?;

        debug!("GET {url}");
        let req = self.client.request(Method::GET, url);
        self.execute(req).await
    }

    /// Delete a resident by numeric id
    pub async fn delete_user(&self, id: i64) -> ClientResult<ApiMessage> {
        let req = self.request(Method::DELETE, &format!("/api/users/{}", id));
        self.execute(req).await
    }

    /// Put every resident back inside
    pub async fn reset_all(&self) -> ClientResult<ApiMessage> {
        let req = self.request(Method::POST, "/api/reset");
        self.execute(req).await
    }
}
