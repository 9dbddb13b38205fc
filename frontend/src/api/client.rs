use reqwest::{Client, Request, RequestBuilder};
use serde::de::DeserializeOwned;

use crate::{api::types::ApiError, config};

/// Handle to the REST backend. Cheap to clone; provided to the tree through context.
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(config::normalize_base_url(&base_url.into())),
        }
    }

    pub(crate) async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_api_base_url().await
        }
    }

    pub(crate) fn http_client(&self) -> &Client {
        &self.client
    }

    pub(crate) async fn send(&self, builder: RequestBuilder) -> Result<ApiResponse, ApiError> {
        let request = builder
            .build()
            .map_err(|e| ApiError::request_failed(format!("Failed to build request: {}", e)))?;
        let method = request.method().clone();
        let url = request.url().to_string();

        if let Some(mocked) = mock_response(&request) {
            return mocked;
        }

        let response = self.client.execute(request).await.map_err(|e| {
            log::error!("{} {} failed: {}", method, url, e);
            ApiError::request_failed(format!("Request failed: {}", e))
        })?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::request_failed(format!("Failed to read response: {}", e)))?;
        log::debug!("{} {} -> {}", method, url, status);
        Ok(ApiResponse { status, body })
    }
}

/// Status and raw body of a completed request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn json<T: DeserializeOwned>(self) -> Result<T, ApiError> {
        if !self.is_success() {
            return Err(self.into_error());
        }
        serde_json::from_str(&self.body)
            .map_err(|e| ApiError::decode(format!("Failed to parse response: {}", e)))
    }

    /// Succeeds on any 2xx regardless of body.
    pub fn empty(self) -> Result<(), ApiError> {
        if self.is_success() {
            Ok(())
        } else {
            Err(self.into_error())
        }
    }

    pub fn into_error(self) -> ApiError {
        ApiError::from_status(self.status, &self.body)
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod mock_registry {
    use super::{ApiError, ApiResponse};
    use reqwest::Request;
    use serde_json::Value;
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex, OnceLock};

    pub trait TestResponder: Send + Sync {
        fn respond(&self, request: &Request) -> Result<MockResponse, ApiError>;
    }

    #[derive(Clone, Debug)]
    pub struct MockResponse {
        pub status: u16,
        pub body: String,
    }

    impl MockResponse {
        pub fn json(status: u16, body: Value) -> Self {
            Self {
                status,
                body: body.to_string(),
            }
        }
    }

    type Registry = Mutex<HashMap<String, Arc<dyn TestResponder>>>;

    fn registry() -> &'static Registry {
        static MOCKS: OnceLock<Registry> = OnceLock::new();
        MOCKS.get_or_init(|| Mutex::new(HashMap::new()))
    }

    pub fn register_mock(base_url: String, responder: Arc<dyn TestResponder>) {
        if let Ok(mut mocks) = registry().lock() {
            mocks.insert(base_url, responder);
        }
    }

    fn lookup(url: &str) -> Option<Arc<dyn TestResponder>> {
        let mocks = registry().lock().ok()?;
        mocks
            .iter()
            .filter(|(base, _)| {
                url.strip_prefix(base.as_str())
                    .map(|rest| rest.is_empty() || rest.starts_with('/') || rest.starts_with('?'))
                    .unwrap_or(false)
            })
            .max_by_key(|(base, _)| base.len())
            .map(|(_, responder)| responder.clone())
    }

    pub(super) fn respond(request: &Request) -> Option<Result<ApiResponse, ApiError>> {
        let responder = lookup(request.url().as_str())?;
        Some(responder.respond(request).map(|mock| ApiResponse {
            status: mock.status,
            body: mock.body,
        }))
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
pub use mock_registry::{register_mock, MockResponse, TestResponder};

#[cfg(all(test, not(target_arch = "wasm32")))]
fn mock_response(request: &Request) -> Option<Result<ApiResponse, ApiError>> {
    mock_registry::respond(request)
}

#[cfg(not(all(test, not(target_arch = "wasm32"))))]
fn mock_response(_request: &Request) -> Option<Result<ApiResponse, ApiError>> {
    None
}
