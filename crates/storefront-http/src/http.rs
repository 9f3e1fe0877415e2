//! HTTP backend abstraction for the catalog API.
//!
//! This module provides a trait-based HTTP backend that allows for
//! dependency injection and easy testing. The production implementation
//! uses reqwest; reads retry transient errors with exponential backoff,
//! writes are sent exactly once.

use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;
use url::Url;

use crate::error::{HttpError, HttpResult};
use crate::form::MultipartForm;
use crate::url::EndpointConfig;

// ============================================================================
// HTTP Backend Trait
// ============================================================================

/// Method used to submit a multipart category payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMethod {
    Post,
    Put,
}

impl FormMethod {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Post => "POST",
            Self::Put => "PUT",
        }
    }
}

/// Trait for HTTP backends that talk to the catalog API.
///
/// This is an implementation detail - external code should use the store
/// port traits.
#[async_trait]
pub trait HttpBackend: Send + Sync {
    /// Fetch JSON from a URL.
    async fn get_json(&self, url: &Url) -> HttpResult<Value>;

    /// Send a multipart form and return the JSON response body, or `null`
    /// when a successful response has no readable JSON body.
    async fn send_form(&self, method: FormMethod, url: &Url, form: MultipartForm)
    -> HttpResult<Value>;

    /// POST a JSON body, ignoring any response body.
    async fn post_json(&self, url: &Url, body: &Value) -> HttpResult<()>;

    /// DELETE a resource, ignoring any response body.
    async fn delete(&self, url: &Url) -> HttpResult<()>;
}

// ============================================================================
// Reqwest Backend
// ============================================================================

/// Production HTTP backend using reqwest.
pub struct ReqwestBackend {
    client: reqwest::Client,
    max_retries: u8,
    retry_base_delay_ms: u64,
}

impl ReqwestBackend {
    /// Create a new reqwest backend with the given configuration.
    pub fn new(config: &EndpointConfig) -> HttpResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self {
            client,
            max_retries: config.max_retries,
            retry_base_delay_ms: config.retry_base_delay_ms,
        })
    }

    /// Fetch a URL with automatic retry for transient errors.
    async fn fetch_with_retry(&self, url: &Url) -> HttpResult<reqwest::Response> {
        let mut last_error: Option<HttpError> = None;

        for attempt in 0..=self.max_retries {
            if attempt > 0 {
                let delay = Duration::from_millis(
                    self.retry_base_delay_ms * 2u64.pow(u32::from(attempt) - 1),
                );
                tracing::debug!(%url, attempt, ?delay, "retrying catalog request");
                tokio::time::sleep(delay).await;
            }

            match self.client.get(url.as_str()).send().await {
                Ok(response) => {
                    let status = response.status();
                    if status.is_success() {
                        return Ok(response);
                    }

                    // 5xx errors are retryable (server-side issues)
                    if status.is_server_error() && attempt < self.max_retries {
                        last_error = Some(HttpError::ApiRequestFailed {
                            status: status.as_u16(),
                            url: url.to_string(),
                            message: None,
                        });
                        continue;
                    }

                    return Err(failure(url, response).await);
                }
                Err(e) => {
                    // Network errors are retryable
                    if attempt < self.max_retries {
                        last_error = Some(e.into());
                        continue;
                    }
                    return Err(e.into());
                }
            }
        }

        Err(last_error.unwrap_or_else(|| HttpError::InvalidResponse {
            message: "Unknown error during fetch".to_string(),
        }))
    }
}

/// Turn a non-success response into an error, keeping the server's message.
async fn failure(url: &Url, response: reqwest::Response) -> HttpError {
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    HttpError::ApiRequestFailed {
        status,
        url: url.to_string(),
        message: extract_message(&body),
    }
}

/// Pull a human-readable message out of an error body.
///
/// Accepts `{"message": ..}`, `{"error": ..}` or a short plain-text body.
fn extract_message(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(json) = serde_json::from_str::<Value>(trimmed) {
        return ["message", "error"]
            .iter()
            .find_map(|key| json.get(key).and_then(Value::as_str))
            .map(str::to_string);
    }
    if trimmed.len() <= 200 && !trimmed.starts_with('<') {
        return Some(trimmed.to_string());
    }
    None
}

/// Parse a success body as JSON, treating an empty body as `null`.
async fn json_body(response: reqwest::Response) -> HttpResult<Value> {
    let text = response.text().await?;
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    Ok(serde_json::from_str(&text)?)
}

/// Body of a successful write. The write is already stored, so a body that
/// cannot be read or parsed becomes `null` instead of an error.
async fn write_body(response: reqwest::Response) -> Value {
    match response.text().await {
        Ok(text) => serde_json::from_str(&text).unwrap_or(Value::Null),
        Err(e) => {
            tracing::warn!(error = %e, "could not read write response body");
            Value::Null
        }
    }
}

#[async_trait]
impl HttpBackend for ReqwestBackend {
    async fn get_json(&self, url: &Url) -> HttpResult<Value> {
        tracing::debug!(%url, "GET");
        let response = self.fetch_with_retry(url).await?;
        json_body(response).await
    }

    async fn send_form(
        &self,
        method: FormMethod,
        url: &Url,
        form: MultipartForm,
    ) -> HttpResult<Value> {
        tracing::debug!(%url, method = method.as_str(), files = form.has_files(), "multipart");
        let form = form.into_reqwest()?;
        let request = match method {
            FormMethod::Post => self.client.post(url.as_str()),
            FormMethod::Put => self.client.put(url.as_str()),
        };

        let response = request.multipart(form).send().await?;
        if !response.status().is_success() {
            return Err(failure(url, response).await);
        }
        Ok(write_body(response).await)
    }

    async fn post_json(&self, url: &Url, body: &Value) -> HttpResult<()> {
        tracing::debug!(%url, "POST json");
        let response = self.client.post(url.as_str()).json(body).send().await?;
        if !response.status().is_success() {
            return Err(failure(url, response).await);
        }
        Ok(())
    }

    async fn delete(&self, url: &Url) -> HttpResult<()> {
        tracing::debug!(%url, "DELETE");
        let response = self.client.delete(url.as_str()).send().await?;
        if !response.status().is_success() {
            return Err(failure(url, response).await);
        }
        Ok(())
    }
}

// ============================================================================
// Fake Backend for Testing
// ============================================================================

#[cfg(test)]
pub mod testing {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// Canned response for the fake backend.
    #[derive(Clone)]
    pub enum CannedResponse {
        /// 2xx with this JSON body
        Json(Value),
        /// Non-success status with an optional message
        Status(u16, Option<String>),
    }

    /// A request the fake backend received.
    #[derive(Debug, Clone)]
    pub struct RecordedRequest {
        pub method: &'static str,
        pub url: String,
        pub form: Option<MultipartForm>,
        pub json: Option<Value>,
    }

    /// A fake HTTP backend that returns canned responses and records requests.
    #[derive(Default)]
    pub struct FakeBackend {
        responses: Vec<(&'static str, String, CannedResponse)>,
        requests: Arc<Mutex<Vec<RecordedRequest>>>,
    }

    impl FakeBackend {
        /// Create a new fake backend.
        pub fn new() -> Self {
            Self::default()
        }

        /// Add a canned response for a method and URL pattern.
        pub fn with_response(
            mut self,
            method: &'static str,
            url_contains: &str,
            response: CannedResponse,
        ) -> Self {
            self.responses
                .push((method, url_contains.to_string(), response));
            self
        }

        /// Shared handle on the requests received so far.
        pub fn requests(&self) -> Arc<Mutex<Vec<RecordedRequest>>> {
            Arc::clone(&self.requests)
        }

        fn respond(&self, request: RecordedRequest) -> HttpResult<Value> {
            let url = request.url.clone();
            let method = request.method;
            self.requests.lock().unwrap().push(request);

            let canned = self
                .responses
                .iter()
                .find(|(m, pattern, _)| *m == method && url.contains(pattern.as_str()))
                .map(|(_, _, response)| response.clone());

            match canned {
                Some(CannedResponse::Json(json)) => Ok(json),
                Some(CannedResponse::Status(status, message)) => {
                    Err(HttpError::ApiRequestFailed {
                        status,
                        url,
                        message,
                    })
                }
                None => Err(HttpError::ApiRequestFailed {
                    status: 404,
                    url,
                    message: None,
                }),
            }
        }
    }

    #[async_trait]
    impl HttpBackend for FakeBackend {
        async fn get_json(&self, url: &Url) -> HttpResult<Value> {
            self.respond(RecordedRequest {
                method: "GET",
                url: url.to_string(),
                form: None,
                json: None,
            })
        }

        async fn send_form(
            &self,
            method: FormMethod,
            url: &Url,
            form: MultipartForm,
        ) -> HttpResult<Value> {
            self.respond(RecordedRequest {
                method: method.as_str(),
                url: url.to_string(),
                form: Some(form),
                json: None,
            })
        }

        async fn post_json(&self, url: &Url, body: &Value) -> HttpResult<()> {
            self.respond(RecordedRequest {
                method: "POST",
                url: url.to_string(),
                form: None,
                json: Some(body.clone()),
            })
            .map(|_| ())
        }

        async fn delete(&self, url: &Url) -> HttpResult<()> {
            self.respond(RecordedRequest {
                method: "DELETE",
                url: url.to_string(),
                form: None,
                json: None,
            })
            .map(|_| ())
        }
    }
}
