//! HTTP helpers for the user-directory JSON API with a fixed timeout and uniform
//! error mapping. Feature clients (`features::auth::client`,
//! `features::users::client`) call these helpers so endpoint paths stay in one
//! place per feature. Every operation is a single round trip: no retries, no
//! caching. Request bodies may carry passwords, so they are never logged.

mod errors;

pub use self::errors::{AppError, ErrorKind};

use crate::{config::AppConfig, APP_USER_AGENT};
use reqwest::{Client, RequestBuilder, Response};
use secrecy::{ExposeSecret, SecretString};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

/// Request timeout applied to every call.
const DEFAULT_TIMEOUT_MS: u64 = 10_000;
/// Maximum number of error body characters surfaced to the user.
const MAX_ERROR_CHARS: usize = 200;
const API_KEY_HEADER: &str = "x-api-key";

#[derive(Clone, Debug)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    api_key: Option<SecretString>,
}

impl ApiClient {
    /// # Errors
    /// Returns `AppError::Config` if the HTTP client cannot be built.
    pub fn new(config: &AppConfig) -> Result<Self, AppError> {
        let http = Client::builder()
            .user_agent(APP_USER_AGENT)
            .timeout(Duration::from_millis(DEFAULT_TIMEOUT_MS))
            .build()
            .map_err(|err| AppError::Config(format!("Failed to build HTTP client: {err}")))?;

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
        })
    }

    /// Fetches JSON from `path`.
    ///
    /// # Errors
    /// Returns an error on transport failure, non-2xx status, or undecodable body.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        let request = self.http.get(self.url(path));
        let response = self.send("GET", path, request).await?;
        handle_json_response(response).await
    }

    /// Posts JSON to `path` and returns the 2xx body as loose JSON. An empty
    /// body reads as `null` and a body that is not JSON as a string, so callers
    /// can decide for themselves which fields matter.
    ///
    /// # Errors
    /// Returns an error on transport failure or non-2xx status.
    pub async fn post_json_value<B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Value, AppError> {
        let request = self.http.post(self.url(path)).json(body);
        let response = self.send("POST", path, request).await?;
        handle_value_response(response).await
    }

    /// Puts JSON to `path`; any response body is ignored.
    ///
    /// # Errors
    /// Returns an error on transport failure or non-2xx status.
    pub async fn put_json<B: Serialize>(&self, path: &str, body: &B) -> Result<(), AppError> {
        let request = self.http.put(self.url(path)).json(body);
        let response = self.send("PUT", path, request).await?;
        handle_empty_response(response).await
    }

    /// Sends a DELETE to `path`.
    ///
    /// # Errors
    /// Returns an error on transport failure or non-2xx status.
    pub async fn delete(&self, path: &str) -> Result<(), AppError> {
        let request = self.http.delete(self.url(path));
        let response = self.send("DELETE", path, request).await?;
        handle_empty_response(response).await
    }

    fn url(&self, path: &str) -> String {
        build_url_with_base(&self.base_url, path)
    }

    async fn send(
        &self,
        method: &str,
        path: &str,
        mut request: RequestBuilder,
    ) -> Result<Response, AppError> {
        if let Some(key) = &self.api_key {
            request = request.header(API_KEY_HEADER, key.expose_secret());
        }

        debug!(http.method = method, path, "sending request");

        let response = request.send().await.map_err(map_request_error)?;

        debug!(
            http.method = method,
            path,
            status = response.status().as_u16(),
            "received response"
        );

        Ok(response)
    }
}

/// Joins a base URL and a path with exactly one slash between them.
fn build_url_with_base(base_url: &str, path: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let path = path.trim();

    if base.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}

fn map_request_error(err: reqwest::Error) -> AppError {
    warn!("request failed: {err}");

    if err.is_timeout() {
        AppError::Timeout("Request timed out. Please try again.".to_string())
    } else if err.is_builder() {
        AppError::Config(format!("Failed to build request: {err}"))
    } else {
        AppError::Network(format!("Unable to reach the server: {err}"))
    }
}

async fn handle_json_response<T: DeserializeOwned>(response: Response) -> Result<T, AppError> {
    if response.status().is_success() {
        response
            .json::<T>()
            .await
            .map_err(|err| AppError::Parse(format!("Failed to decode response: {err}")))
    } else {
        Err(http_error(response).await)
    }
}

async fn handle_value_response(response: Response) -> Result<Value, AppError> {
    if !response.status().is_success() {
        return Err(http_error(response).await);
    }

    let text = response
        .text()
        .await
        .map_err(|err| AppError::Parse(format!("Failed to read response: {err}")))?;
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    Ok(serde_json::from_str(&text).unwrap_or(Value::String(text)))
}

async fn handle_empty_response(response: Response) -> Result<(), AppError> {
    if response.status().is_success() {
        Ok(())
    } else {
        Err(http_error(response).await)
    }
}

async fn http_error(response: Response) -> AppError {
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    AppError::Http {
        status,
        message: sanitize_body(&body),
    }
}

/// Trims and truncates error bodies before they reach the user.
fn sanitize_body(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        "Request failed.".to_string()
    } else {
        trimmed.chars().take(MAX_ERROR_CHARS).collect()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use anyhow::Result;
    use serde_json::json;
    use std::net::TcpListener;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    pub(crate) fn can_bind_localhost() -> bool {
        TcpListener::bind("127.0.0.1:0").is_ok()
    }

    pub(crate) fn client_for(server: &MockServer) -> Result<ApiClient> {
        let config = AppConfig::new(Some(&server.uri()), None, None)?;
        Ok(ApiClient::new(&config)?)
    }

    #[test]
    fn build_url_joins_with_single_slash() {
        assert_eq!(
            build_url_with_base("https://reqres.in/api/", "/users?page=2"),
            "https://reqres.in/api/users?page=2"
        );
        assert_eq!(
            build_url_with_base("https://reqres.in/api", "login"),
            "https://reqres.in/api/login"
        );
        assert_eq!(build_url_with_base("  ", "/login"), "/login");
    }

    #[test]
    fn sanitize_body_truncates_and_defaults() {
        assert_eq!(sanitize_body("   "), "Request failed.");
        assert_eq!(sanitize_body(" boom "), "boom");
        let long = "x".repeat(MAX_ERROR_CHARS + 50);
        assert_eq!(sanitize_body(&long).chars().count(), MAX_ERROR_CHARS);
    }

    #[tokio::test]
    async fn post_sends_body_and_user_agent() -> Result<()> {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        }
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/echo"))
            .and(header("user-agent", APP_USER_AGENT))
            .and(body_json(json!({ "name": "morpheus" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "ok": true })))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server)?;
        let body = client
            .post_json_value("/echo", &json!({ "name": "morpheus" }))
            .await?;
        assert_eq!(body, json!({ "ok": true }));
        Ok(())
    }

    #[tokio::test]
    async fn api_key_header_is_attached_when_configured() -> Result<()> {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        }
        let server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path("/users/2"))
            .and(header(API_KEY_HEADER, "reqres-free-v1"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let config = AppConfig::new(Some(&server.uri()), Some("reqres-free-v1"), None)?;
        let client = ApiClient::new(&config)?;
        client.delete("/users/2").await?;
        Ok(())
    }

    #[tokio::test]
    async fn non_success_status_maps_to_http_error() -> Result<()> {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        }
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/users"))
            .respond_with(
                ResponseTemplate::new(500).set_body_string("  internal failure  "),
            )
            .mount(&server)
            .await;

        let client = client_for(&server)?;
        let err = client
            .get_json::<serde_json::Value>("/users?page=1")
            .await
            .err();

        assert_eq!(
            err,
            Some(AppError::Http {
                status: 500,
                message: "internal failure".to_string(),
            })
        );
        assert_eq!(err.map(|err| err.kind()), Some(ErrorKind::Server));
        Ok(())
    }

    #[tokio::test]
    async fn undecodable_body_maps_to_parse_error() -> Result<()> {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        }
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/users"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let client = client_for(&server)?;
        let result = client.get_json::<Vec<u64>>("/users").await;
        assert!(matches!(result, Err(AppError::Parse(_))));
        Ok(())
    }

    #[tokio::test]
    async fn post_json_value_reads_any_success_body() -> Result<()> {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        }
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/empty"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/text"))
            .respond_with(ResponseTemplate::new(200).set_body_string("created"))
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": 4 })))
            .mount(&server)
            .await;

        let client = client_for(&server)?;
        let body = json!({});
        assert_eq!(client.post_json_value("/empty", &body).await?, Value::Null);
        assert_eq!(
            client.post_json_value("/text", &body).await?,
            Value::String("created".to_string())
        );
        assert_eq!(client.post_json_value("/json", &body).await?, json!({ "id": 4 }));
        Ok(())
    }

    #[tokio::test]
    async fn unreachable_server_maps_to_network_error() -> Result<()> {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        }
        // Reserve a port, then release it so nothing is listening.
        let port = TcpListener::bind("127.0.0.1:0")?.local_addr()?.port();
        let config = AppConfig::new(Some(&format!("http://127.0.0.1:{port}")), None, None)?;
        let client = ApiClient::new(&config)?;

        let result = client.delete("/users/1").await;
        assert_eq!(result.map_err(|err| err.kind()), Err(ErrorKind::Network));
        Ok(())
    }
}
