use crate::config::ApiConfig;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors raised before a response with a status code is available
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("failed to build HTTP client: {0}")]
    Client(String),
    #[error("request failed: {0}")]
    Transport(String),
}

/// Status code and decoded body of a completed request.
///
/// `data` is `Value::Null` when the body is empty or not JSON.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub data: Value,
}

/// Client for the account API
#[derive(Debug, Clone)]
pub struct ApiClient {
    http_client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let mut builder = Client::builder().user_agent(config.user_agent.clone());
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let http_client = builder
            .build()
            .map_err(|e| ApiError::Client(e.to_string()))?;

        Ok(Self {
            http_client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL for an endpoint path such as `/login/`
    pub fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// POST `body` as JSON to `path` under the base URL.
    ///
    /// Any HTTP status is returned as a response; deciding what counts as
    /// success is up to the caller.
    pub async fn post<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<ApiResponse, ApiError> {
        let url = self.url_for(path);
        info!("POST {}", url);

        let response = self
            .http_client
            .post(&url)
            .header("Accept", "application/json")
            .json(body)
            .send()
            .await
            .map_err(|e| {
                warn!("POST {} failed: {}", url, e);
                ApiError::Transport(e.to_string())
            })?;

        let status = response.status().as_u16();
        let bytes = response.bytes().await.map_err(|e| {
            warn!("Reading response body from {} failed: {}", url, e);
            ApiError::Transport(e.to_string())
        })?;

        let data = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or_else(|e| {
                debug!("Response body from {} is not JSON: {}", url, e);
                Value::Null
            })
        };

        info!("POST {} -> {}", url, status);
        Ok(ApiResponse { status, data })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    /// Whether a local port can be bound; prints a skip note when not
    fn can_bind_localhost() -> bool {
        let ok = std::net::TcpListener::bind("127.0.0.1:0").is_ok();
        if !ok {
            eprintln!("skipping: cannot bind localhost");
        }
        ok
    }

    fn client_for(base_url: &str) -> ApiClient {
        ApiClient::new(&ApiConfig {
            base_url: base_url.to_string(),
            ..ApiConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn test_url_join_handles_slashes() {
        let client = client_for("http://localhost:8000/api/");
        assert_eq!(client.base_url(), "http://localhost:8000/api");
        assert_eq!(client.url_for("/login/"), "http://localhost:8000/api/login/");
        assert_eq!(client.url_for("register/"), "http://localhost:8000/api/register/");
    }

    #[tokio::test]
    async fn test_post_returns_status_and_json() {
        if !can_bind_localhost() {
            return;
        }
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/login/"))
            .and(header("content-type", "application/json"))
            .and(body_json(json!({"email": "a@b.com", "password": "x"})))
            .respond_with(
                ResponseTemplate::new(201).set_body_json(json!({"access": "AT1", "refresh": "RT1"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&format!("{}/api", server.uri()));
        let response = client
            .post("/login/", &json!({"email": "a@b.com", "password": "x"}))
            .await
            .unwrap();

        assert_eq!(response.status, 201);
        assert_eq!(response.data["access"], "AT1");
    }

    #[tokio::test]
    async fn test_error_status_is_not_an_error() {
        if !can_bind_localhost() {
            return;
        }
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/register/"))
            .respond_with(ResponseTemplate::new(500).set_body_string("<h1>Server Error</h1>"))
            .mount(&server)
            .await;

        let client = client_for(&server.uri());
        let response = client.post("/register/", &json!({})).await.unwrap();

        assert_eq!(response.status, 500);
        assert_eq!(response.data, Value::Null);
    }

    #[tokio::test]
    async fn test_connection_refused_is_transport_error() {
        let port = {
            let listener = match std::net::TcpListener::bind("127.0.0.1:0") {
                Ok(listener) => listener,
                Err(_) => return,
            };
            listener.local_addr().unwrap().port()
        };

        let client = client_for(&format!("http://127.0.0.1:{}", port));
        let err = client.post("/login/", &json!({})).await.unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)));
    }
}
