//! OpenAI Completion Gateway implementation

use crate::config::{ApiKey, FileCompletionConfig};
use crate::openai::error::{OpenAiError, Result};
use crate::openai::protocol::{ChatCompletionRequest, ChatCompletionResponse, error_message};
use async_trait::async_trait;
use consult_application::{CompletionGateway, CompletionRequest, GatewayError};
use std::time::Duration;
use tracing::{debug, info, warn};

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
const USER_AGENT: &str = concat!("expert-consult/", env!("CARGO_PKG_VERSION"));

/// Completion gateway for OpenAI-compatible Chat Completions endpoints
///
/// A missing API key does not prevent construction; every call then fails
/// with [`GatewayError::MissingCredential`] so the error reaches the user
/// through the normal error path.
pub struct OpenAiGateway {
    client: reqwest::Client,
    endpoint: String,
    api_key: Option<ApiKey>,
    api_key_env: String,
}

impl OpenAiGateway {
    /// Create a gateway from configuration, reading the key from the environment
    pub fn new(config: &FileCompletionConfig) -> std::result::Result<Self, GatewayError> {
        let client = reqwest::Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| GatewayError::ConnectionError(e.to_string()))?;

        let api_key = ApiKey::from_env(&config.api_key_env);
        if api_key.is_none() {
            warn!(
                "{} is not set; completion requests will fail",
                config.api_key_env
            );
        }

        let endpoint = format!(
            "{}/chat/completions",
            config.base_url.trim_end_matches('/')
        );
        info!("OpenAiGateway initialized ({})", endpoint);

        Ok(Self {
            client,
            endpoint,
            api_key,
            api_key_env: config.api_key_env.clone(),
        })
    }

    /// Replace the API key (for tests and explicit injection)
    pub fn with_api_key(mut self, api_key: Option<ApiKey>) -> Self {
        self.api_key = api_key;
        self
    }

    /// Full URL requests are posted to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    async fn send_request(&self, request: &CompletionRequest) -> Result<String> {
        let api_key = self
            .api_key
            .as_ref()
            .ok_or_else(|| OpenAiError::MissingApiKey {
                var: self.api_key_env.clone(),
            })?;

        let body = ChatCompletionRequest::from(request);
        debug!(
            "POST {} (model {}, {} messages)",
            self.endpoint,
            body.model,
            body.messages.len()
        );

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(api_key.expose())
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let raw = response.text().await?;

        if !status.is_success() {
            return Err(OpenAiError::Status {
                status: status.as_u16(),
                message: error_message(&raw),
            });
        }

        ChatCompletionResponse::parse(&raw)?.into_first_text()
    }
}

#[async_trait]
impl CompletionGateway for OpenAiGateway {
    async fn complete(
        &self,
        request: &CompletionRequest,
    ) -> std::result::Result<String, GatewayError> {
        self.send_request(request).await.map_err(GatewayError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use consult_domain::{ConsultationPrompt, DEFAULT_TEMPERATURE, Model, Persona};
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::{TcpListener, TcpStream};
    use tokio::task::JoinHandle;

    // ==================== Test Server ====================

    /// Accept one connection, answer with `status_line` and `body`,
    /// and return the raw request that was received.
    async fn serve_once(status_line: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let request = read_request(&mut socket).await;
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
            request
        });

        (format!("http://{}/v1/", addr), handle)
    }

    async fn read_request(socket: &mut TcpStream) -> String {
        let mut buf = Vec::new();
        let mut chunk = [0u8; 4096];
        loop {
            let n = socket.read(&mut chunk).await.unwrap();
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);

            if let Some(header_end) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
                let headers = String::from_utf8_lossy(&buf[..header_end]).to_lowercase();
                let content_length = headers
                    .lines()
                    .find_map(|line| line.strip_prefix("content-length:"))
                    .and_then(|v| v.trim().parse::<usize>().ok())
                    .unwrap_or(0);
                if buf.len() >= header_end + 4 + content_length {
                    break;
                }
            }
        }
        String::from_utf8_lossy(&buf).into_owned()
    }

    fn gateway(base_url: String) -> OpenAiGateway {
        let config = FileCompletionConfig {
            base_url,
            ..FileCompletionConfig::default()
        };
        OpenAiGateway::new(&config)
            .unwrap()
            .with_api_key(ApiKey::new("sk-test"))
    }

    fn childcare_request() -> CompletionRequest {
        let prompt = ConsultationPrompt::new(
            &Persona::Childcare,
            "How do I get my toddler to sleep earlier?",
        );
        CompletionRequest::new(Model::Gpt4oMini, DEFAULT_TEMPERATURE, &prompt)
    }

    // ==================== Tests ====================

    #[test]
    fn test_endpoint_joins_base_url() {
        let gw = gateway("https://api.example.com/v1/".to_string());
        assert_eq!(gw.endpoint(), "https://api.example.com/v1/chat/completions");
    }

    #[tokio::test]
    async fn test_successful_completion() {
        let (base_url, server) = serve_once(
            "200 OK",
            r#"{"choices":[{"index":0,"message":{"role":"assistant","content":"Dim the lights an hour before bed."}}]}"#,
        )
        .await;

        let answer = gateway(base_url)
            .complete(&childcare_request())
            .await
            .unwrap();
        assert_eq!(answer, "Dim the lights an hour before bed.");

        let raw_request = server.await.unwrap();
        let lowered = raw_request.to_lowercase();
        assert!(lowered.starts_with("post /v1/chat/completions "));
        assert!(lowered.contains("authorization: bearer sk-test"));

        let body_start = raw_request.find("\r\n\r\n").unwrap() + 4;
        let body: serde_json::Value = serde_json::from_str(&raw_request[body_start..]).unwrap();
        assert_eq!(body["model"], "gpt-4o-mini");
        assert_eq!(body["temperature"], 0.5);
        assert_eq!(body["messages"][0]["role"], "system");
        assert_eq!(body["messages"][1]["role"], "user");
        assert_eq!(
            body["messages"][1]["content"],
            "How do I get my toddler to sleep earlier?"
        );
    }

    #[tokio::test]
    async fn test_unauthorized_maps_to_authentication() {
        let (base_url, server) = serve_once(
            "401 Unauthorized",
            r#"{"error":{"message":"Incorrect API key provided","type":"invalid_request_error"}}"#,
        )
        .await;

        let err = gateway(base_url)
            .complete(&childcare_request())
            .await
            .unwrap_err();
        assert_eq!(
            err,
            GatewayError::Authentication("Incorrect API key provided".to_string())
        );
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_server_error_maps_to_request_failed() {
        let (base_url, server) =
            serve_once("503 Service Unavailable", r#"{"error":{"message":"overloaded"}}"#).await;

        let err = gateway(base_url)
            .complete(&childcare_request())
            .await
            .unwrap_err();
        assert_eq!(err, GatewayError::RequestFailed("HTTP 503: overloaded".to_string()));
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_malformed_body() {
        let (base_url, server) = serve_once("200 OK", r#"{"object":"list"}"#).await;

        let err = gateway(base_url)
            .complete(&childcare_request())
            .await
            .unwrap_err();
        assert!(matches!(err, GatewayError::MalformedResponse(_)));
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_missing_key_fails_without_network() {
        let gw = gateway("http://127.0.0.1:9".to_string()).with_api_key(None);
        assert!(!gw.has_api_key());

        let err = gw.complete(&childcare_request()).await.unwrap_err();
        assert_eq!(err, GatewayError::MissingCredential("OPENAI_API_KEY".to_string()));
    }

    #[tokio::test]
    async fn test_connection_refused() {
        // Bind then drop to get a port nothing listens on
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = gateway(format!("http://{}", addr))
            .complete(&childcare_request())
            .await
            .unwrap_err();
        assert!(matches!(err, GatewayError::ConnectionError(_)));
    }
}
