// src/gemini_client.rs
use crate::config::AppConfig;
use crate::content::RESUME_CONTEXT;
use crate::error::GeminiError;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Shown when the service answered but produced no usable text.
pub const EMPTY_REPLY_FALLBACK: &str = "Maaf, saya sedang mengalami gangguan koneksi.";
/// Shown for every other failure: HTTP error status, network failure, unreadable body.
pub const ERROR_FALLBACK: &str = "Maaf, terjadi kesalahan saat menghubungi AI server.";

/// Anything that can turn a prompt into display text.
///
/// Implementations must always return a non-empty string; failures are reported as
/// one of the fallback sentences, never as an error.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// `None` uses the default profile context as system instruction.
    async fn generate(&self, prompt: &str, system_instruction: Option<&str>) -> String;
}

#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Part {
    pub text: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Content {
    pub parts: Vec<Part>,
}

impl Content {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            parts: vec![Part { text: text.into() }],
        }
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    #[serde(rename = "systemInstruction")]
    pub system_instruction: Content,
}

impl GenerateContentRequest {
    pub fn new(prompt: &str, system_instruction: &str) -> Self {
        Self {
            contents: vec![Content::text(prompt)],
            system_instruction: Content::text(system_instruction),
        }
    }
}

impl GeminiClient {
    pub fn new(api_key: String, base_url: String, model: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            model,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            config.gemini_api_key.clone(),
            config.gemini_base_url.clone(),
            config.gemini_model.clone(),
        )
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url,
            self.model,
            urlencoding::encode(&self.api_key)
        )
    }

    /// One POST to `generateContent`; returns the first candidate's first text part.
    pub async fn generate_content(
        &self,
        prompt: &str,
        system_instruction: &str,
    ) -> Result<String, GeminiError> {
        let request = GenerateContentRequest::new(prompt, system_instruction);

        tracing::debug!(
            model = %self.model,
            prompt_chars = prompt.len(),
            instruction_chars = system_instruction.len(),
            "Sending generateContent request"
        );

        let response = self
            .client
            .post(self.endpoint())
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GeminiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let raw = response.text().await?;
        let data: Value = serde_json::from_str(&raw)?;
        extract_candidate_text(&data).ok_or(GeminiError::EmptyResponse)
    }
}

/// `candidates[0].content.parts[0].text`, if it is a non-empty string.
pub fn extract_candidate_text(data: &Value) -> Option<String> {
    data.pointer("/candidates/0/content/parts/0/text")
        .and_then(Value::as_str)
        .filter(|text| !text.is_empty())
        .map(str::to_string)
}

/// Map a failed call onto the user-facing sentence that replaces it.
pub fn fallback_for(error: &GeminiError) -> &'static str {
    match error {
        GeminiError::EmptyResponse => EMPTY_REPLY_FALLBACK,
        GeminiError::Http(_) | GeminiError::Status { .. } | GeminiError::Decode(_) => ERROR_FALLBACK,
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, prompt: &str, system_instruction: Option<&str>) -> String {
        let instruction = system_instruction.unwrap_or(RESUME_CONTEXT);
        match self.generate_content(prompt, instruction).await {
            Ok(text) => {
                tracing::info!(model = %self.model, reply_chars = text.len(), "Gemini reply received");
                text
            }
            Err(e) => {
                tracing::error!(model = %self.model, error = %e, "Gemini API Error");
                fallback_for(&e).to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{http::StatusCode, http::Uri, Router};
    use serde_json::json;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Captured {
        requests: Arc<Mutex<Vec<(String, Value)>>>,
    }

    /// Serve a canned reply for every request and record what was sent.
    async fn spawn_stub(status: StatusCode, body: &'static str) -> (String, Captured) {
        let captured = Captured::default();
        let sink = captured.clone();
        let app = Router::new().fallback(move |uri: Uri, payload: String| {
            let sink = sink.clone();
            async move {
                let parsed = serde_json::from_str(&payload).unwrap_or(Value::Null);
                sink.requests.lock().unwrap().push((uri.to_string(), parsed));
                (status, body)
            }
        });
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        (format!("http://{}/v1beta", addr), captured)
    }

    fn client_for(base_url: String) -> GeminiClient {
        GeminiClient::new("test key".to_string(), base_url, "test-model".to_string())
    }

    #[test]
    fn test_request_wire_format() {
        let request = GenerateContentRequest::new("hello", "be brief");
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({
                "contents": [{ "parts": [{ "text": "hello" }] }],
                "systemInstruction": { "parts": [{ "text": "be brief" }] }
            })
        );
    }

    #[test]
    fn test_extract_candidate_text() {
        let ok = json!({"candidates": [{"content": {"parts": [{"text": "hi"}]}}]});
        assert_eq!(extract_candidate_text(&ok).as_deref(), Some("hi"));
        assert_eq!(extract_candidate_text(&json!({"candidates": []})), None);
        assert_eq!(extract_candidate_text(&json!({})), None);
        let empty = json!({"candidates": [{"content": {"parts": [{"text": ""}]}}]});
        assert_eq!(extract_candidate_text(&empty), None);
    }

    #[tokio::test]
    async fn test_success_returns_candidate_text_and_sends_expected_request() {
        let (base_url, captured) = spawn_stub(
            StatusCode::OK,
            r#"{"candidates":[{"content":{"parts":[{"text":"Universitas Airlangga"}]}}]}"#,
        )
        .await;
        let client = client_for(base_url);

        let reply = client.generate("Dimana Azhar kuliah?", None).await;
        assert_eq!(reply, "Universitas Airlangga");

        let requests = captured.requests.lock().unwrap();
        assert_eq!(requests.len(), 1);
        let (uri, body) = &requests[0];
        assert_eq!(uri, "/v1beta/models/test-model:generateContent?key=test%20key");
        assert_eq!(body["contents"][0]["parts"][0]["text"], "Dimana Azhar kuliah?");
        assert_eq!(body["systemInstruction"]["parts"][0]["text"], RESUME_CONTEXT);
    }

    #[tokio::test]
    async fn test_explicit_system_instruction_is_forwarded() {
        let (base_url, captured) = spawn_stub(
            StatusCode::OK,
            r#"{"candidates":[{"content":{"parts":[{"text":"ok"}]}}]}"#,
        )
        .await;
        let client = client_for(base_url);
        client.generate("p", Some("custom")).await;
        let requests = captured.requests.lock().unwrap();
        assert_eq!(requests[0].1["systemInstruction"]["parts"][0]["text"], "custom");
    }

    #[tokio::test]
    async fn test_http_error_status_yields_error_fallback() {
        let (base_url, _) = spawn_stub(StatusCode::FORBIDDEN, r#"{"error":"API key not valid"}"#).await;
        let client = client_for(base_url);
        assert_eq!(client.generate("hi", None).await, ERROR_FALLBACK);

        let err = client.generate_content("hi", "x").await.unwrap_err();
        assert!(matches!(err, GeminiError::Status { status: 403, .. }));
    }

    #[tokio::test]
    async fn test_malformed_body_yields_error_fallback() {
        let (base_url, _) = spawn_stub(StatusCode::OK, "<html>not json</html>").await;
        let client = client_for(base_url);
        assert_eq!(client.generate("hi", None).await, ERROR_FALLBACK);
    }

    #[tokio::test]
    async fn test_missing_text_yields_empty_reply_fallback() {
        let (base_url, _) = spawn_stub(StatusCode::OK, r#"{"candidates":[]}"#).await;
        let client = client_for(base_url);
        assert_eq!(client.generate("hi", None).await, EMPTY_REPLY_FALLBACK);
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_yields_error_fallback() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = client_for(format!("http://{}/v1beta", addr));
        let reply = client.generate("hi", None).await;
        assert_eq!(reply, ERROR_FALLBACK);
        assert!(!reply.is_empty());
    }
}
