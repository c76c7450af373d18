use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::LlmError;
use crate::{ChatBackend, FilterInferer};

/// Output-length cap for filter-URL inference.
const INFER_MAX_TOKENS: u32 = 400;

/// HTTP client for an OpenAI-style `/chat/completions` endpoint.
///
/// Every call is sent with temperature 0 and an explicit output-length cap.
/// Non-2xx statuses and malformed bodies surface as typed errors; callers
/// in the pipeline degrade them to safe defaults rather than propagating.
pub struct ChatClient {
    client: Client,
    completions_url: String,
    api_key: Option<String>,
    model: String,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    temperature: f32,
    max_tokens: u32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

impl ChatClient {
    /// Creates a `ChatClient` with configured timeout and credentials.
    ///
    /// `base_url` is the API root without a trailing slash, e.g.
    /// `https://api.openai.com/v1`. `api_key` is optional so keyless local
    /// endpoints work.
    ///
    /// # Errors
    ///
    /// Returns [`LlmError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(
        base_url: &str,
        api_key: Option<String>,
        model: &str,
        timeout_secs: u64,
    ) -> Result<Self, LlmError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .build()?;
        Ok(Self {
            client,
            completions_url: format!("{}/chat/completions", base_url.trim_end_matches('/')),
            api_key,
            model: model.to_string(),
        })
    }

    /// Sends one system+user exchange and returns the trimmed completion
    /// text.
    ///
    /// # Errors
    ///
    /// - [`LlmError::UnexpectedStatus`] — non-2xx response.
    /// - [`LlmError::Deserialize`] — body is not the expected shape.
    /// - [`LlmError::EmptyResponse`] — no choices or null content.
    /// - [`LlmError::Http`] — network or timeout failure.
    pub async fn complete(
        &self,
        system: &str,
        user: &str,
        max_tokens: u32,
    ) -> Result<String, LlmError> {
        let request = ChatRequest {
            model: &self.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: user,
                },
            ],
            temperature: 0.0,
            max_tokens,
        };

        let mut builder = self.client.post(&self.completions_url).json(&request);
        if let Some(key) = &self.api_key {
            builder = builder.bearer_auth(key);
        }

        tracing::debug!(model = %self.model, max_tokens, "requesting chat completion");
        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(LlmError::UnexpectedStatus {
                status: status.as_u16(),
                body: truncate_body(&body),
            });
        }

        let parsed =
            serde_json::from_str::<ChatResponse>(&body).map_err(|e| LlmError::Deserialize {
                context: format!("chat completion from {}", self.completions_url),
                source: e,
            })?;

        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .map(|content| content.trim().to_string())
            .ok_or(LlmError::EmptyResponse)
    }
}

impl ChatBackend for ChatClient {
    fn complete(
        &self,
        system: &str,
        user: &str,
        max_tokens: u32,
    ) -> impl std::future::Future<Output = Result<String, LlmError>> + Send {
        ChatClient::complete(self, system, user, max_tokens)
    }
}

impl FilterInferer for ChatClient {
    fn infer(
        &self,
        raw_query: &str,
        instructions: &str,
    ) -> impl std::future::Future<Output = Result<String, LlmError>> + Send {
        ChatClient::complete(self, instructions, raw_query, INFER_MAX_TOKENS)
    }
}

/// Caps error-message bodies so a large HTML error page does not flood logs.
fn truncate_body(body: &str) -> String {
    const MAX: usize = 300;
    if body.len() <= MAX {
        body.to_string()
    } else {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}…", &body[..end])
    }
}
