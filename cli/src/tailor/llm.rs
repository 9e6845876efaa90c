//! Chat completions client for OpenAI-compatible endpoints.

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::error::TailorError;

/// Default API base; override with `OPENAI_BASE_URL`.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Default tailoring model.
pub const DEFAULT_MODEL: &str = "o1-mini";

/// System message for models that accept one.
pub const SYSTEM_PROMPT: &str = "You are a helpful resume tailoring assistant.";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatRequest<'a> {
    pub model: &'a str,
    pub messages: Vec<ChatMessage<'a>>,
    pub temperature: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatMessage<'a> {
    pub role: &'a str,
    pub content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// Shape the request for a model.
///
/// `o1-mini` rejects system messages and any temperature other than 1.
pub fn build_request<'a>(model: &'a str, prompt: &'a str) -> ChatRequest<'a> {
    let user = ChatMessage {
        role: "user",
        content: prompt,
    };

    if model.eq_ignore_ascii_case(DEFAULT_MODEL) {
        ChatRequest {
            model,
            messages: vec![user],
            temperature: 1.0,
        }
    } else {
        ChatRequest {
            model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                user,
            ],
            temperature: 0.7,
        }
    }
}

/// Client for a single chat completions endpoint.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl LlmClient {
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Result<Self, TailorError> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            client,
            api_key: api_key.into(),
            base_url: base_url.into(),
        })
    }

    pub fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }

    /// Send the prompt and return the trimmed reply.
    pub async fn complete(&self, model: &str, prompt: &str) -> Result<String, TailorError> {
        let request = build_request(model, prompt);
        log::debug!(
            "POST {} model={} messages={} temperature={}",
            self.endpoint(),
            request.model,
            request.messages.len(),
            request.temperature
        );

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(TailorError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let reply: ChatResponse = response.json().await?;
        parse_reply(reply)
    }
}

fn parse_reply(reply: ChatResponse) -> Result<String, TailorError> {
    let content = reply
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message.content)
        .ok_or(TailorError::EmptyContent)?;

    let content = content.trim();
    if content.is_empty() {
        return Err(TailorError::EmptyContent);
    }
    Ok(content.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_o1_mini_request() {
        let request = build_request("O1-Mini", "tailor this");
        assert_eq!(request.temperature, 1.0);
        assert_eq!(request.messages.len(), 1);
        assert_eq!(request.messages[0].role, "user");
    }

    #[test]
    fn test_other_model_request() {
        let request = build_request("gpt-4o", "tailor this");
        assert_eq!(request.temperature, 0.7);
        assert_eq!(
            request.messages[0],
            ChatMessage {
                role: "system",
                content: SYSTEM_PROMPT
            }
        );
        assert_eq!(request.messages[1].content, "tailor this");

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "gpt-4o");
        assert_eq!(json["messages"][1]["role"], "user");
    }

    #[test]
    fn test_endpoint_joins_base() {
        let client = LlmClient::new("k", "http://localhost:8080/v1/").unwrap();
        assert_eq!(client.endpoint(), "http://localhost:8080/v1/chat/completions");
    }

    #[test]
    fn test_parse_reply_trims() {
        let reply: ChatResponse = serde_json::from_str(
            r##"{"choices":[{"message":{"role":"assistant","content":"\n# Jane\n  "}}]}"##,
        )
        .unwrap();
        assert_eq!(parse_reply(reply).unwrap(), "# Jane");
    }

    #[test]
    fn test_parse_reply_empty() {
        let reply: ChatResponse = serde_json::from_str(r#"{"choices":[]}"#).unwrap();
        assert!(matches!(parse_reply(reply), Err(TailorError::EmptyContent)));

        let reply: ChatResponse =
            serde_json::from_str(r#"{"choices":[{"message":{"content":null}}]}"#).unwrap();
        assert!(matches!(parse_reply(reply), Err(TailorError::EmptyContent)));
    }
}
