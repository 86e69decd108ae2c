//! OpenAI Chat Completions API client.
//!
//! Also serves OpenAI-compatible endpoints via `LLM_OPENAI_BASE_URL`.
//! The system prompt travels as a leading `system` message.

use std::time::Duration;

use super::config::LlmTimeouts;
use super::types::{ChatResponse, LlmError, Message};

// =============================================================================
// CLIENT
// =============================================================================

pub struct OpenAiClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl OpenAiClient {
    pub fn new(api_key: String, base_url: String, timeouts: LlmTimeouts) -> Result<Self, LlmError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeouts.request_secs))
            .connect_timeout(Duration::from_secs(timeouts.connect_secs))
            .build()
            .map_err(|e| LlmError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, api_key, base_url })
    }

    pub async fn chat(
        &self,
        model: &str,
        max_tokens: u32,
        system: &str,
        messages: &[Message],
    ) -> Result<ChatResponse, LlmError> {
        let mut wire_messages = vec![WireMessage { role: "system", content: system.to_owned() }];
        wire_messages.extend(messages.iter().map(|m| WireMessage {
            role: match m.role {
                super::types::Role::User => "user",
                super::types::Role::Assistant => "assistant",
            },
            content: m.content.clone(),
        }));

        let body = ApiRequest { model, max_tokens, messages: wire_messages };

        let response = self
            .http
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| LlmError::ApiRequest(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| LlmError::ApiRequest(e.to_string()))?;

        if status != 200 {
            return Err(LlmError::ApiResponse { status, body: text });
        }

        parse_response(&text)
    }
}

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(serde::Serialize)]
struct WireMessage {
    role: &'static str,
    content: String,
}

#[derive(serde::Serialize)]
struct ApiRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: Vec<WireMessage>,
}

#[derive(serde::Deserialize)]
struct ApiResponse {
    choices: Vec<Choice>,
    model: String,
    usage: Usage,
}

#[derive(serde::Deserialize)]
struct Choice {
    message: ChoiceMessage,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(serde::Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(serde::Deserialize)]
struct Usage {
    prompt_tokens: u64,
    completion_tokens: u64,
}

// =============================================================================
// PARSING
// =============================================================================

fn parse_response(json: &str) -> Result<ChatResponse, LlmError> {
    let api: ApiResponse = serde_json::from_str(json).map_err(|e| LlmError::ApiParse(e.to_string()))?;

    let Some(choice) = api.choices.into_iter().next() else {
        return Err(LlmError::ApiParse("response contained no choices".into()));
    };

    Ok(ChatResponse {
        text: choice.message.content.unwrap_or_default(),
        model: api.model,
        stop_reason: choice.finish_reason.unwrap_or_default(),
        input_tokens: api.usage.prompt_tokens,
        output_tokens: api.usage.completion_tokens,
    })
}

#[cfg(test)]
#[path = "openai_test.rs"]
mod tests;
