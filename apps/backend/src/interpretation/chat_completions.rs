//! OpenAI-compatible chat completions client (Groq, DeepSeek, Ollama).

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::trait_def::{GenerationParams, InterpretationClient, InterpretationError};
use crate::config::interpreter::InterpreterSettings;
use crate::domain::InterpretationRequest;

#[derive(Clone)]
pub struct ChatCompletionsClient {
    client: Client,
    base_url: String,
    model: String,
    api_key: Option<String>,
}

impl ChatCompletionsClient {
    pub fn new(settings: &InterpreterSettings) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            model: settings.model.clone(),
            api_key: settings.api_key.clone(),
        }
    }

    pub fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl InterpretationClient for ChatCompletionsClient {
    async fn interpret(
        &self,
        request: &InterpretationRequest,
        params: GenerationParams,
    ) -> Result<String, InterpretationError> {
        let body = build_chat_request(&self.model, request, params);
        let mut call = self.client.post(self.endpoint()).json(&body);
        if let Some(key) = &self.api_key {
            call = call.bearer_auth(key);
        }

        debug!(model = %self.model, "requesting interpretation");
        let response = call
            .send()
            .await
            .map_err(|e| InterpretationError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), "interpretation service rejected request");
            return Err(InterpretationError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|e| InterpretationError::InvalidResponse(e.to_string()))?;
        extract_text(parsed)
    }

    fn name(&self) -> &str {
        &self.model
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    #[serde(default)]
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

fn build_chat_request(
    model: &str,
    request: &InterpretationRequest,
    params: GenerationParams,
) -> ChatRequest {
    ChatRequest {
        model: model.to_string(),
        messages: vec![
            ChatMessage {
                role: "system".to_string(),
                content: Some(request.system.clone()),
            },
            ChatMessage {
                role: "user".to_string(),
                content: Some(request.user.clone()),
            },
        ],
        temperature: params.temperature,
        max_tokens: params.max_tokens,
    }
}

fn extract_text(response: ChatResponse) -> Result<String, InterpretationError> {
    let choice = response
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| InterpretationError::InvalidResponse("no choices".to_string()))?;
    let text = choice.message.content.unwrap_or_default();
    let text = text.trim();
    if text.is_empty() {
        return Err(InterpretationError::Empty);
    }
    Ok(text.to_string())
}
