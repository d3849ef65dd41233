use super::{ProviderError, SuggestionProvider};
use crate::engine::config::ProviderConfig;
use crate::engine::error::ConfigError;
use crate::engine::Correction;
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Chat-completions backed provider.
pub struct OpenAiProvider {
    client: Client,
    api_key: String,
    endpoint: String,
    model: String,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: Option<ResponseMessage>,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

impl OpenAiProvider {
    pub fn new(config: &ProviderConfig) -> Result<Self, ConfigError> {
        let api_key = config
            .api_key
            .clone()
            .filter(|key| !key.trim().is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ConfigError::HttpClient(e.to_string()))?;

        Ok(Self {
            client,
            api_key,
            endpoint: config.endpoint.clone(),
            model: config.model.clone(),
        })
    }
}

impl SuggestionProvider for OpenAiProvider {
    fn get_corrections(&self, text: &str) -> Result<Vec<Correction>, ProviderError> {
        let prompt = build_prompt(text);
        let request = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: &prompt,
            }],
        };

        debug!(endpoint = %self.endpoint, model = %self.model, "sending grammar check");

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .map_err(|e| ProviderError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "provider returned error status");
            return Err(ProviderError::Transport(format!("HTTP {}", status)));
        }

        let body = response
            .text()
            .map_err(|e| ProviderError::Transport(e.to_string()))?;

        let content = extract_content(&body)?;
        parse_corrections(&content)
    }
}

/// Prompt asking the model for a bare JSON array of corrections.
pub fn build_prompt(text: &str) -> String {
    format!(
        r#"You're a grammar correction assistant.

Analyze the following sentence and return ONLY a JSON array of incorrect words with suggestions.

Format:
[
  {{ "word": "go", "suggestion": "goes" }},
  {{ "word": "she go", "suggestion": "she goes" }}
]

Sentence: "{}"
"#,
        text
    )
}

/// Unwraps `choices[0].message.content` from a chat-completions body.
///
/// A well-formed body without content yields an empty string, which
/// [`parse_corrections`] then rejects.
pub fn extract_content(body: &str) -> Result<String, ProviderError> {
    let response: ChatResponse = serde_json::from_str(body)
        .map_err(|e| ProviderError::MalformedResponse(format!("response envelope: {}", e)))?;

    Ok(response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message)
        .and_then(|message| message.content)
        .unwrap_or_default())
}

/// Parses the model output: a JSON array of `{word, suggestion}` objects.
pub fn parse_corrections(raw: &str) -> Result<Vec<Correction>, ProviderError> {
    serde_json::from_str::<Vec<Correction>>(raw.trim()).map_err(|e| {
        debug!(raw = %raw, "failed to parse corrections");
        ProviderError::MalformedResponse(e.to_string())
    })
}
