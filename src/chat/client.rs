//! OpenAI-compatible chat-completion client.
//!
//! Talks to a hosted endpoint (Groq by default) over its OpenAI-compatible
//! `/chat/completions` API. The evaluation pipeline sends a single completion
//! request per interview, so a blocking client is sufficient.

use crate::config::ChatConfig;
use crate::defaults;
use crate::error::{Result, VocoachError};
use serde::{Deserialize, Serialize};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Trait for chat-completion backends.
///
/// This trait allows swapping implementations (hosted endpoint vs mock).
pub trait ChatCompleter: Send + Sync {
    /// Send a single user prompt and return the assistant's reply text.
    fn complete(&self, prompt: &str) -> Result<String>;

    /// Get the model identifier requests are sent with
    fn model_name(&self) -> &str;
}

/// Implement ChatCompleter for Arc<T> to allow sharing across threads.
impl<T: ChatCompleter + ?Sized> ChatCompleter for std::sync::Arc<T> {
    fn complete(&self, prompt: &str) -> Result<String> {
        (**self).complete(prompt)
    }

    fn model_name(&self) -> &str {
        (**self).model_name()
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
    temperature: f64,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ChatResponseMessage {
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatErrorResponse {
    error: ChatErrorBody,
}

#[derive(Debug, Deserialize)]
struct ChatErrorBody {
    message: String,
}

/// Chat-completion client for Groq's OpenAI-compatible endpoint.
///
/// The API key is optional at construction time so the window can open
/// without one; the missing key is reported as `ChatAuth` on first use.
pub struct GroqChatClient {
    http: reqwest::blocking::Client,
    api_key: Option<String>,
    model: String,
    base_url: String,
    max_tokens: u32,
    temperature: f64,
}

impl GroqChatClient {
    /// Create a client from the chat configuration section.
    ///
    /// `api_key` is usually read from the `GROQ_API_KEY` environment variable.
    pub fn new(config: &ChatConfig, api_key: Option<String>) -> Result<Self> {
        // The contract does no timeout handling; reqwest's blocking client
        // defaults to 30s, so the timeout is disabled explicitly
        let http = reqwest::blocking::Client::builder()
            .timeout(None)
            .build()
            .map_err(|e| VocoachError::ChatRequest {
                message: format!("Failed to build HTTP client: {}", e),
            })?;

        Ok(Self {
            http,
            api_key,
            model: config.model.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            max_tokens: config.max_tokens,
            temperature: config.temperature,
        })
    }

    /// Whether an API key was provided.
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    fn build_request(&self, prompt: &str) -> ChatRequest {
        ChatRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: defaults::CHAT_SYSTEM_PROMPT.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: prompt.to_string(),
                },
            ],
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        }
    }

    fn parse_response(status: reqwest::StatusCode, body: &str) -> Result<String> {
        if !status.is_success() {
            // Error bodies follow the OpenAI shape; fall back to raw text
            let detail = serde_json::from_str::<ChatErrorResponse>(body)
                .map(|e| e.error.message)
                .unwrap_or_else(|_| body.trim().to_string());
            return Err(VocoachError::ChatResponse {
                message: format!("HTTP {}: {}", status.as_u16(), detail),
            });
        }

        let response: ChatResponse =
            serde_json::from_str(body).map_err(|e| VocoachError::ChatResponse {
                message: format!("Failed to parse completion response: {}", e),
            })?;

        let reply = response
            .choices
            .first()
            .map(|choice| choice.message.content.trim().to_string())
            .ok_or_else(|| VocoachError::ChatResponse {
                message: "Completion response contained no choices".to_string(),
            })?;

        Ok(reply)
    }
}

impl ChatCompleter for GroqChatClient {
    fn complete(&self, prompt: &str) -> Result<String> {
        let api_key = self
            .api_key
            .as_ref()
            .ok_or_else(|| VocoachError::ChatAuth {
                env_var: defaults::API_KEY_ENV.to_string(),
            })?;

        let url = format!("{}/chat/completions", self.base_url);
        let request = self.build_request(prompt);

        log::debug!("requesting completion from {} (model {})", url, self.model);

        let response = self
            .http
            .post(&url)
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .map_err(|e| VocoachError::ChatRequest {
                message: format!("Failed to reach {}: {}", url, e),
            })?;

        let status = response.status();
        let body = response.text().map_err(|e| VocoachError::ChatResponse {
            message: format!("Failed to read completion response: {}", e),
        })?;

        Self::parse_response(status, &body)
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

/// Mock chat completer for testing.
///
/// Records how many times it was called and the last prompt it received.
#[derive(Debug)]
pub struct MockChatCompleter {
    model_name: String,
    response: String,
    should_fail: bool,
    calls: AtomicUsize,
    last_prompt: Mutex<Option<String>>,
}

impl MockChatCompleter {
    /// Create a new mock with a default reply
    pub fn new() -> Self {
        Self {
            model_name: "mock-chat".to_string(),
            response: "mock evaluation".to_string(),
            should_fail: false,
            calls: AtomicUsize::new(0),
            last_prompt: Mutex::new(None),
        }
    }

    /// Configure the mock to return a specific reply
    pub fn with_response(mut self, response: &str) -> Self {
        self.response = response.to_string();
        self
    }

    /// Configure the mock to fail every completion
    pub fn with_failure(mut self) -> Self {
        self.should_fail = true;
        self
    }

    /// Number of completion calls made so far
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// The prompt passed to the most recent completion call
    pub fn last_prompt(&self) -> Option<String> {
        self.last_prompt.lock().ok().and_then(|p| p.clone())
    }
}

impl Default for MockChatCompleter {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatCompleter for MockChatCompleter {
    fn complete(&self, prompt: &str) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut last) = self.last_prompt.lock() {
            *last = Some(prompt.to_string());
        }

        if self.should_fail {
            return Err(VocoachError::ChatRequest {
                message: "mock completion failure".to_string(),
            });
        }
        Ok(self.response.clone())
    }

    fn model_name(&self) -> &str {
        &self.model_name
    }
}
