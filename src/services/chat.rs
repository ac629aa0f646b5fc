// src/services/chat.rs

//! Legal assistant chat, passed through to an OpenAI-compatible proxy.
//!
//! The session keeps the transcript; the backend only turns a message list
//! into a reply. There is no retry or queueing: a failed call is reported
//! once and the user may send again.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::models::ChatConfig;

pub const SYSTEM_PROMPT: &str = "You are a helpful legal assistant for Civil Forfeiture Watch. \
Help users understand civil asset forfeiture, explain deadlines and procedures, and guide them on when to seek attorney help. \
Provide general information, not specific legal advice. \
Be professional, empathetic, and clear. \
If a user asks for legal representation, direct them to the \"Find an Attorney\" page.";

pub const GREETING: &str = "Hello! I'm the Civil Forfeiture Watch assistant. I can help answer \
questions about seizure notices, forfeiture procedures, or help you find an attorney. \
How can I assist you today?";

pub const SUGGESTED_QUESTIONS: &[&str] = &[
    "What is civil asset forfeiture?",
    "How do I claim my seized property?",
    "What are the deadlines for filing?",
    "Do I need an attorney?",
];

const EMPTY_REPLY: &str = "I apologize, but I could not generate a response at this time.";

const CONNECTION_ERROR: &str =
    "Sorry, I encountered an error connecting to the service. Please try again later.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }
}

/// Turns a conversation into the assistant's next reply.
#[async_trait]
pub trait ChatBackend: Send + Sync {
    /// Returns the reply text, possibly empty.
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String>;
}

/// Outcome of one send, as reported to the widget.
#[derive(Debug)]
pub enum ChatOutcome {
    Success(String),
    /// The backend's error, unchanged
    Failure(AppError),
    /// Blank input, nothing sent
    Ignored,
}

/// Transcript of one chat widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatSession {
    messages: Vec<ChatMessage>,
    error: Option<String>,
}

impl Default for ChatSession {
    fn default() -> Self {
        Self {
            messages: vec![ChatMessage::new(Role::Assistant, GREETING)],
            error: None,
        }
    }
}

impl ChatSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// User-facing error from the last failed send.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Send one user message and record the reply.
    pub async fn send(&mut self, backend: &dyn ChatBackend, content: &str) -> ChatOutcome {
        if content.trim().is_empty() {
            return ChatOutcome::Ignored;
        }

        let user = ChatMessage::new(Role::User, content);
        let mut request = Vec::with_capacity(self.messages.len() + 2);
        request.push(ChatMessage::new(Role::System, SYSTEM_PROMPT));
        request.extend(
            self.messages
                .iter()
                .filter(|m| m.role != Role::System)
                .cloned(),
        );
        request.push(user.clone());

        self.messages.push(user);
        self.error = None;

        match backend.complete(&request).await {
            Ok(reply) => {
                let reply = if reply.trim().is_empty() {
                    EMPTY_REPLY.to_string()
                } else {
                    reply
                };
                self.messages
                    .push(ChatMessage::new(Role::Assistant, reply.clone()));
                ChatOutcome::Success(reply)
            }
            Err(e) => {
                log::warn!("Chat request failed: {e}");
                self.error = Some(CONNECTION_ERROR.to_string());
                ChatOutcome::Failure(e)
            }
        }
    }
}

#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    stream: bool,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Backend that POSTs to the configured proxy endpoint.
#[derive(Debug, Clone)]
pub struct ProxyChatClient {
    client: reqwest::Client,
    endpoint: url::Url,
    model: String,
}

impl ProxyChatClient {
    pub fn new(config: &ChatConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(&config.user_agent)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            client,
            endpoint: url::Url::parse(&config.endpoint)?,
            model: config.model.clone(),
        })
    }
}

#[async_trait]
impl ChatBackend for ProxyChatClient {
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String> {
        let body = CompletionRequest {
            model: &self.model,
            messages,
            stream: false,
        };

        log::debug!("POST {} ({} messages)", self.endpoint, messages.len());
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::chat(
                status.as_u16(),
                format!("API request failed with status {}", status.as_u16()),
            ));
        }

        let parsed: CompletionResponse = response.json().await?;
        Ok(parse_reply(parsed))
    }
}

fn parse_reply(response: CompletionResponse) -> String {
    response
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message.content)
        .unwrap_or_default()
}
