use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{config::AppConfig, error::AppError};

/// Used when the caller sends no description, or only whitespace.
pub const DEFAULT_DESCRIPTION: &str = "calm, scenic, nature-focused getaway";

const SYSTEM_PROMPT: &str = "You are a concise travel planner AI. \
From the user description, infer the aesthetic (mountain, beach, city, desert, nightlife, etc.) \
and propose EXACTLY 3 real-world destinations that match the vibe. \
For each destination, write: 1 short line summary + 2 bullet points (Day 1, Day 2) + one total budget in INR. \
Keep each destination under 6 lines. Do NOT explain your reasoning, just output the plan.";

const BOOKING_LINKS: &str = "\n\nBook your trip:\n\
<a href=\"https://www.booking.com\" target=\"_blank\" rel=\"noopener noreferrer\">Hotels on Booking.com</a>\n\
<a href=\"https://www.skyscanner.co.in\" target=\"_blank\" rel=\"noopener noreferrer\">Flights on Skyscanner</a>\n";

const THINK_OPEN: &str = "<think>";
const THINK_CLOSE: &str = "</think>";

const TEMPERATURE: f32 = 0.7;
const MAX_TOKENS: u32 = 900;

/// Seam over the hosted completion endpoint so tests can script replies.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    async fn complete(&self, system: &str, user: &str) -> Result<String, AppError>;
}

/// Chat-completion client for the Hugging Face router (OpenAI-compatible).
pub struct HfRouterBackend {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
    model: String,
}

impl HfRouterBackend {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.hf_base_url.trim_end_matches('/').to_string(),
            token: config.hf_token.clone(),
            model: config.hf_model.clone(),
        }
    }
}

#[async_trait]
impl CompletionBackend for HfRouterBackend {
    async fn complete(&self, system: &str, user: &str) -> Result<String, AppError> {
        let token = self
            .token
            .as_deref()
            .ok_or_else(|| AppError::Config("HF_TOKEN is not set".into()))?;

        let body = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: user,
                },
            ],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        };

        let response = self
            .http
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(token)
            .json(&body)
            .send()
            .await?
            .error_for_status()?;

        let completion: ChatResponse = response.json().await?;
        let text = completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .unwrap_or_default();
        debug!(chars = text.len(), "completion received");
        Ok(text)
    }
}

/// Orchestrates one generation: prompt assembly, upstream call, cleanup,
/// booking links.
#[derive(Clone)]
pub struct PlannerService {
    backend: Arc<dyn CompletionBackend>,
}

impl PlannerService {
    pub fn new(backend: Arc<dyn CompletionBackend>) -> Self {
        Self { backend }
    }

    pub async fn plan_trip(&self, text_prompt: Option<&str>) -> Result<String, AppError> {
        let description = text_prompt
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .unwrap_or(DEFAULT_DESCRIPTION);
        let user_message = format!("User mood / aesthetic description: \"{description}\".");

        let raw = self.backend.complete(SYSTEM_PROMPT, &user_message).await?;
        let cleaned = strip_reasoning(&raw);
        Ok(format!("{cleaned}{BOOKING_LINKS}"))
    }
}

/// Strips a reasoning preamble delimited by `<think>...</think>` from raw
/// model output. With no closing tag, everything from the opening tag on is
/// dropped. A leftover partial `<think` prefix loses its first line. Always
/// returns a (possibly empty) string.
pub fn strip_reasoning(raw: &str) -> String {
    let mut text = raw;

    if let Some(open) = text.find(THINK_OPEN) {
        match text.find(THINK_CLOSE) {
            Some(close) if close > open => {
                text = text[close + THINK_CLOSE.len()..].trim();
            }
            _ => {
                text = text[..open].trim();
            }
        }
    }

    if text.starts_with("<think") {
        text = match text.find('\n') {
            Some(newline) => text[newline + 1..].trim(),
            None => text,
        };
    }

    text.trim().to_string()
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
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
    #[serde(default)]
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
