//! Generative inference adapter: prompt in, structured metadata out.

use crate::config::Config;
use crate::metadata::ProblemMetadata;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Failure modes of the inference tier. Every variant triggers the
/// rule-based fallback in the orchestrator; the split exists so the
/// operator log says which part actually broke.
#[derive(Debug, Error)]
pub enum InferenceError {
    #[error("no API key configured")]
    MissingKey,
    #[error("completion request failed: {0}")]
    Upstream(String),
    #[error("completion service returned {status}: {body}")]
    Api { status: u16, body: String },
    #[error("response is not a structured payload: {0}")]
    Malformed(String),
}

/// Capability seam for the completion service, so the orchestrator can be
/// tested against canned payloads and simulated failures.
pub trait MetadataInferenceService {
    fn infer(
        &self,
        title: &str,
        known_tags: Option<&[String]>,
    ) -> Result<ProblemMetadata, InferenceError>;
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
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: String,
}

/// Chat-completions client for metadata inference
pub struct OpenAiInference {
    http: reqwest::blocking::Client,
    api_key: Option<String>,
    base_url: String,
    model: String,
    temperature: f32,
    max_tokens: u32,
}

impl OpenAiInference {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.ai_timeout_secs))
            .build()
            .context("Failed to build completion HTTP client")?;
        Ok(Self {
            http,
            api_key: config.openai_api_key.clone(),
            base_url: config.openai_base_url.trim_end_matches('/').to_string(),
            model: config.openai_model.clone(),
            temperature: config.ai_temperature,
            max_tokens: config.ai_max_tokens,
        })
    }
}

impl MetadataInferenceService for OpenAiInference {
    fn infer(
        &self,
        title: &str,
        known_tags: Option<&[String]>,
    ) -> Result<ProblemMetadata, InferenceError> {
        let api_key = self.api_key.as_deref().ok_or(InferenceError::MissingKey)?;

        let prompt = build_prompt(title, known_tags);
        let request = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: &prompt,
            }],
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        };

        let response = self
            .http
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .map_err(|e| InferenceError::Upstream(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().unwrap_or_default();
            return Err(InferenceError::Api { status, body });
        }

        let completion: ChatResponse = response
            .json()
            .map_err(|e| InferenceError::Upstream(format!("invalid completion envelope: {}", e)))?;
        let content = completion
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .unwrap_or_default();
        debug!(chars = content.len(), "completion received");

        parse_payload(&content, known_tags)
    }
}

// When tags are already known there is no point asking the model to guess
// them, so the companies line is omitted from the prompt.
fn build_prompt(title: &str, known_tags: Option<&[String]>) -> String {
    let tags_known = known_tags.is_some_and(|t| !t.is_empty());
    if tags_known {
        format!(
            "Generate the following for the DSA problem \"{title}\":\n\
             1. the logic to solve the problem\n\
             2. time complexity\n\
             3. space complexity\n\
             4. topic of the problem\n\
             Return strictly a single JSON object like:\n\
             {{\"topic\": \"...\", \"logic\": \"...\", \"time\": \"...\", \"space\": \"...\"}}"
        )
    } else {
        format!(
            "Generate the following for the DSA problem \"{title}\":\n\
             1. the logic to solve the problem\n\
             2. time complexity\n\
             3. space complexity\n\
             4. companies that have asked this question\n\
             5. topic of the problem\n\
             Return strictly a single JSON object like:\n\
             {{\"topic\": \"...\", \"logic\": \"...\", \"time\": \"...\", \"space\": \"...\", \"company\": \"...\"}}"
        )
    }
}

/// Parse a completion body as the structured metadata payload.
///
/// Accepts a bare JSON object, optionally wrapped in a markdown code fence.
/// Unknown keys are ignored and missing keys get sentinel defaults; both
/// `time`/`time complexity` and `space`/`space complexity` spellings are
/// accepted, first non-empty wins. Anything that does not parse as a JSON
/// object is `Malformed` — no recovery of unstructured prose is attempted.
pub fn parse_payload(
    body: &str,
    known_tags: Option<&[String]>,
) -> Result<ProblemMetadata, InferenceError> {
    let json_text = strip_code_fence(body);
    let value: serde_json::Value =
        serde_json::from_str(json_text).map_err(|e| InferenceError::Malformed(e.to_string()))?;
    let obj = value
        .as_object()
        .ok_or_else(|| InferenceError::Malformed("payload is not a JSON object".to_string()))?;

    let field = |keys: &[&str], default: &str| -> String {
        keys.iter()
            .filter_map(|k| obj.get(*k))
            .filter_map(|v| v.as_str())
            .map(str::trim)
            .find(|s| !s.is_empty())
            .unwrap_or(default)
            .to_string()
    };

    // Externally known tags always win over whatever the model says.
    let company_tags = match known_tags {
        Some(tags) if !tags.is_empty() => tags.join(", "),
        _ => field(&["company"], "unknown"),
    };

    Ok(ProblemMetadata {
        topic: field(&["topic"], "unknown"),
        logic: field(&["logic"], ""),
        time_complexity: field(&["time", "time complexity"], "unknown"),
        space_complexity: field(&["space", "space complexity"], "unknown"),
        company_tags,
    })
}

// Models routinely wrap the object in ```json fences despite instructions.
fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    if let Some(rest) = trimmed.strip_prefix("```") {
        let rest = rest.strip_prefix("json").unwrap_or(rest);
        let rest = match rest.rfind("```") {
            Some(end) => &rest[..end],
            None => rest,
        };
        return rest.trim();
    }
    trimmed
}
