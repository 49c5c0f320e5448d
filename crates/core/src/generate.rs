use std::time::Duration;

use tokio_util::sync::CancellationToken;

use crate::{
    error::{Result, ViralscriptError},
    prompt,
    provider::Provider,
    schema,
    types::{GeneratedScriptResult, GenerationRequest},
};

/// Default time budget for a single generation call
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

#[derive(Debug, Clone)]
pub struct GenerationOptions {
    /// Output language for the analysis and the new script
    pub language: String,
    /// Hard deadline for the HTTP request
    pub timeout: Duration,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            language: "ko".to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// Generate a script using an AI provider.
///
/// Exactly one outbound request: no retries, no rate limiting. The call races
/// against `cancel`; if the token fires first the result is `Cancelled`.
pub async fn generate_script(
    request: &GenerationRequest,
    provider: &Provider,
    options: &GenerationOptions,
    cancel: &CancellationToken,
) -> Result<GeneratedScriptResult> {
    let config = provider.config();
    let api_key = provider.validate_api_key()?;
    generate_at(config.api_url, &api_key, config.model, request, options, cancel).await
}

/// Same contract as [`generate_script`] with an explicit endpoint
pub async fn generate_at(
    api_url: &str,
    api_key: &str,
    model: &str,
    request: &GenerationRequest,
    options: &GenerationOptions,
    cancel: &CancellationToken,
) -> Result<GeneratedScriptResult> {
    tokio::select! {
        _ = cancel.cancelled() => Err(ViralscriptError::Cancelled),
        result = request_generation(api_url, api_key, model, request, options) => result,
    }
}

/// Issue one structured-output request to an OpenAI-compatible
/// chat-completions endpoint and parse the reply.
pub async fn request_generation(
    api_url: &str,
    api_key: &str,
    model: &str,
    request: &GenerationRequest,
    options: &GenerationOptions,
) -> Result<GeneratedScriptResult> {
    let system_prompt = prompt::build_system_prompt(&options.language);
    let user_prompt = prompt::build_user_prompt(request);

    let client = reqwest::Client::builder()
        .timeout(options.timeout)
        .build()?;

    let response = client
        .post(api_url)
        .header("Content-Type", "application/json")
        .header("Authorization", format!("Bearer {}", api_key))
        .json(&serde_json::json!({
            "model": model,
            "messages": [
                {
                    "role": "system",
                    "content": &system_prompt,
                },
                {
                    "role": "user",
                    "content": user_prompt,
                },
            ],
            "response_format": schema::response_format(),
            "temperature": 0.7,
        }))
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        let reason = response.text().await.unwrap_or_default();
        return Err(ViralscriptError::ServiceFailure {
            status: status.as_u16(),
            reason,
        });
    }

    let payload = response.json::<serde_json::Value>().await?;

    // Extract the assistant content from the chat envelope
    let content = payload["choices"][0]["message"]["content"]
        .as_str()
        .ok_or(ViralscriptError::EmptyResponse)?;
    if content.trim().is_empty() {
        return Err(ViralscriptError::EmptyResponse);
    }

    serde_json::from_str(content).map_err(|e| ViralscriptError::MalformedResponse {
        reason: e.to_string(),
    })
}
