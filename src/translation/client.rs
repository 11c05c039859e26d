use std::time::{Duration, Instant};

use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::prompt::build_prompt;
use super::{TranslateError, TranslationDirection};
use crate::config::EndpointConfig;

/// Upper bound on generated tokens per translation.
pub const MAX_TOKENS: u32 = 256;

/// Greedy decoding, so identical input yields identical output.
pub const TEMPERATURE: f32 = 0.0;

/// Header that skips the tunnelling service's interstitial page.
pub const TUNNEL_HEADER: &str = "bypass-tunnel-reminder";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRequest {
    pub source_text: String,
    pub direction: TranslationDirection,
}

impl TranslationRequest {
    pub fn new(source_text: impl Into<String>, direction: TranslationDirection) -> Self {
        Self {
            source_text: source_text.into(),
            direction,
        }
    }

    /// Only the empty string is skipped; whitespace is still sent.
    pub fn is_empty(&self) -> bool {
        self.source_text.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TranslationResponse {
    pub translated_text: String,
    /// Wall-clock time of the outbound call, informational only.
    pub latency: Duration,
}

#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
struct CompletionChoice {
    text: String,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Client for the remote `v1/completions` endpoint.
///
/// Holds no per-request state; one instance is shared by every session.
#[derive(Debug, Clone)]
pub struct TranslationClient {
    client: Client,
    endpoint: EndpointConfig,
}

impl TranslationClient {
    pub fn new(endpoint: &EndpointConfig) -> Result<Self, TranslateError> {
        let client = Client::builder()
            .timeout(endpoint.timeout)
            .build()
            .map_err(|e| TranslateError::transport(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            endpoint: endpoint.clone(),
        })
    }

    pub fn completions_url(&self) -> String {
        format!(
            "{}/v1/completions",
            self.endpoint.base_url.trim_end_matches('/')
        )
    }

    /// Translates one sentence with a single POST.
    ///
    /// Empty input returns [`TranslateError::EmptyInput`] without touching
    /// the network.
    pub async fn translate(
        &self,
        request: &TranslationRequest,
    ) -> Result<TranslationResponse, TranslateError> {
        if request.is_empty() {
            return Err(TranslateError::EmptyInput);
        }

        let url = self.completions_url();
        let prompt = build_prompt(request.direction, &request.source_text);

        let body = CompletionRequest {
            model: &self.endpoint.model,
            prompt: &prompt,
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
        };

        debug!(%url, direction = %request.direction.code(), "sending completion request");
        let started = Instant::now();

        let response = self
            .client
            .post(&url)
            .header(TUNNEL_HEADER, &self.endpoint.tunnel_header)
            .json(&body)
            .send()
            .await
            .map_err(|e| self.classify(&url, &e))?;

        let status = response.status();
        let text = response.text().await.map_err(|e| self.classify(&url, &e))?;

        if status != StatusCode::OK {
            let message = error_message(&text);
            warn!(status = status.as_u16(), %message, "completion endpoint returned an error");
            return Err(TranslateError::RemoteService {
                status: status.as_u16(),
                message,
            });
        }

        let translated_text = first_choice(&text)?;
        let latency = started.elapsed();

        info!(
            direction = %request.direction.code(),
            latency_ms = latency.as_millis() as u64,
            "translation completed"
        );

        Ok(TranslationResponse {
            translated_text,
            latency,
        })
    }

    fn classify(&self, url: &str, err: &reqwest::Error) -> TranslateError {
        let translated = if err.is_timeout() {
            TranslateError::timeout(self.endpoint.timeout)
        } else if err.is_connect() {
            TranslateError::transport(format!("Failed to connect to API endpoint: {url}"))
        } else {
            TranslateError::transport(err.to_string())
        };
        warn!(error = %translated, "completion request failed");
        translated
    }
}

fn first_choice(body: &str) -> Result<String, TranslateError> {
    let response: CompletionResponse = serde_json::from_str(body)
        .map_err(|e| TranslateError::transport(format!("Malformed response body: {e}")))?;

    response
        .choices
        .into_iter()
        .next()
        .map(|choice| choice.text)
        .ok_or_else(|| TranslateError::transport("Response contained no choices"))
}

/// Pulls `message` out of an error body, falling back to the raw text.
fn error_message(body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .unwrap_or_else(|| {
            let raw = body.trim();
            if raw.is_empty() {
                "no message".to_string()
            } else {
                raw.to_string()
            }
        })
}
