use serde::Deserialize;

use crate::config::app_config::Credential;
use crate::engine::errors::InferenceError;
use crate::engine::retry::{RetryPolicy, Sleeper, ThreadSleeper};
use crate::engine::transport::{HttpTransport, InferenceRequest, RawResponse, Transport};

/// Success payload or failure classification of one `infer` call.
pub type InferenceOutcome<T> = Result<T, InferenceError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Attempt {
    Success,
    Retry,
    TerminalFailure,
}

fn classify(status: u16, policy: &RetryPolicy) -> Attempt {
    if status == 200 {
        Attempt::Success
    } else if policy.is_retryable(status) {
        Attempt::Retry
    } else {
        Attempt::TerminalFailure
    }
}

/// Posts `{"inputs": ...}` to `<base_url>/<model>` and applies a retry policy.
pub struct InferenceClient<T = HttpTransport, S = ThreadSleeper> {
    transport: T,
    sleeper: S,
    base_url: String,
    credential: Credential,
}

pub type HttpInferenceClient = InferenceClient<HttpTransport, ThreadSleeper>;

impl<T: Transport, S: Sleeper> InferenceClient<T, S> {
    pub fn new(transport: T, sleeper: S, base_url: impl Into<String>, credential: Credential) -> Self {
        Self {
            transport,
            sleeper,
            base_url: base_url.into(),
            credential,
        }
    }

    pub fn endpoint(&self, model: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), model)
    }

    /// Sends the identical request until it succeeds, fails terminally, or
    /// the policy runs out of attempts.
    pub fn infer(
        &self,
        model: &str,
        inputs: &str,
        policy: &RetryPolicy,
    ) -> InferenceOutcome<Vec<u8>> {
        let url = self.endpoint(model);
        let request = InferenceRequest { inputs };
        let mut attempts = 0u32;

        loop {
            attempts += 1;
            tracing::debug!(model, attempt = attempts, "sending inference request");

            let RawResponse { status, body } =
                self.transport.post(&url, &self.credential, &request)?;

            match classify(status, policy) {
                Attempt::Success => {
                    tracing::info!(model, attempts, bytes = body.len(), "inference succeeded");
                    return Ok(body);
                }
                Attempt::Retry if policy.allows_another(attempts) => {
                    tracing::warn!(
                        model,
                        attempt = attempts,
                        delay_secs = policy.delay.as_secs(),
                        "model is still loading, retrying"
                    );
                    self.sleeper.sleep(policy.delay);
                }
                Attempt::Retry => {
                    tracing::warn!(model, attempts, "model is still loading, giving up");
                    return Err(InferenceError::ModelLoading {
                        status,
                        body: String::from_utf8_lossy(&body).into_owned(),
                    });
                }
                Attempt::TerminalFailure => {
                    let body = String::from_utf8_lossy(&body).into_owned();
                    tracing::error!(model, status, %body, "inference failed");
                    return Err(InferenceError::HttpError { status, body });
                }
            }
        }
    }

    /// Text-generation call. The body is decoded as described by
    /// [`decode_generated_text`].
    pub fn infer_text(
        &self,
        model: &str,
        prompt: &str,
        policy: &RetryPolicy,
    ) -> InferenceOutcome<String> {
        let body = self.infer(model, prompt, policy)?;
        decode_generated_text(&body, prompt)
    }
}

#[derive(Deserialize)]
struct GeneratedText {
    generated_text: String,
}

/// Decodes a text-generation body as UTF-8.
///
/// The hosted API answers `[{"generated_text": "..."}]` and echoes the prompt
/// in front of the continuation; that shape is unwrapped and the echo
/// dropped. Any other UTF-8 body is taken verbatim.
pub fn decode_generated_text(body: &[u8], prompt: &str) -> InferenceOutcome<String> {
    let text = std::str::from_utf8(body).map_err(|e| InferenceError::MalformedResponse {
        reason: format!("response is not UTF-8: {e}"),
    })?;

    let text = match serde_json::from_str::<Vec<GeneratedText>>(text) {
        Ok(items) => match items.into_iter().next() {
            Some(item) => item
                .generated_text
                .strip_prefix(prompt)
                .map(str::to_string)
                .unwrap_or(item.generated_text),
            None => {
                return Err(InferenceError::MalformedResponse {
                    reason: "empty generation list".into(),
                })
            }
        },
        Err(_) => text.to_string(),
    };

    Ok(text.trim().to_string())
}
