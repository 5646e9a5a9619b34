use std::fmt;
use std::time::Duration;

use crate::config::settings::AppSettings;
use crate::engine::errors::InferenceError;
use crate::engine::retry::RetryPolicy;

pub const CREDENTIAL_ENV_VAR: &str = "HUGGINGFACEHUB_API_TOKEN";

/// Bearer token for the inference API. `Debug` never prints the secret.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(token: impl Into<String>) -> Result<Self, InferenceError> {
        let token = token.into().trim().to_string();
        if token.is_empty() {
            return Err(InferenceError::ConfigError {
                reason: format!("{CREDENTIAL_ENV_VAR} is empty"),
            });
        }
        Ok(Self(token))
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}

/// Process-wide configuration, built once at startup and passed by reference.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub credential: Credential,
    pub api_base_url: String,
    pub text_model: String,
    pub image_model: String,
    pub poll_model: String,
    pub request_timeout: Duration,
    pub interactive_policy: RetryPolicy,
    pub polling_policy: RetryPolicy,
}

impl AppConfig {
    /// Reads the credential from the process environment.
    pub fn from_env(settings: &AppSettings) -> Result<Self, InferenceError> {
        Self::from_lookup(settings, |key| std::env::var(key).ok())
    }

    pub fn from_lookup(
        settings: &AppSettings,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, InferenceError> {
        let token = lookup(CREDENTIAL_ENV_VAR).ok_or_else(|| InferenceError::ConfigError {
            reason: format!("{CREDENTIAL_ENV_VAR} is not set"),
        })?;
        let credential = Credential::new(token)?;

        if !settings.api_base_url.starts_with("http://")
            && !settings.api_base_url.starts_with("https://")
        {
            return Err(InferenceError::ConfigError {
                reason: format!("api_base_url '{}' is not an http(s) URL", settings.api_base_url),
            });
        }

        let interactive_policy = if settings.interactive_retry {
            RetryPolicy::polling()
                .with_delay(Duration::from_secs(settings.poll_delay_secs))
                .with_max_attempts(Some(settings.interactive_max_attempts))
        } else {
            RetryPolicy::interactive()
        };

        let polling_policy = RetryPolicy::polling()
            .with_delay(Duration::from_secs(settings.poll_delay_secs))
            .with_max_attempts(settings.poll_max_attempts);

        Ok(Self {
            credential,
            api_base_url: settings.api_base_url.clone(),
            text_model: settings.text_model.clone(),
            image_model: settings.image_model.clone(),
            poll_model: settings.poll_model.clone(),
            request_timeout: Duration::from_secs(settings.request_timeout_secs),
            interactive_policy,
            polling_policy,
        })
    }
}
