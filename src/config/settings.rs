use serde::{Deserialize, Serialize};

pub const DEFAULT_API_BASE_URL: &str = "https://api-inference.huggingface.co/models/";
pub const DEFAULT_TEXT_MODEL: &str = "mistralai/Mistral-7B-Instruct-v0.2";
pub const DEFAULT_IMAGE_MODEL: &str = "runwayml/stable-diffusion-v1-5";
pub const DEFAULT_POLL_MODEL: &str = "stabilityai/stable-diffusion-2";

/// User-editable settings, stored as JSON in the config directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub ui_scale: f32,

    pub api_base_url: String,
    pub text_model: String,
    pub image_model: String,
    pub poll_model: String,
    pub request_timeout_secs: u64,

    // Form requests: off means one attempt per request.
    pub interactive_retry: bool,
    pub interactive_max_attempts: u32,

    pub poll_delay_secs: u64,
    pub poll_max_attempts: Option<u32>,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            ui_scale: 1.0,
            api_base_url: DEFAULT_API_BASE_URL.into(),
            text_model: DEFAULT_TEXT_MODEL.into(),
            image_model: DEFAULT_IMAGE_MODEL.into(),
            poll_model: DEFAULT_POLL_MODEL.into(),
            request_timeout_secs: 120,
            interactive_retry: false,
            interactive_max_attempts: 3,
            poll_delay_secs: 30,
            poll_max_attempts: None,
        }
    }
}
