//! Polls the image endpoint until the model has loaded.
//!
//! Sends one fixed prompt with the polling retry policy: every 503 waits
//! `poll_delay_secs` (30 by default) and tries again, without limit unless
//! `poll_max_attempts` is set in the settings file. Exits on the first
//! success or the first other failure.
//!
//! Environment variables:
//!   HUGGINGFACEHUB_API_TOKEN - bearer token (required, `.env` is honoured)
//!   RUST_LOG - log filter (default: info)

use std::process::ExitCode;

use story_forge::config::{settings_io, AppConfig};
use story_forge::engine::inference_client::HttpInferenceClient;
use story_forge::engine::retry::ThreadSleeper;
use story_forge::engine::transport::HttpTransport;
use story_forge::model::generated_image::GeneratedImage;

const PROMPT: &str = "A fantasy character in an artistic style.";

fn main() -> anyhow::Result<ExitCode> {
    let _ = dotenvy::dotenv();
    story_forge::init_tracing();

    let settings = settings_io::load_settings();
    let config = AppConfig::from_env(&settings)?;

    let client = HttpInferenceClient::new(
        HttpTransport::new(config.request_timeout)?,
        ThreadSleeper,
        config.api_base_url.clone(),
        config.credential.clone(),
    );

    tracing::info!(
        endpoint = %client.endpoint(&config.poll_model),
        delay_secs = config.polling_policy.delay.as_secs(),
        "polling image model"
    );

    let outcome = client
        .infer(&config.poll_model, PROMPT, &config.polling_policy)
        .and_then(|bytes| GeneratedImage::decode(&bytes));

    match outcome {
        Ok(image) => {
            println!("Image generated successfully! ({}x{})", image.width, image.height);
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            println!("Error: {e}");
            Ok(ExitCode::FAILURE)
        }
    }
}
