mod ui;

use anyhow::Context;

use story_forge::config::{settings_io, AppConfig};
use story_forge::engine::HttpStoryGenerator;

fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    story_forge::init_tracing();

    let settings = settings_io::load_settings();
    let config = AppConfig::from_env(&settings).context("invalid configuration")?;
    let generator = HttpStoryGenerator::from_config(&config)?;

    tracing::info!(text_model = %config.text_model, image_model = %config.image_model, "starting story forge");

    let options = eframe::NativeOptions::default();

    eframe::run_native(
        "Story Forge",
        options,
        Box::new(move |_cc| {
            Ok(Box::new(ui::app::StoryApp::new(generator, settings)))
        }),
    )
    .map_err(|e| anyhow::anyhow!("UI failed: {e}"))
}
