pub mod app_config;
pub mod settings;
pub mod settings_io;

pub use app_config::{AppConfig, Credential};
pub use settings::AppSettings;
