/// Bot, API and ticket settings loaded from config.toml
pub mod app;

/// Student registry and verification role settings
pub mod verification;

pub use app::{AppConfig, load_app_configuration};
