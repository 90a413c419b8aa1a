//! Server Settings

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Runtime configuration, layered from file then environment
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Address the HTTP server binds to
    pub listen_addr: String,
    /// Path to the serialized regression model artifact
    pub model_path: String,
}

impl Settings {
    /// Load settings from `config/default.toml` (optional) with `PRICE_*`
    /// environment overrides
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("listen_addr", "0.0.0.0:8080")?
            .set_default("model_path", "data/model.json")?
            .add_source(File::with_name("config/default").required(false))
            .add_source(Environment::with_prefix("PRICE"))
            .build()?
            .try_deserialize()
    }
}
