//! Application settings, loaded from the environment (`.env` honored)

use anyhow::Context;
use cabinet_llm::util::mask_api_key;
use cabinet_llm::{DEFAULT_LIGHT_MODEL, DEFAULT_MODEL};
use serde::Deserialize;
use std::fmt;
use std::path::PathBuf;

#[derive(Deserialize)]
pub struct Settings {
    /// Anthropic API key (required)
    pub anthropic_api_key: String,
    /// Model for the dispatcher and analysis-heavy specialists
    #[serde(default = "default_model")]
    pub model_name: String,
    /// Model for lightweight specialists
    #[serde(default = "default_light_model")]
    pub model_name_light: String,
    /// Directory holding skill plugins
    #[serde(default = "default_plugins_dir")]
    pub plugins_dir: PathBuf,
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_light_model() -> String {
    DEFAULT_LIGHT_MODEL.to_string()
}

fn default_plugins_dir() -> PathBuf {
    PathBuf::from("plugins")
}

impl Settings {
    pub fn load() -> anyhow::Result<Self> {
        let config = config::Config::builder()
            .add_source(config::Environment::default())
            .build()
            .context("failed to read environment configuration")?;

        config
            .try_deserialize()
            .context("invalid configuration; is ANTHROPIC_API_KEY set? (see .env.example)")
    }
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("anthropic_api_key", &mask_api_key(&self.anthropic_api_key))
            .field("model_name", &self.model_name)
            .field("model_name_light", &self.model_name_light)
            .field("plugins_dir", &self.plugins_dir)
            .finish()
    }
}
