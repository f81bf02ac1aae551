use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub gemini: GeminiConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    #[serde(default = "default_model")]
    pub model: String,
    /// Override for the generateContent base URL; the public endpoint when
    /// absent.
    pub api_url: Option<String>,
}

fn default_model() -> String {
    "gemini-2.5-flash".to_string()
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            // Start off by merging in the "default" configuration file
            .add_source(config::File::with_name("config/default"))
            // Add in the current environment file
            // Default to 'development' env
            // Note that this file is _optional_
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Add in a local configuration file
            // This file shouldn't be checked in to git
            .add_source(config::File::with_name("config/local").required(false))
            // Add in settings from the environment (with a prefix of SMARTRAIL)
            // Eg.. `SMARTRAIL__SERVER__PORT=8080` would set the server port
            .add_source(config::Environment::with_prefix("SMARTRAIL").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
