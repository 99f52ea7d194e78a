//! Configuration management

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::types::RuntimeEnv;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub app: AppSettings,
    pub session: SessionSettings,
    pub store: StoreSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppSettings {
    pub env: String,
    pub host: String,
    pub port: u16,
    pub name: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SessionSettings {
    pub ttl_hours: i64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StoreSettings {
    /// Path of the JSON-backed local store. `None` keeps state in memory only.
    pub path: Option<String>,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".into());
        let config = Config::builder()
            .set_default("app.env", "development")?
            .set_default("app.host", "127.0.0.1")?
            .set_default("app.port", 8080)?
            .set_default("app.name", "warranty-server")?
            .set_default("session.ttl_hours", crate::constants::SESSION_TTL_HOURS)?
            .set_default("store.path", None::<String>)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::default().separator("__").try_parsing(true))
            .build()?;
        config.try_deserialize()
    }

    pub fn runtime_env(&self) -> RuntimeEnv {
        RuntimeEnv::from_str(&self.app.env)
    }
}
