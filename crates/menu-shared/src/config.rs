//! Configuration management

use std::net::IpAddr;
use std::path::Path;

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::constants::{
    CONFIG_DIR, DEFAULT_APP_ENV, DEFAULT_APP_NAME, DEFAULT_DUPLICATE_POLICY, DEFAULT_HOST,
    DEFAULT_LOG_LEVEL, DEFAULT_PORT, ENV_PREFIX,
};
use crate::error::AppError;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub app: AppSettings,
    pub menu: MenuSettings,
    pub telemetry: TelemetrySettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppSettings {
    pub env: String,
    pub host: String,
    pub port: u16,
    pub name: String,
}

/// Menu tree settings
#[derive(Debug, Deserialize, Clone)]
pub struct MenuSettings {
    /// `tolerate` or `reject`
    pub duplicate_policy: String,
    /// Optional TOML/JSON manifest merged after the compiled-in pages.
    pub manifest_path: Option<String>,
    pub manifest_required: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct TelemetrySettings {
    pub level: String,
    pub json: bool,
}

impl Default for TelemetrySettings {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            json: true,
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, AppError> {
        let env = std::env::var("APP_ENV").unwrap_or_else(|_| DEFAULT_APP_ENV.into());
        Self::load_from(Path::new(CONFIG_DIR), &env)
    }

    /// Layered load: defaults, `<dir>/default`, `<dir>/<env>`, then `APP__*` variables.
    pub fn load_from(dir: &Path, env: &str) -> Result<Self, AppError> {
        let default_file = dir.join("default");
        let env_file = dir.join(env);

        let config = Config::builder()
            .set_default("app.env", env)?
            .set_default("app.host", DEFAULT_HOST)?
            .set_default("app.port", i64::from(DEFAULT_PORT))?
            .set_default("app.name", DEFAULT_APP_NAME)?
            .set_default("menu.duplicate_policy", DEFAULT_DUPLICATE_POLICY)?
            .set_default("menu.manifest_required", false)?
            .set_default("telemetry.level", DEFAULT_LOG_LEVEL)?
            .set_default("telemetry.json", true)?
            .add_source(File::with_name(&default_file.to_string_lossy()).required(false))
            .add_source(File::with_name(&env_file.to_string_lossy()).required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: Self = config.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Address the server binds to.
    pub fn bind_addr(&self) -> Result<(IpAddr, u16), AppError> {
        let host = self
            .app
            .host
            .parse::<IpAddr>()
            .map_err(|_| AppError::InvalidSetting {
                key: "app.host".to_string(),
                value: self.app.host.clone(),
            })?;
        Ok((host, self.app.port))
    }

    fn validate(&self) -> Result<(), AppError> {
        if self.app.port == 0 {
            return Err(AppError::InvalidSetting {
                key: "app.port".to_string(),
                value: self.app.port.to_string(),
            });
        }
        self.bind_addr()?;
        Ok(())
    }
}
