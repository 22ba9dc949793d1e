//! Application-wide constants

pub const DEFAULT_APP_NAME: &str = "menu-server";
pub const DEFAULT_APP_ENV: &str = "development";
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_DUPLICATE_POLICY: &str = "tolerate";
pub const CONFIG_DIR: &str = "config";
pub const ENV_PREFIX: &str = "APP";
