//! Configuration for Products API

use core_config::{app_info, env_parse_or, server::ServerConfig, AppInfo, FromEnv};
use std::time::Duration;

pub use core_config::Environment;

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub server: ServerConfig,
    pub environment: Environment,
    /// Start with the demo products (`CATALOG_SEED`, default `true`)
    pub seed_catalog: bool,
    /// Upper bound for shutdown cleanup (`SHUTDOWN_TIMEOUT_SECS`, default 30)
    pub shutdown_timeout: Duration,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?;
        let seed_catalog = env_parse_or("CATALOG_SEED", true)?;
        let shutdown_timeout = Duration::from_secs(env_parse_or("SHUTDOWN_TIMEOUT_SECS", 30)?);

        Ok(Self {
            app: app_info!(),
            server,
            environment,
            seed_catalog,
            shutdown_timeout,
        })
    }
}
