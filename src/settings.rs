use config::{Config, ConfigBuilder, Environment, File, Source};
use config::builder::DefaultState;
use serde::Deserialize;

use crate::errors::Result;

pub const DEFAULT_PORT: u16 = 8081;
pub const DEFAULT_DATABASE_URL: &str = "./sqlite/dataUX.db";
pub const DEFAULT_SEED_COUNT: u32 = 2000;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub database: DatabaseSettings,
    pub seed: SeedSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub static_dir: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    pub url: String,
    pub pool_size: u32,
    pub timeout_seconds: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeedSettings {
    pub enabled: bool,
    pub count: u32,
}

impl Settings {
    /// Loads settings from defaults, an optional `appsettings` file and
    /// `CATALOG_`-prefixed environment variables, in that order of precedence.
    pub fn load() -> Result<Self> {
        dotenv::dotenv().ok();

        let settings = Self::layered(
            File::with_name("appsettings").required(false),
            Self::environment(),
        )?;

        tracing::info!(
            port = settings.server.port,
            database = %settings.database.url,
            "Application configuration loaded"
        );
        Ok(settings)
    }

    fn layered<F>(file: F, env: Environment) -> Result<Self>
    where
        F: Source + Send + Sync + 'static,
    {
        Ok(Self::defaults()?
            .add_source(file)
            .add_source(env)
            .build()?
            .try_deserialize::<Settings>()?)
    }

    /// `CATALOG_SERVER__PORT=9000` sets `server.port`.
    fn environment() -> Environment {
        Environment::with_prefix("CATALOG")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>> {
        Ok(Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", i64::from(DEFAULT_PORT))?
            .set_default("server.static_dir", "./static")?
            .set_default("database.url", DEFAULT_DATABASE_URL)?
            .set_default("database.pool_size", 10_i64)?
            .set_default("database.timeout_seconds", 30_i64)?
            .set_default("seed.enabled", true)?
            .set_default("seed.count", i64::from(DEFAULT_SEED_COUNT))?)
    }

    pub fn bind_address(&self) -> (String, u16) {
        (self.server.host.clone(), self.server.port)
    }
}
