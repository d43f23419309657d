use anyhow::Result;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, FileFormat};
use serde::Deserialize;

use crate::constants::FILES_PATH_ROOT;
use crate::error::{CoreError, CoreResult};

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerConfig,
    pub auth: AuthConfig,
    pub dav: DavConfig,
    pub logging: LoggingConfig,
}

/// Accepted case-insensitively from config files and the environment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub enum AuthMethod {
    #[default]
    Basic,
    Bearer,
}

impl AuthMethod {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Bearer => "bearer",
        }
    }
}

impl std::str::FromStr for AuthMethod {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "basic" => Ok(Self::Basic),
            "bearer" => Ok(Self::Bearer),
            other => Err(CoreError::InvalidArgument(format!(
                "authentication type {other} is unknown"
            ))),
        }
    }
}

impl TryFrom<String> for AuthMethod {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    pub method: AuthMethod,
    pub user: Option<String>,
    /// Password for basic auth, token for bearer auth.
    pub password: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub base_url: String,
    pub timeout_secs: Option<u64>,
}

impl ServerConfig {
    /// ## Summary
    /// Returns the configured request timeout, if any.
    #[must_use]
    pub fn timeout(&self) -> Option<std::time::Duration> {
        self.timeout_secs.map(std::time::Duration::from_secs)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DavConfig {
    pub version: u8,
    pub path_root: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Settings {
    fn builder() -> Result<ConfigBuilder<DefaultState>> {
        Ok(Config::builder()
            .set_default("server.base_url", "http://localhost")?
            .set_default("auth.method", "basic")?
            .set_default("dav.version", 1)?
            .set_default("dav.path_root", FILES_PATH_ROOT)?
            .set_default("logging.level", "info")?)
    }

    /// ## Summary
    /// Checks values the deserializer cannot.
    ///
    /// ## Errors
    /// Returns `CoreError::InvalidConfiguration` for an empty base URL or a DAV
    /// version other than 1 or 2.
    pub fn validate(&self) -> CoreResult<()> {
        if self.server.base_url.trim().is_empty() {
            return Err(CoreError::InvalidConfiguration(
                "server.base_url must not be empty".to_string(),
            ));
        }
        if !(1..=2).contains(&self.dav.version) {
            return Err(CoreError::InvalidConfiguration(format!(
                "dav.version must be 1 or 2, got {}",
                self.dav.version
            )));
        }
        Ok(())
    }

    /// ## Summary
    /// Loads configuration from an optional `config.toml` and `DAVKIT_`-prefixed
    /// environment variables (`DAVKIT_SERVER__BASE_URL`, `DAVKIT_AUTH__USER`, ...).
    /// Environment variables take precedence over file values.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load() -> Result<Self> {
        Ok(Self::builder()?
            // TOML file
            .add_source(config::File::with_name("config.toml").required(false))
            // Env
            .add_source(
                config::Environment::with_prefix("DAVKIT")
                    .prefix_separator("_")
                    .separator("__")
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize::<Settings>()?)
    }

    /// ## Summary
    /// Builds settings from an in-memory TOML document layered over the defaults.
    ///
    /// ## Errors
    /// Returns an error if the document is not valid TOML or does not deserialize.
    pub fn from_toml_str(toml: &str) -> Result<Self> {
        Ok(Self::builder()?
            .add_source(config::File::from_str(toml, FileFormat::Toml))
            .build()?
            .try_deserialize::<Settings>()?)
    }
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    dotenvy::dotenv().ok();

    let settings = Settings::load()?;
    settings.validate()?;
    tracing::debug!(
        base_url = %settings.server.base_url,
        dav_version = settings.dav.version,
        auth_method = settings.auth.method.as_str(),
        "Configuration loaded"
    );
    Ok(settings)
}
