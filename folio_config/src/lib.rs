use std::{collections::HashMap, net::SocketAddr, path::Path};

use anyhow::Context;
use config::{Environment, File, FileFormat};
use folio_models::email_address::EmailAddressWithName;
use serde::Deserialize;
use url::Url;

pub use duration::Duration;

mod duration;

pub const DEFAULT_CONFIG: &str = include_str!("../../config.toml");

/// Environment variable holding a colon separated list of additional config files
pub const CONFIG_PATH_ENV: &str = "FOLIO_CONFIG";

/// Load the configuration.
///
/// Sources are applied in order: the embedded default config, the files listed
/// in `FOLIO_CONFIG` and finally environment variables prefixed with `FOLIO_`
/// (nested keys are separated by `__`, e.g. `FOLIO_EMAIL__HOST`).
pub fn load() -> anyhow::Result<Config> {
    let paths = std::env::var(CONFIG_PATH_ENV).unwrap_or_default();
    let paths = paths
        .split(':')
        .filter(|path| !path.is_empty())
        .collect::<Vec<_>>();
    load_with(&paths, None)
}

/// Load the configuration from the default config, the given files and either
/// the process environment or the given set of environment variables.
pub fn load_with(
    paths: &[impl AsRef<Path>],
    env: Option<HashMap<String, String>>,
) -> anyhow::Result<Config> {
    let builder =
        config::Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

    paths
        .iter()
        .try_fold(builder, |builder, path| {
            let path = path.as_ref();
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file at {}", path.display()))?;
            let source = File::from_str(&content, FileFormat::Toml);
            anyhow::Ok(builder.add_source(source))
        })?
        .add_source(
            Environment::with_prefix("FOLIO")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true)
                .source(env),
        )
        .build()?
        .try_deserialize()
        .context("Failed to load config")
}

#[derive(Debug, Deserialize)]
pub struct Config {
    pub http: HttpConfig,
    pub email: EmailConfig,
    pub contact: ContactConfig,
    pub form: FormConfig,
}

#[derive(Debug, Deserialize)]
pub struct HttpConfig {
    pub address: SocketAddr,
}

#[derive(Debug, Deserialize)]
pub struct EmailConfig {
    pub host: String,
    pub port: u16,
    pub tls: EmailTls,
    pub credentials: Option<EmailCredentials>,
    pub from: EmailAddressWithName,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmailTls {
    /// Plain text connection
    None,
    /// Upgrade the connection using STARTTLS
    Starttls,
    /// TLS from the start of the connection (usually port 465)
    Implicit,
}

#[derive(Deserialize)]
pub struct EmailCredentials {
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for EmailCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmailCredentials")
            .field("username", &self.username)
            .field("password", &"[redacted]")
            .finish()
    }
}

#[derive(Debug, Deserialize)]
pub struct ContactConfig {
    pub recipient: EmailAddressWithName,
}

#[derive(Debug, Deserialize)]
pub struct FormConfig {
    pub endpoint: Url,
    pub status_reset_delay: Duration,
}
