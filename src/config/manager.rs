use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::paths;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_MODEL: &str = "nusa-7b-ban";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_TUNNEL_HEADER: &str = "nusa-translator";
pub const DEFAULT_LISTEN: &str = "127.0.0.1:7860";

/// The `[endpoint]` section of config.toml.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EndpointSection {
    /// Base URL of the OpenAI-compatible server (without `/v1`).
    pub base_url: Option<String>,
    /// Model identifier sent with every request.
    pub model: Option<String>,
    /// Timeout for the outbound call, in seconds.
    pub timeout_secs: Option<u64>,
    /// Value for the tunnel bypass header.
    pub tunnel_header: Option<String>,
}

/// The `[server]` section of config.toml.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerSection {
    /// Socket address the web form listens on.
    pub listen: Option<String>,
}

/// The complete configuration file structure.
///
/// Corresponds to `~/.config/nusa/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub endpoint: EndpointSection,
    #[serde(default)]
    pub server: ServerSection,
}

/// Everything the translation client needs to reach the model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointConfig {
    pub base_url: String,
    pub model: String,
    pub timeout: Duration,
    pub tunnel_header: String,
}

/// Immutable process-wide configuration, built once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub endpoint: EndpointConfig,
    pub listen: SocketAddr,
}

/// CLI and environment overrides; these win over the config file.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    pub endpoint: Option<String>,
    pub model: Option<String>,
    pub timeout_secs: Option<u64>,
    pub listen: Option<String>,
}

/// Merges overrides, file values and built-in defaults, then validates.
///
/// Priority (highest first): CLI/environment, config file, defaults.
pub fn resolve_config(options: &ResolveOptions, config_file: &ConfigFile) -> Result<AppConfig> {
    let file = &config_file.endpoint;

    let base_url = options
        .endpoint
        .clone()
        .or_else(|| file.base_url.clone())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    match reqwest::Url::parse(&base_url) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => {}
        Ok(url) => bail!(
            "Invalid endpoint URL '{base_url}': unsupported scheme '{}'\n\n\
             Use an http:// or https:// URL.",
            url.scheme()
        ),
        Err(e) => bail!(
            "Invalid endpoint URL '{base_url}': {e}\n\n\
             Please provide it via:\n  \
             - CLI option: nusa --endpoint <url>\n  \
             - Environment: NUSA_ENDPOINT=<url>\n  \
             - Config file: [endpoint] base_url in ~/.config/nusa/config.toml"
        ),
    }

    let model = options
        .model
        .clone()
        .or_else(|| file.model.clone())
        .unwrap_or_else(|| DEFAULT_MODEL.to_string());
    if model.trim().is_empty() {
        bail!("Invalid configuration: 'model' must not be empty");
    }

    let timeout_secs = options
        .timeout_secs
        .or(file.timeout_secs)
        .unwrap_or(DEFAULT_TIMEOUT_SECS);
    if timeout_secs == 0 {
        bail!("Invalid configuration: 'timeout_secs' must be greater than zero");
    }

    let tunnel_header = file
        .tunnel_header
        .clone()
        .unwrap_or_else(|| DEFAULT_TUNNEL_HEADER.to_string());
    if tunnel_header.trim().is_empty() {
        bail!("Invalid configuration: 'tunnel_header' must not be empty");
    }

    let listen_str = options
        .listen
        .clone()
        .or_else(|| config_file.server.listen.clone())
        .unwrap_or_else(|| DEFAULT_LISTEN.to_string());
    let listen: SocketAddr = listen_str
        .parse()
        .with_context(|| format!("Invalid listen address: '{listen_str}'"))?;

    Ok(AppConfig {
        endpoint: EndpointConfig {
            base_url,
            model,
            timeout: Duration::from_secs(timeout_secs),
            tunnel_header,
        },
        listen,
    })
}

/// Loads configuration files.
pub struct ConfigManager {
    config_path: PathBuf,
    explicit: bool,
}

impl ConfigManager {
    /// Uses `$XDG_CONFIG_HOME/nusa/config.toml`
    /// or `~/.config/nusa/config.toml` if `XDG_CONFIG_HOME` is not set.
    pub fn new() -> Result<Self> {
        Ok(Self {
            config_path: paths::config_dir()?.join("config.toml"),
            explicit: false,
        })
    }

    /// Uses a path given on the command line; it must exist.
    pub fn with_path(path: impl AsRef<Path>) -> Self {
        Self {
            config_path: path.as_ref().to_path_buf(),
            explicit: true,
        }
    }

    pub const fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    pub fn load(&self) -> Result<ConfigFile> {
        let contents = fs::read_to_string(&self.config_path).with_context(|| {
            format!("Failed to read config file: {}", self.config_path.display())
        })?;

        let config_file: ConfigFile = toml::from_str(&contents).with_context(|| {
            format!(
                "Failed to parse config file: {}",
                self.config_path.display()
            )
        })?;

        Ok(config_file)
    }

    /// Like [`load`](Self::load), but a missing default file yields defaults.
    pub fn load_or_default(&self) -> Result<ConfigFile> {
        if !self.explicit && !self.config_path.exists() {
            tracing::debug!(path = %self.config_path.display(), "no config file, using defaults");
            return Ok(ConfigFile::default());
        }
        self.load()
    }
}
