use std::env::VarError;
use std::ffi::OsString;
use std::path::Path;

use anyhow::{bail, Context};
use serde::Deserialize;

use crate::router::pages::DEFAULT_PLAIN_TEXT;
use crate::router::ResponseMode;

/// Environment variable naming an optional YAML configuration file.
pub const CONFIG_PATH_ENV: &str = "PAGEHAND_CONFIG";
/// Environment variable overriding `server.listen_addr`.
pub const LISTEN_ENV: &str = "LISTEN";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub response: ResponseConfig,
    /// One of trace, debug, info, warn, error
    pub log_level: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub listen_addr: String,
    /// Size of the single read buffer; one byte is kept in reserve
    pub buffer_size: usize,
    /// Stop accepting after this many connections (1 = serve once and exit)
    pub max_connections: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ResponseConfig {
    pub mode: ModeKind,
    /// Body sent in `plain_text` mode
    pub plain_text_body: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModeKind {
    #[default]
    Routed,
    PlainText,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            response: ResponseConfig::default(),
            log_level: "info".to_string(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: "127.0.0.1:8080".to_string(),
            buffer_size: 1024,
            max_connections: None,
        }
    }
}

impl Default for ResponseConfig {
    fn default() -> Self {
        Self {
            mode: ModeKind::Routed,
            plain_text_body: DEFAULT_PLAIN_TEXT.to_string(),
        }
    }
}

impl Config {
    /// Loads configuration from the file named by `PAGEHAND_CONFIG` (if set),
    /// then applies the `LISTEN` override.
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(std::env::var_os(CONFIG_PATH_ENV), std::env::var(LISTEN_ENV))
    }

    /// Builds the configuration from already-read environment values.
    ///
    /// The config path may be any OS path; `LISTEN` must be valid UTF-8.
    pub fn load_from(
        config_path: Option<OsString>,
        listen: Result<String, VarError>,
    ) -> anyhow::Result<Self> {
        let mut cfg = match config_path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        match listen {
            Ok(listen_addr) => cfg.server.listen_addr = listen_addr,
            Err(VarError::NotPresent) => {}
            Err(VarError::NotUnicode(raw)) => {
                bail!("{} is not valid UTF-8: {:?}", LISTEN_ENV, raw)
            }
        }

        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_yaml(&raw)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    /// Parses a YAML document. Missing keys take their defaults.
    pub fn from_yaml(raw: &str) -> anyhow::Result<Self> {
        let cfg: Config = serde_yaml::from_str(raw).context("Failed to parse YAML config")?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.server.listen_addr.is_empty() {
            bail!("server.listen_addr must not be empty");
        }
        if self.server.buffer_size < 2 {
            bail!(
                "server.buffer_size must be at least 2, got {}",
                self.server.buffer_size
            );
        }
        if self.server.max_connections == Some(0) {
            bail!("server.max_connections must be at least 1 when set");
        }
        self.log_level()?;
        Ok(())
    }

    pub fn log_level(&self) -> anyhow::Result<tracing::Level> {
        self.log_level
            .parse::<tracing::Level>()
            .map_err(|_| anyhow::anyhow!("Unknown log level '{}'", self.log_level))
    }

    pub fn response_mode(&self) -> ResponseMode {
        match self.response.mode {
            ModeKind::Routed => ResponseMode::Routed,
            ModeKind::PlainText => ResponseMode::PlainText {
                body: self.response.plain_text_body.clone(),
            },
        }
    }
}
