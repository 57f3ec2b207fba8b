//! Server configuration, loaded from an optional TOML file.

use crate::CardError;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Settings for the HTTP server. Every field has a default, so a config file
/// only needs to name what it changes:
///
/// ```
/// use card_gen::ServerConfig;
///
/// let config = ServerConfig::from_toml("port = 8080\ndefault_user = \"anonymous\"").unwrap();
/// assert_eq!(config.port, 8080);
/// assert_eq!(config.default_user, "anonymous");
/// assert_eq!(config.default_title, "Hello, こんにちは");
/// ```
///
/// Card geometry is fixed and deliberately not part of the configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// The font used for every card, loaded once at startup
    pub font_path: PathBuf,
    /// Number of request worker threads; 0 means one per CPU
    pub workers: usize,
    /// Title used when the `title` query parameter is missing or empty
    pub default_title: String,
    /// Name used when the `user` query parameter is missing or empty
    pub default_user: String,
    /// Longest `title` or `user` accepted, in characters; longer values are
    /// cut short before layout
    pub max_text_chars: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: "0.0.0.0".to_string(),
            port: 3000,
            font_path: PathBuf::from("assets/Kaisei_Tokumin/KaiseiTokumin-Bold.ttf"),
            workers: 0,
            default_title: "Hello, こんにちは".to_string(),
            default_user: "名無しの太郎之介".to_string(),
            max_text_chars: 256,
        }
    }
}

impl ServerConfig {
    /// Parse a configuration from TOML source
    pub fn from_toml(source: &str) -> Result<ServerConfig, CardError> {
        toml::from_str(source).map_err(|e| CardError::Config(e.to_string()))
    }

    /// Load a TOML configuration file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<ServerConfig, CardError> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml(&source)
    }

    /// The address to bind, as `host:port`
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// The number of worker threads to actually spawn
    pub fn worker_count(&self) -> usize {
        if self.workers == 0 {
            num_cpus::get()
        } else {
            self.workers
        }
    }
}
