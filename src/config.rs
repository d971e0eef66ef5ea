use anyhow::Context;
use serde::Deserialize;
use std::path::PathBuf;

/// Server configuration, loaded from a YAML file.
///
/// The file path comes from the `CONFIG` environment variable, defaulting to
/// `config.yaml` in the working directory. A missing file yields the built-in
/// defaults; a file that exists but does not parse is an error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub static_files: StaticFilesConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Address the listener binds to, e.g. "127.0.0.1:8080"
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,

    /// Maximum number of connections served concurrently. Connections beyond
    /// this wait for a slot; 1 means strictly sequential serving.
    #[serde(default = "default_max_connections")]
    pub max_connections: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StaticFilesConfig {
    /// Base directory served files are resolved under
    #[serde(default = "default_root")]
    pub root: PathBuf,

    /// Index filenames tried, in order, for directory requests
    #[serde(default = "default_index")]
    pub index: Vec<String>,
}

fn default_listen_addr() -> String {
    "127.0.0.1:8080".to_string()
}

fn default_max_connections() -> usize {
    1
}

fn default_root() -> PathBuf {
    PathBuf::from("public")
}

fn default_index() -> Vec<String> {
    vec!["index.html".to_string()]
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
            max_connections: default_max_connections(),
        }
    }
}

impl Default for StaticFilesConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            index: default_index(),
        }
    }
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var("CONFIG").unwrap_or_else(|_| "config.yaml".to_string());

        match std::fs::read_to_string(&path) {
            Ok(contents) => Self::from_yaml(&contents),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e).with_context(|| format!("failed to read config file {path}")),
        }
    }

    pub fn from_yaml(contents: &str) -> anyhow::Result<Self> {
        serde_yaml::from_str(contents).context("failed to parse config")
    }
}
