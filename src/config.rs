use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};

pub const DEFAULT_OLLAMA_URL: &str = "http://127.0.0.1:11434";
pub const DEFAULT_MODEL: &str = "llama3.2";
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

/// Where and how to reach the text-generation service.
#[derive(Debug, Clone)]
pub struct InferenceConfig {
    pub base_url: String,
    pub model: String,
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_OLLAMA_URL.into(),
            model: DEFAULT_MODEL.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub db_path: PathBuf,
    pub inference: InferenceConfig,
}

impl Config {
    /// Build configuration from environment variables, falling back to local defaults.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let bind = get("JOURNAL_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.into());
        let bind_addr = bind
            .parse()
            .with_context(|| format!("invalid JOURNAL_BIND_ADDR '{}'", bind))?;

        let db_path = get("JOURNAL_DB_PATH").map(PathBuf::from).unwrap_or_else(|| {
            let home = get("HOME").unwrap_or_else(|| ".".into());
            PathBuf::from(format!("{}/.journal-insights/journal.db", home))
        });

        let inference = InferenceConfig {
            base_url: get("OLLAMA_URL").unwrap_or_else(|| DEFAULT_OLLAMA_URL.into()),
            model: get("OLLAMA_MODEL").unwrap_or_else(|| DEFAULT_MODEL.into()),
        };

        Ok(Self {
            bind_addr,
            db_path,
            inference,
        })
    }
}
