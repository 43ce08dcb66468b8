use std::env;

use serde::{Deserialize, Serialize};

use self::agent::{AgentConfig, default_agents};
use self::store::StoreConfig;

pub mod agent;
pub mod store;

fn default_memory_limit() -> usize {
    100
}

fn default_stopwords_path() -> String {
    "stop_words.txt".to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Turns kept per agent before the oldest is dropped
    #[serde(default = "default_memory_limit")]
    pub memory_limit: usize,
    #[serde(default = "default_stopwords_path")]
    pub stopwords_path: String,
    pub store: StoreConfig,
    #[serde(default = "default_agents")]
    pub agents: Vec<AgentConfig>,
    /// Fallback tracing filter when RUST_LOG is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            memory_limit: default_memory_limit(),
            stopwords_path: default_stopwords_path(),
            store: StoreConfig::default(),
            agents: default_agents(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Defaults with environment overrides applied
    pub fn new() -> Self {
        let mut config = Self::default();
        config.apply_env();
        config
    }

    /// Override fields from `WORDWISE_*` variables. Unparsable values are ignored.
    pub fn apply_env(&mut self) {
        if let Some(limit) = env::var("WORDWISE_MEMORY_LIMIT")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            self.memory_limit = limit;
        }

        if let Ok(path) = env::var("WORDWISE_STOPWORDS") {
            self.stopwords_path = path;
        }

        if let Ok(level) = env::var("WORDWISE_LOG") {
            self.log_level = level;
        }

        self.store.apply_env();
    }
}
