use std::env;

use serde::{Deserialize, Serialize};

fn default_path() -> String {
    "word_context.redb".to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    /// redb file on disk
    #[default]
    Durable,
    /// Process-local map, nothing survives exit
    Memory,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct StoreConfig {
    pub backend: StoreBackend,
    #[serde(default = "default_path")]
    pub path: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: StoreBackend::default(),
            path: default_path(),
        }
    }
}

impl StoreConfig {
    pub fn apply_env(&mut self) {
        if let Ok(path) = env::var("WORDWISE_STORE_PATH") {
            self.path = path;
        }
    }
}
