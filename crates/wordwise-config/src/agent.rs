use serde::{Deserialize, Serialize};

/// One agent of the voting pool
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct AgentConfig {
    pub name: String,
    /// Dictionary files loaded for this agent, in order
    #[serde(default)]
    pub dictionaries: Vec<String>,
    /// Give the agent its own in-memory lexicon instead of the shared store
    #[serde(default)]
    pub private_store: bool,
}

impl AgentConfig {
    pub fn new(name: impl Into<String>, dictionary: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            dictionaries: vec![dictionary.into()],
            private_store: false,
        }
    }
}

pub fn default_agents() -> Vec<AgentConfig> {
    vec![
        AgentConfig::new("Brain1", "dictionary1.txt"),
        AgentConfig::new("Brain2", "dictionary2.txt"),
    ]
}
