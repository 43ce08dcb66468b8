use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use wordwise_config::Config;
use wordwise_config::store::{StoreBackend, StoreConfig};
use wordwise_core::{Agent, AgentPool, Lexicon, MemoryLexicon};
use wordwise_dictionary::{DurableLexicon, load_dictionary, load_stopwords};

/// Everything the shell needs, built once at startup
pub struct AppState {
    pub config: Config,
    pub pool: AgentPool,
}

impl AppState {
    /// Load stopwords, open the lexicon, import dictionaries and register agents
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let stopwords_path = Path::new(&config.stopwords_path);
        let stopwords = Arc::new(
            load_stopwords(stopwords_path)
                .with_context(|| format!("loading stop words from {}", stopwords_path.display()))?,
        );

        let mut shared: Option<Arc<dyn Lexicon>> = None;
        let mut pool = AgentPool::new();

        for agent_config in &config.agents {
            let lexicon: Arc<dyn Lexicon> = if agent_config.private_store {
                Arc::new(MemoryLexicon::new())
            } else {
                match &shared {
                    Some(lexicon) => Arc::clone(lexicon),
                    None => {
                        let lexicon = open_store(&config.store)?;
                        shared = Some(Arc::clone(&lexicon));
                        lexicon
                    }
                }
            };

            for dictionary in &agent_config.dictionaries {
                let path = Path::new(dictionary);
                let report = load_dictionary(path, lexicon.as_ref())
                    .with_context(|| format!("loading dictionary {}", path.display()))?;
                tracing::debug!(
                    agent = %agent_config.name,
                    parsed = report.parsed,
                    stored = report.stored,
                    "dictionary imported"
                );
            }

            let agent = Agent::new(agent_config.name.clone(), lexicon, Arc::clone(&stopwords))
                .with_memory_limit(config.memory_limit);
            pool.add_agent(agent);
        }

        Ok(Self { config, pool })
    }
}

fn open_store(store: &StoreConfig) -> anyhow::Result<Arc<dyn Lexicon>> {
    match store.backend {
        StoreBackend::Durable => {
            let lexicon = DurableLexicon::open(Path::new(&store.path))
                .with_context(|| format!("opening lexicon store {}", store.path))?;
            Ok(Arc::new(lexicon))
        }
        StoreBackend::Memory => {
            tracing::info!("Using in-memory lexicon store");
            Ok(Arc::new(MemoryLexicon::new()))
        }
    }
}
