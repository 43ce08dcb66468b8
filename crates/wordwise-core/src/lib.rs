pub mod agent;
pub mod error;
pub mod frequency;
pub mod importance;
pub mod lexicon;
pub mod memory;
pub mod pool;
pub mod ratings;
pub mod responder;
pub mod stopwords;
pub mod tokenizer;

pub use agent::Agent;
pub use error::{LoadError, StoreError};
pub use frequency::FrequencyTracker;
pub use importance::select_important_word;
pub use lexicon::{Lexicon, LexiconMetadata, MemoryLexicon};
pub use memory::{ConversationMemory, DEFAULT_MEMORY_LIMIT};
pub use pool::AgentPool;
pub use ratings::RatingStore;
pub use responder::Responder;
pub use stopwords::StopwordSet;
pub use tokenizer::tokenize;
