use std::collections::HashMap;
use std::sync::RwLock;

use wordwise_types::DictionaryEntry;

use crate::error::{StoreError, StoreResult};

/// Word lookup operations over a dictionary backend
pub trait Lexicon: Send + Sync {
    /// Exact, case-sensitive lookup
    fn lookup(&self, word: &str) -> StoreResult<Option<DictionaryEntry>>;

    /// Insert or replace the entry keyed by `entry.word`
    fn upsert(&self, entry: DictionaryEntry) -> StoreResult<()>;

    /// Insert a batch of entries, returning how many were written
    fn upsert_batch(&self, entries: Vec<DictionaryEntry>) -> StoreResult<usize> {
        let mut written = 0;
        for entry in entries {
            self.upsert(entry)?;
            written += 1;
        }
        Ok(written)
    }

    /// Backend description
    fn metadata(&self) -> LexiconMetadata;

    /// Stored examples for `word`, empty if the word is unknown
    fn examples(&self, word: &str) -> StoreResult<Vec<String>> {
        Ok(self.lookup(word)?.map(|e| e.examples).unwrap_or_default())
    }

    /// Stored definition for `word`
    fn definition(&self, word: &str) -> StoreResult<Option<String>> {
        Ok(self.lookup(word)?.map(|e| e.definition))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexiconMetadata {
    pub name: String,
    pub entry_count: usize,
}

/// Process-local lexicon, used for private agent stores and tests
#[derive(Debug, Default)]
pub struct MemoryLexicon {
    entries: RwLock<HashMap<String, DictionaryEntry>>,
}

impl MemoryLexicon {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: impl IntoIterator<Item = DictionaryEntry>) -> Self {
        let entries = entries
            .into_iter()
            .map(|e| (e.word.clone(), e))
            .collect();
        Self {
            entries: RwLock::new(entries),
        }
    }
}

impl Lexicon for MemoryLexicon {
    fn lookup(&self, word: &str) -> StoreResult<Option<DictionaryEntry>> {
        let entries = self.entries.read().map_err(|_| StoreError::Poisoned)?;
        Ok(entries.get(word).cloned())
    }

    fn upsert(&self, entry: DictionaryEntry) -> StoreResult<()> {
        let mut entries = self.entries.write().map_err(|_| StoreError::Poisoned)?;
        entries.insert(entry.word.clone(), entry);
        Ok(())
    }

    fn metadata(&self) -> LexiconMetadata {
        let entry_count = self.entries.read().map(|e| e.len()).unwrap_or(0);
        LexiconMetadata {
            name: "memory".to_string(),
            entry_count,
        }
    }
}
