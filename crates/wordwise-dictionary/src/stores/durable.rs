//! Durable lexicon backed by redb.
//!
//! One table keyed by word; each value is a JSON row holding the definition
//! and the two example slots. Inserts replace the previous row.

use std::path::{Path, PathBuf};

use redb::{Database, ReadableTableMetadata, TableDefinition};
use serde::{Deserialize, Serialize};
use wordwise_core::error::StoreResult;
use wordwise_core::{Lexicon, LexiconMetadata, StoreError};
use wordwise_types::DictionaryEntry;

const DICTIONARY_TABLE: TableDefinition<&str, &str> = TableDefinition::new("dictionary");

#[derive(Debug, Serialize, Deserialize)]
struct DictionaryRow {
    definition: String,
    #[serde(default)]
    example1: String,
    #[serde(default)]
    example2: String,
}

impl DictionaryRow {
    fn from_entry(entry: &DictionaryEntry) -> Self {
        let mut examples = entry.examples.iter().cloned();
        Self {
            definition: entry.definition.clone(),
            example1: examples.next().unwrap_or_default(),
            example2: examples.next().unwrap_or_default(),
        }
    }

    fn into_entry(self, word: &str) -> DictionaryEntry {
        DictionaryEntry::new(word, self.definition, [self.example1, self.example2])
    }
}

fn backend(context: &str, e: impl std::fmt::Display) -> StoreError {
    StoreError::Backend {
        message: format!("{context} failed: {e}"),
    }
}

/// Word store persisted in a single redb file
pub struct DurableLexicon {
    db: Database,
    path: PathBuf,
}

impl DurableLexicon {
    /// Open or create the store at `path`, creating the table if missing
    pub fn open(path: &Path) -> StoreResult<Self> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .map_err(|e| backend(&format!("create {}", parent.display()), e))?;
        }

        let db = Database::create(path)
            .map_err(|e| backend(&format!("open redb at {}", path.display()), e))?;

        let txn = db.begin_write().map_err(|e| backend("begin_write", e))?;
        txn.open_table(DICTIONARY_TABLE)
            .map_err(|e| backend("open_table", e))?;
        txn.commit().map_err(|e| backend("commit", e))?;

        tracing::info!("Opened lexicon store at {}", path.display());
        Ok(Self {
            db,
            path: path.to_path_buf(),
        })
    }

    fn entry_count(&self) -> StoreResult<u64> {
        let txn = self.db.begin_read().map_err(|e| backend("begin_read", e))?;
        let table = txn
            .open_table(DICTIONARY_TABLE)
            .map_err(|e| backend("open_table", e))?;
        table.len().map_err(|e| backend("len", e))
    }
}

impl Lexicon for DurableLexicon {
    fn lookup(&self, word: &str) -> StoreResult<Option<DictionaryEntry>> {
        let txn = self.db.begin_read().map_err(|e| backend("begin_read", e))?;
        let table = txn
            .open_table(DICTIONARY_TABLE)
            .map_err(|e| backend("open_table", e))?;
        let Some(guard) = table.get(word).map_err(|e| backend("get", e))? else {
            return Ok(None);
        };

        let row: DictionaryRow =
            serde_json::from_str(guard.value()).map_err(|e| StoreError::Codec {
                word: word.to_string(),
                message: e.to_string(),
            })?;
        Ok(Some(row.into_entry(word)))
    }

    fn upsert(&self, entry: DictionaryEntry) -> StoreResult<()> {
        self.upsert_batch(vec![entry]).map(|_| ())
    }

    /// All entries go through one write transaction
    fn upsert_batch(&self, entries: Vec<DictionaryEntry>) -> StoreResult<usize> {
        let txn = self.db.begin_write().map_err(|e| backend("begin_write", e))?;
        let mut written = 0;
        {
            let mut table = txn
                .open_table(DICTIONARY_TABLE)
                .map_err(|e| backend("open_table", e))?;
            for entry in &entries {
                let row = serde_json::to_string(&DictionaryRow::from_entry(entry)).map_err(|e| {
                    StoreError::Codec {
                        word: entry.word.clone(),
                        message: e.to_string(),
                    }
                })?;
                table
                    .insert(entry.word.as_str(), row.as_str())
                    .map_err(|e| backend("insert", e))?;
                written += 1;
            }
        }
        txn.commit().map_err(|e| backend("commit", e))?;
        Ok(written)
    }

    fn metadata(&self) -> LexiconMetadata {
        let entry_count = self.entry_count().unwrap_or_else(|e| {
            tracing::warn!("Failed to count lexicon entries: {e}");
            0
        });
        LexiconMetadata {
            name: format!("redb:{}", self.path.display()),
            entry_count: entry_count as usize,
        }
    }
}

impl std::fmt::Debug for DurableLexicon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DurableLexicon")
            .field("path", &self.path)
            .finish()
    }
}
