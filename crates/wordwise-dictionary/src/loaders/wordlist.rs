use std::path::Path;

use wordwise_core::{LoadError, Lexicon};
use wordwise_types::DictionaryEntry;

/// Outcome of a dictionary file import
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Non-blank lines parsed
    pub parsed: usize,
    /// Entries the store accepted
    pub stored: usize,
}

/// Parse one `word:definition|example1|example2` line.
///
/// Missing separators leave the remaining fields empty. Fields after the
/// second example are ignored. Blank lines yield `None`.
pub fn parse_line(line: &str) -> Option<DictionaryEntry> {
    if line.is_empty() {
        return None;
    }

    let (word, rest) = line.split_once(':').unwrap_or((line, ""));
    let mut fields = rest.split('|');
    let definition = fields.next().unwrap_or_default();
    let example1 = fields.next().unwrap_or_default();
    let example2 = fields.next().unwrap_or_default();

    Some(DictionaryEntry::new(word, definition, [example1, example2]))
}

/// Import a dictionary file into `lexicon`.
///
/// A missing file is fatal. Store failures are logged and the import goes on
/// with whatever the store accepted.
pub fn load_dictionary(path: &Path, lexicon: &dyn Lexicon) -> Result<LoadReport, LoadError> {
    tracing::info!("Loading dictionary from file: {}", path.display());
    let content = std::fs::read_to_string(path).map_err(|e| LoadError::from_io(path, e))?;

    let entries: Vec<DictionaryEntry> = content.lines().filter_map(parse_line).collect();
    let parsed = entries.len();

    let stored = match lexicon.upsert_batch(entries) {
        Ok(stored) => stored,
        Err(e) => {
            tracing::warn!("Failed to store entries from {}: {e}", path.display());
            0
        }
    };

    tracing::info!("Loaded {stored}/{parsed} dictionary entries from {}", path.display());
    Ok(LoadReport { parsed, stored })
}
