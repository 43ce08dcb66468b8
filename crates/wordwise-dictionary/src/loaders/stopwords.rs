use std::path::Path;

use wordwise_core::{LoadError, StopwordSet};

/// Load a stopword list, one word per line.
///
/// Words are kept verbatim (case-sensitive, no trimming beyond the line
/// terminator). Blank lines are skipped.
pub fn load_stopwords(path: &Path) -> Result<StopwordSet, LoadError> {
    let content = std::fs::read_to_string(path).map_err(|e| LoadError::from_io(path, e))?;

    let stopwords: StopwordSet = content.lines().filter(|l| !l.is_empty()).collect();
    tracing::info!("Loaded {} stop words from {}", stopwords.len(), path.display());
    Ok(stopwords)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn test_load_one_word_per_line() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "the\na\r\n\nThe\n").unwrap();

        let stopwords = load_stopwords(file.path()).unwrap();
        assert_eq!(stopwords.len(), 3);
        assert!(stopwords.contains("the"));
        assert!(stopwords.contains("a"));
        assert!(stopwords.contains("The"));
        assert!(!stopwords.contains(""));
    }

    #[test]
    fn test_missing_file_is_resource_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_stopwords(&dir.path().join("stop_words.txt")).unwrap_err();
        assert!(matches!(err, LoadError::ResourceNotFound { .. }));
    }
}
