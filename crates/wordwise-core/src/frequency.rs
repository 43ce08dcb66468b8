use std::collections::HashMap;
use std::sync::Arc;

use crate::stopwords::StopwordSet;
use crate::tokenizer::tokenize;

/// Per-agent word usage counts learned from user input
#[derive(Debug, Clone)]
pub struct FrequencyTracker {
    counts: HashMap<String, u64>,
    stopwords: Arc<StopwordSet>,
}

impl FrequencyTracker {
    pub fn new(stopwords: Arc<StopwordSet>) -> Self {
        Self {
            counts: HashMap::new(),
            stopwords,
        }
    }

    /// Count every non-stopword token of `input`, repeats included
    pub fn record(&mut self, input: &str) {
        for word in tokenize(input) {
            if !self.stopwords.contains(&word) {
                *self.counts.entry(word).or_insert(0) += 1;
            }
        }
    }

    /// Usage count of `word`, 0 if never seen
    pub fn importance_of(&self, word: &str) -> u64 {
        self.counts.get(word).copied().unwrap_or(0)
    }

    pub fn stopwords(&self) -> &StopwordSet {
        &self.stopwords
    }

    /// Number of distinct words seen
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracker(stopwords: &[&str]) -> FrequencyTracker {
        FrequencyTracker::new(Arc::new(stopwords.iter().copied().collect()))
    }

    #[test]
    fn test_record_counts_non_stopwords() {
        let mut freq = tracker(&["the"]);
        freq.record("the cat chased the cat");

        assert_eq!(freq.importance_of("cat"), 2);
        assert_eq!(freq.importance_of("chased"), 1);
        assert_eq!(freq.importance_of("the"), 0);
        assert_eq!(freq.len(), 2);
    }

    #[test]
    fn test_unseen_word_is_zero() {
        let freq = tracker(&[]);
        assert_eq!(freq.importance_of("anything"), 0);
        assert!(freq.is_empty());
    }

    #[test]
    fn test_counts_accumulate_across_inputs() {
        let mut freq = tracker(&[]);
        freq.record("dog");
        freq.record("dog house");
        assert_eq!(freq.importance_of("dog"), 2);
        assert_eq!(freq.importance_of("house"), 1);
    }

    #[test]
    fn test_case_sensitive_keys() {
        let mut freq = tracker(&[]);
        freq.record("Cat cat");
        assert_eq!(freq.importance_of("Cat"), 1);
        assert_eq!(freq.importance_of("cat"), 1);
    }
}
