use std::sync::Arc;

use rand::Rng;

use crate::frequency::FrequencyTracker;
use crate::importance::select_important_word;
use crate::lexicon::Lexicon;
use crate::ratings::{RatingStore, pick_random};
use crate::tokenizer::tokenize;

pub const NOT_UNDERSTOOD: &str = "I don't understand.";
pub const NOT_ENOUGH_INFORMATION: &str = "I don't have enough information.";
pub const DEFINITION_NOT_FOUND: &str = "Definition not found.";

/// Builds replies from the important word of an input
#[derive(Clone)]
pub struct Responder {
    lexicon: Arc<dyn Lexicon>,
}

impl Responder {
    pub fn new(lexicon: Arc<dyn Lexicon>) -> Self {
        Self { lexicon }
    }

    /// Reply with an example sentence for the most important word
    pub fn reply(&self, input: &str, frequencies: &FrequencyTracker) -> String {
        let tokens = tokenize(input);
        if tokens.is_empty() {
            return NOT_UNDERSTOOD.to_string();
        }

        let Some(word) = select_important_word(&tokens, frequencies) else {
            return NOT_ENOUGH_INFORMATION.to_string();
        };
        tracing::debug!(word, tokens = tokens.len(), "selected important word");

        format!("Let's talk more about {word}. {}", self.sentence_for(word))
    }

    /// Reply with a top-rated past response mentioning the important word,
    /// falling back to [`Responder::reply`] when none matches
    pub fn reply_from_history<R>(
        &self,
        input: &str,
        frequencies: &FrequencyTracker,
        ratings: &RatingStore,
        rng: &mut R,
    ) -> String
    where
        R: Rng + ?Sized,
    {
        let tokens = tokenize(input);
        if tokens.is_empty() {
            return NOT_UNDERSTOOD.to_string();
        }

        let Some(word) = select_important_word(&tokens, frequencies) else {
            return NOT_ENOUGH_INFORMATION.to_string();
        };

        let best = ratings.top_rated_for(word);
        match pick_random(&best, rng) {
            Some(response) => {
                tracing::debug!(word, candidates = best.len(), "answering from rated history");
                (*response).to_string()
            }
            None => self.reply(input, frequencies),
        }
    }

    /// Definition of `word`, if the store knows it
    pub fn definition(&self, word: &str) -> Option<String> {
        match self.lexicon.definition(word) {
            Ok(definition) => definition,
            Err(e) => {
                tracing::warn!(word, "definition lookup failed: {e}");
                None
            }
        }
    }

    fn sentence_for(&self, word: &str) -> String {
        let examples = self.lexicon.examples(word).unwrap_or_else(|e| {
            tracing::warn!(word, "example lookup failed: {e}");
            Vec::new()
        });

        match examples.into_iter().next() {
            Some(example) => example,
            None => format!("I don't have enough information about {word}."),
        }
    }
}

impl std::fmt::Debug for Responder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Responder")
            .field("lexicon", &self.lexicon.metadata())
            .finish()
    }
}
