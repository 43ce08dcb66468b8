use std::sync::Arc;

use rand::Rng;
use wordwise_types::ConversationTurn;

use crate::frequency::FrequencyTracker;
use crate::lexicon::Lexicon;
use crate::memory::{ConversationMemory, DEFAULT_MEMORY_LIMIT};
use crate::ratings::RatingStore;
use crate::responder::{DEFINITION_NOT_FOUND, Responder};
use crate::stopwords::StopwordSet;

/// One independent responder with its own learned state.
///
/// Frequencies, memory and ratings belong to the agent alone; only the
/// lexicon and stopwords may be shared, and both are read-only after load.
#[derive(Debug)]
pub struct Agent {
    name: String,
    responder: Responder,
    frequencies: FrequencyTracker,
    memory: ConversationMemory,
    ratings: RatingStore,
}

impl Agent {
    pub fn new(
        name: impl Into<String>,
        lexicon: Arc<dyn Lexicon>,
        stopwords: Arc<StopwordSet>,
    ) -> Self {
        Self {
            name: name.into(),
            responder: Responder::new(lexicon),
            frequencies: FrequencyTracker::new(stopwords),
            memory: ConversationMemory::new(DEFAULT_MEMORY_LIMIT),
            ratings: RatingStore::new(),
        }
    }

    /// Replace the memory bound. Existing turns are dropped.
    pub fn with_memory_limit(mut self, limit: usize) -> Self {
        self.memory = ConversationMemory::new(limit);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn generate_reply(&self, input: &str) -> String {
        self.responder.reply(input, &self.frequencies)
    }

    pub fn generate_reply_from_history(&self, input: &str) -> String {
        self.generate_reply_from_history_with(input, &mut rand::thread_rng())
    }

    pub fn generate_reply_from_history_with<R>(&self, input: &str, rng: &mut R) -> String
    where
        R: Rng + ?Sized,
    {
        self.responder
            .reply_from_history(input, &self.frequencies, &self.ratings, rng)
    }

    /// Remember a turn and learn word frequencies from its input
    pub fn record_turn(&mut self, user_input: &str, bot_response: &str) {
        self.frequencies.record(user_input);
        self.remember(user_input, bot_response);
    }

    /// Learn from `input`, reply, then remember the exchange
    pub fn converse(&mut self, input: &str) -> String {
        self.observe(input);
        let reply = self.generate_reply(input);
        self.remember(input, &reply);
        reply
    }

    pub fn rate(&mut self, user_input: &str, bot_response: &str, rating: i32) {
        self.ratings.rate(user_input, bot_response, rating);
    }

    /// Rate the most recent turn. Returns false when memory is empty.
    pub fn rate_last(&mut self, rating: i32) -> bool {
        let Some(turn) = self.memory.last().cloned() else {
            return false;
        };
        self.rate(&turn.user_input, &turn.bot_response, rating);
        true
    }

    /// Definition of `word`, or `None` if this agent's store lacks it
    pub fn lookup_definition(&self, word: &str) -> Option<String> {
        self.responder.definition(word)
    }

    pub fn define(&self, word: &str) -> String {
        self.lookup_definition(word)
            .unwrap_or_else(|| DEFINITION_NOT_FOUND.to_string())
    }

    pub fn frequencies(&self) -> &FrequencyTracker {
        &self.frequencies
    }

    pub fn memory(&self) -> &ConversationMemory {
        &self.memory
    }

    pub fn ratings(&self) -> &RatingStore {
        &self.ratings
    }

    pub(crate) fn observe(&mut self, input: &str) {
        self.frequencies.record(input);
    }

    pub(crate) fn remember(&mut self, user_input: &str, bot_response: &str) {
        if let Some(evicted) = self
            .memory
            .push(ConversationTurn::new(user_input, bot_response))
        {
            tracing::trace!(agent = %self.name, input = %evicted.user_input, "evicted oldest turn");
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use wordwise_types::DictionaryEntry;

    use super::*;
    use crate::lexicon::MemoryLexicon;
    use crate::responder::{NOT_ENOUGH_INFORMATION, NOT_UNDERSTOOD};

    fn agent() -> Agent {
        let lexicon = MemoryLexicon::from_entries([
            DictionaryEntry::new("cat", "a small feline", ["A cat sat.", "Cats are pets."]),
            DictionaryEntry::new("dog", "a loyal canine", ["The dog barked."]),
        ]);
        let stopwords: StopwordSet = ["I", "a", "the", "saw"].into_iter().collect();
        Agent::new("Brain1", Arc::new(lexicon), Arc::new(stopwords))
    }

    #[test]
    fn test_fixed_fallbacks() {
        let agent = agent();
        assert_eq!(agent.generate_reply(""), NOT_UNDERSTOOD);
        assert_eq!(agent.generate_reply("the a"), NOT_ENOUGH_INFORMATION);
    }

    #[test]
    fn test_reply_favours_frequent_word() {
        let mut agent = agent();
        agent.record_turn("cat", "ok");
        agent.record_turn("cat dog", "ok");

        assert_eq!(agent.frequencies().importance_of("cat"), 2);
        assert_eq!(
            agent.generate_reply("I saw a dog and a cat"),
            "Let's talk more about cat. A cat sat."
        );
    }

    #[test]
    fn test_memory_bounded_by_limit() {
        let mut agent = agent().with_memory_limit(100);
        for i in 0..=100 {
            agent.record_turn(&format!("turn{i}"), "reply");
        }

        assert_eq!(agent.memory().len(), 100);
        assert!(agent.memory().turns().all(|t| t.user_input != "turn0"));
        assert_eq!(agent.memory().last().unwrap().user_input, "turn100");
    }

    #[test]
    fn test_converse_counts_input_once() {
        let mut agent = agent();
        let reply = agent.converse("dog");

        assert_eq!(reply, "Let's talk more about dog. The dog barked.");
        assert_eq!(agent.frequencies().importance_of("dog"), 1);
        assert_eq!(agent.memory().len(), 1);
    }

    #[test]
    fn test_rate_last_turn() {
        let mut agent = agent();
        assert!(!agent.rate_last(3));

        agent.converse("cat");
        assert!(agent.rate_last(3));
        let rated = agent.ratings().iter().next().unwrap();
        assert_eq!(rated.user_input, "cat");
        assert_eq!(rated.rating, 3);
    }

    #[test]
    fn test_history_reply() {
        let mut agent = agent();
        agent.rate("I love cats", "Cats rule", 5);
        agent.rate("I love cats", "Meh", 1);

        let mut rng = StdRng::seed_from_u64(9);
        assert_eq!(agent.generate_reply_from_history_with("cats", &mut rng), "Cats rule");
        assert_eq!(agent.generate_reply_from_history("cats"), "Cats rule");
    }

    #[test]
    fn test_define() {
        let agent = agent();
        assert_eq!(agent.define("dog"), "a loyal canine");
        assert_eq!(agent.define("fish"), DEFINITION_NOT_FOUND);
        assert_eq!(agent.name(), "Brain1");
    }
}
