use std::collections::BTreeMap;

use rand::Rng;
use rand::seq::SliceRandom;
use wordwise_types::RatedResponse;

/// Append-only log of curator-rated replies
#[derive(Debug, Clone, Default)]
pub struct RatingStore {
    entries: Vec<RatedResponse>,
}

impl RatingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a rating as-is. Any integer is accepted and duplicates are kept.
    pub fn rate(
        &mut self,
        user_input: impl Into<String>,
        bot_response: impl Into<String>,
        rating: i32,
    ) {
        self.entries.push(RatedResponse {
            user_input: user_input.into(),
            bot_response: bot_response.into(),
            rating,
        });
    }

    /// Replies from the highest-rated group among entries whose input
    /// contains `word` as a substring. Empty when nothing matches.
    pub fn top_rated_for(&self, word: &str) -> Vec<&str> {
        let mut by_rating: BTreeMap<i32, Vec<&str>> = BTreeMap::new();
        for entry in &self.entries {
            if entry.user_input.contains(word) {
                by_rating
                    .entry(entry.rating)
                    .or_default()
                    .push(entry.bot_response.as_str());
            }
        }

        by_rating
            .pop_last()
            .map(|(_, responses)| responses)
            .unwrap_or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RatedResponse> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Uniform pick from `candidates` using the caller's RNG
pub fn pick_random<'a, T, R>(candidates: &'a [T], rng: &mut R) -> Option<&'a T>
where
    R: Rng + ?Sized,
{
    candidates.choose(rng)
}
