use crate::frequency::FrequencyTracker;

/// Pick the non-stopword token with the highest usage count.
///
/// Zero-count words are still candidates, so an all-new sentence yields its
/// first non-stopword token. Ties go to the token that comes first in
/// `tokens`. Returns `None` only when every token is a stopword.
pub fn select_important_word<'a, S: AsRef<str>>(
    tokens: &'a [S],
    frequencies: &FrequencyTracker,
) -> Option<&'a str> {
    let mut best: Option<(&str, u64)> = None;

    for token in tokens.iter().map(|t| t.as_ref()) {
        if frequencies.stopwords().contains(token) {
            continue;
        }
        let score = frequencies.importance_of(token);
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((token, score)),
        }
    }

    best.map(|(word, _)| word)
}
