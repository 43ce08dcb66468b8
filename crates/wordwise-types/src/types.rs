use serde::{Deserialize, Serialize};

/// Maximum number of example sentences kept per dictionary entry
pub const MAX_EXAMPLES: usize = 2;

/// A word with its definition and example sentences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictionaryEntry {
    pub word: String,
    pub definition: String,
    pub examples: Vec<String>,
}

impl DictionaryEntry {
    /// Build an entry, dropping empty example fields and anything past `MAX_EXAMPLES`
    pub fn new<I, S>(word: impl Into<String>, definition: impl Into<String>, examples: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let examples = examples
            .into_iter()
            .map(Into::into)
            .filter(|e: &String| !e.is_empty())
            .take(MAX_EXAMPLES)
            .collect();

        Self {
            word: word.into(),
            definition: definition.into(),
            examples,
        }
    }

}

/// One exchange between the user and an agent
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationTurn {
    pub user_input: String,
    pub bot_response: String,
}

impl ConversationTurn {
    pub fn new(user_input: impl Into<String>, bot_response: impl Into<String>) -> Self {
        Self {
            user_input: user_input.into(),
            bot_response: bot_response.into(),
        }
    }
}

/// A reply scored by a human curator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatedResponse {
    pub user_input: String,
    pub bot_response: String,
    pub rating: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_drops_empty_examples() {
        let entry = DictionaryEntry::new("cat", "a small feline", ["", "Cats are pets."]);
        assert_eq!(entry.examples, vec!["Cats are pets.".to_string()]);
    }

    #[test]
    fn test_entry_keeps_at_most_two_examples() {
        let entry = DictionaryEntry::new("cat", "", ["one", "two", "three"]);
        assert_eq!(entry.examples, vec!["one", "two"]);
        assert_eq!(entry.examples.len(), MAX_EXAMPLES);
    }

    #[test]
    fn test_entry_without_examples() {
        let entry = DictionaryEntry::new("cat", "a small feline", Vec::<String>::new());
        assert!(entry.examples.is_empty());
    }
}
