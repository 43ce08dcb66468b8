use std::collections::VecDeque;

use wordwise_types::ConversationTurn;

pub const DEFAULT_MEMORY_LIMIT: usize = 100;

/// Bounded FIFO log of recent turns
#[derive(Debug, Clone)]
pub struct ConversationMemory {
    turns: VecDeque<ConversationTurn>,
    limit: usize,
}

impl Default for ConversationMemory {
    fn default() -> Self {
        Self::new(DEFAULT_MEMORY_LIMIT)
    }
}

impl ConversationMemory {
    pub fn new(limit: usize) -> Self {
        Self {
            turns: VecDeque::with_capacity(limit.min(DEFAULT_MEMORY_LIMIT)),
            limit,
        }
    }

    /// Append a turn, evicting the oldest one if the limit is exceeded
    pub fn push(&mut self, turn: ConversationTurn) -> Option<ConversationTurn> {
        self.turns.push_back(turn);
        if self.turns.len() > self.limit {
            self.turns.pop_front()
        } else {
            None
        }
    }

    pub fn last(&self) -> Option<&ConversationTurn> {
        self.turns.back()
    }

    pub fn turns(&self) -> impl Iterator<Item = &ConversationTurn> {
        self.turns.iter()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}
