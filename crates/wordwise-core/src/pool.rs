use std::collections::HashMap;

use rand::Rng;

use crate::agent::Agent;
use crate::responder::DEFINITION_NOT_FOUND;

pub const NO_RESPONSE: &str = "I'm not sure how to respond.";

/// Agents queried together, their replies merged by plurality vote
#[derive(Debug, Default)]
pub struct AgentPool {
    agents: Vec<Agent>,
}

impl AgentPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take ownership of a fully configured agent
    pub fn add_agent(&mut self, agent: Agent) {
        tracing::info!(agent = agent.name(), "agent registered");
        self.agents.push(agent);
    }

    /// Ask every agent, in registration order, and return the most common reply
    pub fn best_reply(&self, input: &str) -> String {
        let replies: Vec<String> = self
            .agents
            .iter()
            .map(|a| a.generate_reply(input))
            .collect();
        vote(&replies)
    }

    /// Same vote over replies drawn from each agent's rated history
    pub fn best_reply_from_history(&self, input: &str) -> String {
        self.best_reply_from_history_with(input, &mut rand::thread_rng())
    }

    pub fn best_reply_from_history_with<R>(&self, input: &str, rng: &mut R) -> String
    where
        R: Rng + ?Sized,
    {
        let replies: Vec<String> = self
            .agents
            .iter()
            .map(|a| a.generate_reply_from_history_with(input, rng))
            .collect();
        vote(&replies)
    }

    /// Full conversation turn: every agent learns from `input`, the agents
    /// vote, and the winning reply is remembered by every agent
    pub fn converse(&mut self, input: &str) -> String {
        for agent in &mut self.agents {
            agent.observe(input);
        }

        let reply = self.best_reply(input);

        for agent in &mut self.agents {
            agent.remember(input, &reply);
        }
        reply
    }

    /// Rate the last turn in every agent. Returns how many agents were rated.
    pub fn rate_last(&mut self, rating: i32) -> usize {
        self.agents
            .iter_mut()
            .map(|a| a.rate_last(rating))
            .filter(|rated| *rated)
            .count()
    }

    /// First definition found across agents, in registration order
    pub fn define(&self, word: &str) -> String {
        self.agents
            .iter()
            .find_map(|a| a.lookup_definition(word))
            .unwrap_or_else(|| DEFINITION_NOT_FOUND.to_string())
    }

    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }
}

/// Plurality vote by exact string equality.
///
/// Empty replies do not vote. Ties go to the reply seen first.
pub fn vote<S: AsRef<str>>(replies: &[S]) -> String {
    let mut tally: Vec<(&str, usize)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for reply in replies.iter().map(|r| r.as_ref()) {
        if reply.is_empty() {
            continue;
        }
        match index.get(reply) {
            Some(&slot) => tally[slot].1 += 1,
            None => {
                index.insert(reply, tally.len());
                tally.push((reply, 1));
            }
        }
    }
    tracing::debug!(?tally, "vote tally");

    let mut best: Option<(&str, usize)> = None;
    for (reply, count) in tally {
        match best {
            Some((_, best_count)) if count <= best_count => {}
            _ => best = Some((reply, count)),
        }
    }

    best.map(|(reply, _)| reply.to_string())
        .unwrap_or_else(|| NO_RESPONSE.to_string())
}
