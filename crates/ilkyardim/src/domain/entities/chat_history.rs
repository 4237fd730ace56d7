//! ChatHistory Entity
//!
//! Ordered turns of one chat session. Turns are only ever appended as a
//! (user, bot) exchange or cleared wholesale, so every user turn is
//! immediately followed by exactly one bot turn.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::ChatTurn;

/// Default number of exchanges (user + bot pairs) kept per session
pub const DEFAULT_HISTORY_LIMIT: usize = 50;

/// A session's chat history
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChatHistory {
    turns: Vec<ChatTurn>,
}

impl ChatHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn turns(&self) -> &[ChatTurn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// Append a user question and its bot answer.
    ///
    /// `limit` is the maximum number of exchanges kept; the oldest exchanges
    /// are dropped first. A limit of 0 keeps everything.
    pub fn record_exchange(
        &mut self,
        question: impl Into<String>,
        answer: impl Into<String>,
        limit: usize,
    ) {
        let user = ChatTurn::user(question);
        // Clamp so a wall-clock step backwards can't reorder the pair
        let bot_ts = Utc::now().max(user.timestamp);
        let bot = ChatTurn::bot(answer).with_timestamp(bot_ts);

        self.turns.push(user);
        self.turns.push(bot);

        if limit > 0 {
            let max_turns = limit.saturating_mul(2);
            if self.turns.len() > max_turns {
                let excess = self.turns.len() - max_turns;
                self.turns.drain(..excess);
            }
        }
    }

    /// Drop every turn
    pub fn clear(&mut self) {
        self.turns.clear();
    }
}
