// 💬 Chat Session - Message list with a simulated reply delay
//
// submit() appends the user's message right away and arms a single
// pending reply. poll() delivers it once the delay has passed. While a
// reply is pending, further submissions are ignored.
//
// Callers pass `Instant`s in, so the delay can be driven by a UI tick
// or by a test without sleeping.

use crate::assistant::{generate_response, GREETING};
use crate::context::FinancialContext;
use chrono::{DateTime, Local};
use serde::Serialize;
use std::time::{Duration, Instant};
use tracing::{debug, info};

pub const DEFAULT_REPLY_DELAY: Duration = Duration::from_millis(1500);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Assistant,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    pub id: u64,
    pub content: String,
    pub sender: Sender,
    pub timestamp: DateTime<Local>,
}

#[derive(Debug, Clone)]
struct PendingReply {
    question: String,
    due: Instant,
}

#[derive(Debug, Clone)]
pub struct ChatSession {
    messages: Vec<ChatMessage>,
    pending: Option<PendingReply>,
    reply_delay: Duration,
}

impl ChatSession {
    /// New session opened with the assistant greeting
    pub fn new(reply_delay: Duration) -> Self {
        let mut session = ChatSession {
            messages: Vec::new(),
            pending: None,
            reply_delay,
        };
        session.push(GREETING.to_string(), Sender::Assistant);
        session
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn reply_delay(&self) -> Duration {
        self.reply_delay
    }

    /// Post a user message; returns false when it was ignored
    ///
    /// Blank input and input arriving while a reply is pending are dropped.
    pub fn submit(&mut self, content: &str, now: Instant) -> bool {
        if content.trim().is_empty() {
            return false;
        }
        if self.is_pending() {
            debug!("Reply pending, ignoring submission");
            return false;
        }

        self.push(content.to_string(), Sender::User);
        self.pending = Some(PendingReply {
            question: content.to_string(),
            due: now + self.reply_delay,
        });
        true
    }

    /// Deliver the pending reply if it is due; returns true when one was added
    pub fn poll(&mut self, now: Instant, context: &FinancialContext) -> bool {
        let due = matches!(&self.pending, Some(p) if now >= p.due);
        if !due {
            return false;
        }

        let Some(pending) = self.pending.take() else {
            return false;
        };

        let reply = generate_response(&pending.question, context.snapshot(), &context.user().name);
        self.push(reply, Sender::Assistant);
        info!(messages = self.messages.len(), "Assistant reply delivered");
        true
    }

    fn push(&mut self, content: String, sender: Sender) {
        let id = self.messages.len() as u64 + 1;
        self.messages.push(ChatMessage {
            id,
            content,
            sender,
            timestamp: Local::now(),
        });
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new(DEFAULT_REPLY_DELAY)
    }
}

// ============================================================================
// TESTS
// ============================================================================
