//! Assistant view
//!
//! Append-only conversation seeded with one greeting. A send appends the
//! user message, raises the composing flag, and appends the reply once it
//! settles.

use thiserror::Error;
use tracing::debug;

use crate::domain::{ChatMessage, MessageIdSource, Sender};
use crate::oracle::Oracle;

/// First message of every conversation
pub const ASSISTANT_GREETING: &str = "Hello! I am your feng shui assistant. Ask me about \
     auspicious days, your destiny, or what is worth doing today.";

/// Why a send was refused
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendRejected {
    /// Input is empty or whitespace only
    #[error("Message cannot be empty")]
    EmptyInput,
    /// A reply is still being composed
    #[error("A reply is still being composed")]
    Busy,
}

/// A user message waiting for its reply
#[derive(Debug)]
#[must_use = "pass the pending reply back to `AssistantView::finish_send`"]
pub struct PendingReply {
    query: String,
}

impl PendingReply {
    /// Text to send to the oracle
    pub fn query(&self) -> &str {
        &self.query
    }
}

/// Assistant view controller
#[derive(Debug, Clone)]
pub struct AssistantView {
    messages: Vec<ChatMessage>,
    input: String,
    composing: bool,
    ids: MessageIdSource,
}

impl Default for AssistantView {
    fn default() -> Self {
        Self::new()
    }
}

impl AssistantView {
    /// Conversation holding only the greeting
    pub fn new() -> Self {
        let mut ids = MessageIdSource::new();
        let greeting = ChatMessage::new(ids.next_id(), ASSISTANT_GREETING, Sender::Assistant);
        Self {
            messages: vec![greeting],
            input: String::new(),
            composing: false,
            ids,
        }
    }

    /// Messages in chronological order
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Current input buffer
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Replace the input buffer
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Whether the "assistant is composing" indicator is up
    pub fn is_composing(&self) -> bool {
        self.composing
    }

    /// Whether the send action is enabled
    pub fn can_send(&self) -> bool {
        !self.composing && !self.input.trim().is_empty()
    }

    /// Start a send: append the user message and clear the input
    ///
    /// # Errors
    /// * `EmptyInput` for empty or whitespace-only input
    /// * `Busy` while an earlier reply is being composed
    pub fn begin_send(&mut self) -> Result<PendingReply, SendRejected> {
        if self.input.trim().is_empty() {
            return Err(SendRejected::EmptyInput);
        }
        if self.composing {
            return Err(SendRejected::Busy);
        }

        let query = std::mem::take(&mut self.input);
        let id = self.ids.next_id();
        self.messages
            .push(ChatMessage::new(id, query.clone(), Sender::User));
        self.composing = true;
        Ok(PendingReply { query })
    }

    /// Append the assistant reply and lower the composing indicator
    pub fn finish_send(&mut self, pending: PendingReply, reply: String) {
        debug!(
            query_len = pending.query.len(),
            reply_len = reply.len(),
            "Assistant reply received"
        );
        let id = self.ids.next_id();
        self.messages
            .push(ChatMessage::new(id, reply, Sender::Assistant));
        self.composing = false;
    }

    /// Send the current input and wait for the reply
    pub async fn send(&mut self, oracle: &Oracle) -> Result<(), SendRejected> {
        let pending = self.begin_send()?;
        let reply = oracle.get_advice(pending.query()).await;
        self.finish_send(pending, reply);
        Ok(())
    }
}
