//! Chat data models
//!
//! Messages exchanged in the assistant view.

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Sender of a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    /// Message typed by the user
    User,
    /// Reply from the assistant
    Assistant,
}

impl Sender {
    /// Convert the sender to its string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Sender::User => "user",
            Sender::Assistant => "assistant",
        }
    }
}

/// One turn in a conversation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// List identity, strictly increasing within a conversation
    pub id: u64,
    /// Message text
    pub text: String,
    /// Who wrote it
    pub sender: Sender,
}

impl ChatMessage {
    /// Create a new message
    pub fn new(id: u64, text: impl Into<String>, sender: Sender) -> Self {
        Self {
            id,
            text: text.into(),
            sender,
        }
    }
}

/// Hands out message ids from the wall clock (milliseconds)
///
/// Two messages created within the same millisecond still get distinct,
/// increasing ids.
#[derive(Debug, Clone, Default)]
pub struct MessageIdSource {
    last: u64,
}

impl MessageIdSource {
    /// Create a new id source
    pub fn new() -> Self {
        Self::default()
    }

    /// Next id based on the current time
    pub fn next_id(&mut self) -> u64 {
        let now = u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0);
        self.next_at(now)
    }

    /// Next id given a clock reading in milliseconds
    pub fn next_at(&mut self, now_millis: u64) -> u64 {
        let id = now_millis.max(self.last + 1);
        self.last = id;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sender_serialization() {
        let msg = ChatMessage::new(1, "hi", Sender::Assistant);
        let json = serde_json::to_string(&msg).unwrap();
        assert!(json.contains(r#""sender":"assistant""#));
        assert_eq!(Sender::User.as_str(), "user");
    }

    #[test]
    fn test_ids_follow_clock() {
        let mut ids = MessageIdSource::new();
        assert_eq!(ids.next_at(1_000), 1_000);
        assert_eq!(ids.next_at(2_500), 2_500);
    }

    #[test]
    fn test_ids_stay_unique_when_clock_stalls() {
        let mut ids = MessageIdSource::new();
        let a = ids.next_at(5_000);
        let b = ids.next_at(5_000);
        let c = ids.next_at(4_000);
        assert!(a < b && b < c);
    }

    #[test]
    fn test_next_id_is_increasing() {
        let mut ids = MessageIdSource::new();
        let first = ids.next_id();
        let second = ids.next_id();
        assert!(second > first);
    }
}
