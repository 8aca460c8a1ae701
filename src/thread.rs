//! View-local conversation thread.
//!
//! The thread lives only as long as the page that renders it; nothing here
//! is persisted. The coordinating view owns a [`Thread`] and hands the
//! chat components read access plus callbacks that mutate it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Who authored a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    /// The person chatting.
    User,
    /// The food assistant.
    Assistant,
}

/// A single chat message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Unique message identifier.
    pub id: Uuid,
    /// Message author.
    pub role: MessageRole,
    /// Message text.
    pub content: String,
    /// Creation time.
    pub created_at: DateTime<Utc>,
}

impl Message {
    fn new(role: MessageRole, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            role,
            content: content.into(),
            created_at: Utc::now(),
        }
    }
}

/// The in-memory conversation shown by the chat view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Thread {
    messages: Vec<Message>,
}

impl Thread {
    /// Create an empty conversation.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a user message.
    pub fn push_user(&mut self, content: impl Into<String>) {
        self.messages.push(Message::new(MessageRole::User, content));
    }

    /// Append an assistant message.
    pub fn push_assistant(&mut self, content: impl Into<String>) {
        self.messages
            .push(Message::new(MessageRole::Assistant, content));
    }

    /// Drop every message. This is the "clear chat" action.
    pub fn clear(&mut self) {
        self.messages.clear();
    }

    /// Whether the conversation has no messages.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Number of messages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// All messages, oldest first.
    #[must_use]
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thread_lifecycle() {
        let mut thread = Thread::new();
        assert!(thread.is_empty());

        thread.push_user("What goes well with dosa?");
        assert_eq!(thread.len(), 1);

        thread.push_assistant("Sambar and coconut chutney are the classics.");
        assert_eq!(thread.len(), 2);

        let messages = thread.messages();
        assert_eq!(messages[0].role, MessageRole::User);
        assert_eq!(messages[1].role, MessageRole::Assistant);
    }

    #[test]
    fn test_clear_empties_the_thread() {
        let mut thread = Thread::new();
        thread.push_user("hello");
        thread.push_user("again");
        assert!(!thread.is_empty());

        thread.clear();
        assert!(thread.is_empty());
        assert_eq!(thread.len(), 0);
    }
}
