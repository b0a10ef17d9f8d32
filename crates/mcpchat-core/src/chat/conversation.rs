//! Conversation history

use crate::types::ChatMessage;

/// Ordered message history for one session
///
/// Append-only; messages are never edited or removed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Conversation {
    messages: Vec<ChatMessage>,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn last(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MessageRole;

    #[test]
    fn test_append_order() {
        let mut conversation = Conversation::new();
        assert!(conversation.is_empty());

        conversation.push(ChatMessage::user("hi"));
        conversation.push(ChatMessage::assistant("hello"));

        assert_eq!(conversation.len(), 2);
        assert_eq!(conversation.messages()[0].role, MessageRole::User);
        assert_eq!(conversation.last().and_then(ChatMessage::text), Some("hello"));
    }
}
