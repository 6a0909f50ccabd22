//! Support-chat transcript state.
//!
//! DESIGN
//! ======
//! The transcript lives only as long as the support page; it is not
//! persisted or shared with other routes.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

/// Who produced a chat message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Assistant,
}

/// A single support-chat message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatMessage {
    pub id: String,
    pub role: ChatRole,
    pub content: String,
    /// Knowledge-base entry the assistant answer came from.
    pub source: Option<String>,
}

/// State for the support chat panel.
#[derive(Clone, Debug, Default)]
pub struct ChatState {
    pub messages: Vec<ChatMessage>,
    pub loading: bool,
}

impl ChatState {
    /// Append a user question to the transcript.
    pub fn push_user(&mut self, content: String) {
        self.messages.push(ChatMessage {
            id: uuid::Uuid::new_v4().to_string(),
            role: ChatRole::User,
            content,
            source: None,
        });
    }

    /// Append an assistant answer with its knowledge-base source.
    pub fn push_assistant(&mut self, content: String, source: String) {
        self.messages.push(ChatMessage {
            id: uuid::Uuid::new_v4().to_string(),
            role: ChatRole::Assistant,
            content,
            source: Some(source),
        });
    }
}
