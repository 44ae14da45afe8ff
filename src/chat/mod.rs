// Chat session — the in-memory, session-scoped conversation log.
//
// History lives only for the lifetime of the session (persistence across
// sessions is deliberately out of scope). Errors during a submission are
// isolated to that submission: the user's message and an assistant error
// message are appended, and nothing already in the log is touched.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::classify::traits::ClassificationResult;
use crate::classify::Pipeline;

pub const WELCOME_MESSAGE: &str = "Hello! I'm your Hate Speech Detection assistant. \
    Send me any text and I'll analyze it for hate speech, offensive language, \
    or classify it as neither. What would you like me to analyze?";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    User,
    Assistant,
}

/// One entry in the conversation log. Assistant messages produced by a
/// successful analysis carry the prediction alongside their text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
    pub prediction: Option<ClassificationResult>,
}

/// What a call to `ChatSession::submit` did.
pub enum Outcome<'a> {
    /// The submission was analyzed (successfully or not); the assistant's
    /// reply is the referenced message.
    Replied(&'a Message),
    /// The submission was blank and was not added to the log.
    EmptyInput,
}

/// A single user's conversation, seeded with a welcome message.
pub struct ChatSession {
    messages: Vec<Message>,
}

impl ChatSession {
    pub fn new() -> Self {
        let mut session = Self {
            messages: Vec::new(),
        };
        session.push_assistant_text(WELCOME_MESSAGE);
        session
    }

    /// Submit one piece of user text for analysis.
    ///
    /// Blank input is rejected without touching the log. Otherwise the user
    /// message is recorded and exactly one inference attempt is made; a
    /// failure becomes a visible assistant error message, never a crash and
    /// never a silent drop.
    pub fn submit(&mut self, pipeline: &Pipeline, text: &str) -> Outcome<'_> {
        if text.trim().is_empty() {
            return Outcome::EmptyInput;
        }

        self.messages.push(Message {
            role: Role::User,
            content: text.to_string(),
            prediction: None,
        });

        match pipeline.classify(text) {
            Ok(result) => {
                self.messages.push(Message {
                    role: Role::Assistant,
                    content: "Analysis complete!".to_string(),
                    prediction: Some(result),
                });
            }
            Err(e) => {
                warn!(error = %e, "Analysis failed");
                self.messages.push(Message {
                    role: Role::Assistant,
                    content: format!(
                        "Sorry, I encountered an error while analyzing your text: {e}"
                    ),
                    prediction: None,
                });
            }
        }

        Outcome::Replied(self.messages.last().expect("message just pushed"))
    }

    /// Drop the history and start over with a fresh welcome message.
    pub fn clear(&mut self) {
        self.messages.clear();
        self.push_assistant_text("Chat history cleared! What would you like me to analyze?");
    }

    /// Number of user messages analyzed so far.
    pub fn analyzed_count(&self) -> usize {
        self.messages.iter().filter(|m| m.role == Role::User).count()
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    fn push_assistant_text(&mut self, content: &str) {
        self.messages.push(Message {
            role: Role::Assistant,
            content: content.to_string(),
            prediction: None,
        });
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_has_welcome() {
        let session = ChatSession::new();
        assert_eq!(session.messages().len(), 1);
        assert_eq!(session.messages()[0].role, Role::Assistant);
        assert_eq!(session.analyzed_count(), 0);
    }

    #[test]
    fn test_clear_resets_to_single_message() {
        let mut session = ChatSession::new();
        session.clear();
        assert_eq!(session.messages().len(), 1);
        assert!(session.messages()[0].content.contains("cleared"));
    }
}
