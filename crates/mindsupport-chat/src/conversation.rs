use mindsupport_core::models::chat_history::{ChatHistory, ChatHistoryMessage, ChatRole};
use tracing::{debug, warn};

use crate::error::ChatError;
use crate::responder::Responder;

pub const WELCOME_MESSAGE: &str = "Hello! I'm your AI mental health companion. \
I'm here to listen and provide support. How are you feeling today?";

/// A live chat with the scripted companion.
pub struct Conversation {
    history: ChatHistory,
    responder: Responder,
    turn: usize,
    crisis_alert: bool,
}

impl Conversation {
    /// Start a fresh transcript holding only the welcome message.
    pub fn new(responder: Responder) -> Self {
        Self {
            history: welcome_history(),
            responder,
            turn: 0,
            crisis_alert: false,
        }
    }

    /// Continue a previously saved transcript.
    pub fn resume(history: ChatHistory, responder: Responder) -> Self {
        let turn = history
            .messages
            .iter()
            .filter(|m| m.role == ChatRole::User)
            .count();
        Self {
            history,
            responder,
            turn,
            crisis_alert: false,
        }
    }

    pub fn resume_json(json: &str, responder: Responder) -> Result<Self, ChatError> {
        Ok(Self::resume(ChatHistory::from_json(json)?, responder))
    }

    /// Append the user's message and the companion's reply.
    ///
    /// Returns the reply. Blank input is rejected without touching the
    /// transcript.
    pub fn send(&mut self, text: &str) -> Result<&ChatHistoryMessage, ChatError> {
        if text.trim().is_empty() {
            return Err(ChatError::EmptyMessage);
        }

        self.history.push(ChatHistoryMessage::user(text));

        let reply = self.responder.reply(text, self.turn);
        self.turn += 1;
        if reply.is_crisis {
            // Log the trigger, never the message itself.
            warn!(
                transcript_id = %self.history.id,
                keyword = self.responder.detector().first_match(text).unwrap_or_default(),
                "crisis keywords detected in chat message"
            );
            self.crisis_alert = true;
        } else {
            debug!(transcript_id = %self.history.id, topic = ?reply.topic, "chat reply");
        }

        Ok(self
            .history
            .push(ChatHistoryMessage::bot(reply.content, reply.is_crisis)))
    }

    pub fn history(&self) -> &ChatHistory {
        &self.history
    }

    pub fn responder(&self) -> &Responder {
        &self.responder
    }

    /// Whether the crisis banner should be showing.
    pub fn crisis_alert(&self) -> bool {
        self.crisis_alert
    }

    pub fn dismiss_alert(&mut self) {
        self.crisis_alert = false;
    }

    /// Drop the transcript and start over from the welcome message.
    pub fn clear(&mut self) {
        self.history = welcome_history();
        self.turn = 0;
        self.crisis_alert = false;
    }
}

fn welcome_history() -> ChatHistory {
    let mut history = ChatHistory::new();
    history.push(ChatHistoryMessage::bot(WELCOME_MESSAGE, false));
    history
}
