// src/services/chat_widget.rs
use crate::content::CHAT_GREETING;
use crate::models::api::ChatSnapshot;
use crate::models::chat::{ChatMessage, SendRejected, WidgetState};

/// Ticket for one accepted send; only the outstanding ticket may commit a reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingChat {
    pub ticket: u64,
    pub prompt: String,
}

/// Floating chat widget for one visit: open/closed flag, append-only message log,
/// and at most one reply in flight.
#[derive(Debug, Clone)]
pub struct ChatWidget {
    open: bool,
    messages: Vec<ChatMessage>,
    awaiting: Option<u64>,
    next_ticket: u64,
}

impl Default for ChatWidget {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatWidget {
    pub fn new() -> Self {
        Self {
            open: false,
            messages: vec![ChatMessage::assistant(CHAT_GREETING)],
            awaiting: None,
            next_ticket: 1,
        }
    }

    pub fn state(&self) -> WidgetState {
        match (self.open, self.awaiting.is_some()) {
            (false, _) => WidgetState::Closed,
            (true, false) => WidgetState::OpenIdle,
            (true, true) => WidgetState::OpenAwaitingResponse,
        }
    }

    pub fn is_awaiting(&self) -> bool {
        self.awaiting.is_some()
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn snapshot(&self) -> ChatSnapshot {
        ChatSnapshot {
            state: self.state(),
            messages: self.messages.clone(),
        }
    }

    pub fn toggle(&mut self) -> WidgetState {
        self.open = !self.open;
        self.state()
    }

    /// Hiding the window does not abandon a pending reply.
    pub fn close(&mut self) -> WidgetState {
        self.open = false;
        self.state()
    }

    /// Accept a submission: append the user message right away and start awaiting.
    /// Rejections leave the widget untouched.
    pub fn begin_send(&mut self, input: &str) -> Result<PendingChat, SendRejected> {
        if !self.open {
            return Err(SendRejected::WidgetClosed);
        }
        if input.trim().is_empty() {
            return Err(SendRejected::EmptyInput);
        }
        if self.awaiting.is_some() {
            return Err(SendRejected::AwaitingResponse);
        }

        let ticket = self.next_ticket;
        self.next_ticket += 1;
        self.awaiting = Some(ticket);
        self.messages.push(ChatMessage::user(input));

        Ok(PendingChat {
            ticket,
            prompt: input.to_string(),
        })
    }

    /// Append the assistant reply for `pending`. Returns false for a stale ticket.
    pub fn complete(&mut self, pending: &PendingChat, reply: String) -> bool {
        if self.awaiting != Some(pending.ticket) {
            return false;
        }
        self.messages.push(ChatMessage::assistant(reply));
        self.awaiting = None;
        true
    }

    /// Stop awaiting `pending` without a reply so the next send is accepted.
    pub fn abandon(&mut self, pending: &PendingChat) -> bool {
        if self.awaiting != Some(pending.ticket) {
            return false;
        }
        self.awaiting = None;
        true
    }
}
