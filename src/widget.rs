//! Floating assistant widget.
//!
//! The widget is either closed or open. While mounted it keeps a message
//! list and a set of outstanding reply tickets: `submit` appends the user's
//! message and hands back a ticket, `deliver` redeems the ticket with a
//! canned reply once the view's timer fires.

use crate::types::{Message, Sender};
use rand::Rng;
use time::OffsetDateTime;

pub const GREETING: &str = "Hi there! I'm your AI insurance assistant. How can I help you today?";

pub const REPLIES: [&str; 5] = [
    "I'd be happy to help you find the right insurance policy for your needs.",
    "Based on your profile, I'd recommend looking at our premium health coverage options.",
    "Would you like me to check for discounts on your current policy?",
    "Let me explain how our auto insurance coverage works in more detail.",
    "I can help you understand the differences between term and whole life insurance.",
];

pub const SUGGESTIONS: [&str; 3] = [
    "How much coverage do I need?",
    "What's the best policy for me?",
    "Can you explain deductibles?",
];

/// Suggestions disappear once the conversation reaches this many messages.
pub const SUGGESTION_LIMIT: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    AwaitingReply,
}

/// Claim on one future assistant reply.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PendingReply {
    ticket: u64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChatWidget {
    open: bool,
    messages: Vec<Message>,
    next_id: u64,
    pending: Vec<PendingReply>,
    next_ticket: u64,
}

impl Default for ChatWidget {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatWidget {
    /// Closed widget holding the greeting.
    pub fn new() -> Self {
        Self::with_greeting_at(OffsetDateTime::now_utc())
    }

    pub fn with_greeting_at(at: OffsetDateTime) -> Self {
        Self {
            open: false,
            messages: vec![Message {
                id: 1,
                text: GREETING.to_string(),
                sender: Sender::Ai,
                timestamp: at,
            }],
            next_id: 2,
            pending: Vec::new(),
            next_ticket: 1,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
        tracing::debug!(open = self.open, "chat widget toggled");
    }

    pub fn phase(&self) -> Phase {
        if self.pending.is_empty() {
            Phase::Idle
        } else {
            Phase::AwaitingReply
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn show_suggestions(&self) -> bool {
        self.messages.len() < SUGGESTION_LIMIT
    }

    pub fn submit(&mut self, text: &str) -> Option<PendingReply> {
        self.submit_at(text, OffsetDateTime::now_utc())
    }

    /// Append a user message and reserve a reply. Blank input is ignored.
    pub fn submit_at(&mut self, text: &str, at: OffsetDateTime) -> Option<PendingReply> {
        if text.trim().is_empty() {
            return None;
        }
        self.push(Sender::User, text.to_string(), at);

        let reply = PendingReply {
            ticket: self.next_ticket,
        };
        self.next_ticket += 1;
        self.pending.push(reply);
        Some(reply)
    }

    pub fn deliver(&mut self, reply: PendingReply, text: &str) -> bool {
        self.deliver_at(reply, text, OffsetDateTime::now_utc())
    }

    /// Redeem a ticket. Returns false when the ticket was cancelled or
    /// already used, in which case nothing is appended.
    pub fn deliver_at(&mut self, reply: PendingReply, text: &str, at: OffsetDateTime) -> bool {
        let Some(position) = self.pending.iter().position(|p| *p == reply) else {
            tracing::debug!(ticket = reply.ticket, "dropping stale reply");
            return false;
        };
        self.pending.remove(position);
        self.push(Sender::Ai, text.to_string(), at);
        true
    }

    /// Forget every outstanding ticket.
    pub fn cancel_pending(&mut self) {
        self.pending.clear();
    }

    fn push(&mut self, sender: Sender, text: String, at: OffsetDateTime) {
        let id = self.next_id;
        self.next_id += 1;
        self.messages.push(Message {
            id,
            text,
            sender,
            timestamp: at,
        });
    }
}

/// Uniform pick from the canned replies.
pub fn pick_reply<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    REPLIES[rng.random_range(0..REPLIES.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use time::macros::datetime;

    #[test]
    fn test_starts_closed_with_greeting() {
        let widget = ChatWidget::with_greeting_at(datetime!(2025-05-15 14:00 UTC));
        assert!(!widget.is_open());
        assert_eq!(widget.phase(), Phase::Idle);
        assert_eq!(widget.messages().len(), 1);
        assert_eq!(widget.messages()[0].sender, Sender::Ai);
        assert!(widget.show_suggestions());
    }

    #[test]
    fn test_blank_submit_ignored() {
        let mut widget = ChatWidget::new();
        assert!(widget.submit("   ").is_none());
        assert_eq!(widget.messages().len(), 1);
        assert_eq!(widget.phase(), Phase::Idle);
    }

    #[test]
    fn test_pick_reply_covers_set() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..500 {
            let reply = pick_reply(&mut rng);
            assert!(REPLIES.contains(&reply));
            seen.insert(reply);
        }
        assert_eq!(seen.len(), REPLIES.len());
    }
}
