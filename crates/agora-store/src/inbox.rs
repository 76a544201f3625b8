/// Per-recipient message queues for the agora store.
///
/// Queues are created lazily on the first send to a recipient and removed
/// wholesale by a drain, so a recipient has an entry exactly while at
/// least one message is pending.
use std::collections::{HashMap, VecDeque};

use crate::types::{Message, Username};

/// Recipient to pending-message queue, FIFO per recipient.
#[derive(Debug, Default)]
pub struct Inbox {
    queues: HashMap<Username, VecDeque<Message>>,
}

impl Inbox {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a message at the tail of its recipient's queue.
    pub fn push(&mut self, message: Message) {
        self.queues
            .entry(message.recipient.clone())
            .or_default()
            .push_back(message);
    }

    /// Remove and return every pending message for a recipient in FIFO
    /// order. `None` when nothing is pending; either way the recipient
    /// has no queue entry afterwards.
    pub fn drain(&mut self, recipient: &Username) -> Option<Vec<Message>> {
        self.queues.remove(recipient).map(Vec::from)
    }

    // ── Queries ──────────────────────────────────────────────────────────

    /// Whether a recipient has pending messages.
    pub fn has_pending(&self, recipient: &Username) -> bool {
        self.queues.contains_key(recipient)
    }

    /// Pending messages for one recipient.
    pub fn pending_count(&self, recipient: &Username) -> usize {
        self.queues.get(recipient).map_or(0, VecDeque::len)
    }

    /// Total pending messages across all recipients.
    pub fn message_count(&self) -> usize {
        self.queues.values().map(VecDeque::len).sum()
    }

    /// Recipients with at least one pending message.
    pub fn recipient_count(&self) -> usize {
        self.queues.len()
    }
}
