/// NetworkStore: the composing facade over the social-state engines.
///
/// Owns the four mappings (users, friendships, groups, inbox) and exposes
/// the full mutation and query surface. Every mutation is total: unknown
/// names behave as empty collections, never as errors.
///
/// Pure state, no I/O. Report rendering lives in `report`; the caller
/// prints.
use std::collections::{BTreeSet, HashMap};

use crate::friends::FriendGraph;
use crate::groups::GroupDirectory;
use crate::inbox::Inbox;
use crate::types::{GroupName, Message, User, Username};

/// All network state behind one owned value.
#[derive(Debug, Default)]
pub struct NetworkStore {
    users: HashMap<Username, User>,
    friends: FriendGraph,
    groups: GroupDirectory,
    inbox: Inbox,
}

impl NetworkStore {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Mutations ────────────────────────────────────────────────────────

    /// Register a user. Re-adding replaces the record but keeps any
    /// existing friend-set.
    pub fn add_user(&mut self, username: Username) {
        tracing::debug!("user added: {username}");
        self.friends.ensure(username.clone());
        self.users.insert(username.clone(), User::new(username));
    }

    /// Link two users as friends (symmetric). Unregistered names are
    /// allowed and get friend-set entries of their own.
    pub fn add_friendship(&mut self, a: Username, b: Username) {
        tracing::debug!("friendship added: {a} <-> {b}");
        self.friends.link(a, b);
    }

    /// Remove a friendship (symmetric). No-op if not present.
    pub fn remove_friendship(&mut self, a: &Username, b: &Username) {
        tracing::debug!("friendship removed: {a} <-> {b}");
        self.friends.unlink(a, b);
    }

    /// Create a group containing exactly `members` (duplicates collapse).
    /// Re-creating an existing name replaces its member set.
    pub fn create_group(&mut self, name: GroupName, members: Vec<Username>) {
        tracing::debug!("group created: {name}");
        self.groups.create(name, members);
    }

    /// Remove one member from a group. No-op if the group or the member
    /// is absent.
    pub fn remove_from_group(&mut self, member: &Username, group: &GroupName) {
        tracing::debug!("member removed: {member} from {group}");
        self.groups.remove_member(group, member);
    }

    /// Queue a message for its recipient. The queue is created lazily on
    /// the first send.
    pub fn send_message(&mut self, sender: Username, recipient: Username, content: String) {
        tracing::debug!("message queued: {sender} -> {recipient}");
        self.inbox.push(Message::new(sender, recipient, content));
    }

    /// Remove and return every pending message for `recipient` in send
    /// order. `None` when nothing is pending, including immediately after
    /// a previous drain.
    pub fn drain_messages(&mut self, recipient: &Username) -> Option<Vec<Message>> {
        let drained = self.inbox.drain(recipient);
        if let Some(messages) = &drained {
            tracing::debug!("inbox drained: {recipient} ({} messages)", messages.len());
        }
        drained
    }

    // ── Queries ──────────────────────────────────────────────────────────

    /// Record for a registered user.
    pub fn user(&self, username: &Username) -> Option<&User> {
        self.users.get(username)
    }

    /// Whether a username was registered via `add_user`.
    pub fn has_user(&self, username: &Username) -> bool {
        self.users.contains_key(username)
    }

    /// Number of registered users.
    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    /// Friend-set for a user, if they appear in the friendship map.
    pub fn friends_of(&self, username: &Username) -> Option<&BTreeSet<Username>> {
        self.friends.friends_of(username)
    }

    /// Whether two users are currently friends.
    pub fn are_friends(&self, a: &Username, b: &Username) -> bool {
        self.friends.are_friends(a, b)
    }

    /// Every friendship map entry in ascending username order.
    pub fn friendships(&self) -> impl Iterator<Item = (&Username, &BTreeSet<Username>)> {
        self.friends.iter()
    }

    /// Member set for a group.
    pub fn group_members(&self, group: &GroupName) -> Option<&BTreeSet<Username>> {
        self.groups.members(group)
    }

    /// Every group in ascending name order.
    pub fn groups(&self) -> impl Iterator<Item = (&GroupName, &BTreeSet<Username>)> {
        self.groups.iter()
    }

    /// Whether a recipient has pending messages.
    pub fn has_pending_messages(&self, recipient: &Username) -> bool {
        self.inbox.has_pending(recipient)
    }

    /// Pending message count for one recipient.
    pub fn pending_messages(&self, recipient: &Username) -> usize {
        self.inbox.pending_count(recipient)
    }
}
