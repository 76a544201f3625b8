/// Friendship graph for the agora store.
///
/// A symmetric relation stored as two directed entries: linking A and B
/// inserts each into the other's friend-set. Ordered maps keep report
/// output deterministic (ascending by name).
use std::collections::{BTreeMap, BTreeSet};

use crate::types::Username;

/// Username to friend-set, both directions kept in lockstep.
#[derive(Debug, Default)]
pub struct FriendGraph {
    friends: BTreeMap<Username, BTreeSet<Username>>,
}

impl FriendGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ensure a friend-set entry exists for `username`. An existing set
    /// is left untouched.
    pub fn ensure(&mut self, username: Username) {
        self.friends.entry(username).or_default();
    }

    /// Link two users symmetrically. Entries are created for names that
    /// were never registered.
    pub fn link(&mut self, a: Username, b: Username) {
        self.friends.entry(a.clone()).or_default().insert(b.clone());
        self.friends.entry(b).or_default().insert(a);
    }

    /// Unlink two users symmetrically. No-op for absent names; never
    /// creates entries.
    pub fn unlink(&mut self, a: &Username, b: &Username) {
        if let Some(set) = self.friends.get_mut(a) {
            set.remove(b);
        }
        if let Some(set) = self.friends.get_mut(b) {
            set.remove(a);
        }
    }

    // ── Queries ──────────────────────────────────────────────────────────

    /// Friend-set for a user, if they appear in the map at all.
    pub fn friends_of(&self, username: &Username) -> Option<&BTreeSet<Username>> {
        self.friends.get(username)
    }

    /// Whether two users are currently linked.
    pub fn are_friends(&self, a: &Username, b: &Username) -> bool {
        self.friends.get(a).map_or(false, |set| set.contains(b))
    }

    /// Every entry in ascending username order.
    pub fn iter(&self) -> impl Iterator<Item = (&Username, &BTreeSet<Username>)> {
        self.friends.iter()
    }

    /// Number of usernames present as keys.
    pub fn len(&self) -> usize {
        self.friends.len()
    }

    pub fn is_empty(&self) -> bool {
        self.friends.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(name: &str) -> Username {
        name.into()
    }

    #[test]
    fn link_is_symmetric() {
        let mut graph = FriendGraph::new();
        graph.link(user("Alice"), user("Bob"));

        assert!(graph.are_friends(&user("Alice"), &user("Bob")));
        assert!(graph.are_friends(&user("Bob"), &user("Alice")));
    }

    #[test]
    fn unlink_removes_both_directions() {
        let mut graph = FriendGraph::new();
        graph.link(user("Alice"), user("Bob"));
        graph.unlink(&user("Alice"), &user("Bob"));

        assert!(!graph.are_friends(&user("Alice"), &user("Bob")));
        assert!(!graph.are_friends(&user("Bob"), &user("Alice")));
    }

    #[test]
    fn unlink_absent_users_creates_no_entries() {
        let mut graph = FriendGraph::new();
        graph.unlink(&user("Alice"), &user("Bob"));
        assert!(graph.is_empty());
    }

    #[test]
    fn unlink_keeps_the_entries_themselves() {
        let mut graph = FriendGraph::new();
        graph.link(user("Alice"), user("Bob"));
        graph.unlink(&user("Alice"), &user("Bob"));

        // Both users still appear, now with empty friend-sets
        assert_eq!(graph.len(), 2);
        assert!(graph.friends_of(&user("Alice")).is_some_and(|s| s.is_empty()));
    }

    #[test]
    fn ensure_keeps_existing_friends() {
        let mut graph = FriendGraph::new();
        graph.link(user("Alice"), user("Bob"));
        graph.ensure(user("Alice"));

        assert!(graph.are_friends(&user("Alice"), &user("Bob")));
    }

    #[test]
    fn link_unregistered_users_creates_entries() {
        let mut graph = FriendGraph::new();
        graph.link(user("Ghost"), user("Phantom"));

        assert_eq!(graph.len(), 2);
        assert!(graph.friends_of(&user("Ghost")).is_some());
        assert!(graph.friends_of(&user("Phantom")).is_some());
    }

    #[test]
    fn duplicate_link_is_idempotent() {
        let mut graph = FriendGraph::new();
        graph.link(user("Alice"), user("Bob"));
        graph.link(user("Alice"), user("Bob"));

        assert_eq!(graph.friends_of(&user("Alice")).map(|s| s.len()), Some(1));
    }

    #[test]
    fn self_link_is_allowed() {
        let mut graph = FriendGraph::new();
        graph.link(user("Alice"), user("Alice"));

        assert!(graph.are_friends(&user("Alice"), &user("Alice")));
        assert_eq!(graph.len(), 1);
    }

    #[test]
    fn iteration_is_sorted_by_username() {
        let mut graph = FriendGraph::new();
        graph.ensure(user("Charlie"));
        graph.ensure(user("Alice"));
        graph.ensure(user("Bob"));

        let names: Vec<String> = graph.iter().map(|(u, _)| u.to_string()).collect();
        assert_eq!(names, ["Alice", "Bob", "Charlie"]);
    }
}
