/// Named groups for the agora store.
///
/// A group is a name plus a set of member usernames. Creation takes the
/// full member list; later mutation only removes single members. There is
/// no post-creation add.
use std::collections::{BTreeMap, BTreeSet};

use crate::types::{GroupName, Username};

/// Group name to member set, in ascending name order.
#[derive(Debug, Default)]
pub struct GroupDirectory {
    groups: BTreeMap<GroupName, BTreeSet<Username>>,
}

impl GroupDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a group containing exactly the given members (duplicates
    /// collapse). Re-creating an existing name replaces its member set.
    pub fn create(&mut self, name: GroupName, members: Vec<Username>) {
        self.groups.insert(name, members.into_iter().collect());
    }

    /// Remove one member from a group. No-op if the group or the member
    /// is absent; never creates the group.
    pub fn remove_member(&mut self, group: &GroupName, member: &Username) {
        if let Some(set) = self.groups.get_mut(group) {
            set.remove(member);
        }
    }

    // ── Queries ──────────────────────────────────────────────────────────

    /// Member set for a group.
    pub fn members(&self, group: &GroupName) -> Option<&BTreeSet<Username>> {
        self.groups.get(group)
    }

    /// Whether a user is currently in a group.
    pub fn is_member(&self, group: &GroupName, member: &Username) -> bool {
        self.groups.get(group).map_or(false, |set| set.contains(member))
    }

    /// Every group in ascending name order.
    pub fn iter(&self) -> impl Iterator<Item = (&GroupName, &BTreeSet<Username>)> {
        self.groups.iter()
    }

    /// Number of groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
