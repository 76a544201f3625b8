/// Core name and record types for the agora store.
///
/// Usernames and group names are caller-supplied strings wrapped in
/// newtypes so the two name domains cannot be mixed up in signatures.
use serde::{Deserialize, Serialize};
use std::fmt;

// ── Username ─────────────────────────────────────────────────────────────

/// Unique user identifier (a display name).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Username(pub String);

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for Username {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for Username {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// ── GroupName ────────────────────────────────────────────────────────────

/// Name of a group.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GroupName(pub String);

impl fmt::Display for GroupName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for GroupName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for GroupName {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for GroupName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// ── User ─────────────────────────────────────────────────────────────────

/// A registered user record. Created once, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub username: Username,
}

impl User {
    pub fn new(username: Username) -> Self {
        Self { username }
    }
}

// ── Message ──────────────────────────────────────────────────────────────

/// A message queued for one recipient. Immutable once created; the
/// recipient's queue owns it until a drain consumes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub sender: Username,
    pub recipient: Username,
    pub content: String,
}

impl Message {
    pub fn new(sender: Username, recipient: Username, content: String) -> Self {
        Self {
            sender,
            recipient,
            content,
        }
    }
}
