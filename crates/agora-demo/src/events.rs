use agora_store::{GroupName, Message, Username};
use serde::Serialize;
use std::collections::BTreeMap;
use std::io::Write;

/// Emit a JSONL event to stdout (flushed immediately for piped output).
pub fn emit<T: Serialize>(event: &T) {
    if let Ok(json) = serde_json::to_string(event) {
        let stdout = std::io::stdout();
        let mut lock = stdout.lock();
        let _ = writeln!(lock, "{json}");
        let _ = lock.flush();
    }
}

// ── Report events ───────────────────────────────────────────────

#[derive(Serialize)]
pub struct EventFriendships {
    pub event: &'static str,
    pub friendships: BTreeMap<Username, Vec<Username>>,
}

#[derive(Serialize)]
pub struct EventGroups {
    pub event: &'static str,
    pub groups: BTreeMap<GroupName, Vec<Username>>,
}

#[derive(Serialize)]
pub struct EventMessages {
    pub event: &'static str,
    pub recipient: Username,
    pub messages: Vec<Message>,
}

#[derive(Serialize)]
pub struct EventNoMessages {
    pub event: &'static str,
    pub recipient: Username,
}
