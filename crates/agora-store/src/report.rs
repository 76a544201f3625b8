/// Report rendering for the agora store.
///
/// Produces the exact line shapes the demo prints. Every friendship and
/// group line ends with a trailing space: one after each listed name, or
/// the one following the colon when the set is empty. Callers print the
/// returned strings verbatim.
use std::collections::BTreeSet;
use std::fmt::Write;

use crate::store::NetworkStore;
use crate::types::{Message, Username};

/// `Friendships:` header plus one line per friendship entry.
pub fn friendships_report(store: &NetworkStore) -> String {
    let mut out = String::from("Friendships:\n");
    for (user, friends) in store.friendships() {
        push_name_list(&mut out, user.as_ref(), " has friends: ", friends);
    }
    out
}

/// `Groups:` header plus one line per group.
pub fn groups_report(store: &NetworkStore) -> String {
    let mut out = String::from("Groups:\n");
    for (group, members) in store.groups() {
        push_name_list(&mut out, group.as_ref(), " includes: ", members);
    }
    out
}

/// `Messages for <user>:` header plus one line per drained message, in
/// the order they were drained.
pub fn messages_report(recipient: &Username, messages: &[Message]) -> String {
    let mut out = format!("Messages for {recipient}:\n");
    for message in messages {
        let _ = writeln!(
            out,
            "[{} -> {}]: {}",
            message.sender, message.recipient, message.content
        );
    }
    out
}

/// The single line reported when a recipient has nothing pending.
pub fn no_messages_report(recipient: &Username) -> String {
    format!("No messages for {recipient}\n")
}

// ── Internal ─────────────────────────────────────────────────────────────

fn push_name_list(out: &mut String, owner: &str, label: &str, names: &BTreeSet<Username>) {
    out.push_str(owner);
    out.push_str(label);
    for name in names {
        out.push_str(name.as_ref());
        out.push(' ');
    }
    out.push('\n');
}
