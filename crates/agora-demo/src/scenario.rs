/// The fixed demonstration sequence.
///
/// Reproduces the canonical walkthrough: three users, two friendships,
/// two groups, two messages, then reports before and after a round of
/// removals. Stdout carries only the reports; logging goes to stderr.
use std::io::Write;

use agora_store::{report, GroupName, NetworkStore, Username};

use crate::events;

/// Runner options from the CLI.
pub struct ScenarioConfig {
    pub json: bool,
}

pub fn run(config: ScenarioConfig) -> anyhow::Result<()> {
    let mut network = NetworkStore::new();

    let alice = Username::from("Alice");
    let bob = Username::from("Bob");
    let charlie = Username::from("Charlie");
    let group1 = GroupName::from("Group1");
    let group2 = GroupName::from("Group2");

    // Register users
    network.add_user(alice.clone());
    network.add_user(bob.clone());
    network.add_user(charlie.clone());

    // Make friends
    network.add_friendship(alice.clone(), bob.clone());
    network.add_friendship(bob.clone(), charlie.clone());

    // Create groups
    network.create_group(group1.clone(), vec![alice.clone(), bob.clone()]);
    network.create_group(group2.clone(), vec![charlie.clone()]);

    // Send messages
    network.send_message(alice.clone(), bob.clone(), "Hey Bob, how are you?".into());
    network.send_message(charlie.clone(), alice.clone(), "Hi Alice, what's up?".into());

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    // Initial state
    report_friendships(&mut out, &network, config.json)?;
    report_groups(&mut out, &network, config.json)?;
    report_messages(&mut out, &mut network, &alice, config.json)?;

    // Remove a friendship and a group member
    network.remove_friendship(&alice, &bob);
    network.remove_from_group(&bob, &group1);

    // State after modifications
    report_friendships(&mut out, &network, config.json)?;
    report_groups(&mut out, &network, config.json)?;
    report_messages(&mut out, &mut network, &bob, config.json)?;

    out.flush()?;
    tracing::info!("demo sequence complete");
    Ok(())
}

// ── Report emission ──────────────────────────────────────────────

fn report_friendships(
    out: &mut impl Write,
    network: &NetworkStore,
    json: bool,
) -> anyhow::Result<()> {
    if json {
        events::emit(&events::EventFriendships {
            event: "friendships",
            friendships: network
                .friendships()
                .map(|(user, friends)| (user.clone(), friends.iter().cloned().collect()))
                .collect(),
        });
    } else {
        write!(out, "{}", report::friendships_report(network))?;
    }
    Ok(())
}

fn report_groups(out: &mut impl Write, network: &NetworkStore, json: bool) -> anyhow::Result<()> {
    if json {
        events::emit(&events::EventGroups {
            event: "groups",
            groups: network
                .groups()
                .map(|(group, members)| (group.clone(), members.iter().cloned().collect()))
                .collect(),
        });
    } else {
        write!(out, "{}", report::groups_report(network))?;
    }
    Ok(())
}

/// Drains the recipient's inbox and reports it: the report itself is the
/// consuming read.
fn report_messages(
    out: &mut impl Write,
    network: &mut NetworkStore,
    recipient: &Username,
    json: bool,
) -> anyhow::Result<()> {
    match network.drain_messages(recipient) {
        Some(messages) => {
            if json {
                events::emit(&events::EventMessages {
                    event: "messages",
                    recipient: recipient.clone(),
                    messages,
                });
            } else {
                write!(out, "{}", report::messages_report(recipient, &messages))?;
            }
        }
        None => {
            if json {
                events::emit(&events::EventNoMessages {
                    event: "no_messages",
                    recipient: recipient.clone(),
                });
            } else {
                write!(out, "{}", report::no_messages_report(recipient))?;
            }
        }
    }
    Ok(())
}
