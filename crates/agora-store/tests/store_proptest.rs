use std::collections::BTreeSet;

use agora_store::{GroupName, NetworkStore, Username};
use proptest::prelude::*;

/// Strategy for short usernames. The narrow alphabet makes collisions
/// (including a == b) reasonably likely.
fn arb_name() -> impl Strategy<Value = Username> {
    "[A-Z][a-z]{0,6}".prop_map(Username::from)
}

proptest! {
    /// addFriendship establishes both directions; removeFriendship
    /// clears both.
    #[test]
    fn friendship_symmetry(a in arb_name(), b in arb_name()) {
        let mut network = NetworkStore::new();

        network.add_friendship(a.clone(), b.clone());
        prop_assert!(network.are_friends(&a, &b));
        prop_assert!(network.are_friends(&b, &a));

        network.remove_friendship(&a, &b);
        prop_assert!(!network.are_friends(&a, &b));
        prop_assert!(!network.are_friends(&b, &a));
    }

    /// Linking names that were never registered still creates their
    /// friendship entries, without registering them as users.
    #[test]
    fn unregistered_names_gain_entries(a in arb_name(), b in arb_name()) {
        let mut network = NetworkStore::new();
        network.add_friendship(a.clone(), b.clone());

        prop_assert!(network.friends_of(&a).is_some());
        prop_assert!(network.friends_of(&b).is_some());
        prop_assert!(!network.has_user(&a));
        prop_assert_eq!(network.user_count(), 0);
    }

    /// Messages to one recipient drain in send order.
    #[test]
    fn drain_preserves_send_order(
        contents in prop::collection::vec("[ -~]{0,24}", 1..16),
    ) {
        let mut network = NetworkStore::new();
        let sender = Username::from("Sender");
        let recipient = Username::from("Recipient");

        for content in &contents {
            network.send_message(sender.clone(), recipient.clone(), content.clone());
        }

        let drained = network
            .drain_messages(&recipient)
            .expect("messages are pending");
        let drained_contents: Vec<String> =
            drained.into_iter().map(|m| m.content).collect();
        prop_assert_eq!(drained_contents, contents);
    }

    /// A drain consumes everything: the repeat call reports empty and no
    /// queue entry survives.
    #[test]
    fn drain_is_destructive(
        contents in prop::collection::vec("[a-z]{1,8}", 1..8),
    ) {
        let mut network = NetworkStore::new();
        let recipient = Username::from("Recipient");

        for content in contents {
            network.send_message(Username::from("Sender"), recipient.clone(), content);
        }

        prop_assert!(network.drain_messages(&recipient).is_some());
        prop_assert!(network.drain_messages(&recipient).is_none());
        prop_assert!(!network.has_pending_messages(&recipient));
        prop_assert_eq!(network.pending_messages(&recipient), 0);
    }

    /// Re-creating a group replaces its member set entirely.
    #[test]
    fn group_recreation_replaces_members(
        first in prop::collection::vec(arb_name(), 0..6),
        second in prop::collection::vec(arb_name(), 0..6),
    ) {
        let mut network = NetworkStore::new();
        let name = GroupName::from("Club");

        network.create_group(name.clone(), first);
        network.create_group(name.clone(), second.clone());

        let expected: BTreeSet<Username> = second.into_iter().collect();
        let members = network.group_members(&name).expect("group exists");
        prop_assert_eq!(members, &expected);
    }
}
