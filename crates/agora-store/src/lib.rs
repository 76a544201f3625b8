//! In-memory social network state.
//!
//! A [`NetworkStore`] owns four independent mappings: registered users,
//! symmetric friendships, named groups, and per-recipient FIFO message
//! queues. Every mutation is total: absent keys behave as empty
//! collections rather than errors.
//!
//! The store performs no I/O. [`report`] renders the bit-exact report
//! strings; the caller decides where they go.

pub mod friends;
pub mod groups;
pub mod inbox;
pub mod report;
pub mod store;
pub mod types;

pub use friends::FriendGraph;
pub use groups::GroupDirectory;
pub use inbox::Inbox;
pub use store::NetworkStore;
pub use types::{GroupName, Message, User, Username};
