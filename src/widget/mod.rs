//! The three presentation entities: message bubbles, sender groups, and
//! the top-level chat box.

pub mod chatbox;
pub mod group;
pub mod message;

pub use chatbox::ChatBox;
pub use group::MsgGroup;
pub use message::{Message, Side, Status};
