//! chatkit — a small retained-tree chat widget toolkit.
//!
//! Three presentation entities build one element tree: [`widget::Message`]
//! renders a single bubble, [`widget::MsgGroup`] clusters bubbles under a
//! shared sender thumbnail, and [`widget::ChatBox`] is the top-level widget
//! with a title bar, a scrollable body, and an optional input footer. Boxes
//! attach to a [`page::Page`]'s shared wrapper via `show()`.
//!
//! Everything is synchronous and single-threaded; construction is
//! fail-fast with [`error::InvalidParameter`] as the only error kind.

pub mod config;
pub mod dom;
pub mod error;
pub mod page;
pub mod theme;
pub mod validation;
pub mod widget;

mod integration_tests;

pub use dom::ElementRef;
pub use error::InvalidParameter;
pub use page::Page;
pub use widget::{ChatBox, Message, MsgGroup, Side, Status};
