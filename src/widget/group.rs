//! A cluster of consecutive messages from one sender, sharing a thumbnail.

use tracing::debug;

use crate::dom::ElementRef;
use crate::theme;

use super::message::Message;

/// Ordered run of messages under a single sender thumbnail.
///
/// The container holds a fixed thumbnail placeholder followed by a list
/// region; rendered bubbles land in the list region in insertion order.
/// The type system guarantees every element is a [`Message`], which is what
/// the original checked per element at runtime.
#[derive(Debug)]
pub struct MsgGroup {
    messages: Vec<Message>,
    root: ElementRef,
    list: ElementRef,
}

impl MsgGroup {
    /// Build a group from an initial list of messages (may be empty).
    pub fn new(messages: Vec<Message>) -> Self {
        let root = ElementRef::new("div");
        root.add_class(theme::MESSAGE_GROUP);

        let thumbnail = ElementRef::new("div");
        thumbnail.add_class(theme::THUMBNAIL);
        root.append_child(&thumbnail);

        let list = ElementRef::new("div");
        list.add_class(theme::MESSAGE_LIST);
        root.append_child(&list);

        let mut group = Self {
            messages: Vec::new(),
            root,
            list,
        };
        for message in messages {
            group.add_message(message);
        }
        group
    }

    /// Append one message to the live list region. Existing children are
    /// not re-rendered.
    pub fn add_message(&mut self, mut message: Message) {
        debug!(text = %message, "adding message to group");
        self.list.append_child(&message.render());
        self.messages.push(message);
    }

    /// Root element of the group's subtree.
    pub fn root(&self) -> ElementRef {
        self.root.clone()
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
