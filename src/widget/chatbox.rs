//! The top-level chat widget: title bar, scrollable body, optional footer.

use tracing::debug;

use crate::dom::ElementRef;
use crate::error::InvalidParameter;
use crate::page::Page;
use crate::theme;
use crate::validation::{validate_box_id, validate_title};

use super::group::MsgGroup;
use super::message::Message;

/// One conversation widget.
///
/// Constructed once with a fixed region order (title bar, body, optional
/// footer), then appended to incrementally. There is no teardown.
#[derive(Debug)]
pub struct ChatBox {
    id: String,
    title: String,
    is_enabled: bool,
    messages: Vec<Message>,
    groups: Vec<MsgGroup>,
    root: ElementRef,
    body: ElementRef,
}

impl ChatBox {
    /// Create an empty chat box with an input footer (the defaults).
    pub fn new(id: &str, title: &str) -> Result<Self, InvalidParameter> {
        Self::with_messages(id, title, Vec::new(), true)
    }

    /// Create a chat box with an initial message list and explicit footer
    /// polarity.
    ///
    /// Validation runs before any of the tree is built; the region order is
    /// always title bar, body, then footer iff `is_enabled`. The footer
    /// decision is made here once and never reevaluated. Initial messages
    /// are appended one at a time, in order, after the regions exist.
    pub fn with_messages(
        id: &str,
        title: &str,
        messages: Vec<Message>,
        is_enabled: bool,
    ) -> Result<Self, InvalidParameter> {
        validate_box_id(id)?;
        validate_title(title)?;
        debug!(id, title, is_enabled, "constructing chat box");

        let root = ElementRef::new("div");
        root.add_class(theme::CHAT_BOX);
        root.set_id(id);

        root.append_child(&build_title_bar(title));

        let body = ElementRef::new("div");
        body.add_class(theme::CHAT_BODY_WRAPPER);
        root.append_child(&body);

        if is_enabled {
            root.append_child(&build_footer());
        }

        let mut chatbox = Self {
            id: id.to_string(),
            title: title.to_string(),
            is_enabled,
            messages: Vec::new(),
            groups: Vec::new(),
            root,
            body,
        };
        for message in messages {
            chatbox.append_msg(message);
        }
        Ok(chatbox)
    }

    /// Render `message` and append it to the body region.
    pub fn append_msg(&mut self, mut message: Message) {
        debug!(id = %self.id, text = %message, "appending message");
        self.body.append_child(&message.render());
        self.messages.push(message);
    }

    /// Append a whole message group to the body region.
    pub fn append_group(&mut self, group: MsgGroup) {
        debug!(id = %self.id, len = group.len(), "appending group");
        self.body.append_child(&group.root());
        self.groups.push(group);
    }

    /// Attach this box under the page's shared wrapper.
    ///
    /// The wrapper is created by whichever box calls this first and reused
    /// by every box after; attach order is call order.
    pub fn show(&self, page: &mut Page) {
        debug!(id = %self.id, "showing chat box");
        page.wrapper().append_child(&self.root);
    }

    pub fn root(&self) -> ElementRef {
        self.root.clone()
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn is_enabled(&self) -> bool {
        self.is_enabled
    }

    /// Messages appended directly (grouped messages are counted by their
    /// group).
    pub fn message_count(&self) -> usize {
        self.messages.len()
    }
}

fn build_title_bar(title: &str) -> ElementRef {
    let bar = ElementRef::new("div");
    bar.add_class(theme::TITLE_WRAPPER);

    let label = ElementRef::new("span");
    label.add_class(theme::CHAT_TITLE);
    label.append_text(title);
    bar.append_child(&label);

    let close = ElementRef::new("span");
    close.add_class(theme::CHAT_CLOSE);
    let icon = ElementRef::new("i");
    icon.add_class(theme::ICON_CLASS);
    icon.append_text(theme::ICON_CLOSE);
    close.append_child(&icon);
    bar.append_child(&close);

    bar
}

fn build_footer() -> ElementRef {
    let footer = ElementRef::new("div");
    footer.add_class(theme::CHAT_FOOTER_WRAPPER);

    let input = ElementRef::new("div");
    input.add_class(theme::CHAT_INPUT);
    input.set_attribute("contenteditable", "true");
    input.set_attribute("placeholder", theme::INPUT_PLACEHOLDER);
    footer.append_child(&input);

    let send = ElementRef::new("div");
    send.add_class(theme::CHAT_SEND);
    let icon = ElementRef::new("i");
    icon.add_class(theme::ICON_CLASS);
    icon.append_text(theme::ICON_SEND);
    send.append_child(&icon);
    footer.append_child(&send);

    footer
}
