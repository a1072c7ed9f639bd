//! Class names, icon glyphs, and well-known ids used by the widget markup.
//!
//! Keeping the markup vocabulary in one module means the stylesheet and the
//! widget builders can never drift apart silently.

/// Wrapper element all chat boxes attach under, looked up by id on the page.
pub const WRAPPER_ID: &str = "chat-box-wrapper";

// Message bubble classes.
pub const MESSAGE_WRAPPER: &str = "message-wrapper";
pub const SIDE_LEFT: &str = "left";
pub const SIDE_RIGHT: &str = "right";
pub const MESSAGE: &str = "message";
pub const META: &str = "meta";
pub const MESSAGE_READ: &str = "message-read";

// Message group classes.
pub const MESSAGE_GROUP: &str = "message-group";
pub const THUMBNAIL: &str = "thumbnail";
pub const MESSAGE_LIST: &str = "message-list";

// Chat box classes.
pub const CHAT_BOX: &str = "chat-box";
pub const TITLE_WRAPPER: &str = "title-wrapper";
pub const CHAT_TITLE: &str = "chat-title";
pub const CHAT_CLOSE: &str = "chat-close";
pub const CHAT_BODY_WRAPPER: &str = "chat-body-wrapper";
pub const CHAT_FOOTER_WRAPPER: &str = "chat-footer-wrapper";
pub const CHAT_INPUT: &str = "chat-input";
pub const CHAT_SEND: &str = "chat-send";

/// Class carried by every icon element (Material Icons ligature font).
pub const ICON_CLASS: &str = "material-icons";

// Icon glyph names (ligature text content).
pub const ICON_SENT: &str = "done";
pub const ICON_DELIVERED: &str = "done_all";
pub const ICON_CLOSE: &str = "close";
pub const ICON_SEND: &str = "send";

/// Default placeholder shown in an enabled chat box's input region.
pub const INPUT_PLACEHOLDER: &str = "Type a message...";
