//! A single chat bubble: text, timestamp, alignment, and delivery status.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Local};

use crate::dom::ElementRef;
use crate::error::InvalidParameter;
use crate::theme;
use crate::validation::validate_text;

/// Which edge of the container the bubble renders against.
///
/// Resolution is strictly binary: the LEFT sentinel selects left alignment,
/// everything else falls through to right. There is no third state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Side {
    Left,
    #[default]
    Right,
}

impl Side {
    /// CSS class carried on the bubble wrapper.
    pub fn css_class(self) -> &'static str {
        match self {
            Side::Left => theme::SIDE_LEFT,
            Side::Right => theme::SIDE_RIGHT,
        }
    }
}

/// The original position flags: `true` is the LEFT sentinel.
impl From<bool> for Side {
    fn from(is_left: bool) -> Self {
        if is_left {
            Side::Left
        } else {
            Side::Right
        }
    }
}

/// Lenient parse: only `"left"` selects left, anything else is right.
impl FromStr for Side {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "left" => Side::Left,
            _ => Side::Right,
        })
    }
}

/// Delivery/read state of a message.
///
/// Unrecognized inputs degrade to [`Status::None`] instead of erroring.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Status {
    #[default]
    None,
    Sent,
    Unread,
    Read,
}

impl Status {
    /// Map the wire codes 0..=3; any other code degrades to `None`.
    pub fn from_code(code: u8) -> Self {
        match code {
            1 => Status::Sent,
            2 => Status::Unread,
            3 => Status::Read,
            _ => Status::None,
        }
    }

    /// Icon glyph shown in the metadata fragment, if any.
    pub fn icon_glyph(self) -> Option<&'static str> {
        match self {
            Status::None => None,
            Status::Sent => Some(theme::ICON_SENT),
            Status::Unread | Status::Read => Some(theme::ICON_DELIVERED),
        }
    }

    /// Extra class on the icon's span. Only `Read` styles its double check.
    pub fn icon_class(self) -> Option<&'static str> {
        match self {
            Status::Read => Some(theme::MESSAGE_READ),
            _ => None,
        }
    }
}

/// Lenient parse with an explicit default arm.
impl FromStr for Status {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "sent" => Status::Sent,
            "unread" => Status::Unread,
            "read" => Status::Read,
            _ => Status::None,
        })
    }
}

/// One chat message.
///
/// Immutable after construction apart from the lazily built visual
/// representation, which is cached on first [`Message::render`] call.
#[derive(Debug, Clone)]
pub struct Message {
    id: Option<String>,
    text: String,
    sent_at: DateTime<Local>,
    side: Side,
    status: Status,
    /// Cached render output; `render()` fills this exactly once.
    rendered: Option<ElementRef>,
}

impl Message {
    /// Create a message with default alignment (right) and status (none).
    ///
    /// Fails with [`InvalidParameter`] when `text` is empty. Timestamp
    /// validity is carried by the `chrono` type itself.
    pub fn new(text: impl Into<String>, sent_at: DateTime<Local>) -> Result<Self, InvalidParameter> {
        let text = text.into();
        validate_text(&text)?;
        Ok(Self {
            id: None,
            text,
            sent_at,
            side: Side::Right,
            status: Status::None,
            rendered: None,
        })
    }

    pub fn with_side(mut self, side: Side) -> Self {
        self.side = side;
        self
    }

    pub fn with_status(mut self, status: Status) -> Self {
        self.status = status;
        self
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn sent_at(&self) -> DateTime<Local> {
        self.sent_at
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn status(&self) -> Status {
        self.status
    }

    /// Timestamp formatted for the metadata fragment, e.g. `2:05 PM`.
    pub fn formatted_time(&self) -> String {
        self.sent_at.format("%-I:%M %p").to_string()
    }

    /// Metadata fragment: formatted time plus the status icon, if any.
    fn build_meta(&self) -> ElementRef {
        let meta = ElementRef::new("div");
        meta.add_class(theme::META);

        let time = ElementRef::new("span");
        time.append_text(&self.formatted_time());
        meta.append_child(&time);

        if let Some(glyph) = self.status.icon_glyph() {
            let span = ElementRef::new("span");
            if let Some(class) = self.status.icon_class() {
                span.add_class(class);
            }
            let icon = ElementRef::new("i");
            icon.add_class(theme::ICON_CLASS);
            icon.append_text(glyph);
            span.append_child(&icon);
            meta.append_child(&span);
        }

        meta
    }

    /// Build (or return the cached) bubble element.
    ///
    /// The wrapper carries the alignment class and holds the message text
    /// and the metadata fragment. Repeated calls return the same node.
    pub fn render(&mut self) -> ElementRef {
        if let Some(el) = &self.rendered {
            return el.clone();
        }

        let wrapper = ElementRef::new("div");
        wrapper.add_class(theme::MESSAGE_WRAPPER);
        wrapper.add_class(self.side.css_class());

        let body = ElementRef::new("div");
        body.add_class(theme::MESSAGE);
        body.append_text(&self.text);
        wrapper.append_child(&body);

        wrapper.append_child(&self.build_meta());

        self.rendered = Some(wrapper.clone());
        wrapper
    }
}

/// The raw text content, matching the original `toString()`.
impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
