//! chatkit demo binary.
//!
//! Builds a small two-sided conversation, shows it on a page, and prints
//! the serialized document to stdout. Settings (box id, title, input
//! placeholder) load from the user config directory when present.

use chrono::{Duration, Local};

use chatkit::config::{self, Settings};
use chatkit::theme;
use chatkit::widget::{ChatBox, Message, MsgGroup, Side, Status};
use chatkit::Page;

fn main() {
    tracing_subscriber::fmt::init();

    let settings = config::load_settings().unwrap_or_default();

    match build_demo_page(&settings) {
        Ok(page) => println!("{}", page.to_html()),
        Err(e) => {
            eprintln!("chatkit demo failed: {}", e);
            std::process::exit(1);
        }
    }
}

fn build_demo_page(settings: &Settings) -> Result<Page, chatkit::InvalidParameter> {
    let now = Local::now();

    let greeting = vec![
        Message::new("Hey! Are you around?", now - Duration::minutes(9))?
            .with_side(Side::Left),
        Message::new("Lunch at noon?", now - Duration::minutes(8))?.with_side(Side::Left),
    ];

    let mut chatbox = ChatBox::with_messages(
        &settings.box_id,
        &settings.title,
        Vec::new(),
        settings.input_enabled,
    )?;
    chatbox.append_group(MsgGroup::new(greeting));
    chatbox.append_msg(
        Message::new("Sure, see you there.", now - Duration::minutes(7))?
            .with_status(Status::Read),
    );
    chatbox.append_msg(Message::new("Bringing Carol along.", now)?.with_status(Status::Sent));

    // Settings may relabel the input region.
    for region in chatbox.root().child_elements() {
        if region.has_class(theme::CHAT_FOOTER_WRAPPER) {
            region.child_elements()[0].set_attribute("placeholder", &settings.input_placeholder);
        }
    }

    let mut page = Page::new();
    chatbox.show(&mut page);
    Ok(page)
}
